// =============================================================================
// MULTI — Le magasin général (plusieurs-à-plusieurs)
// =============================================================================
//
// Deux index de hachage, l'un miroir de l'autre :
//
//   key_values : clé    → { valeurs }
//   value_keys : valeur → { clés }
//
// Et trois compteurs maintenus à CHAQUE mutation, jamais recalculés :
//
//   size          = nombre de flèches
//   non_simple    = Σ_clé    max(0, |valeurs(clé)| - 1)
//   non_injective = Σ_valeur max(0, |clés(valeur)| - 1)
//
// D'où, en O(1) :
//   is_simple()    ⇔ non_simple    == 0
//   is_injective() ⇔ non_injective == 0
//
// INVARIANT : aucun seau vide n'est conservé. Quand le dernier élément d'un
// seau part, la clé (ou la valeur) disparaît de son index.
//
// EXEMPLE :
//   put(0,2) put(0,1) put(0,1)   → size = 2, non_simple = 1 (doublon ignoré)
//   put(3,1)                      → non_injective = 1 (1 a deux clés : 0 et 3)
//
// =============================================================================

use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::core::domain::Domain;
use crate::core::pair::Pair;
use crate::core::relation::{relation_std_traits, MutableRelation, Pairs, Relation};
use crate::core::set_view::{Element, SetView};

/// Relation plusieurs-à-plusieurs à double index.
#[derive(Clone)]
pub struct MultiRelation<A, B> {
    key_values: HashMap<A, HashSet<B>>,
    value_keys: HashMap<B, HashSet<A>>,
    size: usize,
    non_simple: usize,
    non_injective: usize,
    domain: Domain<A>,
    range: Domain<B>,
}

impl<A: Element, B: Element> MultiRelation<A, B> {
    pub fn new() -> Self {
        Self::with_capacity_and_domains(0, Domain::default(), Domain::default())
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_domains(capacity, Domain::default(), Domain::default())
    }

    pub fn with_domains(domain: Domain<A>, range: Domain<B>) -> Self {
        Self::with_capacity_and_domains(0, domain, range)
    }

    pub fn with_capacity_and_domains(capacity: usize, domain: Domain<A>, range: Domain<B>) -> Self {
        MultiRelation {
            key_values: HashMap::with_capacity(capacity),
            value_keys: HashMap::with_capacity(capacity),
            size: 0,
            non_simple: 0,
            non_injective: 0,
            domain,
            range,
        }
    }

    /// Retire `key` du seau de `value` (côté index inverse).
    fn detach_key(&mut self, value: &B, key: &A) {
        if let Some(keys) = self.value_keys.get_mut(value) {
            keys.remove(key);
            if keys.is_empty() {
                self.value_keys.remove(value);
            } else {
                self.non_injective -= 1;
            }
        }
    }

    /// Retire `value` du seau de `key` (côté index direct).
    fn detach_value(&mut self, key: &A, value: &B) {
        if let Some(values) = self.key_values.get_mut(key) {
            values.remove(value);
            if values.is_empty() {
                self.key_values.remove(key);
            } else {
                self.non_simple -= 1;
            }
        }
    }
}

impl<A: Element, B: Element> Default for MultiRelation<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Element, B: Element> Relation<A, B> for MultiRelation<A, B> {
    fn size(&self) -> usize {
        self.size
    }

    fn keys(&self) -> SetView<'_, A> {
        SetView::of_keys(&self.key_values)
    }

    fn values(&self) -> SetView<'_, B> {
        SetView::of_keys(&self.value_keys)
    }

    fn keys_of(&self, value: &B) -> SetView<'_, A> {
        SetView::of_bucket(self.value_keys.get(value))
    }

    fn values_of(&self, key: &A) -> SetView<'_, B> {
        SetView::of_bucket(self.key_values.get(key))
    }

    fn domain_type(&self) -> Domain<A> {
        self.domain.clone()
    }

    fn range_type(&self) -> Domain<B> {
        self.range.clone()
    }

    fn iter(&self) -> Pairs<'_, A, B> {
        Box::new(
            self.key_values
                .iter()
                .flat_map(|(key, values)| values.iter().map(move |value| Pair::new(key, value))),
        )
    }

    fn contains_key(&self, key: &A) -> bool {
        self.key_values.contains_key(key)
    }

    fn contains_value(&self, value: &B) -> bool {
        self.value_keys.contains_key(value)
    }

    fn is_simple(&self) -> bool {
        self.non_simple == 0
    }

    fn is_injective(&self) -> bool {
        self.non_injective == 0
    }
}

impl<A: Element, B: Element> MutableRelation<A, B> for MultiRelation<A, B> {
    fn put(&mut self, key: A, value: B) -> bool {
        let values = self.key_values.entry(key.clone()).or_default();
        if !values.insert(value.clone()) {
            return false;
        }
        self.size += 1;
        if values.len() > 1 {
            self.non_simple += 1;
        }

        let keys = self.value_keys.entry(value).or_default();
        keys.insert(key);
        if keys.len() > 1 {
            self.non_injective += 1;
        }
        true
    }

    fn remove(&mut self, key: &A, value: &B) -> bool {
        if !self.contains(key, value) {
            return false;
        }
        self.size -= 1;
        self.detach_value(key, value);
        self.detach_key(value, key);
        true
    }

    fn remove_key(&mut self, key: &A) -> HashSet<B> {
        let Some(values) = self.key_values.remove(key) else {
            return HashSet::new();
        };
        self.size -= values.len();
        self.non_simple -= values.len() - 1;
        for value in &values {
            self.detach_key(value, key);
        }
        values
    }

    fn remove_value(&mut self, value: &B) -> HashSet<A> {
        let Some(keys) = self.value_keys.remove(value) else {
            return HashSet::new();
        };
        self.size -= keys.len();
        self.non_injective -= keys.len() - 1;
        for key in &keys {
            self.detach_value(key, value);
        }
        keys
    }

    fn clear(&mut self) {
        trace!(size = self.size, "clear MultiRelation");
        self.size = 0;
        self.non_simple = 0;
        self.non_injective = 0;
        self.key_values.clear();
        self.value_keys.clear();
    }
}

impl<A: Element, B: Element> FromIterator<(A, B)> for MultiRelation<A, B> {
    fn from_iter<I: IntoIterator<Item = (A, B)>>(iter: I) -> Self {
        let mut r = MultiRelation::new();
        r.extend(iter);
        r
    }
}

impl<A: Element, B: Element> Extend<(A, B)> for MultiRelation<A, B> {
    fn extend<I: IntoIterator<Item = (A, B)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

relation_std_traits!([A: Element, B: Element] MultiRelation<A, B> => (A, B));
