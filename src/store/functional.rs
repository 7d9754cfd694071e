// =============================================================================
// FUNCTIONAL — Le magasin fonctionnel (chaque clé a au plus une valeur)
// =============================================================================
//
//   key_value  : clé    → valeur       (simple PAR CONSTRUCTION)
//   value_keys : valeur → { clés }     (pour suivre l'injectivité)
//
// Ré-insérer une clé avec une autre valeur REMPLACE l'ancienne flèche :
//   put(1, a) put(1, b)   → {(1, b)}
// Il faut alors détacher la clé du seau de l'ancienne valeur (et décrémenter
// non_injective si ce seau reste non vide) avant de l'attacher à la nouvelle.
//
// =============================================================================

use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::core::domain::Domain;
use crate::core::pair::Pair;
use crate::core::relation::{relation_std_traits, MutableRelation, Pairs, Relation};
use crate::core::set_view::{Element, SetView};
use crate::core::sets;

/// Relation simple : une fonction partielle A ⇀ B.
#[derive(Clone)]
pub struct FunctionalRelation<A, B> {
    key_value: HashMap<A, B>,
    value_keys: HashMap<B, HashSet<A>>,
    non_injective: usize,
    domain: Domain<A>,
    range: Domain<B>,
}

impl<A: Element, B: Element> FunctionalRelation<A, B> {
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
        FunctionalRelation {
            key_value: HashMap::with_capacity(capacity),
            value_keys: HashMap::with_capacity(capacity),
            non_injective: 0,
            domain,
            range,
        }
    }

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
}

impl<A: Element, B: Element> Default for FunctionalRelation<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Element, B: Element> Relation<A, B> for FunctionalRelation<A, B> {
    fn size(&self) -> usize {
        self.key_value.len()
    }

    fn keys(&self) -> SetView<'_, A> {
        SetView::of_keys(&self.key_value)
    }

    fn values(&self) -> SetView<'_, B> {
        SetView::of_keys(&self.value_keys)
    }

    fn keys_of(&self, value: &B) -> SetView<'_, A> {
        SetView::of_bucket(self.value_keys.get(value))
    }

    fn values_of(&self, key: &A) -> SetView<'_, B> {
        SetView::of_single(self.key_value.get(key))
    }

    fn value_of(&self, key: &A) -> Option<&B> {
        self.key_value.get(key)
    }

    fn domain_type(&self) -> Domain<A> {
        self.domain.clone()
    }

    fn range_type(&self) -> Domain<B> {
        self.range.clone()
    }

    fn iter(&self) -> Pairs<'_, A, B> {
        Box::new(self.key_value.iter().map(|(key, value)| Pair::new(key, value)))
    }

    fn contains(&self, key: &A, value: &B) -> bool {
        self.key_value.get(key) == Some(value)
    }

    fn contains_key(&self, key: &A) -> bool {
        self.key_value.contains_key(key)
    }

    fn contains_value(&self, value: &B) -> bool {
        self.value_keys.contains_key(value)
    }

    fn is_simple(&self) -> bool {
        true
    }

    fn is_injective(&self) -> bool {
        self.non_injective == 0
    }
}

impl<A: Element, B: Element> MutableRelation<A, B> for FunctionalRelation<A, B> {
    fn put(&mut self, key: A, value: B) -> bool {
        match self.key_value.insert(key.clone(), value.clone()) {
            Some(previous) if previous == value => return false,
            Some(previous) => self.detach_key(&previous, &key),
            None => {}
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
        self.key_value.remove(key);
        self.detach_key(value, key);
        true
    }

    fn remove_key(&mut self, key: &A) -> HashSet<B> {
        match self.key_value.remove(key) {
            Some(value) => {
                self.detach_key(&value, key);
                sets::singleton(value)
            }
            None => HashSet::new(),
        }
    }

    fn remove_value(&mut self, value: &B) -> HashSet<A> {
        let Some(keys) = self.value_keys.remove(value) else {
            return HashSet::new();
        };
        self.non_injective -= keys.len() - 1;
        for key in &keys {
            self.key_value.remove(key);
        }
        keys
    }

    fn clear(&mut self) {
        trace!(size = self.key_value.len(), "clear FunctionalRelation");
        self.non_injective = 0;
        self.key_value.clear();
        self.value_keys.clear();
    }
}

impl<A: Element, B: Element> FromIterator<(A, B)> for FunctionalRelation<A, B> {
    fn from_iter<I: IntoIterator<Item = (A, B)>>(iter: I) -> Self {
        let mut r = FunctionalRelation::new();
        r.extend(iter);
        r
    }
}

impl<A: Element, B: Element> Extend<(A, B)> for FunctionalRelation<A, B> {
    fn extend<I: IntoIterator<Item = (A, B)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

relation_std_traits!([A: Element, B: Element] FunctionalRelation<A, B> => (A, B));
