// =============================================================================
// BIJECTIVE — Le magasin un-à-un
// =============================================================================
//
// Deux dictionnaires mono-valués, chacun l'inverse exact de l'autre :
//
//   key_value : clé    → valeur
//   value_key : valeur → clé
//
// La relation est simple ET injective par construction. Insérer une flèche
// qui entre en conflit ÉVINCE les flèches existantes :
//
//   put(1, x) put(2, x)   → {(2, x)}         (1 perd sa valeur)
//   put(1, x) put(1, y)   → {(1, y)}         (x perd sa clé)
//
// =============================================================================

use std::collections::{HashMap, HashSet};

use tracing::trace;

use crate::core::domain::Domain;
use crate::core::pair::Pair;
use crate::core::relation::{relation_std_traits, MutableRelation, Pairs, Relation};
use crate::core::set_view::{Element, SetView};
use crate::core::sets;

/// Relation bijective partielle A ↔ B.
#[derive(Clone)]
pub struct BijectiveRelation<A, B> {
    key_value: HashMap<A, B>,
    value_key: HashMap<B, A>,
    domain: Domain<A>,
    range: Domain<B>,
}

impl<A: Element, B: Element> BijectiveRelation<A, B> {
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
        BijectiveRelation {
            key_value: HashMap::with_capacity(capacity),
            value_key: HashMap::with_capacity(capacity),
            domain,
            range,
        }
    }
}

impl<A: Element, B: Element> Default for BijectiveRelation<A, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: Element, B: Element> Relation<A, B> for BijectiveRelation<A, B> {
    fn size(&self) -> usize {
        self.key_value.len()
    }

    fn keys(&self) -> SetView<'_, A> {
        SetView::of_keys(&self.key_value)
    }

    fn values(&self) -> SetView<'_, B> {
        SetView::of_keys(&self.value_key)
    }

    fn keys_of(&self, value: &B) -> SetView<'_, A> {
        SetView::of_single(self.value_key.get(value))
    }

    fn values_of(&self, key: &A) -> SetView<'_, B> {
        SetView::of_single(self.key_value.get(key))
    }

    fn key_of(&self, value: &B) -> Option<&A> {
        self.value_key.get(value)
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
        self.value_key.contains_key(value)
    }

    fn is_simple(&self) -> bool {
        true
    }

    fn is_injective(&self) -> bool {
        true
    }
}

impl<A: Element, B: Element> MutableRelation<A, B> for BijectiveRelation<A, B> {
    fn put(&mut self, key: A, value: B) -> bool {
        if self.contains(&key, &value) {
            return false;
        }
        if let Some(old_value) = self.key_value.remove(&key) {
            self.value_key.remove(&old_value);
            trace!("évincement : la clé perd son ancienne valeur");
        }
        if let Some(old_key) = self.value_key.remove(&value) {
            self.key_value.remove(&old_key);
            trace!("évincement : la valeur perd son ancienne clé");
        }
        self.key_value.insert(key.clone(), value.clone());
        self.value_key.insert(value, key);
        true
    }

    fn remove(&mut self, key: &A, value: &B) -> bool {
        if !self.contains(key, value) {
            return false;
        }
        self.key_value.remove(key);
        self.value_key.remove(value);
        true
    }

    fn remove_key(&mut self, key: &A) -> HashSet<B> {
        match self.key_value.remove(key) {
            Some(value) => {
                self.value_key.remove(&value);
                sets::singleton(value)
            }
            None => HashSet::new(),
        }
    }

    fn remove_value(&mut self, value: &B) -> HashSet<A> {
        match self.value_key.remove(value) {
            Some(key) => {
                self.key_value.remove(&key);
                sets::singleton(key)
            }
            None => HashSet::new(),
        }
    }

    fn clear(&mut self) {
        trace!(size = self.key_value.len(), "clear BijectiveRelation");
        self.key_value.clear();
        self.value_key.clear();
    }
}

impl<A: Element, B: Element> FromIterator<(A, B)> for BijectiveRelation<A, B> {
    fn from_iter<I: IntoIterator<Item = (A, B)>>(iter: I) -> Self {
        let mut r = BijectiveRelation::new();
        r.extend(iter);
        r
    }
}

impl<A: Element, B: Element> Extend<(A, B)> for BijectiveRelation<A, B> {
    fn extend<I: IntoIterator<Item = (A, B)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

relation_std_traits!([A: Element, B: Element] BijectiveRelation<A, B> => (A, B));

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_conflict_evicts_key() {
        let mut r = BijectiveRelation::new();
        r.put(1, "x");
        assert!(r.put(2, "x"));
        assert_eq!(r.size(), 1);
        assert_eq!(r.value_of(&1), None);
        assert_eq!(r.key_of(&"x"), Some(&2));
        assert!(!r.contains_key(&1));
    }

    #[test]
    fn test_double_eviction() {
        // (1, x) et (2, y) : put(1, y) évince les deux flèches
        let mut r: BijectiveRelation<i32, char> = [(1, 'x'), (2, 'y')].into_iter().collect();
        assert!(r.put(1, 'y'));
        assert_eq!(r.size(), 1);
        assert!(r.contains(&1, &'y'));
        assert!(!r.contains_value(&'x'));
        assert!(!r.contains_key(&2));
    }

    #[test]
    fn test_put_existing_is_noop() {
        let mut r = BijectiveRelation::new();
        r.put('a', 'b');
        assert!(!r.put('a', 'b'));
        assert_eq!(r.size(), 1);
    }

    #[test]
    fn test_removals() {
        let mut r: BijectiveRelation<i32, char> = [(1, 'a'), (2, 'b'), (3, 'c')].into_iter().collect();
        assert_eq!(r.remove_key(&1), HashSet::from(['a']));
        assert_eq!(r.remove_value(&'b'), HashSet::from([2]));
        assert!(r.remove_value(&'z').is_empty());
        assert!(!r.remove(&3, &'a'));
        assert!(r.remove(&3, &'c'));
        assert!(r.is_empty());
        assert!(r.keys().is_empty() && r.values().is_empty());
    }

    #[test]
    fn test_always_one_to_one() {
        let mut r = BijectiveRelation::new();
        // (1,a) (1,b) (2,a) (2,b) (3,a) (3,b) : chaque flèche évince la précédente
        r.put_all([1, 2, 3], ['a', 'b']);
        assert!(r.is_simple() && r.is_injective());
        assert_eq!(r.size(), 1);
        assert!(r.contains(&3, &'b'));
        assert!(r.keys_of(&'a').is_empty());
        assert_eq!(r.values().len(), r.keys().len());
    }
}
