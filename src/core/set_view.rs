// =============================================================================
// SET_VIEW — Projection en lecture seule d'un ensemble d'éléments
// =============================================================================
//
// `keys()`, `values()`, `keys_of(b)` et `values_of(a)` ne copient jamais :
// ils renvoient une VUE sur l'index du magasin. Selon le magasin, cette vue
// regarde :
//   - rien du tout                   (clé absente)         → Empty
//   - une seule référence            (magasin fonctionnel) → Single
//   - un seau HashSet de l'index     (magasin général)     → Set
//   - les clés d'une HashMap d'index (domaine, image)      → Keys
//
// La variante `Single` est le « singleton plafonné » : un ensemble d'exactement
// un élément, sans allocation, qui ne peut pas grossir.
//
// La vue emprunte le magasin : tant qu'elle vit, le magasin ne peut pas être
// modifié (le vérificateur d'emprunts fait respecter ce contrat).
//
// =============================================================================

use std::collections::{hash_set, HashMap, HashSet};
use std::fmt;
use std::hash::Hash;

use super::cardinal::Cardinal;

/// Un élément d'une relation : comparable, hachable, clonable.
pub trait Element: Eq + Hash + Clone {}

impl<T: Eq + Hash + Clone> Element for T {}

/// Un ensemble indexé que l'on peut regarder sans le copier.
pub trait KeySet<T> {
    fn len(&self) -> usize;
    fn contains(&self, element: &T) -> bool;
    fn elements(&self) -> Box<dyn Iterator<Item = &T> + '_>;
}

impl<T: Eq + Hash, V> KeySet<T> for HashMap<T, V> {
    fn len(&self) -> usize {
        HashMap::len(self)
    }

    fn contains(&self, element: &T) -> bool {
        self.contains_key(element)
    }

    fn elements(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.keys())
    }
}

impl<T: Eq + Hash> KeySet<T> for HashSet<T> {
    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn contains(&self, element: &T) -> bool {
        HashSet::contains(self, element)
    }

    fn elements(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }
}

/// Vue en lecture seule sur un ensemble d'éléments d'une relation.
pub enum SetView<'a, T> {
    Empty,
    Single(&'a T),
    Set(&'a HashSet<T>),
    Keys(&'a dyn KeySet<T>),
}

impl<'a, T> Clone for SetView<'a, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<'a, T> Copy for SetView<'a, T> {}

impl<'a, T: Eq + Hash> SetView<'a, T> {
    /// Vue sur un seau optionnel (absent → vide).
    pub fn of_bucket(bucket: Option<&'a HashSet<T>>) -> Self {
        match bucket {
            Some(set) => SetView::Set(set),
            None => SetView::Empty,
        }
    }

    /// Singleton plafonné optionnel (absent → vide).
    pub fn of_single(element: Option<&'a T>) -> Self {
        match element {
            Some(e) => SetView::Single(e),
            None => SetView::Empty,
        }
    }

    /// Vue sur les clés d'un index.
    pub fn of_keys<V>(index: &'a HashMap<T, V>) -> Self {
        SetView::Keys(index)
    }

    pub fn len(&self) -> usize {
        match self {
            SetView::Empty => 0,
            SetView::Single(_) => 1,
            SetView::Set(set) => set.len(),
            SetView::Keys(keys) => keys.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn contains(&self, element: &T) -> bool {
        match self {
            SetView::Empty => false,
            SetView::Single(e) => *e == element,
            SetView::Set(set) => set.contains(element),
            SetView::Keys(keys) => keys.contains(element),
        }
    }

    /// L'unique élément de la vue, s'il y en a exactement un.
    pub fn only(&self) -> Option<&'a T> {
        if self.len() != 1 {
            return None;
        }
        self.iter().next()
    }

    pub fn iter(&self) -> SetIter<'a, T> {
        match *self {
            SetView::Empty => SetIter::Empty,
            SetView::Single(e) => SetIter::Single(Some(e)),
            SetView::Set(set) => SetIter::Set(set.iter()),
            SetView::Keys(keys) => SetIter::Keys(keys.elements()),
        }
    }

    /// Copie possédée du contenu de la vue.
    pub fn to_set(&self) -> HashSet<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    pub fn cardinality(&self) -> Cardinal {
        Cardinal::Finite(self.len())
    }
}

/// Itérateur sur une `SetView`.
pub enum SetIter<'a, T> {
    Empty,
    Single(Option<&'a T>),
    Set(hash_set::Iter<'a, T>),
    Keys(Box<dyn Iterator<Item = &'a T> + 'a>),
}

impl<'a, T> Iterator for SetIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        match self {
            SetIter::Empty => None,
            SetIter::Single(e) => e.take(),
            SetIter::Set(it) => it.next(),
            SetIter::Keys(it) => it.next(),
        }
    }
}

impl<'a, T: Eq + Hash> IntoIterator for SetView<'a, T> {
    type Item = &'a T;
    type IntoIter = SetIter<'a, T>;

    fn into_iter(self) -> SetIter<'a, T> {
        self.iter()
    }
}

impl<'a, T: Eq + Hash> PartialEq for SetView<'a, T> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|e| other.contains(e))
    }
}

impl<'a, T: Eq + Hash> Eq for SetView<'a, T> {}

impl<'a, T: Eq + Hash + fmt::Debug> fmt::Debug for SetView<'a, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_view() {
        let view: SetView<'_, i32> = SetView::of_bucket(None);
        assert!(view.is_empty());
        assert!(!view.contains(&1));
        assert_eq!(view.only(), None);
        assert_eq!(view.iter().count(), 0);
    }

    #[test]
    fn test_capped_singleton() {
        let x = 7;
        let view = SetView::of_single(Some(&x));
        assert_eq!(view.len(), 1);
        assert!(view.contains(&7));
        assert!(!view.contains(&8));
        assert_eq!(view.only(), Some(&7));
        assert_eq!(view.cardinality(), Cardinal::Finite(1));
    }

    #[test]
    fn test_bucket_and_keys() {
        let bucket: HashSet<i32> = HashSet::from([1, 2, 3]);
        let view = SetView::of_bucket(Some(&bucket));
        assert_eq!(view.len(), 3);
        assert_eq!(view.only(), None);
        assert_eq!(view.to_set(), bucket);

        let index: HashMap<&str, usize> = HashMap::from([("a", 1), ("b", 2)]);
        let keys = SetView::of_keys(&index);
        assert!(keys.contains(&"a"));
        assert_eq!(keys.iter().count(), 2);
    }

    #[test]
    fn test_views_compare_by_content() {
        let bucket: HashSet<i32> = HashSet::from([4]);
        let four = 4;
        assert_eq!(SetView::of_bucket(Some(&bucket)), SetView::Single(&four));
        assert_ne!(SetView::of_bucket(Some(&bucket)), SetView::Empty);
    }
}
