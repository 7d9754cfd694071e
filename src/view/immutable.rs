// =============================================================================
// IMMUTABLE — Vue en lecture seule avec propriétés figées
// =============================================================================
//
// La vue enveloppe une relation R et capture UNE FOIS, à la construction :
//   size, is_entire, is_surjective
//
// Tout le reste (keys, values_of, contains, itération, is_simple,
// is_injective) est lu en direct sur R.
//
// ATTENTION : si R est modifiée après la construction (possible quand la
// vue possède un magasin partagé ailleurs, ou via une mutabilité
// intérieure), size() peut contredire keys(). Ce décalage est conservé tel
// quel : re-capturer ou copier changerait le coût de la vue.
//
// La vue n'implémente PAS MutableRelation, et son curseur refuse la
// suppression.
//
// =============================================================================

use std::marker::PhantomData;

use crate::core::cursor::Cursor;
use crate::core::domain::Domain;
use crate::core::relation::{relation_std_traits, Pairs, Relation};
use crate::core::set_view::{Element, SetView};

/// Relation en lecture seule.
pub struct ImmutableView<A, B, R> {
    inner: R,
    size: usize,
    entire: bool,
    surjective: bool,
    _roles: PhantomData<fn() -> (A, B)>,
}

impl<A: Element, B: Element, R: Relation<A, B>> ImmutableView<A, B, R> {
    pub fn new(inner: R) -> Self {
        ImmutableView {
            size: inner.size(),
            entire: inner.is_entire(),
            surjective: inner.is_surjective(),
            inner,
            _roles: PhantomData,
        }
    }

    /// Curseur en lecture seule : `remove()` échoue toujours.
    pub fn cursor(&self) -> Cursor<'_, A, B> {
        Cursor::read_only(&self.inner)
    }

    pub fn inner(&self) -> &R {
        &self.inner
    }
}

impl<A, B, R: Clone> Clone for ImmutableView<A, B, R> {
    fn clone(&self) -> Self {
        ImmutableView {
            inner: self.inner.clone(),
            size: self.size,
            entire: self.entire,
            surjective: self.surjective,
            _roles: PhantomData,
        }
    }
}

impl<A: Element, B: Element, R: Relation<A, B>> Relation<A, B> for ImmutableView<A, B, R> {
    fn size(&self) -> usize {
        self.size
    }

    fn keys(&self) -> SetView<'_, A> {
        self.inner.keys()
    }

    fn values(&self) -> SetView<'_, B> {
        self.inner.values()
    }

    fn keys_of(&self, value: &B) -> SetView<'_, A> {
        self.inner.keys_of(value)
    }

    fn values_of(&self, key: &A) -> SetView<'_, B> {
        self.inner.values_of(key)
    }

    fn key_of(&self, value: &B) -> Option<&A> {
        self.inner.key_of(value)
    }

    fn value_of(&self, key: &A) -> Option<&B> {
        self.inner.value_of(key)
    }

    fn domain_type(&self) -> Domain<A> {
        self.inner.domain_type()
    }

    fn range_type(&self) -> Domain<B> {
        self.inner.range_type()
    }

    fn iter(&self) -> Pairs<'_, A, B> {
        self.inner.iter()
    }

    fn contains(&self, key: &A, value: &B) -> bool {
        self.inner.contains(key, value)
    }

    fn contains_key(&self, key: &A) -> bool {
        self.inner.contains_key(key)
    }

    fn contains_value(&self, value: &B) -> bool {
        self.inner.contains_value(value)
    }

    fn is_simple(&self) -> bool {
        self.inner.is_simple()
    }

    fn is_injective(&self) -> bool {
        self.inner.is_injective()
    }

    fn is_entire(&self) -> bool {
        self.entire
    }

    fn is_surjective(&self) -> bool {
        self.surjective
    }
}

relation_std_traits!([A: Element, B: Element, R: Relation<A, B>] ImmutableView<A, B, R> => (A, B));

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::HashSet;

    use super::*;
    use crate::core::error::RelationError;
    use crate::core::relation::MutableRelation;
    use crate::store::MultiRelation;

    #[test]
    fn test_forwards_content() {
        let r: MultiRelation<i32, char> = [(1, 'a'), (1, 'b')].into_iter().collect();
        let view = ImmutableView::new(&r);
        assert_eq!(view.size(), 2);
        assert_eq!(view.values_of(&1).to_set(), HashSet::from(['a', 'b']));
        assert!(!view.is_simple());
        assert_eq!(view, r);
    }

    #[test]
    fn test_cursor_rejects_removal() {
        let r: MultiRelation<i32, char> = [(1, 'a')].into_iter().collect();
        let view = ImmutableView::new(r);
        let mut cursor = view.cursor();
        assert!(cursor.advance().is_ok());
        assert!(matches!(cursor.remove(), Err(RelationError::Unsupported(_))));
        assert_eq!(view.size(), 1);
    }

    #[test]
    fn test_entire_is_snapshot() {
        let mut r = MultiRelation::with_domains(Domain::finite([1]), Domain::default());
        r.put(1, 'a');
        let view = ImmutableView::new(r);
        assert!(view.is_entire());
        assert!(!view.is_surjective());
    }

    /// Relation qui se laisse modifier derrière une référence partagée.
    struct Shared(RefCell<MultiRelation<i32, i32>>);

    impl Relation<i32, i32> for Shared {
        fn size(&self) -> usize {
            self.0.borrow().size()
        }
        fn keys(&self) -> SetView<'_, i32> {
            SetView::Empty
        }
        fn values(&self) -> SetView<'_, i32> {
            SetView::Empty
        }
        fn keys_of(&self, _value: &i32) -> SetView<'_, i32> {
            SetView::Empty
        }
        fn values_of(&self, _key: &i32) -> SetView<'_, i32> {
            SetView::Empty
        }
        fn contains(&self, key: &i32, value: &i32) -> bool {
            self.0.borrow().contains(key, value)
        }
        fn domain_type(&self) -> Domain<i32> {
            Domain::default()
        }
        fn range_type(&self) -> Domain<i32> {
            Domain::default()
        }
        fn iter(&self) -> Pairs<'_, i32, i32> {
            Box::new(std::iter::empty())
        }
        fn is_simple(&self) -> bool {
            self.0.borrow().is_simple()
        }
        fn is_injective(&self) -> bool {
            self.0.borrow().is_injective()
        }
    }

    #[test]
    fn test_size_is_not_refreshed() {
        let shared = Shared(RefCell::new(MultiRelation::new()));
        let view = ImmutableView::new(&shared);
        shared.0.borrow_mut().put(1, 2);
        // size figée, contenu en direct
        assert_eq!(view.size(), 0);
        assert!(view.contains(&1, &2));
    }
}
