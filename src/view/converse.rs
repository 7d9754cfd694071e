// =============================================================================
// CONVERSE — La relation retournée, sans copie
// =============================================================================
//
// Pour R : A → B, la converse R° : B → A contient (b, a) ⇔ (a, b) ∈ R.
//
// La vue échange le rôle de chaque accesseur :
//
//   keys()        ↔ values()
//   keys_of(x)    ↔ values_of(x)
//   is_simple()   ↔ is_injective()
//   is_entire()   ↔ is_surjective()
//   domain_type() ↔ range_type()
//
// Ce qu'elle enveloppe décide de ce qu'elle permet :
//   ConverseView<_, _, &R>      → lecture seule, la vue vit moins que R
//   ConverseView<_, _, &mut R>  → écriture répercutée sur R
//   ConverseView<_, _, R>       → la vue possède R
//
// =============================================================================

use std::collections::HashSet;
use std::marker::PhantomData;

use crate::core::domain::Domain;
use crate::core::pair::Pair;
use crate::core::relation::{relation_std_traits, MutableRelation, Pairs, Relation};
use crate::core::set_view::{Element, SetView};

/// R° : la converse d'une relation R : A → B, exposée comme B → A.
pub struct ConverseView<A, B, R> {
    inner: R,
    _roles: PhantomData<fn() -> (A, B)>,
}

impl<A: Element, B: Element, R: Relation<A, B>> ConverseView<A, B, R> {
    /// Construction en O(1).
    pub fn new(inner: R) -> Self {
        ConverseView { inner, _roles: PhantomData }
    }
}

impl<A, B, R> ConverseView<A, B, R> {
    /// La relation d'origine, dans son sens A → B.
    pub fn inner(&self) -> &R {
        &self.inner
    }

    /// Rend la relation enveloppée : (R°)° = R sans empiler de vue.
    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<A, B, R: Clone> Clone for ConverseView<A, B, R> {
    fn clone(&self) -> Self {
        ConverseView { inner: self.inner.clone(), _roles: PhantomData }
    }
}

/// Converse en lecture seule.
pub fn converse<A, B, R>(relation: &R) -> ConverseView<A, B, &R>
where
    A: Element,
    B: Element,
    R: Relation<A, B> + ?Sized,
{
    ConverseView::new(relation)
}

/// Converse modifiable : chaque écriture est répercutée sur `relation`.
pub fn converse_mut<A, B, R>(relation: &mut R) -> ConverseView<A, B, &mut R>
where
    A: Element,
    B: Element,
    R: MutableRelation<A, B> + ?Sized,
{
    ConverseView::new(relation)
}

impl<A: Element, B: Element, R: Relation<A, B>> Relation<B, A> for ConverseView<A, B, R> {
    fn size(&self) -> usize {
        self.inner.size()
    }

    fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    fn keys(&self) -> SetView<'_, B> {
        self.inner.values()
    }

    fn values(&self) -> SetView<'_, A> {
        self.inner.keys()
    }

    fn keys_of(&self, value: &A) -> SetView<'_, B> {
        self.inner.values_of(value)
    }

    fn values_of(&self, key: &B) -> SetView<'_, A> {
        self.inner.keys_of(key)
    }

    fn key_of(&self, value: &A) -> Option<&B> {
        self.inner.value_of(value)
    }

    fn value_of(&self, key: &B) -> Option<&A> {
        self.inner.key_of(key)
    }

    fn domain_type(&self) -> Domain<B> {
        self.inner.range_type()
    }

    fn range_type(&self) -> Domain<A> {
        self.inner.domain_type()
    }

    fn iter(&self) -> Pairs<'_, B, A> {
        Box::new(self.inner.iter().map(Pair::swap))
    }

    fn contains(&self, key: &B, value: &A) -> bool {
        self.inner.contains(value, key)
    }

    fn contains_key(&self, key: &B) -> bool {
        self.inner.contains_value(key)
    }

    fn contains_value(&self, value: &A) -> bool {
        self.inner.contains_key(value)
    }

    fn is_simple(&self) -> bool {
        self.inner.is_injective()
    }

    fn is_injective(&self) -> bool {
        self.inner.is_simple()
    }

    fn is_entire(&self) -> bool {
        self.inner.is_surjective()
    }

    fn is_surjective(&self) -> bool {
        self.inner.is_entire()
    }

    fn relation_hash(&self) -> u64 {
        // hash(a) ^ hash(b) est symétrique : R et R° ont le même hash
        self.inner.relation_hash()
    }
}

impl<A: Element, B: Element, R: MutableRelation<A, B>> MutableRelation<B, A> for ConverseView<A, B, R> {
    fn put(&mut self, key: B, value: A) -> bool {
        self.inner.put(value, key)
    }

    fn remove(&mut self, key: &B, value: &A) -> bool {
        self.inner.remove(value, key)
    }

    fn remove_key(&mut self, key: &B) -> HashSet<A> {
        self.inner.remove_value(key)
    }

    fn remove_value(&mut self, value: &A) -> HashSet<B> {
        self.inner.remove_key(value)
    }

    fn clear(&mut self) {
        self.inner.clear()
    }

    fn put_all_keys<I>(&mut self, keys: I, value: A) -> bool
    where
        I: IntoIterator<Item = B>,
        Self: Sized,
    {
        self.inner.put_all_values(value, keys)
    }

    fn put_all_values<I>(&mut self, key: B, values: I) -> bool
    where
        I: IntoIterator<Item = A>,
        Self: Sized,
    {
        self.inner.put_all_keys(values, key)
    }

    fn put_all<I, J>(&mut self, keys: I, values: J) -> bool
    where
        I: IntoIterator<Item = B>,
        J: IntoIterator<Item = A>,
        Self: Sized,
    {
        self.inner.put_all(values, keys)
    }

    fn remove_keys<'x, I>(&mut self, keys: I) -> HashSet<A>
    where
        I: IntoIterator<Item = &'x B>,
        B: 'x,
        Self: Sized,
    {
        self.inner.remove_values(keys)
    }

    fn remove_values<'x, I>(&mut self, values: I) -> HashSet<B>
    where
        I: IntoIterator<Item = &'x A>,
        A: 'x,
        Self: Sized,
    {
        self.inner.remove_keys(values)
    }
}

relation_std_traits!([A: Element, B: Element, R: Relation<A, B>] ConverseView<A, B, R> => (B, A));

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::Domain;
    use crate::store::{FunctionalRelation, MultiRelation};

    fn sample() -> FunctionalRelation<i32, char> {
        [(1, 'a'), (2, 'a'), (3, 'b')].into_iter().collect()
    }

    #[test]
    fn test_roles_are_swapped() {
        let r = sample();
        let c = converse(&r);
        assert_eq!(c.size(), 3);
        assert_eq!(c.keys().to_set(), HashSet::from(['a', 'b']));
        assert_eq!(c.values_of(&'a').to_set(), HashSet::from([1, 2]));
        assert_eq!(c.key_of(&3), Some(&'b'));
        assert_eq!(c.value_of(&'a'), None); // ambiguë
        assert!(c.contains(&'b', &3));
        assert!(c.is_injective());
        assert!(!c.is_simple());
    }

    #[test]
    fn test_entire_surjective_swapped() {
        let mut r = MultiRelation::with_domains(Domain::finite([1]), Domain::finite(['a', 'b']));
        r.put(1, 'a');
        let c = converse(&r);
        assert!(c.is_surjective());
        assert!(!c.is_entire());
    }

    #[test]
    fn test_involution() {
        let r = sample();
        let back = ConverseView::new(converse(&r));
        assert_eq!(back, r);
        assert_eq!(converse(&r).into_inner(), &r);
    }

    #[test]
    fn test_equal_to_materialized_converse() {
        let r = sample();
        let flipped: MultiRelation<char, i32> = r.iter().map(|p| p.swap().cloned().into_tuple()).collect();
        assert_eq!(converse(&r), flipped);
        assert_eq!(converse(&r).relation_hash(), flipped.relation_hash());
    }

    #[test]
    fn test_write_through() {
        let mut r: MultiRelation<i32, char> = MultiRelation::new();
        {
            let mut c = converse_mut(&mut r);
            assert!(c.put('x', 1));
            c.put_all_keys(['y', 'z'], 2);
            assert_eq!(c.remove_key(&'z'), HashSet::from([2]));
        }
        assert!(r.contains(&1, &'x'));
        assert!(r.contains(&2, &'y'));
        assert!(!r.contains_value(&'z'));
        assert_eq!(r.size(), 2);
    }

    #[test]
    fn test_cursor_removal_reaches_inner() {
        let mut r: MultiRelation<i32, char> = [(1, 'a'), (2, 'b')].into_iter().collect();
        {
            let mut c = converse_mut(&mut r);
            let mut cursor = c.cursor();
            let first = cursor.advance().unwrap();
            assert_eq!(cursor.remove(), Ok(first));
        }
        assert_eq!(r.size(), 1);
    }

    #[test]
    fn test_display() {
        let r: MultiRelation<i32, char> = [(1, 'a')].into_iter().collect();
        assert_eq!(converse(&r).to_string(), "{(a,1)}");
    }
}
