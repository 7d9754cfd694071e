// =============================================================================
// BUILD — Relations construites à partir d'éléments, copies immuables
// =============================================================================

use tracing::trace;

use crate::core::relation::{MutableRelation, Relation};
use crate::core::set_view::Element;
use crate::store::{AnyRelation, MultiRelation, Shape};
use crate::view::ImmutableView;

/// ⊤ : toutes les flèches de `keys` × `values`.
pub fn top<A, B, I, J>(keys: I, values: J) -> MultiRelation<A, B>
where
    A: Element,
    B: Element,
    I: IntoIterator<Item = A>,
    J: IntoIterator<Item = B>,
{
    let mut r = MultiRelation::new();
    r.put_all(keys, values);
    r
}

/// ⊤ sur un seul ensemble : `elements` × `elements`.
pub fn top_on<A, I>(elements: I) -> MultiRelation<A, A>
where
    A: Element,
    I: IntoIterator<Item = A>,
{
    let elements: Vec<A> = elements.into_iter().collect();
    top(elements.iter().cloned(), elements.iter().cloned())
}

/// Diagonale : chaque élément vers lui-même.
pub fn identity<A, I>(elements: I) -> MultiRelation<A, A>
where
    A: Element,
    I: IntoIterator<Item = A>,
{
    elements.into_iter().map(|a| (a.clone(), a)).collect()
}

/// R° matérialisée : une NOUVELLE relation B → A, indépendante de `r`.
pub fn converse_copy<A, B, R>(r: &R) -> MultiRelation<B, A>
where
    A: Element,
    B: Element,
    R: Relation<A, B> + ?Sized,
{
    trace!(size = r.size(), "converse copy");
    let mut copy = MultiRelation::with_capacity_and_domains(r.size(), r.range_type(), r.domain_type());
    for pair in r.iter() {
        let (value, key) = pair.swap().cloned().into_tuple();
        copy.put(value, key);
    }
    copy
}

/// Copie en lecture seule de `r`, dans le magasin le moins coûteux qui
/// convient à sa forme actuelle.
pub fn immutable<A, B, R>(r: &R) -> ImmutableView<A, B, AnyRelation<A, B>>
where
    A: Element,
    B: Element,
    R: Relation<A, B> + ?Sized,
{
    let shape = Shape::of(r);
    trace!(%shape, size = r.size(), "immutable copy");
    let mut copy = AnyRelation::with_shape(shape, r.size(), r.domain_type(), r.range_type());
    for pair in r.iter() {
        let (key, value) = pair.cloned().into_tuple();
        copy.put(key, value);
    }
    ImmutableView::new(copy)
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::empty::EmptyRelation;
    use crate::store::FunctionalRelation;

    #[test]
    fn test_top() {
        let t = top([1, 2], ['a', 'b', 'c']);
        assert_eq!(t.size(), 6);
        assert!(t.contains(&2, &'c'));
        assert!(top(Vec::<i32>::new(), ['a']).is_empty());
    }

    #[test]
    fn test_top_on_single_set() {
        let t = top_on([0, 1, 2]);
        assert_eq!(t.size(), 9);
        assert!(t.contains(&0, &2) && t.contains(&2, &0));
    }

    #[test]
    fn test_identity() {
        let id = identity(["x", "y"]);
        assert_eq!(id.size(), 2);
        assert!(id.is_simple() && id.is_injective());
        assert_eq!(id.value_of(&"x"), Some(&"x"));
        assert!(identity(Vec::<i32>::new()).is_empty());
    }

    #[test]
    fn test_immutable_picks_cheapest_store() {
        let f: FunctionalRelation<i32, char> = [(1, 'a'), (2, 'a')].into_iter().collect();
        let view = immutable(&f);
        assert_eq!(view.inner().shape(), Shape::Simple);
        assert_eq!(view, f);

        let one: FunctionalRelation<i32, char> = [(1, 'a'), (2, 'b')].into_iter().collect();
        assert_eq!(immutable(&one).inner().shape(), Shape::OneToOne);

        let inj: MultiRelation<i32, char> = [(1, 'a'), (1, 'b')].into_iter().collect();
        let view = immutable(&inj);
        assert_eq!(view.inner().shape(), Shape::Injective);
        assert_eq!(view, inj);

        let many = top_on([1, 2]);
        assert_eq!(immutable(&many).inner().shape(), Shape::ManyToMany);
    }

    #[test]
    fn test_immutable_is_a_copy() {
        let mut m: MultiRelation<i32, i32> = [(1, 1)].into_iter().collect();
        let view = immutable(&m);
        m.put(2, 2);
        assert_eq!(view.size(), 1);
        assert!(!view.contains(&2, &2));
        assert!(immutable(&EmptyRelation::<i32, i32>::new()).is_empty());
    }

    #[test]
    fn test_immutable_owned_elements() {
        let mut m: MultiRelation<String, String> = MultiRelation::new();
        m.put_all_values("ana".to_string(), ["algèbre".to_string(), "logique".to_string()]);
        let view = immutable(&m);
        assert_eq!(view.inner().shape(), Shape::Injective);
        assert_eq!(view, m);
        assert_eq!(view.key_of(&"logique".to_string()), Some(&"ana".to_string()));
    }

    #[test]
    fn test_converse_copy_is_independent() {
        let mut m: MultiRelation<String, i32> =
            [("a".to_string(), 1), ("b".to_string(), 1)].into_iter().collect();
        let flipped = converse_copy(&m);
        assert_eq!(flipped.size(), 2);
        assert_eq!(flipped.values_of(&1).len(), 2);
        assert_eq!(flipped.is_simple(), m.is_injective());

        m.put("c".to_string(), 2);
        m.remove(&"a".to_string(), &1);
        assert_eq!(flipped.size(), 2);
        assert!(flipped.contains(&1, &"a".to_string()));
        assert!(!flipped.contains_key(&2));
    }
}
