// =============================================================================
// ANY — Un magasin choisi à l'exécution selon la forme
// =============================================================================
//
// Les opérateurs de l'algèbre choisissent leur magasin de sortie d'après la
// forme des opérandes. Le type de retour est donc une énumération fermée :
//
//   Multi       → MultiRelation<A, B>
//   Functional  → FunctionalRelation<A, B>
//   Injective   → ConverseView<B, A, FunctionalRelation<B, A>>
//   Bijective   → BijectiveRelation<A, B>
//
// PRÉCONDITION : un magasin Functional (resp. Bijective, Injective) ÉCRASE
// les flèches en conflit. Il ne doit recevoir que des flèches compatibles
// avec sa forme, sinon le contenu diffère de ce qui a été inséré.
//
// =============================================================================

use std::collections::HashSet;

use crate::core::domain::Domain;
use crate::core::relation::{relation_std_traits, MutableRelation, Pairs, Relation};
use crate::core::set_view::{Element, SetView};
use crate::view::ConverseView;

use super::bijective::BijectiveRelation;
use super::functional::FunctionalRelation;
use super::multi::MultiRelation;
use super::shape::Shape;

#[derive(Clone)]
pub enum AnyRelation<A, B> {
    Multi(MultiRelation<A, B>),
    Functional(FunctionalRelation<A, B>),
    Injective(ConverseView<B, A, FunctionalRelation<B, A>>),
    Bijective(BijectiveRelation<A, B>),
}

macro_rules! dispatch {
    ($value:expr, $r:ident => $body:expr) => {
        match $value {
            AnyRelation::Multi($r) => $body,
            AnyRelation::Functional($r) => $body,
            AnyRelation::Injective($r) => $body,
            AnyRelation::Bijective($r) => $body,
        }
    };
}

impl<A: Element, B: Element> AnyRelation<A, B> {
    /// Magasin vide de la forme demandée.
    pub fn with_shape(shape: Shape, capacity: usize, domain: Domain<A>, range: Domain<B>) -> Self {
        match shape {
            Shape::ManyToMany => {
                AnyRelation::Multi(MultiRelation::with_capacity_and_domains(capacity, domain, range))
            }
            Shape::Simple => AnyRelation::Functional(FunctionalRelation::with_capacity_and_domains(
                capacity, domain, range,
            )),
            Shape::Injective => AnyRelation::Injective(ConverseView::new(
                FunctionalRelation::with_capacity_and_domains(capacity, range, domain),
            )),
            Shape::OneToOne => AnyRelation::Bijective(BijectiveRelation::with_capacity_and_domains(
                capacity, domain, range,
            )),
        }
    }

    /// Forme du magasin (et non forme observée du contenu).
    pub fn shape(&self) -> Shape {
        match self {
            AnyRelation::Multi(_) => Shape::ManyToMany,
            AnyRelation::Functional(_) => Shape::Simple,
            AnyRelation::Injective(_) => Shape::Injective,
            AnyRelation::Bijective(_) => Shape::OneToOne,
        }
    }
}

impl<A: Element, B: Element> Default for AnyRelation<A, B> {
    fn default() -> Self {
        AnyRelation::Multi(MultiRelation::new())
    }
}

impl<A: Element, B: Element> From<MultiRelation<A, B>> for AnyRelation<A, B> {
    fn from(r: MultiRelation<A, B>) -> Self {
        AnyRelation::Multi(r)
    }
}

impl<A: Element, B: Element> From<FunctionalRelation<A, B>> for AnyRelation<A, B> {
    fn from(r: FunctionalRelation<A, B>) -> Self {
        AnyRelation::Functional(r)
    }
}

impl<A: Element, B: Element> From<BijectiveRelation<A, B>> for AnyRelation<A, B> {
    fn from(r: BijectiveRelation<A, B>) -> Self {
        AnyRelation::Bijective(r)
    }
}

impl<A: Element, B: Element> Relation<A, B> for AnyRelation<A, B> {
    fn size(&self) -> usize {
        dispatch!(self, r => r.size())
    }

    fn keys(&self) -> SetView<'_, A> {
        dispatch!(self, r => r.keys())
    }

    fn values(&self) -> SetView<'_, B> {
        dispatch!(self, r => r.values())
    }

    fn keys_of(&self, value: &B) -> SetView<'_, A> {
        dispatch!(self, r => r.keys_of(value))
    }

    fn values_of(&self, key: &A) -> SetView<'_, B> {
        dispatch!(self, r => r.values_of(key))
    }

    fn key_of(&self, value: &B) -> Option<&A> {
        dispatch!(self, r => r.key_of(value))
    }

    fn value_of(&self, key: &A) -> Option<&B> {
        dispatch!(self, r => r.value_of(key))
    }

    fn domain_type(&self) -> Domain<A> {
        dispatch!(self, r => r.domain_type())
    }

    fn range_type(&self) -> Domain<B> {
        dispatch!(self, r => r.range_type())
    }

    fn iter(&self) -> Pairs<'_, A, B> {
        dispatch!(self, r => r.iter())
    }

    fn contains(&self, key: &A, value: &B) -> bool {
        dispatch!(self, r => r.contains(key, value))
    }

    fn contains_key(&self, key: &A) -> bool {
        dispatch!(self, r => r.contains_key(key))
    }

    fn contains_value(&self, value: &B) -> bool {
        dispatch!(self, r => r.contains_value(value))
    }

    fn is_simple(&self) -> bool {
        dispatch!(self, r => r.is_simple())
    }

    fn is_injective(&self) -> bool {
        dispatch!(self, r => r.is_injective())
    }

    fn is_entire(&self) -> bool {
        dispatch!(self, r => r.is_entire())
    }

    fn is_surjective(&self) -> bool {
        dispatch!(self, r => r.is_surjective())
    }
}

impl<A: Element, B: Element> MutableRelation<A, B> for AnyRelation<A, B> {
    fn put(&mut self, key: A, value: B) -> bool {
        dispatch!(self, r => r.put(key, value))
    }

    fn remove(&mut self, key: &A, value: &B) -> bool {
        dispatch!(self, r => r.remove(key, value))
    }

    fn remove_key(&mut self, key: &A) -> HashSet<B> {
        dispatch!(self, r => r.remove_key(key))
    }

    fn remove_value(&mut self, value: &B) -> HashSet<A> {
        dispatch!(self, r => r.remove_value(value))
    }

    fn clear(&mut self) {
        dispatch!(self, r => r.clear())
    }
}

relation_std_traits!([A: Element, B: Element] AnyRelation<A, B> => (A, B));

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    fn filled(shape: Shape) -> AnyRelation<i32, char> {
        let mut r = AnyRelation::with_shape(shape, 4, Domain::default(), Domain::default());
        r.put(1, 'a');
        r.put(2, 'b');
        r
    }

    #[test]
    fn test_every_shape_holds_the_same_pairs() {
        let reference = filled(Shape::ManyToMany);
        for shape in [Shape::Simple, Shape::Injective, Shape::OneToOne] {
            let r = filled(shape);
            assert_eq!(r.shape(), shape);
            assert_eq!(r, reference);
            assert_eq!(r.value_of(&2), Some(&'b'));
            assert_eq!(r.key_of(&'a'), Some(&1));
        }
    }

    #[test]
    fn test_injective_store_keeps_many_values_per_key() {
        let mut r = AnyRelation::with_shape(Shape::Injective, 0, Domain::default(), Domain::default());
        r.put_all_values(1, ['a', 'b']);
        assert_eq!(r.size(), 2);
        assert!(r.is_injective());
        assert!(!r.is_simple());
        assert_eq!(r.remove_key(&1), HashSet::from(['a', 'b']));
        assert!(r.is_empty());
    }

    #[test]
    fn test_default_is_general_store() {
        let r: AnyRelation<i32, i32> = AnyRelation::default();
        assert_eq!(r.shape(), Shape::ManyToMany);
        assert!(r.is_empty());
    }
}
