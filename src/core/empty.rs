// =============================================================================
// EMPTY — La relation vide (⊥)
// =============================================================================
//
// Valeur par défaut du contrat en lecture : aucune flèche. Elle sert aussi à
// représenter un opérande « absent » des opérateurs algébriques.
//
// =============================================================================

use std::marker::PhantomData;

use super::domain::Domain;
use super::relation::{relation_std_traits, Pairs, Relation};
use super::set_view::{Element, SetView};

/// La relation vide A → B.
pub struct EmptyRelation<A, B> {
    domain: Domain<A>,
    range: Domain<B>,
    _arrows: PhantomData<fn() -> (A, B)>,
}

impl<A, B> EmptyRelation<A, B> {
    pub fn new() -> Self {
        EmptyRelation {
            domain: Domain::default(),
            range: Domain::default(),
            _arrows: PhantomData,
        }
    }

    pub fn with_domains(domain: Domain<A>, range: Domain<B>) -> Self {
        EmptyRelation { domain, range, _arrows: PhantomData }
    }
}

impl<A, B> Default for EmptyRelation<A, B> {
    fn default() -> Self {
        EmptyRelation::new()
    }
}

impl<A: Element, B: Element> Relation<A, B> for EmptyRelation<A, B> {
    fn size(&self) -> usize {
        0
    }

    fn keys(&self) -> SetView<'_, A> {
        SetView::Empty
    }

    fn values(&self) -> SetView<'_, B> {
        SetView::Empty
    }

    fn keys_of(&self, _value: &B) -> SetView<'_, A> {
        SetView::Empty
    }

    fn values_of(&self, _key: &A) -> SetView<'_, B> {
        SetView::Empty
    }

    fn domain_type(&self) -> Domain<A> {
        self.domain.clone()
    }

    fn range_type(&self) -> Domain<B> {
        self.range.clone()
    }

    fn iter(&self) -> Pairs<'_, A, B> {
        Box::new(std::iter::empty())
    }

    fn is_simple(&self) -> bool {
        true
    }

    fn is_injective(&self) -> bool {
        true
    }

    fn is_entire(&self) -> bool {
        false
    }

    fn is_surjective(&self) -> bool {
        false
    }
}

relation_std_traits!([A: Element, B: Element] EmptyRelation<A, B> => (A, B));
