// =============================================================================
// SHAPE — La forme structurelle d'une relation
// =============================================================================
//
//                    injective         non injective
//   simple           OneToOne          Simple
//   non simple       Injective         ManyToMany
//
// La forme décide du magasin le moins coûteux capable de contenir un
// résultat :
//   OneToOne   → BijectiveRelation
//   Simple     → FunctionalRelation
//   Injective  → converse d'une FunctionalRelation construite à l'envers
//   ManyToMany → MultiRelation
//
// =============================================================================

use std::fmt;

use crate::core::relation::Relation;
use crate::core::set_view::Element;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Shape {
    ManyToMany,
    Simple,
    Injective,
    OneToOne,
}

impl Shape {
    pub fn from_flags(simple: bool, injective: bool) -> Shape {
        match (simple, injective) {
            (true, true) => Shape::OneToOne,
            (true, false) => Shape::Simple,
            (false, true) => Shape::Injective,
            (false, false) => Shape::ManyToMany,
        }
    }

    /// Forme observée d'une relation (O(1) pour les magasins).
    pub fn of<A, B, R>(relation: &R) -> Shape
    where
        A: Element,
        B: Element,
        R: Relation<A, B> + ?Sized,
    {
        Shape::from_flags(relation.is_simple(), relation.is_injective())
    }

    /// Forme garantie pour R1 ; R2 : simple ∘ simple est simple,
    /// injective ∘ injective est injective.
    pub fn for_composition(first: Shape, second: Shape) -> Shape {
        Shape::from_flags(
            first.is_simple() && second.is_simple(),
            first.is_injective() && second.is_injective(),
        )
    }

    pub fn is_simple(self) -> bool {
        matches!(self, Shape::Simple | Shape::OneToOne)
    }

    pub fn is_injective(self) -> bool {
        matches!(self, Shape::Injective | Shape::OneToOne)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Shape::ManyToMany => "n-n",
            Shape::Simple => "n-1",
            Shape::Injective => "1-n",
            Shape::OneToOne => "1-1",
        };
        write!(f, "{}", name)
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_composition_table() {
        use Shape::*;
        assert_eq!(Shape::for_composition(OneToOne, OneToOne), OneToOne);
        assert_eq!(Shape::for_composition(OneToOne, Simple), Simple);
        assert_eq!(Shape::for_composition(Injective, OneToOne), Injective);
        assert_eq!(Shape::for_composition(Simple, Injective), ManyToMany);
        assert_eq!(Shape::for_composition(ManyToMany, OneToOne), ManyToMany);
    }

    #[test]
    fn test_display() {
        assert_eq!(Shape::Simple.to_string(), "n-1");
        assert_eq!(Shape::OneToOne.to_string(), "1-1");
    }
}
