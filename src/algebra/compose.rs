// =============================================================================
// COMPOSE — Composition, noyau et image
// =============================================================================
//
// (a, c) ∈ R1 ; R2  ⇔  ∃ b. (a, b) ∈ R1 ∧ (b, c) ∈ R2
//
// Construction : pour chaque clé a de R1, pour chaque valeur b de a qui est
// aussi une clé de R2, on insère (a, c) pour chaque valeur c de b.
//
// OPTIMISATION (compose_with(.., true)) : le magasin de sortie est choisi
// selon la forme des deux opérandes. Elle ne change QUE la représentation,
// jamais l'ensemble des flèches :
//
//   R1 et R2 un-à-un       → BijectiveRelation
//   R1 et R2 simples       → FunctionalRelation
//   R1 et R2 injectives    → converse d'une FunctionalRelation
//   sinon                  → MultiRelation
//
// =============================================================================

use tracing::debug;

use crate::core::relation::{MutableRelation, Relation};
use crate::core::set_view::Element;
use crate::store::{AnyRelation, Shape};
use crate::view::converse;

/// R1 ; R2 dans un magasin général.
pub fn compose<A, B, C, R1, R2>(r1: &R1, r2: &R2) -> AnyRelation<A, C>
where
    A: Element,
    B: Element,
    C: Element,
    R1: Relation<A, B> + ?Sized,
    R2: Relation<B, C> + ?Sized,
{
    compose_with(r1, r2, false)
}

/// R1 ; R2, avec choix du magasin de sortie si `optimize`.
pub fn compose_with<A, B, C, R1, R2>(r1: &R1, r2: &R2, optimize: bool) -> AnyRelation<A, C>
where
    A: Element,
    B: Element,
    C: Element,
    R1: Relation<A, B> + ?Sized,
    R2: Relation<B, C> + ?Sized,
{
    let shape = if optimize {
        Shape::for_composition(Shape::of(r1), Shape::of(r2))
    } else {
        Shape::ManyToMany
    };
    debug!(%shape, left = r1.size(), right = r2.size(), "compose");

    let mut out = AnyRelation::with_shape(shape, 0, r1.domain_type(), r2.range_type());
    for a in r1.keys() {
        for b in r1.values_of(a) {
            for c in r2.values_of(b) {
                out.put(a.clone(), c.clone());
            }
        }
    }
    out
}

/// Noyau : deux clés de R qui partagent au moins une valeur.
pub fn kernel<A, B, R>(r: &R) -> AnyRelation<A, A>
where
    A: Element,
    B: Element,
    R: Relation<A, B> + ?Sized,
{
    compose(r, &converse(r))
}

/// Image : deux valeurs de R qui partagent au moins une clé.
pub fn image<A, B, R>(r: &R) -> AnyRelation<B, B>
where
    A: Element,
    B: Element,
    R: Relation<A, B> + ?Sized,
{
    compose(&converse(r), r)
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::Domain;
    use crate::core::empty::EmptyRelation;
    use crate::store::{BijectiveRelation, FunctionalRelation, MultiRelation};

    /// R1 = {(a,0),(a,1),(a,2),(b,1),(c,2)}
    fn r1() -> MultiRelation<char, i32> {
        [('a', 0), ('a', 1), ('a', 2), ('b', 1), ('c', 2)].into_iter().collect()
    }

    /// R2 = {(0,"a"),(1,"a"),(1,"b"),(3,"x")}
    fn r2() -> MultiRelation<i32, &'static str> {
        [(0, "a"), (1, "a"), (1, "b"), (3, "x")].into_iter().collect()
    }

    #[test]
    fn test_compose_scenario() {
        let expected: MultiRelation<char, &str> =
            [('a', "a"), ('a', "b"), ('b', "a"), ('b', "b")].into_iter().collect();
        let c = compose(&r1(), &r2());
        assert_eq!(c, expected);
        assert_eq!(c.shape(), Shape::ManyToMany);
    }

    #[test]
    fn test_kernel_scenario() {
        let expected: MultiRelation<char, char> = [
            ('a', 'a'),
            ('a', 'b'),
            ('a', 'c'),
            ('b', 'a'),
            ('b', 'b'),
            ('c', 'a'),
            ('c', 'c'),
        ]
        .into_iter()
        .collect();
        assert_eq!(kernel(&r1()), expected);
    }

    #[test]
    fn test_image_scenario() {
        let image = image(&r1());
        assert_eq!(image.size(), 9);
        for x in 0..3 {
            for y in 0..3 {
                assert!(image.contains(&x, &y));
            }
        }
    }

    #[test]
    fn test_empty_operands() {
        let empty: EmptyRelation<char, i32> = EmptyRelation::new();
        assert!(compose(&empty, &r2()).is_empty());
        assert!(compose(&r1(), &EmptyRelation::<i32, &str>::new()).is_empty());
        assert!(kernel(&empty).is_empty());
        assert!(image(&empty).is_empty());
    }

    #[test]
    fn test_optimized_shapes() {
        let f: FunctionalRelation<i32, i32> = [(1, 10), (2, 10)].into_iter().collect();
        let g: FunctionalRelation<i32, i32> = [(10, 100)].into_iter().collect();
        let fg = compose_with(&f, &g, true);
        assert_eq!(fg.shape(), Shape::Simple);
        assert_eq!(fg, compose(&f, &g));

        let b: BijectiveRelation<i32, i32> = [(1, 2), (3, 4)].into_iter().collect();
        let bb = compose_with(&b, &b, true);
        assert_eq!(bb.shape(), Shape::OneToOne);
        assert!(bb.is_empty());

        // converses de fonctions : injectives
        let fc = converse(&f);
        let gc = converse(&g);
        let inj = compose_with(&gc, &fc, true);
        assert_eq!(inj.shape(), Shape::Injective);
        assert_eq!(inj.values_of(&100).len(), 2);
        assert_eq!(inj, compose(&gc, &fc));

        let m = r1();
        assert_eq!(compose_with(&m, &r2(), true).shape(), Shape::ManyToMany);
    }

    #[test]
    fn test_compose_keeps_outer_domains() {
        let mut f = FunctionalRelation::with_domains(Domain::finite([1]), Domain::default());
        f.put(1, 2);
        let g: MultiRelation<i32, i32> = [(2, 3)].into_iter().collect();
        assert!(compose(&f, &g).is_entire());
    }
}
