// =============================================================================
// DIVIDE — Divisions (approchées) et implication
// =============================================================================
//
// Division à droite  R1 / R2   (R1 : K → A, R2 : K → B, résultat B → A)
//   (b, a) ⇔ b est une valeur de R2, a une valeur de R1,
//            et ∀ k. (k, b) ∈ R2 ⇒ (k, a) ∈ R1
//
// Division à gauche  R1 \ R2   (R1 : A → V, R2 : B → V, résultat B → A)
//   (b, a) ⇔ a est une clé de R1, b une clé de R2,
//            et ∀ v. (a, v) ∈ R1 ⇒ (b, v) ∈ R2
//
// Implication R1 ⇒ R2 : les flèches de R1 également présentes dans R2.
//
// Coût : produit des tailles des deux opérandes dans le pire cas.
//
// =============================================================================

use tracing::debug;

use crate::core::relation::{MutableRelation, Relation};
use crate::core::set_view::Element;
use crate::store::MultiRelation;

/// R1 / R2
pub fn divide<K, A, B, R1, R2>(r1: &R1, r2: &R2) -> MultiRelation<B, A>
where
    K: Element,
    A: Element,
    B: Element,
    R1: Relation<K, A> + ?Sized,
    R2: Relation<K, B> + ?Sized,
{
    debug!(left = r1.size(), right = r2.size(), "divide");
    let mut out = MultiRelation::with_domains(r2.range_type(), r1.range_type());
    for b in r2.values() {
        for a in r1.values() {
            if r2.keys_of(b).iter().all(|k| r1.contains(k, a)) {
                out.put(b.clone(), a.clone());
            }
        }
    }
    out
}

/// R1 \ R2
pub fn divide_left<A, B, V, R1, R2>(r1: &R1, r2: &R2) -> MultiRelation<B, A>
where
    A: Element,
    B: Element,
    V: Element,
    R1: Relation<A, V> + ?Sized,
    R2: Relation<B, V> + ?Sized,
{
    debug!(left = r1.size(), right = r2.size(), "divide_left");
    let mut out = MultiRelation::with_domains(r2.domain_type(), r1.domain_type());
    for a in r1.keys() {
        for b in r2.keys() {
            if r1.values_of(a).iter().all(|v| r2.contains(b, v)) {
                out.put(b.clone(), a.clone());
            }
        }
    }
    out
}

/// R1 ⇒ R2
pub fn imply<A, B, R1, R2>(r1: &R1, r2: &R2) -> MultiRelation<A, B>
where
    A: Element,
    B: Element,
    R1: Relation<A, B> + ?Sized,
    R2: Relation<A, B> + ?Sized,
{
    let mut out = MultiRelation::with_domains(r1.domain_type(), r1.range_type());
    for pair in r1.iter().filter(|p| r2.contains(p.first(), p.second())) {
        let (key, value) = pair.cloned().into_tuple();
        out.put(key, value);
    }
    out
}
