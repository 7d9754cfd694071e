// =============================================================================
// SETS — Algèbre d'ensembles élémentaire
// =============================================================================
//
// Petits utilitaires sur des HashSet possédés : union, différence,
// intersection, singleton. Union, différence et intersection sont offertes
// aux utilisateurs pour combiner les ensembles rendus par les opérations
// groupées ; le moteur lui-même n'utilise que `singleton` (magasins
// mono-valués) et `absorb` (`remove_keys`, `remove_values`).
//
// =============================================================================

use std::collections::HashSet;

use super::set_view::Element;

/// s1 ∪ s2
pub fn union<T: Element>(s1: &HashSet<T>, s2: &HashSet<T>) -> HashSet<T> {
    let mut set = s1.clone();
    set.extend(s2.iter().cloned());
    set
}

/// s1 \ s2
pub fn difference<T: Element>(s1: &HashSet<T>, s2: &HashSet<T>) -> HashSet<T> {
    s1.iter().filter(|e| !s2.contains(*e)).cloned().collect()
}

/// s1 ∩ s2
pub fn intersection<T: Element>(s1: &HashSet<T>, s2: &HashSet<T>) -> HashSet<T> {
    s1.iter().filter(|e| s2.contains(*e)).cloned().collect()
}

/// Ensemble possédé d'un seul élément.
pub fn singleton<T: Element>(element: T) -> HashSet<T> {
    let mut set = HashSet::with_capacity(1);
    set.insert(element);
    set
}

/// Réunit plusieurs ensembles dans un accumulateur.
pub(crate) fn absorb<T: Element, I>(into: &mut HashSet<T>, parts: I)
where
    I: IntoIterator<Item = HashSet<T>>,
{
    for part in parts {
        if into.is_empty() {
            *into = part;
        } else {
            into.extend(part);
        }
    }
}
