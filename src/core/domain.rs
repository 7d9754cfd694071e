// =============================================================================
// DOMAIN — Le type conceptuel d'un côté d'une relation
// =============================================================================
//
// Une relation R : A → B a un DOMAINE (le type A) et une IMAGE (le type B).
// Pour savoir si R est TOTALE (« entire ») ou SURJECTIVE, il faut savoir si
// les clés (resp. valeurs) observées couvrent TOUT le type conceptuel.
//
// Le moteur ne sait pas énumérer un type : il délègue cette question à un
// « énumérateur » opaque, fourni par l'utilisateur.
//
//   Domain::default()          → domaine supposé infini, jamais complet
//   Domain::finite([..])       → domaine fini explicite
//   Domain::new(enumerateur)   → n'importe quelle implémentation
//
// Les domaines sont partagés (Rc) : un magasin, sa converse et tous les
// résultats de l'algèbre qui en dérivent regardent le même énumérateur.
//
// =============================================================================

use std::collections::HashSet;
use std::fmt;
use std::rc::Rc;

use super::cardinal::Cardinal;
use super::set_view::{Element, SetView};

/// Oracle de complétude d'un type conceptuel.
pub trait DomainEnumerator<T> {
    /// L'ensemble observé couvre-t-il tout le domaine ?
    fn is_entire(&self, observed: &SetView<'_, T>) -> bool;

    /// Taille du domaine conceptuel.
    fn cardinality(&self) -> Cardinal;
}

/// Énumérateur par défaut : le domaine est supposé infini dénombrable.
#[derive(Debug, Clone, Copy, Default)]
pub struct Unbounded;

impl<T> DomainEnumerator<T> for Unbounded {
    fn is_entire(&self, _observed: &SetView<'_, T>) -> bool {
        false
    }

    fn cardinality(&self) -> Cardinal {
        Cardinal::Naturals
    }
}

/// Domaine fini, donné en extension.
#[derive(Debug, Clone)]
pub struct FiniteEnumerator<T> {
    elements: HashSet<T>,
}

impl<T: Element> DomainEnumerator<T> for FiniteEnumerator<T> {
    fn is_entire(&self, observed: &SetView<'_, T>) -> bool {
        observed.len() >= self.elements.len()
            && self.elements.iter().all(|e| observed.contains(e))
    }

    fn cardinality(&self) -> Cardinal {
        Cardinal::Finite(self.elements.len())
    }
}

/// Le type conceptuel d'un côté d'une relation.
pub struct Domain<T> {
    enumerator: Rc<dyn DomainEnumerator<T>>,
}

impl<T> Domain<T> {
    pub fn new<E>(enumerator: E) -> Self
    where
        E: DomainEnumerator<T> + 'static,
    {
        Domain { enumerator: Rc::new(enumerator) }
    }

    /// L'ensemble observé est-il le domaine tout entier ?
    pub fn is_entire(&self, observed: &SetView<'_, T>) -> bool {
        self.enumerator.is_entire(observed)
    }

    pub fn cardinality(&self) -> Cardinal {
        self.enumerator.cardinality()
    }

    pub fn is_finite(&self) -> bool {
        self.cardinality().is_finite()
    }

    pub fn is_countable(&self) -> bool {
        self.cardinality().is_countable()
    }

    /// Deux domaines sont identiques s'ils partagent le même énumérateur.
    pub fn same_as(&self, other: &Domain<T>) -> bool {
        Rc::ptr_eq(&self.enumerator, &other.enumerator)
    }
}

impl<T: Element + 'static> Domain<T> {
    /// Domaine fini donné par la liste de ses éléments.
    pub fn finite<I>(elements: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        Domain::new(FiniteEnumerator { elements: elements.into_iter().collect() })
    }
}

impl<T> Default for Domain<T> {
    fn default() -> Self {
        Domain { enumerator: Rc::new(Unbounded) }
    }
}

impl<T> Clone for Domain<T> {
    fn clone(&self) -> Self {
        Domain { enumerator: Rc::clone(&self.enumerator) }
    }
}

impl<T> fmt::Debug for Domain<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Domain({})", self.cardinality())
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_domain_never_entire() {
        let dom: Domain<i32> = Domain::default();
        let all = HashSet::from([1, 2, 3]);
        assert!(!dom.is_entire(&SetView::of_bucket(Some(&all))));
        assert!(!dom.is_finite());
        assert!(dom.is_countable());
    }

    #[test]
    fn test_finite_domain() {
        let dom = Domain::finite(["lun", "mar"]);
        let partial = HashSet::from(["lun"]);
        let full = HashSet::from(["lun", "mar", "mer"]);
        assert!(!dom.is_entire(&SetView::of_bucket(Some(&partial))));
        assert!(dom.is_entire(&SetView::of_bucket(Some(&full))));
        assert_eq!(dom.cardinality(), Cardinal::Finite(2));
    }

    #[test]
    fn test_shared_enumerator() {
        let dom: Domain<u8> = Domain::default();
        let copy = dom.clone();
        assert!(dom.same_as(&copy));
        assert!(!dom.same_as(&Domain::default()));
    }
}
