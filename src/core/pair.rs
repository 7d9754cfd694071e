// =============================================================================
// PAIR — Une flèche (a, b) d'une relation
// =============================================================================
//
// Une relation est un ensemble de flèches. Pour l'énumérer, on produit des
// `Pair` : le plus souvent des paires de RÉFÉRENCES `Pair<&A, &B>` qui
// pointent dans les index du magasin, et des paires possédées `Pair<A, B>`
// quand il faut les conserver (curseur, tests).
//
// =============================================================================

use std::fmt;

/// Paire ordonnée immuable (first, second), égalité structurelle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pair<A, B> {
    first: A,
    second: B,
}

impl<A, B> Pair<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Pair { first, second }
    }

    pub fn first(&self) -> &A {
        &self.first
    }

    pub fn second(&self) -> &B {
        &self.second
    }

    /// Échange les rôles : (a, b) devient (b, a).
    pub fn swap(self) -> Pair<B, A> {
        Pair { first: self.second, second: self.first }
    }

    pub fn into_tuple(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A: Clone, B: Clone> Pair<&A, &B> {
    /// Copie possédée d'une paire de références.
    pub fn cloned(&self) -> Pair<A, B> {
        Pair::new(self.first.clone(), self.second.clone())
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Pair::new(first, second)
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Pair<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.first, self.second)
    }
}
