// =============================================================================
// CURSOR — Parcours d'une relation avec suppression de l'élément courant
// =============================================================================
//
// Un itérateur Rust ne peut pas modifier la collection qu'il parcourt. Le
// curseur rend ce protocole EXPLICITE :
//
//   advance()  → produit la flèche suivante et la mémorise comme « courante »
//   remove()   → retire la flèche courante de la relation, avec exactement
//                la même comptabilité qu'un `remove(a, b)` ciblé
//
// ÉTATS :
//   aucun élément produit      → remove() = Err(NoCurrentElement)
//   élément courant            → remove() = Ok, l'élément n'est plus courant
//   élément déjà retiré        → remove() = Err(NoCurrentElement)
//   épuisé                     → advance() = Err(Exhausted)
//   curseur en lecture seule   → remove() = Err(Unsupported)
//
// Le curseur emprunte la relation de façon exclusive : aucune autre
// modification n'est possible pendant le parcours. L'ordre de parcours est
// figé à la création (clé par clé, puis valeurs de chaque clé).
//
// =============================================================================

use std::fmt;

use super::error::{RelationError, Result};
use super::pair::Pair;
use super::relation::{MutableRelation, Relation};
use super::set_view::Element;

/// Curseur sur les flèches d'une relation.
pub struct Cursor<'a, A, B> {
    pending: std::vec::IntoIter<Pair<A, B>>,
    current: Option<Pair<A, B>>,
    owner: Option<&'a mut (dyn MutableRelation<A, B> + 'a)>,
}

impl<'a, A: Element, B: Element> Cursor<'a, A, B> {
    /// Curseur capable de retirer des flèches de `relation`.
    pub fn new(relation: &'a mut (dyn MutableRelation<A, B> + 'a)) -> Self {
        let pending: Vec<Pair<A, B>> = relation.iter().map(|p| p.cloned()).collect();
        Cursor {
            pending: pending.into_iter(),
            current: None,
            owner: Some(relation),
        }
    }

    /// Curseur qui refuse toute suppression.
    pub fn read_only<R>(relation: &R) -> Self
    where
        R: Relation<A, B> + ?Sized,
    {
        let pending: Vec<Pair<A, B>> = relation.iter().map(|p| p.cloned()).collect();
        Cursor {
            pending: pending.into_iter(),
            current: None,
            owner: None,
        }
    }

    pub fn has_next(&self) -> bool {
        self.pending.len() > 0
    }

    /// Avance d'une flèche.
    pub fn advance(&mut self) -> Result<Pair<A, B>> {
        match self.pending.next() {
            Some(pair) => {
                self.current = Some(pair.clone());
                Ok(pair)
            }
            None => {
                self.current = None;
                Err(RelationError::Exhausted)
            }
        }
    }

    /// Retire de la relation la dernière flèche produite.
    pub fn remove(&mut self) -> Result<Pair<A, B>> {
        let Some(owner) = self.owner.as_deref_mut() else {
            return Err(RelationError::Unsupported("curseur en lecture seule"));
        };
        let current = self.current.take().ok_or(RelationError::NoCurrentElement)?;
        owner.remove(current.first(), current.second());
        Ok(current)
    }

    pub fn is_read_only(&self) -> bool {
        self.owner.is_none()
    }
}

impl<'a, A: Element, B: Element> Iterator for Cursor<'a, A, B> {
    type Item = Pair<A, B>;

    fn next(&mut self) -> Option<Pair<A, B>> {
        self.advance().ok()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.pending.size_hint()
    }
}

impl<'a, A, B> fmt::Debug for Cursor<'a, A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("remaining", &self.pending.len())
            .field("has_current", &self.current.is_some())
            .field("read_only", &self.owner.is_none())
            .finish()
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MultiRelation;

    fn two_arrows() -> MultiRelation<i32, i32> {
        let mut r = MultiRelation::new();
        r.put(1, 10);
        r.put(2, 10);
        r
    }

    #[test]
    fn test_remove_before_advance() {
        let mut r = two_arrows();
        let mut cursor = r.cursor();
        assert_eq!(cursor.remove(), Err(RelationError::NoCurrentElement));
    }

    #[test]
    fn test_remove_twice() {
        let mut r = two_arrows();
        let mut cursor = r.cursor();
        cursor.advance().unwrap();
        assert!(cursor.remove().is_ok());
        assert_eq!(cursor.remove(), Err(RelationError::NoCurrentElement));
    }

    #[test]
    fn test_exhausted() {
        let mut r = two_arrows();
        let mut cursor = r.cursor();
        assert!(cursor.advance().is_ok());
        assert!(cursor.advance().is_ok());
        assert!(!cursor.has_next());
        assert_eq!(cursor.advance(), Err(RelationError::Exhausted));
        assert_eq!(cursor.remove(), Err(RelationError::NoCurrentElement));
    }

    #[test]
    fn test_remove_first_yielded() {
        let mut r = two_arrows();
        let removed = {
            let mut cursor = r.cursor();
            cursor.advance().unwrap();
            cursor.remove().unwrap()
        };
        assert_eq!(r.size(), 1);
        assert!(!r.contains(removed.first(), removed.second()));
        // La valeur 10 garde une clé : son seau est décrémenté, pas supprimé
        assert_eq!(r.keys_of(&10).len(), 1);
        assert!(r.is_injective());
    }

    #[test]
    fn test_remove_drops_emptied_buckets() {
        // aucune clé ni valeur partagée : chaque seau disparaît avec sa flèche
        let mut r: MultiRelation<i32, i32> = [(1, 10), (2, 20)].into_iter().collect();
        let removed = {
            let mut cursor = r.cursor();
            cursor.advance().unwrap();
            cursor.remove().unwrap()
        };
        assert_eq!(r.size(), 1);
        assert!(!r.contains_key(removed.first()));
        assert!(!r.contains_value(removed.second()));
        assert_eq!(r.keys().len(), 1);
        assert_eq!(r.values().len(), 1);
    }

    #[test]
    fn test_read_only_cursor() {
        let r = two_arrows();
        let mut cursor = Cursor::read_only(&r);
        assert!(cursor.is_read_only());
        cursor.advance().unwrap();
        assert_eq!(
            cursor.remove(),
            Err(RelationError::Unsupported("curseur en lecture seule"))
        );
        assert_eq!(cursor.count(), 1);
    }
}
