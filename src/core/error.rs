// =============================================================================
// ERROR — Les erreurs typées du moteur relationnel
// =============================================================================
//
// L'ABSENCE n'est jamais une erreur : une clé inconnue donne `None`, un
// ensemble vide ou `false`. Les erreurs ci-dessous sont réservées aux
// violations de contrat :
//   - une cardinalité construite à partir d'un compte négatif
//   - la valeur finie d'une cardinalité infinie
//   - une écriture à travers une vue en lecture seule
//   - un curseur utilisé hors de son protocole (remove avant next, etc.)
//
// Chaque erreur est locale à l'appel fautif : aucune opération sur une paire
// ne laisse la structure à moitié modifiée.
//
// =============================================================================

use thiserror::Error;

use super::cardinal::Cardinal;

/// Erreur du moteur relationnel.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RelationError {
    /// Une cardinalité ne peut pas être négative.
    #[error("cardinalité négative : {0}")]
    NegativeCardinality(i64),

    /// La cardinalité est infinie : pas de valeur numérique.
    #[error("cardinalité infinie ({0}) : aucune valeur finie")]
    InfiniteCardinality(Cardinal),

    /// Écriture sur une structure en lecture seule.
    #[error("opération non supportée : {0}")]
    Unsupported(&'static str),

    /// `remove` appelé sans élément courant (avant `next`, deux fois de
    /// suite, ou après épuisement du curseur).
    #[error("le curseur n'a pas d'élément courant")]
    NoCurrentElement,

    /// `next` appelé alors que le curseur est épuisé.
    #[error("le curseur est épuisé")]
    Exhausted,
}

/// Alias pratique pour les opérations faillibles du moteur.
pub type Result<T> = std::result::Result<T, RelationError>;

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            RelationError::NegativeCardinality(-3).to_string(),
            "cardinalité négative : -3"
        );
        assert_eq!(
            RelationError::InfiniteCardinality(Cardinal::Naturals).to_string(),
            "cardinalité infinie (N0) : aucune valeur finie"
        );
        assert!(RelationError::Unsupported("vue immuable")
            .to_string()
            .contains("vue immuable"));
    }
}
