// =============================================================================
// CARDINAL — La taille (éventuellement infinie) d'un ensemble
// =============================================================================
//
// Un domaine conceptuel peut être fini (les jours de la semaine), infini
// dénombrable (les entiers naturels, ℵ0) ou infini non dénombrable (les
// réels, c). Le moteur n'énumère jamais un domaine : il se contente de
// comparer des cardinalités pour savoir si un ensemble observé est complet.
//
// =============================================================================

use std::fmt;

use super::error::{RelationError, Result};

/// Cardinalité d'un ensemble.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Cardinal {
    /// Ensemble fini de `n` éléments
    Finite(usize),
    /// Infini dénombrable (ℵ0)
    Naturals,
    /// Infini non dénombrable (c)
    Reals,
}

impl Cardinal {
    /// Construit une cardinalité finie à partir d'un compte.
    ///
    /// Un compte négatif est une violation de précondition, pas une absence.
    pub fn of(value: i64) -> Result<Cardinal> {
        if value < 0 {
            return Err(RelationError::NegativeCardinality(value));
        }
        // Plafonné à la taille maximale représentable
        Ok(Cardinal::Finite(usize::try_from(value).unwrap_or(usize::MAX)))
    }

    /// Cardinalité des entiers naturels.
    pub fn of_naturals() -> Cardinal {
        Cardinal::Naturals
    }

    /// Cardinalité des réels.
    pub fn of_reals() -> Cardinal {
        Cardinal::Reals
    }

    /// La valeur numérique, si elle existe.
    pub fn value(&self) -> Result<usize> {
        match self {
            Cardinal::Finite(n) => Ok(*n),
            infinite => Err(RelationError::InfiniteCardinality(*infinite)),
        }
    }

    pub fn is_finite(&self) -> bool {
        matches!(self, Cardinal::Finite(_))
    }

    pub fn is_countable(&self) -> bool {
        !matches!(self, Cardinal::Reals)
    }
}

impl From<usize> for Cardinal {
    fn from(n: usize) -> Self {
        Cardinal::Finite(n)
    }
}

impl fmt::Display for Cardinal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cardinal::Finite(n) => write!(f, "{}", n),
            Cardinal::Naturals => write!(f, "N0"),
            Cardinal::Reals => write!(f, "C"),
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finite() {
        let c = Cardinal::of(4).unwrap();
        assert!(c.is_finite());
        assert!(c.is_countable());
        assert_eq!(c.value(), Ok(4));
        assert_eq!(c.to_string(), "4");
    }

    #[test]
    fn test_negative_rejected() {
        assert_eq!(Cardinal::of(-1), Err(RelationError::NegativeCardinality(-1)));
    }

    #[test]
    fn test_infinite_has_no_value() {
        let n0 = Cardinal::of_naturals();
        assert!(!n0.is_finite());
        assert!(n0.is_countable());
        assert_eq!(n0.value(), Err(RelationError::InfiniteCardinality(Cardinal::Naturals)));

        let c = Cardinal::of_reals();
        assert!(!c.is_countable());
        assert_eq!(c.to_string(), "C");
    }
}
