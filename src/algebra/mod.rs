// =============================================================================
// ALGEBRA — Les opérateurs de l'algèbre des relations
// =============================================================================
//
// Fonctions sans état : chaque opérateur lit ses opérandes à travers le
// trait `Relation` (magasin, vue ou référence, peu importe) et construit
// une NOUVELLE relation.
//
//   compose   → R1 ; R2, noyau, image
//   divide    → R1 / R2, R1 \ R2, R1 ⇒ R2
//   build     → ⊤, identité, converse matérialisée, copie immuable
//
// Un opérande « absent » se passe sous la forme d'une `EmptyRelation`.
//
// =============================================================================

pub mod compose;
pub mod divide;
pub mod build;

pub use build::{converse_copy, identity, immutable, top, top_on};
pub use compose::{compose, compose_with, image, kernel};
pub use divide::{divide, divide_left, imply};
