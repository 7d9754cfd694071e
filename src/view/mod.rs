// =============================================================================
// VIEW — Vues sans copie sur une relation existante
// =============================================================================
//
//   converse   → R° : les rôles clé / valeur échangés (lecture ou écriture)
//   immutable  → R en lecture seule, taille et complétude figées
//
// Une vue emprunte (ou possède) la relation qu'elle enveloppe : le
// vérificateur d'emprunts garantit qu'elle ne survit pas à son propriétaire.
//
// =============================================================================

pub mod converse;
pub mod immutable;

pub use converse::{converse, converse_mut, ConverseView};
pub use immutable::ImmutableView;
