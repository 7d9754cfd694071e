// =============================================================================
// CORE — Contrats et types valeurs du moteur relationnel
// =============================================================================
//
// Ce module ne contient AUCUN magasin concret : uniquement ce que tous les
// magasins et toutes les vues partagent.
//
// Architecture :
//   error     → les erreurs typées (RelationError)
//   cardinal  → la taille, finie ou infinie, d'un ensemble
//   pair      → une flèche (a, b)
//   set_view  → projection en lecture seule d'un ensemble (sans copie)
//   sets      → union, différence, intersection
//   domain    → l'oracle de complétude d'un type (entire / surjective)
//   relation  → les traits Relation / MutableRelation + algorithmes partagés
//   cursor    → parcours avec suppression de l'élément courant
//   empty     → la relation vide ⊥
//
// =============================================================================

pub mod error;
pub mod cardinal;
pub mod pair;
pub mod set_view;
pub mod sets;
pub mod domain;
pub mod relation;
pub mod cursor;
pub mod empty;

pub use cardinal::Cardinal;
pub use cursor::Cursor;
pub use domain::{Domain, DomainEnumerator};
pub use empty::EmptyRelation;
pub use error::RelationError;
pub use pair::Pair;
pub use relation::{MutableRelation, Relation};
pub use set_view::{Element, SetView};
