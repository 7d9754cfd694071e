// =============================================================================
// CATREL — Algèbre des relations binaires en Rust
// =============================================================================
//
// Une relation binaire R : A → B est un ensemble de flèches (a, b), munie
// de deux index (clé → valeurs, valeur → clés) et de quatre propriétés
// structurelles : simple, injective, totale, surjective.
//
// Architecture :
//   core/     → Contrats (Relation, MutableRelation) et types valeurs
//   store/    → Les magasins concrets (général, fonctionnel, bijectif)
//   view/     → Vues sans copie (converse, lecture seule)
//   algebra/  → Les opérateurs (composition, division, noyau, image...)
//
// Concepts fondamentaux :
//   Converse    = R° : les rôles clé / valeur échangés
//   Composition = R1 ; R2 : chaîner deux relations par un type commun
//   Noyau       = R ; R°  : deux clés partageant une valeur
//   Image       = R° ; R  : deux valeurs partageant une clé
//
// =============================================================================

pub mod core;
pub mod store;
pub mod view;
pub mod algebra;
