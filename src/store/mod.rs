// =============================================================================
// STORE — Les magasins concrets de relations
// =============================================================================
//
//   multi       → plusieurs-à-plusieurs, deux index de seaux + compteurs
//   functional  → simple par construction (clé → une valeur)
//   bijective   → simple ET injective (évincement sur conflit)
//   shape       → la forme d'une relation (simple ? injective ?)
//   any         → l'un des magasins ci-dessus, choisi selon la forme
//
// =============================================================================

pub mod multi;
pub mod functional;
pub mod bijective;
pub mod shape;
pub mod any;

pub use any::AnyRelation;
pub use bijective::BijectiveRelation;
pub use functional::FunctionalRelation;
pub use multi::MultiRelation;
pub use shape::Shape;
