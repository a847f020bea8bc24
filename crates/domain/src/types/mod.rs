//! Closed vocabularies shared by the entity, the validator and the query engine.

mod profession;
mod race;

pub use profession::Profession;
pub use race::Race;
