//! Animal registry entities.

pub mod model;
pub mod taxonomy;

pub use model::{Animal, NewAnimal};
pub use taxonomy::TaxonomicRank;
