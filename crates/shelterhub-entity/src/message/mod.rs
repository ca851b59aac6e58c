//! Direct message entities.

pub mod model;

pub use model::{Message, NewMessage};
