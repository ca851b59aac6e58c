//! Public news feed entities.

pub mod model;

pub use model::{NewNews, News};
