//! Internal message-board entities.

pub mod board;
pub mod model;

pub use board::Board;
pub use model::{NewNote, Note};
