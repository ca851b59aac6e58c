//! Token store implementations.
//!
//! Both implement [`shelterhub_core::traits::TokenStore`]; the file-backed
//! store is the durable default, the in-memory store serves ephemeral
//! embedding and tests.

pub mod file;
pub mod memory;

pub use file::FileTokenStore;
pub use memory::MemoryTokenStore;
