//! Swappable key-value backends.
//!
//! The contract is deliberately small: a key maps to one serialized block,
//! `get` returns the whole block and `set` replaces it.

mod file;
mod memory;
mod sqlite;

use async_trait::async_trait;

use crate::error::DbError;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use sqlite::SqliteStore;

#[async_trait]
pub trait KeyValueStore: Send + Sync {
    /// The stored block for `key`, or `None` if it was never written.
    async fn get(&self, key: &str) -> Result<Option<String>, DbError>;

    /// Replace the block for `key`.
    async fn set(&self, key: &str, value: &str) -> Result<(), DbError>;

    /// Short backend name for logs and health output.
    fn backend_name(&self) -> &'static str;
}
