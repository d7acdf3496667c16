//! Session persistence backends.

mod memory;

#[cfg(not(target_arch = "wasm32"))]
mod file;

pub use memory::MemoryStorage;

#[cfg(not(target_arch = "wasm32"))]
pub use file::FileStorage;

use std::future::Future;
use std::pin::Pin;

use thiserror::Error;

use crate::board::Board;

/// Storage errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("session not found: {0}")]
    NotFound(String),
    #[error("serialization error: {0}")]
    Serialization(String),
    #[error("io error: {0}")]
    Io(String),
    #[error("storage error: {0}")]
    Other(String),
}

/// Result type for storage operations.
pub type StorageResult<T> = Result<T, StorageError>;

/// Boxed future for async operations (compatible with WASM).
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// A persistence backend for whiteboard sessions.
///
/// Implementations may keep sessions in memory, on the filesystem, or
/// behind a network service.
///
/// Note: on native platforms implementations must be Send + Sync. On
/// WASM the bounds are relaxed since it's single-threaded.
#[cfg(not(target_arch = "wasm32"))]
pub trait Storage: Send + Sync {
    /// Persist a session under the given id.
    fn save(&self, id: &str, board: &Board) -> BoxFuture<'_, StorageResult<()>>;

    /// Load a previously saved session.
    fn load(&self, id: &str) -> BoxFuture<'_, StorageResult<Board>>;

    /// Delete a session.
    fn delete(&self, id: &str) -> BoxFuture<'_, StorageResult<()>>;

    /// List all saved session ids.
    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>>;

    /// Check whether a session exists.
    fn exists(&self, id: &str) -> BoxFuture<'_, StorageResult<bool>>;
}

/// WASM version of [`Storage`] without the Send + Sync bounds.
#[cfg(target_arch = "wasm32")]
pub trait Storage {
    /// Persist a session under the given id.
    fn save(&self, id: &str, board: &Board) -> BoxFuture<'_, StorageResult<()>>;

    /// Load a previously saved session.
    fn load(&self, id: &str) -> BoxFuture<'_, StorageResult<Board>>;

    /// Delete a session.
    fn delete(&self, id: &str) -> BoxFuture<'_, StorageResult<()>>;

    /// List all saved session ids.
    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>>;

    /// Check whether a session exists.
    fn exists(&self, id: &str) -> BoxFuture<'_, StorageResult<bool>>;
}
