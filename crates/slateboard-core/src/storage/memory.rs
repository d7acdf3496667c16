//! In-memory session storage.

use std::collections::HashMap;
use std::sync::RwLock;

use super::{BoxFuture, Storage, StorageError, StorageResult};
use crate::board::Board;

/// In-memory storage for testing and ephemeral use.
#[derive(Default)]
pub struct MemoryStorage {
    sessions: RwLock<HashMap<String, Board>>,
}

impl MemoryStorage {
    /// Create a new empty memory storage.
    pub fn new() -> Self {
        Self::default()
    }
}

impl Storage for MemoryStorage {
    fn save(&self, id: &str, board: &Board) -> BoxFuture<'_, StorageResult<()>> {
        let id = id.to_string();
        let board = board.clone();
        Box::pin(async move {
            let mut sessions = self
                .sessions
                .write()
                .map_err(|e| StorageError::Other(format!("lock error: {}", e)))?;
            sessions.insert(id, board);
            Ok(())
        })
    }

    fn load(&self, id: &str) -> BoxFuture<'_, StorageResult<Board>> {
        let id = id.to_string();
        Box::pin(async move {
            let sessions = self
                .sessions
                .read()
                .map_err(|e| StorageError::Other(format!("lock error: {}", e)))?;
            sessions
                .get(&id)
                .cloned()
                .ok_or_else(|| StorageError::NotFound(id))
        })
    }

    fn delete(&self, id: &str) -> BoxFuture<'_, StorageResult<()>> {
        let id = id.to_string();
        Box::pin(async move {
            let mut sessions = self
                .sessions
                .write()
                .map_err(|e| StorageError::Other(format!("lock error: {}", e)))?;
            sessions.remove(&id);
            Ok(())
        })
    }

    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>> {
        Box::pin(async move {
            let sessions = self
                .sessions
                .read()
                .map_err(|e| StorageError::Other(format!("lock error: {}", e)))?;
            Ok(sessions.keys().cloned().collect())
        })
    }

    fn exists(&self, id: &str) -> BoxFuture<'_, StorageResult<bool>> {
        let id = id.to_string();
        Box::pin(async move {
            let sessions = self
                .sessions
                .read()
                .map_err(|e| StorageError::Other(format!("lock error: {}", e)))?;
            Ok(sessions.contains_key(&id))
        })
    }
}
