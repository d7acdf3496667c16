//! File-based session storage for native platforms.

use std::fs;
use std::path::PathBuf;

use super::{BoxFuture, Storage, StorageError, StorageResult};
use crate::board::Board;

/// Stores sessions as JSON files in a directory.
pub struct FileStorage {
    base_path: PathBuf,
}

impl FileStorage {
    /// Create a new file storage with the given base directory.
    ///
    /// Creates the directory if it doesn't exist.
    pub fn new(base_path: PathBuf) -> StorageResult<Self> {
        if !base_path.exists() {
            fs::create_dir_all(&base_path).map_err(|e| {
                StorageError::Io(format!("failed to create storage directory: {}", e))
            })?;
        }
        Ok(Self { base_path })
    }

    /// Create file storage in the platform's local data directory,
    /// under `slateboard/sessions`.
    pub fn default_location() -> StorageResult<Self> {
        let base = dirs::data_local_dir()
            .or_else(dirs::home_dir)
            .ok_or_else(|| StorageError::Io("could not determine home directory".to_string()))?;

        let path = base.join("slateboard").join("sessions");
        Self::new(path)
    }

    /// Get the file path for a session id.
    fn session_path(&self, id: &str) -> PathBuf {
        // Sanitize the id so it is safe as a filename
        let safe_id: String = id
            .chars()
            .map(|c| {
                if c.is_alphanumeric() || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        self.base_path.join(format!("{}.json", safe_id))
    }

    pub fn base_path(&self) -> &PathBuf {
        &self.base_path
    }
}

impl Storage for FileStorage {
    fn save(&self, id: &str, board: &Board) -> BoxFuture<'_, StorageResult<()>> {
        let path = self.session_path(id);
        let json = match serde_json::to_string(board) {
            Ok(j) => j,
            Err(e) => {
                return Box::pin(async move { Err(StorageError::Serialization(e.to_string())) });
            }
        };

        Box::pin(async move {
            fs::write(&path, json).map_err(|e| {
                StorageError::Io(format!("failed to write {}: {}", path.display(), e))
            })?;
            log::debug!("saved session to {}", path.display());
            Ok(())
        })
    }

    fn load(&self, id: &str) -> BoxFuture<'_, StorageResult<Board>> {
        let path = self.session_path(id);
        let id_owned = id.to_string();

        Box::pin(async move {
            if !path.exists() {
                return Err(StorageError::NotFound(id_owned));
            }

            let json = fs::read_to_string(&path).map_err(|e| {
                StorageError::Io(format!("failed to read {}: {}", path.display(), e))
            })?;

            serde_json::from_str(&json).map_err(|e| {
                StorageError::Serialization(format!("failed to parse {}: {}", path.display(), e))
            })
        })
    }

    fn delete(&self, id: &str) -> BoxFuture<'_, StorageResult<()>> {
        let path = self.session_path(id);

        Box::pin(async move {
            if path.exists() {
                fs::remove_file(&path).map_err(|e| {
                    StorageError::Io(format!("failed to delete {}: {}", path.display(), e))
                })?;
            }
            Ok(())
        })
    }

    fn list(&self) -> BoxFuture<'_, StorageResult<Vec<String>>> {
        let base = self.base_path.clone();

        Box::pin(async move {
            if !base.exists() {
                return Ok(vec![]);
            }

            let entries = fs::read_dir(&base)
                .map_err(|e| StorageError::Io(format!("failed to read directory: {}", e)))?;

            let mut ids = Vec::new();
            for entry in entries.flatten() {
                let path = entry.path();
                if path.extension().map(|e| e == "json").unwrap_or(false) {
                    if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                        ids.push(stem.to_string());
                    }
                }
            }
            Ok(ids)
        })
    }

    fn exists(&self, id: &str) -> BoxFuture<'_, StorageResult<bool>> {
        let path = self.session_path(id);
        Box::pin(async move { Ok(path.exists()) })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::elements::{BrushStroke, Element};
    use pollster::block_on;
    use tempfile::tempdir;

    #[test]
    fn test_save_and_load_roundtrip() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        let mut board = Board::new();
        board.push(Element::Brush(BrushStroke::new()));

        block_on(storage.save("session", &board)).unwrap();
        let loaded = block_on(storage.load("session")).unwrap();
        assert_eq!(loaded.len(), 1);
    }

    #[test]
    fn test_load_missing() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();
        let result = block_on(storage.load("nope"));
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_id_sanitization() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        let board = Board::new();
        block_on(storage.save("../evil/../id", &board)).unwrap();

        // The file must land inside the base directory.
        let ids = block_on(storage.list()).unwrap();
        assert_eq!(ids.len(), 1);
        assert!(!ids[0].contains('/'));
    }

    #[test]
    fn test_list_ignores_foreign_files() {
        let dir = tempdir().unwrap();
        let storage = FileStorage::new(dir.path().to_path_buf()).unwrap();

        fs::write(dir.path().join("notes.txt"), "hi").unwrap();
        block_on(storage.save("real", &board_with_one())).unwrap();

        let ids = block_on(storage.list()).unwrap();
        assert_eq!(ids, vec!["real".to_string()]);
    }

    fn board_with_one() -> Board {
        let mut board = Board::new();
        board.push(Element::Brush(BrushStroke::new()));
        board
    }
}
