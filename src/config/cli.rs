use crate::domain::ports::Storage;
use crate::utils::error::{BabyNamesError, Result};
use std::fs;

/// Filesystem storage. Paths are used exactly as given.
#[derive(Debug, Clone, Default)]
pub struct LocalStorage;

impl LocalStorage {
    pub fn new() -> Self {
        Self
    }
}

impl Storage for LocalStorage {
    fn read_to_string(&self, path: &str) -> Result<String> {
        fs::read_to_string(path).map_err(|e| BabyNamesError::io(path, e))
    }

    fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
        fs::write(path, data).map_err(|e| BabyNamesError::io(path, e))
    }
}
