use crate::domain::model::{CellCoordinate, IconDocument};
use crate::domain::ports::{ProgressReporter, Storage};
use crate::utils::error::{GridIconError, Result};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone)]
pub struct LocalStorage {
    base_path: PathBuf,
}

impl LocalStorage {
    pub fn new<P: Into<PathBuf>>(base_path: P) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }
}

impl Storage for LocalStorage {
    fn prepare(&self) -> Result<()> {
        fs::create_dir_all(&self.base_path).map_err(|source| GridIconError::CreateDirError {
            path: self.base_path.clone(),
            source,
        })
    }

    fn write_document(&self, document: &IconDocument) -> Result<PathBuf> {
        let full_path = self.base_path.join(document.file_name());
        fs::write(&full_path, document.content.as_bytes()).map_err(|source| {
            GridIconError::WriteError {
                path: full_path.clone(),
                source,
            }
        })?;
        Ok(full_path)
    }
}

/// 每寫出一個檔案就在 stdout 印一行
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleReporter;

impl ProgressReporter for ConsoleReporter {
    fn file_written(&self, _cell: CellCoordinate, path: &Path) {
        println!("Created {}", path.display());
    }
}
