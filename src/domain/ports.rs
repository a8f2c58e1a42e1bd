use crate::domain::model::{CellCoordinate, IconDocument};
use crate::utils::error::Result;
use std::path::{Path, PathBuf};

pub trait Storage {
    /// 批次開始前呼叫一次，例如建立輸出目錄
    fn prepare(&self) -> Result<()> {
        Ok(())
    }

    /// 寫入一份文件，已存在的同名檔案直接覆蓋；回傳實際寫入的路徑
    fn write_document(&self, document: &IconDocument) -> Result<PathBuf>;
}

pub trait ProgressReporter {
    fn file_written(&self, cell: CellCoordinate, path: &Path);
}
