use crate::core::renderer::render;
use crate::domain::model::{Geometry, GridLinePath, GridSpec};
use crate::domain::ports::{ProgressReporter, Storage};
use crate::utils::error::Result;
use std::path::PathBuf;

pub struct BatchWriter<S: Storage, R: ProgressReporter> {
    storage: S,
    reporter: R,
}

impl<S: Storage, R: ProgressReporter> BatchWriter<S, R> {
    pub fn new(storage: S, reporter: R) -> Self {
        Self { storage, reporter }
    }

    /// 依 row-major 順序為每一格寫出一份圖示。
    ///
    /// 第一次寫入失敗就中止，已寫出的檔案保留在磁碟上。
    pub fn write_all(
        &self,
        grid: GridSpec,
        geometry: Geometry,
        grid_lines: &GridLinePath,
    ) -> Result<Vec<PathBuf>> {
        self.storage.prepare()?;

        // 格數來自使用者輸入，不依乘積預先配置
        let mut written = Vec::new();

        for cell in grid.cells() {
            let document = render(geometry, cell, grid_lines);
            let path = self.storage.write_document(&document)?;

            tracing::debug!(
                "Wrote cell ({}, {}) to {} ({} bytes)",
                cell.row,
                cell.col,
                path.display(),
                document.content.len()
            );
            self.reporter.file_written(cell, &path);
            written.push(path);
        }

        Ok(written)
    }
}
