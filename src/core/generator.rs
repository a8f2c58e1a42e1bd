use crate::core::batch::BatchWriter;
use crate::core::geometry::compute;
use crate::core::grid_lines::build_lines;
use crate::domain::model::{Geometry, GridSpec, SizeBounds};
use crate::domain::ports::{ProgressReporter, Storage};
use crate::utils::error::Result;
use serde::Serialize;
use std::path::PathBuf;

/// 不寫檔時的執行計畫，供 `--dry-run` 輸出
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RunPlan {
    pub width: u32,
    pub height: u32,
    pub cell_size: u32,
    pub total_size: u32,
    pub files: Vec<String>,
}

impl RunPlan {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[derive(Debug, Clone)]
pub struct RunReport {
    pub geometry: Geometry,
    pub written: Vec<PathBuf>,
}

pub struct IconGenerator {
    grid: GridSpec,
    bounds: SizeBounds,
}

impl IconGenerator {
    pub fn new(grid: GridSpec, bounds: SizeBounds) -> Self {
        Self { grid, bounds }
    }

    pub fn plan(&self) -> Result<RunPlan> {
        let geometry = compute(self.grid, self.bounds)?;
        Ok(RunPlan {
            width: self.grid.width,
            height: self.grid.height,
            cell_size: geometry.cell_size,
            total_size: geometry.total_size,
            files: self.grid.cells().map(|cell| cell.file_name()).collect(),
        })
    }

    /// 計算尺寸、建立共用格線，再逐格寫出。尺寸不符時不會寫出任何檔案。
    pub fn run<S: Storage, R: ProgressReporter>(&self, storage: S, reporter: R) -> Result<RunReport> {
        let geometry = compute(self.grid, self.bounds)?;
        tracing::info!(
            "Grid {}x{}: cell {}px, icon {}px",
            self.grid.width,
            self.grid.height,
            geometry.cell_size,
            geometry.total_size
        );

        let grid_lines = build_lines(self.grid, geometry.cell_size);
        tracing::debug!("Shared grid path has {} line commands", grid_lines.len());

        let writer = BatchWriter::new(storage, reporter);
        let written = writer.write_all(self.grid, geometry, &grid_lines)?;
        tracing::info!("Generated {} icons", written.len());

        Ok(RunReport { geometry, written })
    }
}
