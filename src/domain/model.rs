use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub width: u32,
    pub height: u32,
}

impl GridSpec {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// 較長的一邊，決定每格像素大小
    pub fn max_cells(&self) -> u32 {
        self.width.max(self.height)
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    /// 依 row-major 順序列出所有格子
    pub fn cells(&self) -> impl Iterator<Item = CellCoordinate> {
        let width = self.width;
        (0..self.height)
            .flat_map(move |row| (0..width).map(move |col| CellCoordinate { row, col }))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SizeBounds {
    pub max_size: u32,
    pub min_size: u32,
}

impl SizeBounds {
    pub fn new(max_size: u32, min_size: u32) -> Self {
        Self { max_size, min_size }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Geometry {
    pub cell_size: u32,
    pub total_size: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCommand {
    /// 從 (x, 0) 垂直畫到 (x, length)
    Vertical { x: u32, length: u32 },
    /// 從 (0, y) 水平畫到 (length, y)
    Horizontal { y: u32, length: u32 },
}

impl fmt::Display for LineCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineCommand::Vertical { x, length } => write!(f, "M{} 0 V{}", x, length),
            LineCommand::Horizontal { y, length } => write!(f, "M0 {} H{}", y, length),
        }
    }
}

/// Internal separator lines shared by every icon of one run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GridLinePath {
    pub commands: Vec<LineCommand>,
}

impl GridLinePath {
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl fmt::Display for GridLinePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, command) in self.commands.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", command)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellCoordinate {
    pub row: u32,
    pub col: u32,
}

impl CellCoordinate {
    pub fn new(row: u32, col: u32) -> Self {
        Self { row, col }
    }

    /// 檔名使用從 1 開始的行列編號
    pub fn file_name(&self) -> String {
        format!("grid_{}_{}.svg", self.row + 1, self.col + 1)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IconDocument {
    pub cell: CellCoordinate,
    pub content: String,
}

impl IconDocument {
    pub fn file_name(&self) -> String {
        self.cell.file_name()
    }
}
