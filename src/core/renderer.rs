use crate::domain::model::{CellCoordinate, Geometry, GridLinePath, IconDocument};

pub const FOREGROUND_COLOR: &str = "white";

/// 繪出一張只亮起 `cell` 的圖示。輸出只取決於參數，相同輸入得到相同位元組。
pub fn render(geometry: Geometry, cell: CellCoordinate, grid_lines: &GridLinePath) -> IconDocument {
    let Geometry {
        cell_size,
        total_size,
    } = geometry;
    let content = format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{total}" height="{total}" viewBox="0 0 {total} {total}">
  <rect x="{x}" y="{y}" width="{cell}" height="{cell}" fill="{color}"/>
  <path d="{path}" stroke="{color}" stroke-width="1"/>
</svg>"#,
        total = total_size,
        x = cell.col * cell_size,
        y = cell.row * cell_size,
        cell = cell_size,
        color = FOREGROUND_COLOR,
        path = grid_lines,
    );

    IconDocument { cell, content }
}
