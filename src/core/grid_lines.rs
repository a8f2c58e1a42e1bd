use crate::domain::model::{GridLinePath, GridSpec, LineCommand};

/// 產生內部分隔線：先依序畫垂直線，再畫水平線。1x1 的格子沒有內部線。
pub fn build_lines(grid: GridSpec, cell_size: u32) -> GridLinePath {
    let grid_width_px = grid.width * cell_size;
    let grid_height_px = grid.height * cell_size;

    let vertical = (1..grid.width).map(|col| LineCommand::Vertical {
        x: col * cell_size,
        length: grid_height_px,
    });
    let horizontal = (1..grid.height).map(|row| LineCommand::Horizontal {
        y: row * cell_size,
        length: grid_width_px,
    });

    GridLinePath {
        commands: vertical.chain(horizontal).collect(),
    }
}
