use crate::domain::model::{Geometry, GridSpec, SizeBounds};
use crate::utils::error::{GridIconError, Result};

/// 計算每格像素大小與整張圖示的邊長。
///
/// 每格大小取 `max_size / max(width, height)` 的整數商，讓整張圖示落在整數像素上。
/// 結果小於 `min_size` 時失敗；格數多於 `max_size` 時每格大小會截斷為 0，同樣走這條路徑。
pub fn compute(grid: GridSpec, bounds: SizeBounds) -> Result<Geometry> {
    let max_cells = grid.max_cells();
    if max_cells == 0 {
        return Err(GridIconError::InvalidConfigValueError {
            field: if grid.width == 0 { "width" } else { "height" }.to_string(),
            value: "0".to_string(),
            reason: "Grid must have at least one row and one column".to_string(),
        });
    }

    // min-size 為 0 時每格可能截斷成 0px，仍然通過下限檢查
    if bounds.min_size == 0 {
        return Err(GridIconError::InvalidConfigValueError {
            field: "min-size".to_string(),
            value: "0".to_string(),
            reason: "Value must be at least 1".to_string(),
        });
    }

    let cell_size = bounds.max_size / max_cells;
    let total_size = cell_size * max_cells;

    if total_size < bounds.min_size {
        tracing::debug!(
            "Rejected geometry: {}x{} grid gives {}px (min {}px)",
            grid.width,
            grid.height,
            total_size,
            bounds.min_size
        );
        return Err(GridIconError::ComputedSizeTooSmall {
            computed: total_size,
            required: bounds.min_size,
        });
    }

    Ok(Geometry {
        cell_size,
        total_size,
    })
}
