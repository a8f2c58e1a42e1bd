pub mod batch;
pub mod generator;
pub mod geometry;
pub mod grid_lines;
pub mod renderer;

pub use crate::domain::model::{
    CellCoordinate, Geometry, GridLinePath, GridSpec, IconDocument, SizeBounds,
};
pub use crate::domain::ports::{ProgressReporter, Storage};
pub use crate::utils::error::Result;
