pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use config::cli::{ConsoleReporter, LocalStorage};
#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::generator::{IconGenerator, RunPlan, RunReport};
pub use domain::model::{
    CellCoordinate, Geometry, GridLinePath, GridSpec, IconDocument, SizeBounds,
};
pub use utils::error::{GridIconError, Result};
