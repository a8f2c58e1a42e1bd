pub mod cli;

#[cfg(feature = "cli")]
use crate::domain::model::{GridSpec, SizeBounds};
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_output_dir, validate_positive_number, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "grid-icon-gen")]
#[command(about = "Generate a grid of SVG icons (one highlighted cell per icon)")]
pub struct CliConfig {
    /// Number of columns in the grid
    #[arg(short = 'W', long, default_value = "3")]
    pub width: u32,

    /// Number of rows in the grid
    #[arg(short = 'H', long, default_value = "3")]
    pub height: u32,

    /// Maximum pixel dimension of each icon
    #[arg(short = 'M', long, default_value = "32")]
    pub max_size: u32,

    /// Minimum pixel dimension of each icon
    #[arg(short = 'm', long, default_value = "24")]
    pub min_size: u32,

    /// Directory the icons are written into
    #[arg(short, long, default_value = ".")]
    pub output_dir: String,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    /// Print the planned geometry and file names as JSON without writing anything
    #[arg(long)]
    pub dry_run: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn grid_spec(&self) -> GridSpec {
        GridSpec::new(self.width, self.height)
    }

    pub fn size_bounds(&self) -> SizeBounds {
        SizeBounds::new(self.max_size, self.min_size)
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("width", self.width, 1)?;
        validate_positive_number("height", self.height, 1)?;
        validate_positive_number("max-size", self.max_size, 1)?;
        validate_positive_number("min-size", self.min_size, 1)?;
        validate_output_dir("output-dir", &self.output_dir)?;
        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = CliConfig::parse_from(["grid-icon-gen"]);
        assert_eq!(config.grid_spec(), GridSpec::new(3, 3));
        assert_eq!(config.size_bounds(), SizeBounds::new(32, 24));
        assert_eq!(config.output_dir, ".");
        assert!(!config.dry_run);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_short_and_long_flags() {
        let config = CliConfig::parse_from([
            "grid-icon-gen",
            "-W",
            "4",
            "-H",
            "2",
            "--max-size",
            "64",
            "-m",
            "16",
            "--output-dir",
            "icons",
        ]);
        assert_eq!(config.width, 4);
        assert_eq!(config.height, 2);
        assert_eq!(config.max_size, 64);
        assert_eq!(config.min_size, 16);
        assert_eq!(config.output_dir, "icons");
    }

    #[test]
    fn test_malformed_numbers_are_rejected_by_parser() {
        assert!(CliConfig::try_parse_from(["grid-icon-gen", "--width", "three"]).is_err());
        assert!(CliConfig::try_parse_from(["grid-icon-gen", "--height", "-2"]).is_err());
    }

    #[test]
    fn test_zero_dimensions_fail_validation() {
        let config = CliConfig::parse_from(["grid-icon-gen", "--width", "0"]);
        assert!(config.validate().is_err());

        let config = CliConfig::parse_from(["grid-icon-gen", "--min-size", "0"]);
        assert!(config.validate().is_err());
    }
}
