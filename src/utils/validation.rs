use crate::utils::error::{GridIconError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: u32, min_value: u32) -> Result<()> {
    if value < min_value {
        return Err(GridIconError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

/// 輸出目錄可以還不存在（寫檔前會建立），但不能是一個既有的檔案
pub fn validate_output_dir(field_name: &str, path: &str) -> Result<()> {
    let reason = if path.trim().is_empty() {
        "Output directory cannot be empty"
    } else if Path::new(path).exists() && !Path::new(path).is_dir() {
        "Path exists and is not a directory"
    } else {
        return Ok(());
    };

    Err(GridIconError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: path.to_string(),
        reason: reason.to_string(),
    })
}
