use crate::utils::error::{MinorRenError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_positive_number(field_name: &str, value: i64, min_value: i64) -> Result<()> {
    if value < min_value {
        return Err(MinorRenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Value must be at least {}", min_value),
        });
    }
    Ok(())
}

pub fn validate_ordered_bounds(field_name: &str, min: i64, max: i64) -> Result<()> {
    if min > max {
        return Err(MinorRenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: format!("{}..={}", min, max),
            reason: "min must not be greater than max".to_string(),
        });
    }
    Ok(())
}
