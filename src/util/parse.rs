use crate::error::AppError;

/// Parses a u64 value from String
///
/// # Arguments
/// - `value` - The String to attempt to parse into `u64`
///
/// # Returns
/// - `Ok(u64)` - Successfully parsed String to `u64`
/// - `Err(AppError::InternalError)` - Failed to parse the string as a u64
pub fn parse_u64_from_string(value: String) -> Result<u64, AppError> {
    let result = value.parse::<u64>().map_err(|e| {
        AppError::InternalError(format!("Failed to parse ID from String '{}': {}", value, e))
    })?;

    Ok(result)
}
