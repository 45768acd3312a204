use crate::server::error::AppError;

/// Parses a path identifier into a database key.
///
/// Only positive integers are well-formed keys.
///
/// # Arguments
/// - `kind` - Name of the entity the id refers to, used in the error message
/// - `value` - Raw path segment
///
/// # Returns
/// - `Ok(i32)` - Successfully parsed key
/// - `Err(AppError::InvalidIdentifier)` - The value is not a positive integer
pub fn parse_id(kind: &str, value: &str) -> Result<i32, AppError> {
    match value.parse::<i32>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(AppError::InvalidIdentifier(format!(
            "Invalid {} id '{}'",
            kind, value
        ))),
    }
}
