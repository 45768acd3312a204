//! Request body validation shared by every create and update operation.
//!
//! Required fields are declared as a list of `RequiredField` descriptors next to the DTO
//! conversion that needs them, and checked by the single generic `require_fields`.

use crate::server::error::AppError;

/// A named field and how to tell whether a request supplied it.
pub struct RequiredField<T> {
    pub name: &'static str,
    pub present: fn(&T) -> bool,
}

impl<T> RequiredField<T> {
    pub fn new(name: &'static str, present: fn(&T) -> bool) -> Self {
        Self { name, present }
    }
}

/// Checks every descriptor in order and reports the first missing field.
///
/// # Returns
/// - `Ok(())` - All fields present
/// - `Err(AppError::Validation)` - `"Missing '<name>' in request body"`
pub fn require_fields<T>(value: &T, fields: &[RequiredField<T>]) -> Result<(), AppError> {
    match fields.iter().find(|field| !(field.present)(value)) {
        Some(field) => Err(AppError::Validation(format!(
            "Missing '{}' in request body",
            field.name
        ))),
        None => Ok(()),
    }
}

/// Rejects update bodies that carry none of the updatable fields.
///
/// # Arguments
/// - `names` - Updatable field names, listed in the error message
/// - `any_present` - Whether at least one of them was supplied
pub fn require_any(names: &[&str], any_present: bool) -> Result<(), AppError> {
    if any_present {
        return Ok(());
    }

    let quoted: Vec<String> = names.iter().map(|name| format!("'{}'", name)).collect();
    Err(AppError::Validation(format!(
        "Request body must contain at least one of {}",
        quoted.join(", ")
    )))
}

/// Rejects a range whose start comes after its end.
pub fn require_ordered<T: PartialOrd>(start: &T, end: &T) -> Result<(), AppError> {
    if start > end {
        return Err(AppError::Validation(
            "'start_date' must not be after 'end_date'".to_string(),
        ));
    }

    Ok(())
}

/// Minimal shape check: one `@`, non-empty local part, dotted domain, no whitespace.
pub fn validate_email(email: &str) -> Result<(), AppError> {
    let invalid = || AppError::Validation("Email address is not valid".to_string());

    if email.chars().any(char::is_whitespace) {
        return Err(invalid());
    }

    let (local, domain) = email.split_once('@').ok_or_else(invalid)?;
    let well_formed = !local.is_empty()
        && !domain.contains('@')
        && domain
            .split_once('.')
            .is_some_and(|(name, tld)| !name.is_empty() && !tld.is_empty());

    if !well_formed {
        return Err(invalid());
    }

    Ok(())
}

pub fn validate_password(password: &str) -> Result<(), AppError> {
    let len = password.chars().count();
    if len < 8 {
        return Err(AppError::Validation(
            "Password must be longer than 8 characters".to_string(),
        ));
    }
    if len > 72 {
        return Err(AppError::Validation(
            "Password must be less than 72 characters".to_string(),
        ));
    }
    if password.starts_with(' ') || password.ends_with(' ') {
        return Err(AppError::Validation(
            "Password must not start or end with empty spaces".to_string(),
        ));
    }

    let complex = password.chars().any(|c| c.is_ascii_lowercase())
        && password.chars().any(|c| c.is_ascii_uppercase())
        && password.chars().any(|c| c.is_ascii_digit())
        && password.chars().any(|c| !c.is_alphanumeric() && !c.is_whitespace());
    if !complex {
        return Err(AppError::Validation(
            "Password must contain 1 upper case, lower case, number and special character"
                .to_string(),
        ));
    }

    Ok(())
}
