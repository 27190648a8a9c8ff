//! Field and range validation for catalog entities.
//!
//! Stateless pure functions, one per bounded field. Absent optional values
//! always pass: these are business constraints on supplied data, not
//! required-field checks. Empty strings skip the format validators the same
//! way, so "not provided" and "provided but blank" behave alike.

use std::sync::LazyLock;

use chrono::NaiveDate;
use regex::Regex;
use validator::{ValidateEmail, ValidateUrl};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Range bounds
// ---------------------------------------------------------------------------

/// Minimum theatre capacity.
pub const MIN_CAPACITY: i32 = 1;

/// Maximum theatre capacity.
pub const MAX_CAPACITY: i32 = 100_000;

/// Minimum show duration in minutes.
pub const MIN_DURATION_MINUTES: i32 = 1;

/// Maximum show duration in minutes (10 hours).
pub const MAX_DURATION_MINUTES: i32 = 600;

/// Minimum ticket price.
pub const MIN_PRICE: f64 = 0.0;

/// Maximum reasonable ticket price. A business ceiling, not a physical one.
pub const MAX_PRICE: f64 = 10_000.0;

// ---------------------------------------------------------------------------
// Text length caps
// ---------------------------------------------------------------------------

/// Maximum length for location and theatre names and show titles.
pub const MAX_NAME_LEN: usize = 255;

/// Maximum length for category (theatre type / show type) names.
pub const MAX_TYPE_NAME_LEN: usize = 100;

/// Maximum length for city, state, and country names.
pub const MAX_REGION_LEN: usize = 100;

/// Maximum length for a postal code.
pub const MAX_POSTAL_CODE_LEN: usize = 20;

/// Maximum length for a street address.
pub const MAX_ADDRESS_LEN: usize = 500;

/// Maximum length for a short description (locations, categories).
pub const MAX_DESCRIPTION_LEN: usize = 1_000;

/// Maximum length for a long description (theatres, shows).
pub const MAX_LONG_DESCRIPTION_LEN: usize = 2_000;

/// Maximum length for a phone number as entered (including separators).
pub const MAX_PHONE_LEN: usize = 20;

/// Maximum length for an email address.
pub const MAX_EMAIL_LEN: usize = 255;

/// Maximum length for a URL (website, image, trailer).
pub const MAX_URL_LEN: usize = 500;

/// Maximum length for a show's cast listing.
pub const MAX_CAST_LEN: usize = 1_000;

// ---------------------------------------------------------------------------
// Format patterns
// ---------------------------------------------------------------------------

/// Digits-only phone body after separator stripping: 7 to 15 digits.
static PHONE_DIGITS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{7,15}$").expect("phone regex is valid"));

/// Alphanumeric postal code with spaces and dashes, 3 to 10 characters.
static POSTAL_CODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9\s\-]{3,10}$").expect("postal regex is valid"));

// ---------------------------------------------------------------------------
// Coordinates
// ---------------------------------------------------------------------------

/// Validate a latitude in decimal degrees.
pub fn validate_latitude(latitude: f64) -> Result<(), CoreError> {
    if !(-90.0..=90.0).contains(&latitude) {
        return Err(CoreError::Validation(format!(
            "latitude must be between -90 and 90, got {latitude}"
        )));
    }
    Ok(())
}

/// Validate a longitude in decimal degrees.
pub fn validate_longitude(longitude: f64) -> Result<(), CoreError> {
    if !(-180.0..=180.0).contains(&longitude) {
        return Err(CoreError::Validation(format!(
            "longitude must be between -180 and 180, got {longitude}"
        )));
    }
    Ok(())
}

/// Validate an independently-optional coordinate pair.
///
/// Each present component is range-checked on its own; one component may be
/// present without the other.
pub fn validate_coordinates(
    latitude: Option<f64>,
    longitude: Option<f64>,
) -> Result<(), CoreError> {
    if let Some(lat) = latitude {
        validate_latitude(lat)?;
    }
    if let Some(lon) = longitude {
        validate_longitude(lon)?;
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Numeric ranges
// ---------------------------------------------------------------------------

/// Validate an optional theatre capacity.
pub fn validate_capacity(capacity: Option<i32>) -> Result<(), CoreError> {
    match capacity {
        Some(c) if c < MIN_CAPACITY => Err(CoreError::Validation(format!(
            "capacity must be at least {MIN_CAPACITY}, got {c}"
        ))),
        Some(c) if c > MAX_CAPACITY => Err(CoreError::Validation(format!(
            "capacity cannot exceed {MAX_CAPACITY}, got {c}"
        ))),
        _ => Ok(()),
    }
}

/// Validate an optional show duration in minutes.
pub fn validate_duration(duration: Option<i32>) -> Result<(), CoreError> {
    match duration {
        Some(d) if d < MIN_DURATION_MINUTES => Err(CoreError::Validation(format!(
            "duration must be at least {MIN_DURATION_MINUTES} minute, got {d}"
        ))),
        Some(d) if d > MAX_DURATION_MINUTES => Err(CoreError::Validation(format!(
            "duration cannot exceed {MAX_DURATION_MINUTES} minutes, got {d}"
        ))),
        _ => Ok(()),
    }
}

/// Validate an optional ticket price.
pub fn validate_price(price: Option<f64>) -> Result<(), CoreError> {
    match price {
        Some(p) if p < MIN_PRICE => Err(CoreError::Validation(format!(
            "price cannot be negative, got {p}"
        ))),
        Some(p) if p > MAX_PRICE => Err(CoreError::Validation(format!(
            "price cannot exceed {MAX_PRICE}, got {p}"
        ))),
        _ => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Dates
// ---------------------------------------------------------------------------

/// Validate a show's run dates.
///
/// Fails only when both bounds are present and the end precedes the start;
/// a single present bound is never checked against the other.
pub fn validate_date_range(
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
) -> Result<(), CoreError> {
    if let (Some(start), Some(end)) = (start_date, end_date) {
        if end < start {
            return Err(CoreError::Validation(format!(
                "end date ({end}) cannot be before start date ({start})"
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Text
// ---------------------------------------------------------------------------

/// Validate a required text field: non-empty and within its length cap.
pub fn validate_required_text(field: &str, value: &str, max_len: usize) -> Result<(), CoreError> {
    if value.is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    if value.len() > max_len {
        return Err(CoreError::Validation(format!(
            "{field} cannot exceed {max_len} characters, got {}",
            value.len()
        )));
    }
    Ok(())
}

/// Validate an optional text field's length cap.
pub fn validate_optional_text(
    field: &str,
    value: Option<&str>,
    max_len: usize,
) -> Result<(), CoreError> {
    if let Some(v) = value {
        if v.len() > max_len {
            return Err(CoreError::Validation(format!(
                "{field} cannot exceed {max_len} characters, got {}",
                v.len()
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Formats
// ---------------------------------------------------------------------------

/// Validate an optional email address. Empty input passes.
pub fn validate_email(email: Option<&str>) -> Result<(), CoreError> {
    match email {
        Some(e) if !e.is_empty() => {
            validate_optional_text("email", Some(e), MAX_EMAIL_LEN)?;
            if !e.validate_email() {
                return Err(CoreError::Validation(format!("invalid email format: {e}")));
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Validate an optional http/https URL. Empty input passes.
pub fn validate_url(field: &str, url: Option<&str>) -> Result<(), CoreError> {
    match url {
        Some(u) if !u.is_empty() => {
            validate_optional_text(field, Some(u), MAX_URL_LEN)?;
            if !(u.starts_with("http://") || u.starts_with("https://")) || !u.validate_url() {
                return Err(CoreError::Validation(format!(
                    "invalid {field} format: {u}"
                )));
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Validate an optional phone number. Empty input passes.
///
/// Separators (spaces, dashes, parentheses, leading `+`) are stripped; the
/// remainder must be 7 to 15 digits.
pub fn validate_phone(phone: Option<&str>) -> Result<(), CoreError> {
    match phone {
        Some(p) if !p.is_empty() => {
            validate_optional_text("phone", Some(p), MAX_PHONE_LEN)?;
            let digits: String = p
                .chars()
                .filter(|c| !matches!(c, ' ' | '-' | '(' | ')' | '+'))
                .collect();
            if !PHONE_DIGITS.is_match(&digits) {
                return Err(CoreError::Validation(format!(
                    "invalid phone number format: {p}"
                )));
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

/// Validate an optional postal code. Empty input passes.
pub fn validate_postal_code(postal_code: Option<&str>) -> Result<(), CoreError> {
    match postal_code {
        Some(pc) if !pc.is_empty() => {
            if !POSTAL_CODE.is_match(pc) {
                return Err(CoreError::Validation(format!(
                    "invalid postal code format: {pc}"
                )));
            }
            Ok(())
        }
        _ => Ok(()),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
