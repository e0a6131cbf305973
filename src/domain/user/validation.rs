//! User field validation
//!
//! Single entry point shared by the create and update paths. Everything in
//! here is pure: callers pass in `today` so age checks stay deterministic.

use chrono::{Datelike, NaiveDate};
use thiserror::Error;

/// Errors that can occur during user validation
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum UserValidationError {
    #[error("User must be {0} years or older")]
    AgeTooYoung(i32),

    #[error("Phone number must be exactly {0} digits")]
    InvalidPhoneNumber(usize),

    #[error("First name cannot be empty")]
    EmptyFirstName,

    #[error("First name exceeds maximum length of {0} characters")]
    FirstNameTooLong(usize),

    #[error("Last name exceeds maximum length of {0} characters")]
    LastNameTooLong(usize),

    #[error("Email cannot be empty")]
    EmptyEmail,
}

const MINIMUM_AGE: i32 = 18;
const PHONE_NUMBER_LENGTH: usize = 10;
const MAX_NAME_LENGTH: usize = 128;

/// Compute the calendar age in whole years at `today`.
///
/// The year difference is decremented by one when the birthday has not yet
/// occurred this year. A Feb-29 birthday counts as reached on Mar 1 in
/// common years.
pub fn compute_age(date_of_birth: NaiveDate, today: NaiveDate) -> i32 {
    let mut age = today.year() - date_of_birth.year();

    if (today.month(), today.day()) < (date_of_birth.month(), date_of_birth.day()) {
        age -= 1;
    }

    age
}

/// True iff `s` is exactly 10 ASCII decimal digits (no `+`, no separators).
pub fn is_valid_phone_number(s: &str) -> bool {
    s.len() == PHONE_NUMBER_LENGTH && s.bytes().all(|b| b.is_ascii_digit())
}

/// True iff the person born on `date_of_birth` is at least 18 at `today`.
pub fn is_adult(date_of_birth: NaiveDate, today: NaiveDate) -> bool {
    compute_age(date_of_birth, today) >= MINIMUM_AGE
}

/// Validate the full set of writable user fields.
///
/// Used by both the create and the update path so the rules cannot drift
/// apart. Field constraints mirror the `users` table schema.
pub fn validate_user_fields(
    first_name: &str,
    last_name: Option<&str>,
    email: &str,
    date_of_birth: NaiveDate,
    phone_number: &str,
    today: NaiveDate,
) -> Result<(), UserValidationError> {
    if !is_adult(date_of_birth, today) {
        return Err(UserValidationError::AgeTooYoung(MINIMUM_AGE));
    }

    if !is_valid_phone_number(phone_number) {
        return Err(UserValidationError::InvalidPhoneNumber(PHONE_NUMBER_LENGTH));
    }

    if first_name.is_empty() {
        return Err(UserValidationError::EmptyFirstName);
    }

    if first_name.chars().count() > MAX_NAME_LENGTH {
        return Err(UserValidationError::FirstNameTooLong(MAX_NAME_LENGTH));
    }

    if let Some(last_name) = last_name {
        if last_name.chars().count() > MAX_NAME_LENGTH {
            return Err(UserValidationError::LastNameTooLong(MAX_NAME_LENGTH));
        }
    }

    if email.is_empty() {
        return Err(UserValidationError::EmptyEmail);
    }

    Ok(())
}
