//! User entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::validation::compute_age;

/// User entity persisted in the `users` table
///
/// `age` is never stored; it is derived from `date_of_birth` at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier, assigned at creation, immutable thereafter
    id: Uuid,
    first_name: String,
    last_name: Option<String>,
    /// Unique across all users (enforced by the store constraint)
    email: String,
    date_of_birth: NaiveDate,
    /// Exactly 10 decimal digits
    phone_number: String,
}

impl User {
    /// Create a new user with the given id and field values
    pub fn new(
        id: Uuid,
        first_name: impl Into<String>,
        last_name: Option<String>,
        email: impl Into<String>,
        date_of_birth: NaiveDate,
        phone_number: impl Into<String>,
    ) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name,
            email: email.into(),
            date_of_birth,
            phone_number: phone_number.into(),
        }
    }

    // Getters

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn date_of_birth(&self) -> NaiveDate {
        self.date_of_birth
    }

    pub fn phone_number(&self) -> &str {
        &self.phone_number
    }

    /// Calendar age at `today`, derived from the date of birth
    pub fn age(&self, today: NaiveDate) -> i32 {
        compute_age(self.date_of_birth, today)
    }

    // Mutators

    /// Overwrite all mutable fields in place (full-replace update).
    ///
    /// The id is never changed.
    pub fn replace_fields(
        &mut self,
        first_name: impl Into<String>,
        last_name: Option<String>,
        email: impl Into<String>,
        date_of_birth: NaiveDate,
        phone_number: impl Into<String>,
    ) {
        self.first_name = first_name.into();
        self.last_name = last_name;
        self.email = email.into();
        self.date_of_birth = date_of_birth;
        self.phone_number = phone_number.into();
    }
}
