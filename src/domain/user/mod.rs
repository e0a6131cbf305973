//! User domain
//!
//! Domain types for the user resource: the persisted entity, pure field
//! validation, and the repository trait the persistence layer implements.

mod entity;
mod repository;
pub mod validation;

pub use entity::User;
pub use repository::UserRepository;
pub use validation::{
    compute_age, is_adult, is_valid_phone_number, validate_user_fields, UserValidationError,
};

#[cfg(test)]
pub use repository::mock::MockUserRepository;
