//! User repository trait

use async_trait::async_trait;
use std::fmt::Debug;
use uuid::Uuid;

use super::entity::User;
use crate::domain::DomainError;

/// Repository trait for user storage
#[async_trait]
pub trait UserRepository: Send + Sync + Debug {
    /// Get a user by id
    async fn get(&self, id: Uuid) -> Result<Option<User>, DomainError>;

    /// List all users
    async fn list(&self) -> Result<Vec<User>, DomainError>;

    /// Insert a new user row
    ///
    /// Returns a conflict error if the email collides with an existing row.
    /// The store's unique constraint is authoritative here: a race between
    /// two concurrent creates with the same email surfaces as a conflict
    /// from this call even when the pre-check passed.
    async fn insert(&self, user: User) -> Result<User, DomainError>;

    /// Overwrite an existing user row
    async fn update(&self, user: &User) -> Result<(), DomainError>;

    /// Delete a user row; returns whether a row was removed
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Check whether `email` is taken, optionally excluding one row
    /// (the record being updated)
    async fn email_exists(&self, email: &str, exclude: Option<Uuid>)
        -> Result<bool, DomainError>;
}
