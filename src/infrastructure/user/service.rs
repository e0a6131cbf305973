//! User service
//!
//! Orchestrates validation, the email uniqueness pre-check, and the single
//! persistence call per request. All checks run before any mutation; a
//! request is never partially applied.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use uuid::Uuid;

use crate::domain::user::{validate_user_fields, User, UserRepository};
use crate::domain::DomainError;

/// Writable user fields, used for both create and full-replace update
#[derive(Debug, Clone)]
pub struct CreateUserRequest {
    pub first_name: String,
    pub last_name: Option<String>,
    pub email: String,
    pub date_of_birth: NaiveDate,
    pub phone_number: String,
}

/// User service
#[derive(Debug)]
pub struct UserService<R: UserRepository> {
    repository: Arc<R>,
}

impl<R: UserRepository> UserService<R> {
    /// Create a new user service
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Create a new user with a server-assigned id
    pub async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        self.validate(&request)?;

        // Pre-check for a friendly error; the store's unique constraint
        // remains the authoritative guard against concurrent creates.
        if self
            .repository
            .email_exists(&request.email, None)
            .await?
        {
            return Err(DomainError::conflict("Email address must be unique"));
        }

        let user = User::new(
            Uuid::new_v4(),
            request.first_name,
            request.last_name,
            request.email,
            request.date_of_birth,
            request.phone_number,
        );

        self.repository.insert(user).await
    }

    /// List all users
    pub async fn list(&self) -> Result<Vec<User>, DomainError> {
        self.repository.list().await
    }

    /// Get a user by id
    pub async fn get(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        self.repository.get(id).await
    }

    /// Replace all mutable fields of an existing user
    pub async fn update(&self, id: Uuid, request: CreateUserRequest) -> Result<(), DomainError> {
        let mut user = self
            .repository
            .get(id)
            .await?
            .ok_or_else(|| DomainError::not_found(format!("User '{}' not found", id)))?;

        self.validate(&request)?;

        // Uniqueness check excludes the record being updated
        if self
            .repository
            .email_exists(&request.email, Some(id))
            .await?
        {
            return Err(DomainError::conflict("Email address must be unique"));
        }

        user.replace_fields(
            request.first_name,
            request.last_name,
            request.email,
            request.date_of_birth,
            request.phone_number,
        );

        self.repository.update(&user).await
    }

    /// Delete a user by id
    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        let deleted = self.repository.delete(id).await?;

        if !deleted {
            return Err(DomainError::not_found(format!("User '{}' not found", id)));
        }

        Ok(())
    }

    fn validate(&self, request: &CreateUserRequest) -> Result<(), DomainError> {
        let today = Utc::now().date_naive();

        validate_user_fields(
            &request.first_name,
            request.last_name.as_deref(),
            &request.email,
            request.date_of_birth,
            &request.phone_number,
            today,
        )
        .map_err(|e| DomainError::validation(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::user::MockUserRepository;
    use chrono::Datelike;

    fn service() -> UserService<MockUserRepository> {
        UserService::new(Arc::new(MockUserRepository::new()))
    }

    fn request(email: &str) -> CreateUserRequest {
        CreateUserRequest {
            first_name: "Ann".to_string(),
            last_name: None,
            email: email.to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(2000, 1, 1).unwrap(),
            phone_number: "5551234567".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_assigns_id_and_persists() {
        let service = service();

        let user = service.create(request("a@x.com")).await.unwrap();

        let retrieved = service.get(user.id()).await.unwrap();
        assert_eq!(retrieved, Some(user));
    }

    #[tokio::test]
    async fn test_create_rejects_minor() {
        let service = service();
        let today = Utc::now().date_naive();

        let mut req = request("a@x.com");
        req.date_of_birth = NaiveDate::from_ymd_opt(today.year() - 10, 1, 1).unwrap();

        let result = service.create(req).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_create_accepts_exactly_18_today() {
        let service = service();
        let today = Utc::now().date_naive();

        // 18th birthday is today; falls back a day when today is Feb 29
        let dob = today
            .with_year(today.year() - 18)
            .unwrap_or_else(|| NaiveDate::from_ymd_opt(today.year() - 18, 2, 28).unwrap());

        let mut req = request("a@x.com");
        req.date_of_birth = dob;

        assert!(service.create(req).await.is_ok());
    }

    #[tokio::test]
    async fn test_create_rejects_invalid_phone() {
        let service = service();

        let mut req = request("a@x.com");
        req.phone_number = "555-123-4567".to_string();

        let result = service.create(req).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));
    }

    #[tokio::test]
    async fn test_create_rejects_duplicate_email() {
        let service = service();

        service.create(request("a@x.com")).await.unwrap();

        let result = service.create(request("a@x.com")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_create_duplicate_caught_by_store_constraint() {
        // Simulate the check-then-act race: the pre-check reports the email
        // as free, so only the store-level uniqueness check can reject the
        // second create.
        let repo = Arc::new(MockUserRepository::new());
        let service = UserService::new(Arc::clone(&repo));

        service.create(request("a@x.com")).await.unwrap();

        repo.set_precheck_disabled(true).await;

        let result = service.create(request("a@x.com")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_update_changes_phone_preserves_rest() {
        let service = service();
        let user = service.create(request("a@x.com")).await.unwrap();

        let mut req = request("a@x.com");
        req.phone_number = "5559876543".to_string();

        service.update(user.id(), req).await.unwrap();

        let updated = service.get(user.id()).await.unwrap().unwrap();
        assert_eq!(updated.id(), user.id());
        assert_eq!(updated.phone_number(), "5559876543");
        assert_eq!(updated.first_name(), user.first_name());
        assert_eq!(updated.email(), user.email());
        assert_eq!(updated.date_of_birth(), user.date_of_birth());
    }

    #[tokio::test]
    async fn test_update_missing_user() {
        let service = service();

        let result = service.update(Uuid::new_v4(), request("a@x.com")).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_update_keeping_own_email_is_not_a_conflict() {
        let service = service();
        let user = service.create(request("a@x.com")).await.unwrap();

        // Same email, different phone; must not trip the uniqueness check
        let mut req = request("a@x.com");
        req.phone_number = "5550001111".to_string();

        assert!(service.update(user.id(), req).await.is_ok());
    }

    #[tokio::test]
    async fn test_update_rejects_email_taken_by_other_user() {
        let service = service();
        service.create(request("a@x.com")).await.unwrap();
        let other = service.create(request("b@x.com")).await.unwrap();

        let result = service.update(other.id(), request("a@x.com")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));
    }

    #[tokio::test]
    async fn test_update_validates_before_writing() {
        let service = service();
        let user = service.create(request("a@x.com")).await.unwrap();

        let mut req = request("a@x.com");
        req.phone_number = "bad".to_string();

        let result = service.update(user.id(), req).await;
        assert!(matches!(result, Err(DomainError::Validation { .. })));

        // Nothing was applied
        let unchanged = service.get(user.id()).await.unwrap().unwrap();
        assert_eq!(unchanged.phone_number(), "5551234567");
    }

    #[tokio::test]
    async fn test_delete_then_get() {
        let service = service();
        let user = service.create(request("a@x.com")).await.unwrap();

        service.delete(user.id()).await.unwrap();

        assert!(service.get(user.id()).await.unwrap().is_none());

        let result = service.delete(user.id()).await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_list_returns_all_users() {
        let service = service();
        service.create(request("a@x.com")).await.unwrap();
        service.create(request("b@x.com")).await.unwrap();

        let users = service.list().await.unwrap();
        assert_eq!(users.len(), 2);
    }

    #[tokio::test]
    async fn test_storage_failure_propagates() {
        let repo = Arc::new(MockUserRepository::new());
        let service = UserService::new(Arc::clone(&repo));

        repo.set_should_fail(true).await;

        let result = service.list().await;
        assert!(matches!(result, Err(DomainError::Storage { .. })));
    }
}
