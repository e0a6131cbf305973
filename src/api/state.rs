//! Application state for shared services

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::user::{CreateUserRequest, UserService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
}

/// Trait for user service operations
#[async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError>;
    async fn list(&self) -> Result<Vec<User>, DomainError>;
    async fn get(&self, id: Uuid) -> Result<Option<User>, DomainError>;
    async fn update(&self, id: Uuid, request: CreateUserRequest) -> Result<(), DomainError>;
    async fn delete(&self, id: Uuid) -> Result<(), DomainError>;
}

#[async_trait]
impl<R: UserRepository + 'static> UserServiceTrait for UserService<R> {
    async fn create(&self, request: CreateUserRequest) -> Result<User, DomainError> {
        UserService::create(self, request).await
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        UserService::list(self).await
    }

    async fn get(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        UserService::get(self, id).await
    }

    async fn update(&self, id: Uuid, request: CreateUserRequest) -> Result<(), DomainError> {
        UserService::update(self, id, request).await
    }

    async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        UserService::delete(self, id).await
    }
}
