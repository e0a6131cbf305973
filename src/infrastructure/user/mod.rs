//! User infrastructure - persistence and the service layer

mod postgres_repository;
mod service;

pub use postgres_repository::PostgresUserRepository;
pub use service::{CreateUserRequest, UserService};
