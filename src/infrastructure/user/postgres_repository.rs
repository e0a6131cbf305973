//! PostgreSQL user repository implementation

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use crate::domain::user::{User, UserRepository};
use crate::domain::DomainError;

/// PostgreSQL implementation of UserRepository
#[derive(Debug, Clone)]
pub struct PostgresUserRepository {
    pool: PgPool,
}

impl PostgresUserRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserRepository for PostgresUserRepository {
    async fn get(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT id, first_name, last_name, email, date_of_birth, phone_number
            FROM users
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get user: {}", e)))?;

        match row {
            Some(row) => Ok(Some(row_to_user(&row)?)),
            None => Ok(None),
        }
    }

    async fn list(&self) -> Result<Vec<User>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT id, first_name, last_name, email, date_of_birth, phone_number
            FROM users
            ORDER BY first_name, id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list users: {}", e)))?;

        let mut users = Vec::with_capacity(rows.len());

        for row in rows {
            users.push(row_to_user(&row)?);
        }

        Ok(users)
    }

    async fn insert(&self, user: User) -> Result<User, DomainError> {
        sqlx::query(
            r#"
            INSERT INTO users (id, first_name, last_name, email, date_of_birth, phone_number)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.id())
        .bind(user.first_name())
        .bind(user.last_name())
        .bind(user.email())
        .bind(user.date_of_birth())
        .bind(user.phone_number())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, user.email(), "create"))?;

        Ok(user)
    }

    async fn update(&self, user: &User) -> Result<(), DomainError> {
        let result = sqlx::query(
            r#"
            UPDATE users
            SET first_name = $2, last_name = $3, email = $4,
                date_of_birth = $5, phone_number = $6
            WHERE id = $1
            "#,
        )
        .bind(user.id())
        .bind(user.first_name())
        .bind(user.last_name())
        .bind(user.email())
        .bind(user.date_of_birth())
        .bind(user.phone_number())
        .execute(&self.pool)
        .await
        .map_err(|e| map_write_error(e, user.email(), "update"))?;

        if result.rows_affected() == 0 {
            return Err(DomainError::not_found(format!(
                "User '{}' not found",
                user.id()
            )));
        }

        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM users WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete user: {}", e)))?;

        Ok(result.rows_affected() > 0)
    }

    async fn email_exists(
        &self,
        email: &str,
        exclude: Option<Uuid>,
    ) -> Result<bool, DomainError> {
        let exists: bool = match exclude {
            Some(id) => {
                sqlx::query_scalar(
                    "SELECT EXISTS(SELECT 1 FROM users WHERE email = $1 AND id <> $2)",
                )
                .bind(email)
                .bind(id)
                .fetch_one(&self.pool)
                .await
            }
            None => {
                sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM users WHERE email = $1)")
                    .bind(email)
                    .fetch_one(&self.pool)
                    .await
            }
        }
        .map_err(|e| DomainError::storage(format!("Failed to check email: {}", e)))?;

        Ok(exists)
    }
}

/// Map a write error, turning a unique-constraint violation on the email
/// column into a conflict. This is the authoritative duplicate-email check:
/// two concurrent creates that both pass the application pre-check still
/// resolve to one insert and one conflict here.
fn map_write_error(e: sqlx::Error, email: &str, action: &str) -> DomainError {
    let is_unique_violation = e
        .as_database_error()
        .is_some_and(|db| db.is_unique_violation());

    if is_unique_violation {
        DomainError::conflict(format!("Email '{}' already exists", email))
    } else {
        DomainError::storage(format!("Failed to {} user: {}", action, e))
    }
}

fn row_to_user(row: &PgRow) -> Result<User, DomainError> {
    Ok(User::new(
        row.try_get("id")
            .map_err(|e| DomainError::storage(format!("Invalid id column: {}", e)))?,
        row.try_get::<String, _>("first_name")
            .map_err(|e| DomainError::storage(format!("Invalid first_name column: {}", e)))?,
        row.try_get::<Option<String>, _>("last_name")
            .map_err(|e| DomainError::storage(format!("Invalid last_name column: {}", e)))?,
        row.try_get::<String, _>("email")
            .map_err(|e| DomainError::storage(format!("Invalid email column: {}", e)))?,
        row.try_get("date_of_birth")
            .map_err(|e| DomainError::storage(format!("Invalid date_of_birth column: {}", e)))?,
        row.try_get::<String, _>("phone_number")
            .map_err(|e| DomainError::storage(format!("Invalid phone_number column: {}", e)))?,
    ))
}
