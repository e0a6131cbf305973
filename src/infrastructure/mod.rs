//! Infrastructure layer - External service implementations

pub mod db;
pub mod logging;
pub mod user;
