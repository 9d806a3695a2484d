// Service exports
pub mod auth;
pub mod postgres;

pub use auth::{AuthError, AuthUser, Claims, TokenValidator};
pub use postgres::{PostgresClient, PostgresError};
