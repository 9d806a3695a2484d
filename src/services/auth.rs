use actix_web::http::StatusCode;
use actix_web::{dev::Payload, web, FromRequest, HttpRequest, HttpResponse, ResponseError};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};
use std::future::{ready, Ready};
use thiserror::Error;

use crate::models::ErrorResponse;

/// Errors that can occur during request authentication
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("Missing or malformed Authorization header")]
    MissingToken,

    #[error("Invalid token: {0}")]
    InvalidToken(#[from] jsonwebtoken::errors::Error),

    #[error("Role '{0}' is not permitted for this operation")]
    Forbidden(String),

    #[error("Token validator is not configured")]
    NotConfigured,
}

impl AuthError {
    fn error_code(&self) -> &'static str {
        match self {
            AuthError::MissingToken => "missing_token",
            AuthError::InvalidToken(_) => "invalid_token",
            AuthError::Forbidden(_) => "forbidden",
            AuthError::NotConfigured => "auth_not_configured",
        }
    }
}

impl ResponseError for AuthError {
    fn status_code(&self) -> StatusCode {
        match self {
            AuthError::MissingToken | AuthError::InvalidToken(_) => StatusCode::UNAUTHORIZED,
            AuthError::Forbidden(_) => StatusCode::FORBIDDEN,
            AuthError::NotConfigured => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.error_code().to_string(),
            message: self.to_string(),
            status_code: self.status_code().as_u16(),
        })
    }
}

/// Claims carried by the identity provider's access tokens
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id
    pub sub: String,
    /// Platform role, e.g. "admin", "placement", "sourcing", "trainer"
    pub role: String,
    pub exp: usize,
}

/// Validates HS256 bearer tokens issued by the identity provider
///
/// The service only validates tokens; issuing them is the identity
/// provider's job.
#[derive(Clone)]
pub struct TokenValidator {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenValidator {
    pub fn new(secret: &str, leeway_secs: u64) -> Self {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = leeway_secs;

        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        }
    }

    pub fn validate(&self, token: &str) -> Result<Claims, AuthError> {
        let data = decode::<Claims>(token, &self.decoding_key, &self.validation)?;
        Ok(data.claims)
    }
}

/// Authenticated user extracted from the bearer token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: String,
    pub role: String,
}

impl AuthUser {
    /// Check that the user's role is one of the allowed set
    pub fn require_role(&self, allowed: &[&str]) -> Result<(), AuthError> {
        if allowed.iter().any(|role| *role == self.role) {
            Ok(())
        } else {
            Err(AuthError::Forbidden(self.role.clone()))
        }
    }
}

impl FromRequest for AuthUser {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(extract_user(req).map_err(Into::into))
    }
}

fn extract_user(req: &HttpRequest) -> Result<AuthUser, AuthError> {
    let validator = req
        .app_data::<web::Data<TokenValidator>>()
        .ok_or(AuthError::NotConfigured)?;

    let header = req
        .headers()
        .get("Authorization")
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::MissingToken)?;

    let token = header
        .strip_prefix("Bearer ")
        .ok_or(AuthError::MissingToken)?;

    let claims = validator.validate(token)?;

    Ok(AuthUser {
        user_id: claims.sub,
        role: claims.role,
    })
}
