use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::{Deserialize, Serialize};

use crate::{config::required_env, Result};

#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub website_url: String,
    pub jwt_algorithm: Algorithm,
}

impl AuthConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            jwt_secret: required_env("JWT_SECRET")?,
            website_url: required_env("WEBSITE_URL")?,
            jwt_algorithm: Algorithm::HS256,
        })
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: String, // subject (user_id)
    pub exp: usize,  // expiration time
    pub iat: usize,  // issued at
    pub nbf: usize,  // not before
    pub iss: String, // issuer
    pub aud: String, // audience
    pub jti: String, // jtw id
}

pub struct TokenService;

impl TokenService {
    /// Tokens are issued by the identity service; this side only verifies them.
    pub fn validate_token(token: &str, config: &AuthConfig) -> Result<Claims> {
        let mut validation = Validation::new(config.jwt_algorithm);
        validation.set_audience(&[config.website_url.to_string()]);
        validation.set_issuer(&[config.website_url.to_string()]);

        let decoded = decode::<Claims>(
            token,
            &DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            &validation,
        )?;
        Ok(decoded.claims)
    }
}
