//! HS256 admin session tokens.

use crate::error::AppError;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};

/// Claims carried by an admin token. `id` and `name` double as the login payload.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct AdminClaims {
    pub id: i32,
    pub name: String,
    pub iat: usize,
    pub exp: usize,
}

pub struct TokenKeys {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl_secs: u64,
}

impl TokenKeys {
    pub fn new(secret: &str, ttl_secs: u64) -> Self {
        TokenKeys {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl_secs,
        }
    }

    pub fn issue(&self, id: i32, name: &str) -> Result<String, AppError> {
        let now = chrono::Utc::now().timestamp() as usize;
        let claims = AdminClaims {
            id,
            name: name.to_string(),
            iat: now,
            exp: now + self.ttl_secs as usize,
        };
        Ok(encode(&Header::default(), &claims, &self.encoding)?)
    }

    /// Decode and validate signature and expiry.
    pub fn verify(&self, token: &str) -> Result<AdminClaims, AppError> {
        decode::<AdminClaims>(token, &self.decoding, &Validation::default())
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "rejected admin token");
                AppError::Unauthorized("Invalid or expired token.".into())
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issued_token_verifies() {
        let keys = TokenKeys::new("secret", 3600);
        let token = keys.issue(7, "Administrator").unwrap();
        let claims = keys.verify(&token).unwrap();
        assert_eq!(claims.id, 7);
        assert_eq!(claims.name, "Administrator");
        assert_eq!(claims.exp - claims.iat, 3600);
    }

    #[test]
    fn wrong_secret_is_unauthorized() {
        let token = TokenKeys::new("one", 3600).issue(1, "a").unwrap();
        let err = TokenKeys::new("two", 3600).verify(&token).unwrap_err();
        assert!(matches!(err, AppError::Unauthorized(_)));
    }

    #[test]
    fn expired_token_is_unauthorized() {
        let keys = TokenKeys::new("secret", 3600);
        let claims = AdminClaims {
            id: 1,
            name: "a".into(),
            iat: 1_000,
            exp: 2_000,
        };
        let token = encode(&Header::default(), &claims, &keys.encoding).unwrap();
        assert!(matches!(keys.verify(&token), Err(AppError::Unauthorized(_))));
    }
}
