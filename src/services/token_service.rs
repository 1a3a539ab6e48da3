use chrono::{Duration, Utc};
use jsonwebtoken::{
    Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode, errors::ErrorKind,
};
use serde::{Deserialize, Serialize};

use crate::{
    config::AppConfig,
    error::{AppError, AppResult},
};

/// Claims carried by an access token.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Claims {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub uid: String,
    pub exp: i64,
}

/// Claims carried by a refresh token: only an expiry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RefreshClaims {
    pub exp: i64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TokenPair {
    pub token: String,
    pub refresh_token: String,
}

/// Issues and validates HS256 tokens signed with the server secret.
#[derive(Clone)]
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_ttl: Duration,
    refresh_ttl: Duration,
}

impl TokenService {
    pub fn new(config: &AppConfig) -> Self {
        Self::with_secret(
            &config.jwt_secret,
            config.access_token_ttl,
            config.refresh_token_ttl,
        )
    }

    pub fn with_secret(secret: &str, access_ttl: Duration, refresh_ttl: Duration) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_ttl,
            refresh_ttl,
        }
    }

    pub fn issue_pair(
        &self,
        email: &str,
        first_name: &str,
        last_name: &str,
        uid: &str,
    ) -> AppResult<TokenPair> {
        let now = Utc::now();
        let claims = Claims {
            email: email.to_string(),
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            uid: uid.to_string(),
            exp: (now + self.access_ttl).timestamp(),
        };
        let refresh = RefreshClaims {
            exp: (now + self.refresh_ttl).timestamp(),
        };

        Ok(TokenPair {
            token: self.sign(&claims)?,
            refresh_token: self.sign(&refresh)?,
        })
    }

    /// Verify signature and expiry and return the decoded access claims.
    pub fn validate(&self, token: &str) -> AppResult<Claims> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::ExpiredSignature => AppError::Unauthorized("Token expired".into()),
                _ => AppError::Unauthorized("Token invalid".into()),
            })
    }

    fn sign<T: Serialize>(&self, claims: &T) -> AppResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))
    }
}

/// Pull the raw token out of an `Authorization: Bearer ...` value.
pub fn extract_bearer(header: &str) -> Option<&str> {
    header
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|t| !t.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> TokenService {
        TokenService::with_secret("test-secret", Duration::hours(1), Duration::hours(24))
    }

    #[test]
    fn issued_access_token_validates() {
        let svc = service();
        let pair = svc
            .issue_pair("ada@example.com", "Ada", "Lovelace", "abc123")
            .expect("issue tokens");

        let claims = svc.validate(&pair.token).expect("valid token");
        assert_eq!(claims.email, "ada@example.com");
        assert_eq!(claims.first_name, "Ada");
        assert_eq!(claims.last_name, "Lovelace");
        assert_eq!(claims.uid, "abc123");

        let remaining = claims.exp - Utc::now().timestamp();
        assert!(remaining > 3500 && remaining <= 3600);
    }

    #[test]
    fn refresh_token_expires_after_a_day() {
        let svc = service();
        let pair = svc.issue_pair("a@b.co", "Al", "Bo", "id").unwrap();

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        let refresh = decode::<RefreshClaims>(
            &pair.refresh_token,
            &DecodingKey::from_secret(b"test-secret"),
            &validation,
        )
        .expect("refresh token decodes");
        let remaining = refresh.claims.exp - Utc::now().timestamp();
        assert!(remaining > 24 * 3600 - 100 && remaining <= 24 * 3600);
    }

    #[test]
    fn expired_token_is_rejected() {
        let svc = service();
        let claims = Claims {
            email: "a@b.co".into(),
            first_name: "Al".into(),
            last_name: "Bo".into(),
            uid: "id".into(),
            exp: Utc::now().timestamp() - 5,
        };
        let token = svc.sign(&claims).unwrap();

        match svc.validate(&token) {
            Err(AppError::Unauthorized(msg)) => assert_eq!(msg, "Token expired"),
            other => panic!("expected expiry rejection, got {other:?}"),
        }
    }

    #[test]
    fn token_signed_with_another_secret_is_rejected() {
        let other =
            TokenService::with_secret("other-secret", Duration::hours(1), Duration::hours(24));
        let pair = other.issue_pair("a@b.co", "Al", "Bo", "id").unwrap();

        assert!(matches!(
            service().validate(&pair.token),
            Err(AppError::Unauthorized(_))
        ));
    }

    #[test]
    fn bearer_prefix_is_required() {
        assert_eq!(extract_bearer("Bearer abc"), Some("abc"));
        assert_eq!(extract_bearer("Bearer   "), None);
        assert_eq!(extract_bearer("abc"), None);
    }
}
