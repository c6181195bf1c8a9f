use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;

/// Global cached JwtService instance
static JWT_SERVICE: OnceLock<JwtService> = OnceLock::new();

/// Get the cached JwtService instance
///
/// Uses OnceLock for thread-safe lazy initialization.
/// The service is initialized once on first use and reused for all subsequent requests.
pub fn get_jwt_service() -> &'static JwtService {
    JWT_SERVICE.get_or_init(JwtService::from_config)
}

/// Access Token Claims
#[derive(Debug, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: String,
    pub iat: i64,
    pub exp: i64,
    pub jti: String,
    pub token_type: String,
}

/// JWT Service for generating and validating session tokens
///
/// 会话 token 是便利功能：API 的任何操作都不要求携带 token。
pub struct JwtService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    access_token_minutes: u64,
}

impl JwtService {
    pub fn new(secret: &str, access_token_minutes: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            access_token_minutes,
        }
    }

    /// Create JwtService from config
    pub fn from_config() -> Self {
        let config = crate::config::get_config();

        // 获取 JWT secret，如果为空则生成一个安全的随机值
        let jwt_secret = if config.auth.jwt_secret.is_empty() {
            use tracing::warn;
            warn!("JWT secret not configured or empty, generating secure random token");
            crate::utils::generate_secure_token(32)
        } else {
            config.auth.jwt_secret.clone()
        };

        Self::new(&jwt_secret, config.auth.access_token_minutes)
    }

    /// Generate an access token for a user id
    pub fn generate_access_token(
        &self,
        user_id: i64,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = Utc::now();
        let claims = AccessClaims {
            sub: user_id.to_string(),
            iat: now.timestamp(),
            exp: (now + Duration::minutes(self.access_token_minutes as i64)).timestamp(),
            jti: uuid::Uuid::new_v4().to_string(),
            token_type: "access".to_string(),
        };

        encode(&Header::default(), &claims, &self.encoding_key)
    }

    /// Validate an access token
    pub fn validate_access_token(
        &self,
        token: &str,
    ) -> Result<AccessClaims, jsonwebtoken::errors::Error> {
        let token_data = decode::<AccessClaims>(token, &self.decoding_key, &Validation::default())?;

        // Verify token type
        if token_data.claims.token_type != "access" {
            return Err(jsonwebtoken::errors::Error::from(
                jsonwebtoken::errors::ErrorKind::InvalidToken,
            ));
        }

        Ok(token_data.claims)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_service() -> JwtService {
        JwtService::new("test_secret_key_32_bytes_long!!", 15)
    }

    #[test]
    fn test_generate_and_validate_access_token() {
        let service = create_test_service();
        let token = service
            .generate_access_token(7)
            .expect("token generation should succeed");

        let claims = service
            .validate_access_token(&token)
            .expect("token validation should succeed");

        assert_eq!(claims.sub, "7");
        assert_eq!(claims.token_type, "access");
        assert!(claims.exp > claims.iat);
    }

    #[test]
    fn test_validate_rejects_garbage() {
        let service = create_test_service();
        assert!(service.validate_access_token("not.a.token").is_err());
    }

    #[test]
    fn test_validate_rejects_wrong_secret() {
        let service = create_test_service();
        let token = service
            .generate_access_token(7)
            .expect("token generation should succeed");

        let other = JwtService::new("another_secret_key_32_bytes!!!!", 15);
        assert!(other.validate_access_token(&token).is_err());
    }

    #[test]
    fn test_tokens_carry_unique_jti() {
        let service = create_test_service();
        let first = service.generate_access_token(1).unwrap();
        let second = service.generate_access_token(1).unwrap();

        let first_claims = service.validate_access_token(&first).unwrap();
        let second_claims = service.validate_access_token(&second).unwrap();
        assert_ne!(first_claims.jti, second_claims.jti);
    }
}
