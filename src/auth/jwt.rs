//! JWT 验证服务
//! HS256 验签；sub 为管理员 ID

use crate::{config::AppConfig, error::AppError};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};

/// 访问令牌声明
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// 管理员 ID（UUID 字符串）
    pub sub: String,
    /// 管理员邮箱
    pub email: String,
    /// 签发时间（Unix 时间戳）
    pub iat: i64,
    /// 过期时间（Unix 时间戳）
    pub exp: i64,
}

pub struct JwtService {
    decoding_key: DecodingKey,
    validation: Validation,
}

impl JwtService {
    pub fn new(secret: &str) -> Self {
        Self {
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            validation: Validation::new(Algorithm::HS256),
        }
    }

    pub fn from_config(config: &AppConfig) -> Self {
        Self::new(config.security.jwt_secret.expose_secret())
    }

    /// 验证访问令牌
    /// 任何验签/过期/格式错误统一视为未认证
    pub fn validate_access_token(&self, token: &str) -> Result<Claims, AppError> {
        decode::<Claims>(token, &self.decoding_key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| {
                tracing::debug!(error = %e, "Token validation failed");
                AppError::Unauthorized
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jsonwebtoken::{encode, EncodingKey, Header};

    const TEST_SECRET: &str = "test-secret-for-unit-tests-at-least-32-chars";

    fn make_token(secret: &str, exp_offset_secs: i64) -> String {
        let now = chrono::Utc::now().timestamp();
        let claims = Claims {
            sub: uuid::Uuid::new_v4().to_string(),
            email: "admin@example.com".to_string(),
            iat: now,
            exp: now + exp_offset_secs,
        };
        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    #[test]
    fn test_validate_valid_token() {
        let service = JwtService::new(TEST_SECRET);
        let token = make_token(TEST_SECRET, 3600);

        let claims = service.validate_access_token(&token).unwrap();
        assert_eq!(claims.email, "admin@example.com");
        assert!(uuid::Uuid::parse_str(&claims.sub).is_ok());
    }

    #[test]
    fn test_validate_expired_token() {
        let service = JwtService::new(TEST_SECRET);
        let token = make_token(TEST_SECRET, -3600);

        assert!(service.validate_access_token(&token).is_err());
    }

    #[test]
    fn test_validate_wrong_secret() {
        let service = JwtService::new(TEST_SECRET);
        let token = make_token("another-secret-also-32-characters-long!!", 3600);

        assert!(service.validate_access_token(&token).is_err());
    }

    #[test]
    fn test_validate_garbage_token() {
        let service = JwtService::new(TEST_SECRET);
        assert!(service.validate_access_token("not-a-jwt").is_err());
    }
}
