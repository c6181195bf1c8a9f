//! 统一 API 错误码定义

use serde_repr::{Deserialize_repr, Serialize_repr};

use crate::errors::LinkHubError;

/// API 错误码枚举
///
/// 使用 serde_repr 序列化为数字。
/// 按千位分域：
/// - 0: 成功
/// - 1000-1099: 通用错误
/// - 2000-2099: 认证错误
/// - 3000-3099: 链接错误
/// - 4000-4099: 用户错误
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize_repr, Deserialize_repr)]
#[repr(i32)]
pub enum ErrorCode {
    // 成功
    Success = 0,

    // 通用错误 1000-1099
    BadRequest = 1000,
    NotFound = 1004,
    InternalServerError = 1005,
    ServiceUnavailable = 1030,

    // 认证错误 2000-2099
    AuthFailed = 2000,
    RateLimitExceeded = 2004,

    // 链接错误 3000-3099
    LinkNotFound = 3000,
    LinkInactive = 3001,

    // 用户错误 4000-4099
    UserNotFound = 4000,
    UsernameTaken = 4001,
    EmailTaken = 4002,
}

impl From<LinkHubError> for ErrorCode {
    fn from(err: LinkHubError) -> Self {
        match err {
            LinkHubError::Validation(_) => Self::BadRequest,
            LinkHubError::Unauthenticated(_) => Self::AuthFailed,
            LinkHubError::UserNotFound(_) => Self::UserNotFound,
            LinkHubError::LinkNotFound(_) => Self::LinkNotFound,
            LinkHubError::LinkInactive(_) => Self::LinkInactive,
            LinkHubError::UsernameTaken(_) => Self::UsernameTaken,
            LinkHubError::EmailTaken(_) => Self::EmailTaken,
            LinkHubError::PasswordHash(_)
            | LinkHubError::DatabaseConfig(_)
            | LinkHubError::DatabaseConnection(_)
            | LinkHubError::DatabaseOperation(_)
            | LinkHubError::Serialization(_) => Self::InternalServerError,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_mapping() {
        assert_eq!(
            ErrorCode::from(LinkHubError::validation("x")),
            ErrorCode::BadRequest
        );
        assert_eq!(
            ErrorCode::from(LinkHubError::unauthenticated("x")),
            ErrorCode::AuthFailed
        );
        assert_eq!(
            ErrorCode::from(LinkHubError::link_inactive("x")),
            ErrorCode::LinkInactive
        );
        assert_eq!(
            ErrorCode::from(LinkHubError::username_taken("x")),
            ErrorCode::UsernameTaken
        );
        assert_eq!(
            ErrorCode::from(LinkHubError::email_taken("x")),
            ErrorCode::EmailTaken
        );
        assert_eq!(
            ErrorCode::from(LinkHubError::database_operation("x")),
            ErrorCode::InternalServerError
        );
    }

    #[test]
    fn test_serializes_as_number() {
        let json = serde_json::to_string(&ErrorCode::LinkInactive).unwrap();
        assert_eq!(json, "3001");
    }
}
