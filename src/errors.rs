use actix_web::http::StatusCode;
use std::fmt;

#[derive(Debug, Clone)]
pub enum LinkHubError {
    Validation(String),
    UsernameTaken(String),
    EmailTaken(String),
    Unauthenticated(String),
    UserNotFound(String),
    LinkNotFound(String),
    LinkInactive(String),
    PasswordHash(String),
    DatabaseConfig(String),
    DatabaseConnection(String),
    DatabaseOperation(String),
    Serialization(String),
}

impl LinkHubError {
    /// 获取错误代码
    pub fn code(&self) -> &'static str {
        match self {
            LinkHubError::Validation(_) => "E001",
            LinkHubError::UsernameTaken(_) => "E002",
            LinkHubError::EmailTaken(_) => "E003",
            LinkHubError::Unauthenticated(_) => "E004",
            LinkHubError::UserNotFound(_) => "E005",
            LinkHubError::LinkNotFound(_) => "E006",
            LinkHubError::LinkInactive(_) => "E007",
            LinkHubError::PasswordHash(_) => "E008",
            LinkHubError::DatabaseConfig(_) => "E009",
            LinkHubError::DatabaseConnection(_) => "E010",
            LinkHubError::DatabaseOperation(_) => "E011",
            LinkHubError::Serialization(_) => "E012",
        }
    }

    /// 获取错误类型名称
    pub fn error_type(&self) -> &'static str {
        match self {
            LinkHubError::Validation(_) => "Validation Error",
            LinkHubError::UsernameTaken(_) => "Username Taken",
            LinkHubError::EmailTaken(_) => "Email Taken",
            LinkHubError::Unauthenticated(_) => "Unauthenticated",
            LinkHubError::UserNotFound(_) => "User Not Found",
            LinkHubError::LinkNotFound(_) => "Link Not Found",
            LinkHubError::LinkInactive(_) => "Link Inactive",
            LinkHubError::PasswordHash(_) => "Password Hash Error",
            LinkHubError::DatabaseConfig(_) => "Database Configuration Error",
            LinkHubError::DatabaseConnection(_) => "Database Connection Error",
            LinkHubError::DatabaseOperation(_) => "Database Operation Error",
            LinkHubError::Serialization(_) => "Serialization Error",
        }
    }

    /// 获取错误详情
    pub fn message(&self) -> &str {
        match self {
            LinkHubError::Validation(msg)
            | LinkHubError::UsernameTaken(msg)
            | LinkHubError::EmailTaken(msg)
            | LinkHubError::Unauthenticated(msg)
            | LinkHubError::UserNotFound(msg)
            | LinkHubError::LinkNotFound(msg)
            | LinkHubError::LinkInactive(msg)
            | LinkHubError::PasswordHash(msg)
            | LinkHubError::DatabaseConfig(msg)
            | LinkHubError::DatabaseConnection(msg)
            | LinkHubError::DatabaseOperation(msg)
            | LinkHubError::Serialization(msg) => msg,
        }
    }

    /// 映射为 HTTP 状态码
    pub fn http_status(&self) -> StatusCode {
        match self {
            LinkHubError::Validation(_) => StatusCode::BAD_REQUEST,
            LinkHubError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            LinkHubError::UserNotFound(_) | LinkHubError::LinkNotFound(_) => StatusCode::NOT_FOUND,
            LinkHubError::UsernameTaken(_)
            | LinkHubError::EmailTaken(_)
            | LinkHubError::LinkInactive(_) => StatusCode::CONFLICT,
            LinkHubError::PasswordHash(_)
            | LinkHubError::DatabaseConfig(_)
            | LinkHubError::DatabaseConnection(_)
            | LinkHubError::DatabaseOperation(_)
            | LinkHubError::Serialization(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 格式化为简洁输出
    pub fn format_simple(&self) -> String {
        format!("{}: {}", self.error_type(), self.message())
    }
}

impl fmt::Display for LinkHubError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format_simple())
    }
}

impl std::error::Error for LinkHubError {}

// 便捷的构造函数
impl LinkHubError {
    pub fn validation<T: Into<String>>(msg: T) -> Self {
        LinkHubError::Validation(msg.into())
    }

    pub fn username_taken<T: Into<String>>(msg: T) -> Self {
        LinkHubError::UsernameTaken(msg.into())
    }

    pub fn email_taken<T: Into<String>>(msg: T) -> Self {
        LinkHubError::EmailTaken(msg.into())
    }

    pub fn unauthenticated<T: Into<String>>(msg: T) -> Self {
        LinkHubError::Unauthenticated(msg.into())
    }

    pub fn user_not_found<T: Into<String>>(msg: T) -> Self {
        LinkHubError::UserNotFound(msg.into())
    }

    pub fn link_not_found<T: Into<String>>(msg: T) -> Self {
        LinkHubError::LinkNotFound(msg.into())
    }

    pub fn link_inactive<T: Into<String>>(msg: T) -> Self {
        LinkHubError::LinkInactive(msg.into())
    }

    pub fn password_hash<T: Into<String>>(msg: T) -> Self {
        LinkHubError::PasswordHash(msg.into())
    }

    pub fn database_config<T: Into<String>>(msg: T) -> Self {
        LinkHubError::DatabaseConfig(msg.into())
    }

    pub fn database_connection<T: Into<String>>(msg: T) -> Self {
        LinkHubError::DatabaseConnection(msg.into())
    }

    pub fn database_operation<T: Into<String>>(msg: T) -> Self {
        LinkHubError::DatabaseOperation(msg.into())
    }

    pub fn serialization<T: Into<String>>(msg: T) -> Self {
        LinkHubError::Serialization(msg.into())
    }
}

// 为常见的错误类型实现 From trait
impl From<sea_orm::DbErr> for LinkHubError {
    fn from(err: sea_orm::DbErr) -> Self {
        LinkHubError::DatabaseOperation(err.to_string())
    }
}

impl From<serde_json::Error> for LinkHubError {
    fn from(err: serde_json::Error) -> Self {
        LinkHubError::Serialization(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, LinkHubError>;
