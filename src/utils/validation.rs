//! 注册与链接输入的字段校验

/// 用户名长度限制
pub const USERNAME_MIN_LEN: usize = 3;
pub const USERNAME_MAX_LEN: usize = 30;

/// 链接标题长度限制
pub const TITLE_MAX_LEN: usize = 100;

/// 密码最小长度
pub const PASSWORD_MIN_LEN: usize = 6;

/// 字段校验错误
#[derive(Debug, PartialEq, Eq)]
pub enum FieldValidationError {
    UsernameLength,
    UsernameCharset,
    EmailFormat,
    TitleEmpty,
    TitleTooLong,
    PasswordTooShort,
}

impl std::fmt::Display for FieldValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UsernameLength => write!(
                f,
                "Username must be {}-{} characters long",
                USERNAME_MIN_LEN, USERNAME_MAX_LEN
            ),
            Self::UsernameCharset => {
                write!(f, "Username may only contain letters, digits and underscore")
            }
            Self::EmailFormat => write!(f, "Invalid email address"),
            Self::TitleEmpty => write!(f, "Title cannot be empty"),
            Self::TitleTooLong => {
                write!(f, "Title must be at most {} characters long", TITLE_MAX_LEN)
            }
            Self::PasswordTooShort => write!(
                f,
                "Password must be at least {} characters long",
                PASSWORD_MIN_LEN
            ),
        }
    }
}

impl std::error::Error for FieldValidationError {}

/// 验证用户名：3-30 个字符，仅允许字母、数字和下划线
///
/// 用户名同时作为公开主页的 URL slug，所以字符集必须保持 URL 安全。
pub fn validate_username(username: &str) -> Result<(), FieldValidationError> {
    let len = username.chars().count();
    if !(USERNAME_MIN_LEN..=USERNAME_MAX_LEN).contains(&len) {
        return Err(FieldValidationError::UsernameLength);
    }

    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err(FieldValidationError::UsernameCharset);
    }

    Ok(())
}

/// 验证邮箱地址的基本语法
///
/// 只做语法层面的检查：恰好一个 '@'，本地部分和域名部分非空，
/// 域名包含 '.' 且不以 '.' 开头或结尾，不含空白字符。
pub fn validate_email(email: &str) -> Result<(), FieldValidationError> {
    if email.is_empty() || email.chars().any(|c| c.is_whitespace()) {
        return Err(FieldValidationError::EmailFormat);
    }

    let mut parts = email.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();

    if local.is_empty() || domain.is_empty() || domain.contains('@') {
        return Err(FieldValidationError::EmailFormat);
    }

    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(FieldValidationError::EmailFormat);
    }

    Ok(())
}

/// 验证链接标题：1-100 个字符
pub fn validate_link_title(title: &str) -> Result<(), FieldValidationError> {
    let len = title.chars().count();
    if len == 0 {
        return Err(FieldValidationError::TitleEmpty);
    }
    if len > TITLE_MAX_LEN {
        return Err(FieldValidationError::TitleTooLong);
    }
    Ok(())
}

/// 验证密码最小长度
pub fn validate_password(password: &str) -> Result<(), FieldValidationError> {
    if password.chars().count() < PASSWORD_MIN_LEN {
        return Err(FieldValidationError::PasswordTooShort);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_usernames() {
        assert!(validate_username("abc").is_ok());
        assert!(validate_username("user_123").is_ok());
        assert!(validate_username("A_B_C").is_ok());
        assert!(validate_username(&"a".repeat(30)).is_ok());
    }

    #[test]
    fn test_username_length_limits() {
        assert_eq!(
            validate_username("ab"),
            Err(FieldValidationError::UsernameLength)
        );
        assert_eq!(
            validate_username(&"a".repeat(31)),
            Err(FieldValidationError::UsernameLength)
        );
        assert_eq!(
            validate_username(""),
            Err(FieldValidationError::UsernameLength)
        );
    }

    #[test]
    fn test_username_charset() {
        assert_eq!(
            validate_username("user-name"),
            Err(FieldValidationError::UsernameCharset)
        );
        assert_eq!(
            validate_username("user name"),
            Err(FieldValidationError::UsernameCharset)
        );
        assert_eq!(
            validate_username("usér"),
            Err(FieldValidationError::UsernameCharset)
        );
    }

    #[test]
    fn test_valid_emails() {
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("user.name+tag@example.com").is_ok());
    }

    #[test]
    fn test_invalid_emails() {
        assert_eq!(validate_email(""), Err(FieldValidationError::EmailFormat));
        assert_eq!(
            validate_email("no-at-sign"),
            Err(FieldValidationError::EmailFormat)
        );
        assert_eq!(
            validate_email("@example.com"),
            Err(FieldValidationError::EmailFormat)
        );
        assert_eq!(
            validate_email("user@"),
            Err(FieldValidationError::EmailFormat)
        );
        assert_eq!(
            validate_email("user@nodot"),
            Err(FieldValidationError::EmailFormat)
        );
        assert_eq!(
            validate_email("user@.com"),
            Err(FieldValidationError::EmailFormat)
        );
        assert_eq!(
            validate_email("us er@example.com"),
            Err(FieldValidationError::EmailFormat)
        );
    }

    #[test]
    fn test_link_title() {
        assert!(validate_link_title("My Site").is_ok());
        assert!(validate_link_title(&"x".repeat(100)).is_ok());
        assert_eq!(
            validate_link_title(""),
            Err(FieldValidationError::TitleEmpty)
        );
        assert_eq!(
            validate_link_title(&"x".repeat(101)),
            Err(FieldValidationError::TitleTooLong)
        );
    }

    #[test]
    fn test_password_length() {
        assert!(validate_password("secret").is_ok());
        assert_eq!(
            validate_password("short"),
            Err(FieldValidationError::PasswordTooShort)
        );
    }
}
