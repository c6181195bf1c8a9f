pub mod password;
pub mod url_validator;
pub mod validation;

pub use url_validator::validate_url;
pub use validation::{validate_email, validate_link_title, validate_password, validate_username};

/// 生成加密安全的随机 token（字母和数字）
pub fn generate_secure_token(length: usize) -> String {
    use std::iter;

    let chars = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

    iter::repeat_with(|| chars[rand::random_range(0..chars.len())] as char)
        .take(length)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_secure_token_length() {
        assert_eq!(generate_secure_token(32).len(), 32);
        assert_eq!(generate_secure_token(0).len(), 0);
    }

    #[test]
    fn test_generate_secure_token_charset() {
        let token = generate_secure_token(64);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
