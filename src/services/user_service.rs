//! User identity service
//!
//! Registration, authentication and profile updates. Owns the
//! username/email uniqueness invariants.

use std::sync::Arc;

use tracing::{error, info};

use crate::errors::{LinkHubError, Result};
use crate::storage::{NewUser, SeaOrmStorage, User, UserProfilePatch};
use crate::utils::password::{hash_password, verify_password};
use crate::utils::validation::{validate_email, validate_password, validate_username};

// ============ Request DTOs ============

/// Request to register a new user
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    pub username: String,
    pub email: String,
    pub password: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
}

/// Request to authenticate by email and password
#[derive(Debug, Clone)]
pub struct AuthenticateRequest {
    pub email: String,
    pub password: String,
}

/// Sparse profile update
///
/// 外层 None = 字段未出现；Some(None) = 显式置空。
#[derive(Debug, Clone, Default)]
pub struct UpdateProfileRequest {
    pub display_name: Option<Option<String>>,
    pub bio: Option<Option<String>>,
    pub avatar_url: Option<Option<String>>,
}

// ============ UserService Implementation ============

/// Service for account management operations
pub struct UserService {
    storage: Arc<SeaOrmStorage>,
}

impl UserService {
    pub fn new(storage: Arc<SeaOrmStorage>) -> Self {
        Self { storage }
    }

    /// Register a new user
    ///
    /// 用户名和邮箱占用在一次查询内检查；两者同时冲突时，优先报告用户名冲突。
    pub async fn register(&self, req: RegisterRequest) -> Result<User> {
        validate_username(&req.username).map_err(|e| LinkHubError::validation(e.to_string()))?;
        validate_email(&req.email).map_err(|e| LinkHubError::validation(e.to_string()))?;
        validate_password(&req.password).map_err(|e| LinkHubError::validation(e.to_string()))?;

        let conflicts = self
            .storage
            .find_users_by_username_or_email(&req.username, &req.email)
            .await?;

        if conflicts.iter().any(|u| u.username == req.username) {
            return Err(LinkHubError::username_taken(format!(
                "Username '{}' already exists",
                req.username
            )));
        }
        if conflicts.iter().any(|u| u.email == req.email) {
            return Err(LinkHubError::email_taken(format!(
                "Email '{}' already exists",
                req.email
            )));
        }

        // 只存储派生哈希，绝不存储原始口令
        let password_hash = hash_password(&req.password).map_err(|e| {
            error!("Failed to hash password: {}", e);
            LinkHubError::password_hash(e.to_string())
        })?;

        let user = self
            .storage
            .insert_user(NewUser {
                username: req.username,
                email: req.email,
                password_hash,
                display_name: req.display_name,
                bio: req.bio,
            })
            .await?;

        info!("UserService: registered '{}'", user.username);
        Ok(user)
    }

    /// Authenticate a user by email and password
    ///
    /// 未知邮箱和密码错误返回同一错误，不泄露账号是否存在。
    pub async fn authenticate(&self, req: AuthenticateRequest) -> Result<User> {
        let user = self
            .storage
            .find_user_by_email(&req.email)
            .await?
            .ok_or_else(|| LinkHubError::unauthenticated("Invalid email or password"))?;

        let password_valid = verify_password(&req.password, &user.password_hash).map_err(|e| {
            error!("Password verification error: {}", e);
            LinkHubError::password_hash(e.to_string())
        })?;

        if !password_valid {
            return Err(LinkHubError::unauthenticated("Invalid email or password"));
        }

        info!("UserService: authenticated '{}'", user.username);
        Ok(user)
    }

    /// Update profile presentation fields
    ///
    /// 未出现的字段保持原值，显式 null 清空；updated_at 总是刷新。
    pub async fn update_profile(&self, id: i64, req: UpdateProfileRequest) -> Result<User> {
        let user = self
            .storage
            .update_user_profile(
                id,
                UserProfilePatch {
                    display_name: req.display_name,
                    bio: req.bio,
                    avatar_url: req.avatar_url,
                },
            )
            .await?;

        info!("UserService: updated profile for user {}", id);
        Ok(user)
    }
}
