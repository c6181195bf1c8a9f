//! API 类型定义
//!
//! 请求 payload、响应 DTO 与统一响应信封。日期一律序列化为 RFC 3339。

use serde::{Deserialize, Deserializer, Serialize};

use crate::services::{
    AuthenticateRequest, CreateLinkRequest, PublicLink, PublicProfile, RegisterRequest,
    UpdateLinkRequest, UpdateProfileRequest,
};
use crate::storage::{Link, User};

/// 统一响应信封
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    pub data: Option<T>,
}

/// 反序列化为双层 Option，区分"字段缺失"与"显式 null"
///
/// 配合 `#[serde(default)]` 使用：缺失 = None，null = Some(None)，
/// 有值 = Some(Some(v))。稀疏更新的核心契约依赖这个区分。
pub(crate) fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}

// ============ Request payloads ============

#[derive(Deserialize, Clone, Debug)]
pub struct RegisterPayload {
    pub username: String,
    pub email: String,
    pub password: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

impl RegisterPayload {
    pub fn into_request(self) -> RegisterRequest {
        RegisterRequest {
            username: self.username,
            email: self.email,
            password: self.password,
            display_name: self.display_name,
            bio: self.bio,
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct LoginPayload {
    pub email: String,
    pub password: String,
}

impl LoginPayload {
    pub fn into_request(self) -> AuthenticateRequest {
        AuthenticateRequest {
            email: self.email,
            password: self.password,
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct UpdateProfilePayload {
    #[serde(default, deserialize_with = "double_option")]
    pub display_name: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub bio: Option<Option<String>>,
    #[serde(default, deserialize_with = "double_option")]
    pub avatar_url: Option<Option<String>>,
}

impl UpdateProfilePayload {
    pub fn into_request(self) -> UpdateProfileRequest {
        UpdateProfileRequest {
            display_name: self.display_name,
            bio: self.bio,
            avatar_url: self.avatar_url,
        }
    }
}

#[derive(Deserialize, Clone, Debug)]
pub struct PostNewLink {
    pub user_id: i64,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub icon: Option<String>,
    #[serde(default)]
    pub order_index: Option<u32>,
}

impl PostNewLink {
    pub fn into_request(self) -> CreateLinkRequest {
        CreateLinkRequest {
            owner_id: self.user_id,
            title: self.title,
            url: self.url,
            icon: self.icon,
            order_index: self.order_index,
        }
    }
}

#[derive(Deserialize, Clone, Debug, Default)]
pub struct UpdateLinkPayload {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub url: Option<String>,
    /// icon 是可空字段：null 清空，缺失保持原值
    #[serde(default, deserialize_with = "double_option")]
    pub icon: Option<Option<String>>,
    #[serde(default)]
    pub is_active: Option<bool>,
    #[serde(default)]
    pub order_index: Option<u32>,
}

impl UpdateLinkPayload {
    pub fn into_request(self) -> UpdateLinkRequest {
        UpdateLinkRequest {
            title: self.title,
            url: self.url,
            icon: self.icon,
            is_active: self.is_active,
            order_index: self.order_index,
        }
    }
}

// ============ Response DTOs ============

/// 用户的公开字段，绝不包含凭证材料
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct UserResponse {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: String,
    pub updated_at: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            display_name: user.display_name,
            bio: user.bio,
            avatar_url: user.avatar_url,
            created_at: user.created_at.to_rfc3339(),
            updated_at: user.updated_at.to_rfc3339(),
        }
    }
}

/// 注册/登录响应：公开用户字段 + 可选会话 token
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct AuthResponse {
    pub user: UserResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct LinkResponse {
    pub id: i64,
    pub user_id: i64,
    pub title: String,
    pub url: String,
    pub icon: Option<String>,
    pub click_count: u64,
    pub is_active: bool,
    pub order_index: u32,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Link> for LinkResponse {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            user_id: link.owner_id,
            title: link.title,
            url: link.url,
            icon: link.icon,
            click_count: link.click_count,
            is_active: link.is_active,
            order_index: link.order_index,
            created_at: link.created_at.to_rfc3339(),
            updated_at: link.updated_at.to_rfc3339(),
        }
    }
}

/// 公开主页中的链接投影
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PublicLinkResponse {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub icon: Option<String>,
    pub click_count: u64,
}

impl From<PublicLink> for PublicLinkResponse {
    fn from(link: PublicLink) -> Self {
        Self {
            id: link.id,
            title: link.title,
            url: link.url,
            icon: link.icon,
            click_count: link.click_count,
        }
    }
}

/// 公开主页响应：无数字 id、无邮箱、无时间戳
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PublicProfileResponse {
    pub username: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub links: Vec<PublicLinkResponse>,
}

impl From<PublicProfile> for PublicProfileResponse {
    fn from(profile: PublicProfile) -> Self {
        Self {
            username: profile.username,
            display_name: profile.display_name,
            bio: profile.bio,
            avatar_url: profile.avatar_url,
            links: profile
                .links
                .into_iter()
                .map(PublicLinkResponse::from)
                .collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct DeleteResponse {
    pub success: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct TrackClickResponse {
    pub success: bool,
    pub click_count: u64,
}

// ============ 健康检查相关类型 ============

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthStorageCheck {
    pub status: String,
    pub backend: String,
    pub users_count: Option<u64>,
    pub links_count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthChecks {
    pub storage: HealthStorageCheck,
}

#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: String,
    pub uptime: u32,
    pub checks: HealthChecks,
    pub response_time_ms: u32,
}
