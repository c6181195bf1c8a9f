use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 用户账号记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    /// Argon2id PHC 哈希，绝不存储明文口令
    pub password_hash: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 链接记录
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Link {
    pub id: i64,
    pub owner_id: i64,
    pub title: String,
    pub url: String,
    pub icon: Option<String>,
    #[serde(default)]
    pub click_count: u64,
    pub is_active: bool,
    pub order_index: u32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// 新用户插入参数（id 与时间戳由存储层分配）
#[derive(Debug, Clone)]
pub struct NewUser {
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
}

/// 新链接插入参数
///
/// `order_index` 为 None 时由存储层在事务内分配下一个位置。
#[derive(Debug, Clone)]
pub struct NewLink {
    pub owner_id: i64,
    pub title: String,
    pub url: String,
    pub icon: Option<String>,
    pub order_index: Option<u32>,
}

/// 用户资料的稀疏更新
///
/// 外层 None = 字段未出现，保持原值；
/// Some(None) = 显式置空；Some(Some(v)) = 设置新值。
#[derive(Debug, Clone, Default)]
pub struct UserProfilePatch {
    pub display_name: Option<Option<String>>,
    pub bio: Option<Option<String>>,
    pub avatar_url: Option<Option<String>>,
}

/// 链接的稀疏更新
///
/// `icon` 是唯一可空列，使用双层 Option 区分"未出现"与"显式置空"。
#[derive(Debug, Clone, Default)]
pub struct LinkPatch {
    pub title: Option<String>,
    pub url: Option<String>,
    pub icon: Option<Option<String>>,
    pub is_active: Option<bool>,
    pub order_index: Option<u32>,
}

impl UserProfilePatch {
    /// 是否不包含任何字段（时间戳仍会刷新）
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none() && self.bio.is_none() && self.avatar_url.is_none()
    }
}

impl LinkPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.url.is_none()
            && self.icon.is_none()
            && self.is_active.is_none()
            && self.order_index.is_none()
    }
}
