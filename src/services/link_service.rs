//! Link management service
//!
//! Provides unified business logic for link lifecycle operations:
//! creation with position assignment, sparse updates, deletion and the
//! owner's ordered listing.

use std::sync::Arc;

use tracing::info;

use crate::errors::{LinkHubError, Result};
use crate::storage::{Link, LinkPatch, NewLink, SeaOrmStorage};
use crate::utils::url_validator::validate_url;
use crate::utils::validation::validate_link_title;

// ============ Request DTOs ============

/// Request to create a new link
#[derive(Debug, Clone)]
pub struct CreateLinkRequest {
    /// Owner of the new link
    pub owner_id: i64,
    /// Display title (1-100 chars)
    pub title: String,
    /// Target URL
    pub url: String,
    /// Optional icon (emoji or identifier)
    pub icon: Option<String>,
    /// Explicit display position; assigned automatically when omitted
    pub order_index: Option<u32>,
}

/// Request to update an existing link
///
/// 每个字段独立可选：未出现的字段保持原值。`icon` 是可空字段，
/// 用双层 Option 区分"未出现"与"显式置空"。
#[derive(Debug, Clone, Default)]
pub struct UpdateLinkRequest {
    pub title: Option<String>,
    pub url: Option<String>,
    pub icon: Option<Option<String>>,
    pub is_active: Option<bool>,
    pub order_index: Option<u32>,
}

// ============ LinkService Implementation ============

/// Service for link lifecycle operations
pub struct LinkService {
    storage: Arc<SeaOrmStorage>,
}

impl LinkService {
    pub fn new(storage: Arc<SeaOrmStorage>) -> Self {
        Self { storage }
    }

    /// Create a new link
    ///
    /// 所有者必须存在；位置分配语义见存储层 `create_link`。
    /// 新链接总是从 click_count = 0、is_active = true 开始。
    pub async fn create_link(&self, req: CreateLinkRequest) -> Result<Link> {
        validate_link_title(&req.title).map_err(|e| LinkHubError::validation(e.to_string()))?;
        validate_url(&req.url).map_err(|e| LinkHubError::validation(e.to_string()))?;

        let owner = self.storage.find_user_by_id(req.owner_id).await?;
        if owner.is_none() {
            return Err(LinkHubError::user_not_found(format!(
                "User {} not found",
                req.owner_id
            )));
        }

        let link = self
            .storage
            .create_link(NewLink {
                owner_id: req.owner_id,
                title: req.title,
                url: req.url,
                icon: req.icon,
                order_index: req.order_index,
            })
            .await?;

        info!(
            "LinkService: created link {} for owner {} at position {}",
            link.id, link.owner_id, link.order_index
        );
        Ok(link)
    }

    /// Update an existing link
    ///
    /// 只校验请求中出现的字段；updated_at 即使在空 patch 下也会刷新。
    pub async fn update_link(&self, id: i64, req: UpdateLinkRequest) -> Result<Link> {
        if let Some(ref title) = req.title {
            validate_link_title(title).map_err(|e| LinkHubError::validation(e.to_string()))?;
        }
        if let Some(ref url) = req.url {
            validate_url(url).map_err(|e| LinkHubError::validation(e.to_string()))?;
        }

        let link = self
            .storage
            .update_link(
                id,
                LinkPatch {
                    title: req.title,
                    url: req.url,
                    icon: req.icon,
                    is_active: req.is_active,
                    order_index: req.order_index,
                },
            )
            .await?;

        info!("LinkService: updated link {}", id);
        Ok(link)
    }

    /// Delete a link
    pub async fn delete_link(&self, id: i64) -> Result<()> {
        self.storage.delete_link(id).await?;
        info!("LinkService: deleted link {}", id);
        Ok(())
    }

    /// List all links of an owner (active and inactive), display order
    ///
    /// 未知所有者返回空列表而不是错误。
    pub async fn list_owner_links(&self, owner_id: i64) -> Result<Vec<Link>> {
        self.storage.list_links_for_owner(owner_id).await
    }
}
