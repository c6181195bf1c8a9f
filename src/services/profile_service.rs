//! Public profile assembly
//!
//! Joins a user's public presentation fields with the active subset of
//! their links. Everything sensitive (numeric id, email, credential,
//! timestamps) stays out of the projection.

use std::sync::Arc;

use tracing::info;

use crate::errors::{LinkHubError, Result};
use crate::storage::{Link, SeaOrmStorage};

/// Public projection of a link
#[derive(Debug, Clone)]
pub struct PublicLink {
    pub id: i64,
    pub title: String,
    pub url: String,
    pub icon: Option<String>,
    pub click_count: u64,
}

impl From<Link> for PublicLink {
    fn from(link: Link) -> Self {
        Self {
            id: link.id,
            title: link.title,
            url: link.url,
            icon: link.icon,
            click_count: link.click_count,
        }
    }
}

/// Public projection of a user plus their active links
#[derive(Debug, Clone)]
pub struct PublicProfile {
    pub username: String,
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar_url: Option<String>,
    pub links: Vec<PublicLink>,
}

/// Service for public profile assembly
pub struct ProfileService {
    storage: Arc<SeaOrmStorage>,
}

impl ProfileService {
    pub fn new(storage: Arc<SeaOrmStorage>) -> Self {
        Self { storage }
    }

    /// Assemble the public profile for a username
    ///
    /// 未激活链接完全排除，不是打标记。
    pub async fn get_public_profile(&self, username: &str) -> Result<PublicProfile> {
        let user = self
            .storage
            .find_user_by_username(username)
            .await?
            .ok_or_else(|| {
                LinkHubError::user_not_found(format!("User '{}' not found", username))
            })?;

        let links = self.storage.list_active_links_for_owner(user.id).await?;

        info!(
            "ProfileService: assembled profile '{}' with {} active links",
            user.username,
            links.len()
        );

        Ok(PublicProfile {
            username: user.username,
            display_name: user.display_name,
            bio: user.bio,
            avatar_url: user.avatar_url,
            links: links.into_iter().map(PublicLink::from).collect(),
        })
    }
}
