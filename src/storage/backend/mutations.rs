//! Mutation operations for SeaOrmStorage
//!
//! This module contains all write database operations.

use chrono::Utc;
use sea_orm::ActiveValue::Set;
use sea_orm::{ActiveModelTrait, EntityTrait};
use tracing::info;

use super::SeaOrmStorage;
use super::converters::{model_to_link, model_to_user, new_user_to_active_model};
use crate::errors::{LinkHubError, Result};
use crate::storage::models::{Link, LinkPatch, NewUser, User, UserProfilePatch};

use migration::entities::{link, user};

impl SeaOrmStorage {
    pub async fn insert_user(&self, new_user: NewUser) -> Result<User> {
        let username = new_user.username.clone();
        let model = new_user_to_active_model(&new_user, Utc::now())
            .insert(&self.db)
            .await
            .map_err(|e| {
                LinkHubError::database_operation(format!(
                    "Failed to insert user '{}': {}",
                    username, e
                ))
            })?;

        info!("User created: {} (id {})", model.username, model.id);
        Ok(model_to_user(model))
    }

    /// 稀疏更新用户资料
    ///
    /// patch 中未出现的字段保持 NotSet，不会进入 UPDATE 语句；
    /// updated_at 无条件刷新，即使 patch 为空。
    pub async fn update_user_profile(&self, id: i64, patch: UserProfilePatch) -> Result<User> {
        let existing = user::Entity::find_by_id(id).one(&self.db).await?;
        if existing.is_none() {
            return Err(LinkHubError::user_not_found(format!(
                "User {} not found",
                id
            )));
        }

        let mut model = user::ActiveModel {
            id: Set(id),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        if let Some(display_name) = patch.display_name {
            model.display_name = Set(display_name);
        }
        if let Some(bio) = patch.bio {
            model.bio = Set(bio);
        }
        if let Some(avatar_url) = patch.avatar_url {
            model.avatar_url = Set(avatar_url);
        }

        let updated = model.update(&self.db).await.map_err(|e| {
            LinkHubError::database_operation(format!("Failed to update user {}: {}", id, e))
        })?;

        info!("User profile updated: {}", id);
        Ok(model_to_user(updated))
    }

    /// 稀疏更新链接
    ///
    /// `icon` 是可空列：Some(None) 会清空，None 保持原值。
    pub async fn update_link(&self, id: i64, patch: LinkPatch) -> Result<Link> {
        let existing = link::Entity::find_by_id(id).one(&self.db).await?;
        if existing.is_none() {
            return Err(LinkHubError::link_not_found(format!(
                "Link {} not found",
                id
            )));
        }

        let mut model = link::ActiveModel {
            id: Set(id),
            updated_at: Set(Utc::now()),
            ..Default::default()
        };
        if let Some(title) = patch.title {
            model.title = Set(title);
        }
        if let Some(url) = patch.url {
            model.url = Set(url);
        }
        if let Some(icon) = patch.icon {
            model.icon = Set(icon);
        }
        if let Some(is_active) = patch.is_active {
            model.is_active = Set(is_active);
        }
        if let Some(order_index) = patch.order_index {
            model.order_index = Set(order_index as i32);
        }

        let updated = model.update(&self.db).await.map_err(|e| {
            LinkHubError::database_operation(format!("Failed to update link {}: {}", id, e))
        })?;

        info!("Link updated: {}", id);
        Ok(model_to_link(updated))
    }

    /// 硬删除链接；其余链接的 order_index 不做重排，允许留下空洞
    pub async fn delete_link(&self, id: i64) -> Result<()> {
        let result = link::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(|e| {
                LinkHubError::database_operation(format!("Failed to delete link {}: {}", id, e))
            })?;

        if result.rows_affected == 0 {
            return Err(LinkHubError::link_not_found(format!(
                "Link {} not found",
                id
            )));
        }

        info!("Link deleted: {}", id);
        Ok(())
    }
}
