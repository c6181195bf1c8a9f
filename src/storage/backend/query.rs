//! Query operations for SeaOrmStorage
//!
//! This module contains all read-only database operations.

use sea_orm::{ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};

use super::SeaOrmStorage;
use super::converters::{model_to_link, model_to_user};
use crate::errors::Result;
use crate::storage::models::{Link, User};

use migration::entities::{link, user};

impl SeaOrmStorage {
    pub async fn find_user_by_id(&self, id: i64) -> Result<Option<User>> {
        let model = user::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(model_to_user))
    }

    pub async fn find_user_by_username(&self, username: &str) -> Result<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Username.eq(username))
            .one(&self.db)
            .await?;
        Ok(model.map(model_to_user))
    }

    /// 按邮箱精确查找（区分大小写，登录路径使用）
    pub async fn find_user_by_email(&self, email: &str) -> Result<Option<User>> {
        let model = user::Entity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await?;
        Ok(model.map(model_to_user))
    }

    /// 注册冲突检查：一次查询同时匹配用户名和邮箱
    ///
    /// 返回所有命中的记录，调用方决定冲突报告的优先级。
    pub async fn find_users_by_username_or_email(
        &self,
        username: &str,
        email: &str,
    ) -> Result<Vec<User>> {
        let models = user::Entity::find()
            .filter(
                Condition::any()
                    .add(user::Column::Username.eq(username))
                    .add(user::Column::Email.eq(email)),
            )
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_user).collect())
    }

    pub async fn find_link(&self, id: i64) -> Result<Option<Link>> {
        let model = link::Entity::find_by_id(id).one(&self.db).await?;
        Ok(model.map(model_to_link))
    }

    /// 所有者视图：全部链接（含未激活），按 order_index 升序
    ///
    /// order_index 允许重复，用 id 作为稳定的次级排序。
    pub async fn list_links_for_owner(&self, owner_id: i64) -> Result<Vec<Link>> {
        let models = link::Entity::find()
            .filter(link::Column::UserId.eq(owner_id))
            .order_by_asc(link::Column::OrderIndex)
            .order_by_asc(link::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_link).collect())
    }

    /// 公开视图：仅激活链接，按 order_index 升序
    pub async fn list_active_links_for_owner(&self, owner_id: i64) -> Result<Vec<Link>> {
        let models = link::Entity::find()
            .filter(link::Column::UserId.eq(owner_id))
            .filter(link::Column::IsActive.eq(true))
            .order_by_asc(link::Column::OrderIndex)
            .order_by_asc(link::Column::Id)
            .all(&self.db)
            .await?;
        Ok(models.into_iter().map(model_to_link).collect())
    }

    pub async fn count_users(&self) -> Result<u64> {
        Ok(user::Entity::find().count(&self.db).await?)
    }

    pub async fn count_links(&self) -> Result<u64> {
        Ok(link::Entity::find().count(&self.db).await?)
    }
}
