//! Atomic storage operations
//!
//! Position assignment runs inside a single transaction, and click
//! accounting is one conditional UPDATE executed by the database, so
//! neither loses writes under concurrent requests.

use chrono::Utc;
use sea_orm::sea_query::{Expr, Query};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, ExprTrait, QueryFilter,
    QuerySelect, TransactionTrait,
};
use tracing::info;

use super::SeaOrmStorage;
use super::converters::{model_to_link, new_link_to_active_model};
use crate::errors::{LinkHubError, Result};
use crate::storage::models::{Link, NewLink};

use migration::entities::link;

impl SeaOrmStorage {
    /// 创建链接并分配显示位置
    ///
    /// 未显式指定 order_index 时，在同一事务内读取所有者当前的
    /// max(order_index) 并加一（无链接时为 0）。显式指定的位置原样写入，
    /// 重复和空洞都是合法的。
    pub async fn create_link(&self, new_link: NewLink) -> Result<Link> {
        let txn = self.db.begin().await.map_err(|e| {
            LinkHubError::database_operation(format!("Failed to begin transaction: {}", e))
        })?;

        let order_index = match new_link.order_index {
            Some(index) => index,
            None => {
                let max_order: Option<Option<i32>> = link::Entity::find()
                    .select_only()
                    .column_as(link::Column::OrderIndex.max(), "max_order_index")
                    .filter(link::Column::UserId.eq(new_link.owner_id))
                    .into_tuple()
                    .one(&txn)
                    .await
                    .map_err(|e| {
                        LinkHubError::database_operation(format!(
                            "Failed to query max order_index for owner {}: {}",
                            new_link.owner_id, e
                        ))
                    })?;

                match max_order.flatten() {
                    Some(current_max) => (std::cmp::Ord::max(current_max, 0) as u32) + 1,
                    None => 0,
                }
            }
        };

        let model = new_link_to_active_model(&new_link, order_index, Utc::now())
            .insert(&txn)
            .await
            .map_err(|e| {
                LinkHubError::database_operation(format!(
                    "Failed to insert link '{}' for owner {}: {}",
                    new_link.title, new_link.owner_id, e
                ))
            })?;

        txn.commit().await.map_err(|e| {
            LinkHubError::database_operation(format!("Failed to commit transaction: {}", e))
        })?;

        info!(
            "Link created: {} (owner {}, position {})",
            model.id, model.user_id, model.order_index
        );
        Ok(model_to_link(model))
    }

    /// 点击计数：由数据库侧原子执行 +1，仅对激活链接生效
    ///
    /// 计数更新绝不能在调用方做 read-modify-write，并发下会丢失点击。
    /// 返回增量后的计数；rows_affected == 0 时区分"不存在"与"未激活"。
    pub async fn increment_click(&self, id: i64) -> Result<u64> {
        let stmt = Query::update()
            .table(link::Entity)
            .value(
                link::Column::ClickCount,
                Expr::col(link::Column::ClickCount).add(1),
            )
            .value(link::Column::UpdatedAt, Utc::now())
            .and_where(Expr::col(link::Column::Id).eq(id))
            .and_where(Expr::col(link::Column::IsActive).eq(true))
            .to_owned();

        let result = self.db.execute(&stmt).await.map_err(|e| {
            LinkHubError::database_operation(format!(
                "Failed to increment click count for link {}: {}",
                id, e
            ))
        })?;

        if result.rows_affected() == 0 {
            return match link::Entity::find_by_id(id).one(&self.db).await? {
                None => Err(LinkHubError::link_not_found(format!(
                    "Link {} not found",
                    id
                ))),
                Some(_) => Err(LinkHubError::link_inactive(format!(
                    "Link {} is not active",
                    id
                ))),
            };
        }

        // 读取增量后的计数；并发点击下可能已包含其他请求的增量，但不会丢失更新
        let model = link::Entity::find_by_id(id)
            .one(&self.db)
            .await?
            .ok_or_else(|| LinkHubError::link_not_found(format!("Link {} not found", id)))?;

        Ok(std::cmp::Ord::max(model.click_count, 0) as u64)
    }
}
