//! 链接 CRUD 端点

use actix_web::{Responder, Result as ActixResult, web};
use std::sync::Arc;
use tracing::{info, warn};

use crate::services::LinkService;

use super::helpers::{api_result, created_response, error_from_linkhub, success_response};
use super::types::{DeleteResponse, LinkResponse, PostNewLink, UpdateLinkPayload};

/// 创建新链接
pub async fn post_link(
    payload: web::Json<PostNewLink>,
    links: web::Data<Arc<LinkService>>,
) -> ActixResult<impl Responder> {
    let payload = payload.into_inner();
    info!(
        "API: create link request - owner: {}, title: '{}'",
        payload.user_id, payload.title
    );

    match links.create_link(payload.into_request()).await {
        Ok(link) => Ok(created_response(LinkResponse::from(link))),
        Err(e) => {
            warn!("API: link creation failed: {}", e);
            Ok(error_from_linkhub(&e))
        }
    }
}

/// 更新链接（稀疏更新）
pub async fn update_link(
    id: web::Path<i64>,
    payload: web::Json<UpdateLinkPayload>,
    links: web::Data<Arc<LinkService>>,
) -> ActixResult<impl Responder> {
    let id = id.into_inner();
    info!("API: update link request - id: {}", id);

    let result = links
        .update_link(id, payload.into_inner().into_request())
        .await
        .map(LinkResponse::from);

    Ok(api_result(result))
}

/// 删除链接
pub async fn delete_link(
    id: web::Path<i64>,
    links: web::Data<Arc<LinkService>>,
) -> ActixResult<impl Responder> {
    let id = id.into_inner();
    info!("API: delete link request - id: {}", id);

    match links.delete_link(id).await {
        Ok(()) => Ok(success_response(DeleteResponse { success: true })),
        Err(e) => Ok(error_from_linkhub(&e)),
    }
}

/// 所有者视图：全部链接（含未激活），按显示顺序
pub async fn list_owner_links(
    owner_id: web::Path<i64>,
    links: web::Data<Arc<LinkService>>,
) -> ActixResult<impl Responder> {
    let owner_id = owner_id.into_inner();

    let result = links.list_owner_links(owner_id).await.map(|links| {
        links
            .into_iter()
            .map(LinkResponse::from)
            .collect::<Vec<_>>()
    });

    Ok(api_result(result))
}
