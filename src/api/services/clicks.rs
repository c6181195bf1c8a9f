//! 点击计数端点

use actix_web::{Responder, Result as ActixResult, web};
use std::sync::Arc;
use tracing::trace;

use crate::services::ClickService;

use super::helpers::{error_from_linkhub, success_response};
use super::types::TrackClickResponse;

/// 记录一次点击并返回增量后的计数
pub async fn track_click(
    id: web::Path<i64>,
    clicks: web::Data<Arc<ClickService>>,
) -> ActixResult<impl Responder> {
    let id = id.into_inner();
    trace!("API: track click request - link: {}", id);

    match clicks.track_click(id).await {
        Ok(click_count) => Ok(success_response(TrackClickResponse {
            success: true,
            click_count,
        })),
        Err(e) => Ok(error_from_linkhub(&e)),
    }
}
