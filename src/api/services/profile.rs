//! 公开主页端点

use actix_web::{Responder, Result as ActixResult, web};
use std::sync::Arc;
use tracing::trace;

use crate::services::ProfileService;

use super::helpers::api_result;
use super::types::PublicProfileResponse;

/// 获取公开主页：用户公开字段 + 激活链接，按显示顺序
pub async fn get_public_profile(
    username: web::Path<String>,
    profiles: web::Data<Arc<ProfileService>>,
) -> ActixResult<impl Responder> {
    let username = username.into_inner();
    trace!("API: public profile request for '{}'", username);

    let result = profiles
        .get_public_profile(&username)
        .await
        .map(PublicProfileResponse::from);

    Ok(api_result(result))
}
