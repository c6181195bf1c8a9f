//! 用户身份端点：注册、登录、资料更新

use actix_governor::{Governor, GovernorConfigBuilder, KeyExtractor, SimpleKeyExtractionError};
use actix_web::dev::ServiceRequest;
use actix_web::{Responder, Result as ActixResult, web};
use governor::middleware::NoOpMiddleware;
use std::sync::Arc;
use tracing::{debug, error, info, warn};

use crate::api::jwt::get_jwt_service;
use crate::config::get_config;
use crate::services::UserService;

use super::helpers::{api_result, created_response, error_from_linkhub, success_response};
use super::types::{AuthResponse, LoginPayload, RegisterPayload, UpdateProfilePayload, UserResponse};

/// 基于连接 IP（peer_addr）的登录限流 key 提取器
#[derive(Clone, Copy)]
pub struct LoginKeyExtractor;

impl KeyExtractor for LoginKeyExtractor {
    type Key = String;
    type KeyExtractionError = SimpleKeyExtractionError<&'static str>;

    fn extract(&self, req: &ServiceRequest) -> Result<Self::Key, Self::KeyExtractionError> {
        let conn_info = req.connection_info();
        let peer_ip = conn_info
            .peer_addr()
            .ok_or_else(|| SimpleKeyExtractionError::new("Unable to extract peer IP"))?;
        Ok(peer_ip.to_string())
    }
}

/// 创建登录限流器
///
/// 超限返回 HTTP 429 Too Many Requests。
pub fn login_rate_limiter() -> Governor<LoginKeyExtractor, NoOpMiddleware> {
    let auth = &get_config().auth;
    let config = GovernorConfigBuilder::default()
        .seconds_per_request(auth.login_seconds_per_request)
        .burst_size(auth.login_burst_size)
        .key_extractor(LoginKeyExtractor)
        .finish()
        .expect("Invalid rate limit config");

    debug!(
        "Login rate limiter created: 1 req/{}s, burst {}",
        auth.login_seconds_per_request, auth.login_burst_size
    );
    Governor::new(&config)
}

/// 注册新用户
pub async fn register_user(
    payload: web::Json<RegisterPayload>,
    users: web::Data<Arc<UserService>>,
) -> ActixResult<impl Responder> {
    let payload = payload.into_inner();
    info!("API: register request for username '{}'", payload.username);

    match users.register(payload.into_request()).await {
        Ok(user) => Ok(created_response(AuthResponse {
            user: UserResponse::from(user),
            token: None,
        })),
        Err(e) => {
            warn!("API: registration failed: {}", e);
            Ok(error_from_linkhub(&e))
        }
    }
}

/// 登录
pub async fn login_user(
    payload: web::Json<LoginPayload>,
    users: web::Data<Arc<UserService>>,
) -> ActixResult<impl Responder> {
    match users.authenticate(payload.into_inner().into_request()).await {
        Ok(user) => {
            // 会话 token 是可选便利：签发失败不阻塞登录
            let token = match get_jwt_service().generate_access_token(user.id) {
                Ok(token) => Some(token),
                Err(e) => {
                    error!("API: failed to generate access token: {}", e);
                    None
                }
            };

            info!("API: login successful for '{}'", user.username);
            Ok(success_response(AuthResponse {
                user: UserResponse::from(user),
                token,
            }))
        }
        Err(e) => {
            warn!("API: login failed: {}", e);
            Ok(error_from_linkhub(&e))
        }
    }
}

/// 更新用户资料（稀疏更新：缺失字段保持原值，显式 null 清空）
pub async fn update_profile(
    id: web::Path<i64>,
    payload: web::Json<UpdateProfilePayload>,
    users: web::Data<Arc<UserService>>,
) -> ActixResult<impl Responder> {
    let id = id.into_inner();
    info!("API: update profile request for user {}", id);

    let result = users
        .update_profile(id, payload.into_inner().into_request())
        .await
        .map(UserResponse::from);

    Ok(api_result(result))
}
