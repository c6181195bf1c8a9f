//! API 路由配置
//!
//! 将 /v1 下的路由按功能模块拆分，提高可读性和可维护性。

use actix_web::web;

use super::clicks::track_click;
use super::links::{delete_link, list_owner_links, post_link, update_link};
use super::profile::get_public_profile;
use super::users::{login_rate_limiter, login_user, register_user, update_profile};

/// 用户路由 `/users`
///
/// 包含：
/// - POST /users/register - 注册（公开）
/// - POST /users/login - 登录（带限流）
/// - PATCH /users/{id}/profile - 更新资料
/// - GET /users/{id}/links - 所有者链接列表（含未激活）
pub fn user_routes() -> actix_web::Scope {
    web::scope("/users")
        .route("/register", web::post().to(register_user))
        .route(
            "/login",
            web::post().to(login_user).wrap(login_rate_limiter()),
        )
        .route("/{id}/profile", web::patch().to(update_profile))
        .route("/{id}/links", web::get().to(list_owner_links))
}

/// 链接路由 `/links`
///
/// 包含：
/// - POST /links - 创建链接
/// - POST /links/{id}/click - 点击计数
/// - PUT /links/{id} - 更新链接
/// - DELETE /links/{id} - 删除链接
pub fn link_routes() -> actix_web::Scope {
    web::scope("/links")
        .route("", web::post().to(post_link))
        // /{id}/click must be before /{id}
        .route("/{id}/click", web::post().to(track_click))
        .route("/{id}", web::put().to(update_link))
        .route("/{id}", web::delete().to(delete_link))
}

/// 公开主页路由 `/profiles`
pub fn profile_routes() -> actix_web::Scope {
    web::scope("/profiles").route("/{username}", web::get().to(get_public_profile))
}

/// API v1 路由
///
/// 组合所有子模块路由
pub fn api_v1_routes() -> actix_web::Scope {
    web::scope("/v1")
        .service(user_routes())
        .service(link_routes())
        .service(profile_routes())
}
