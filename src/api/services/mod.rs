//! HTTP API 服务模块
//!
//! 该模块包含对外 API 的所有端点，包括：
//! - 身份（注册、登录、资料更新）
//! - 链接 CRUD 与所有者列表
//! - 公开主页
//! - 点击计数
//! - 健康检查

mod clicks;
pub mod error_code;
pub mod health;
mod helpers;
mod links;
mod profile;
pub mod routes;
mod types;
mod users;

// 重新导出类型
pub use types::*;

// 重新导出帮助函数
pub use helpers::{
    api_result, created_response, error_from_linkhub, error_response, success_response,
};

// 重新导出错误码
pub use error_code::ErrorCode;

pub use health::{AppStartTime, health_check};
pub use routes::api_v1_routes;
