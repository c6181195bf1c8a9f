//! 健康检查端点
//!
//! 基础设施探针，直接访问存储层而不经过业务服务。

use actix_web::{Responder, web};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{error, trace};

use crate::storage::SeaOrmStorage;

use super::error_code::ErrorCode;
use super::helpers::json_response;
use super::types::{HealthChecks, HealthResponse, HealthStorageCheck};

// 应用启动时间结构体
#[derive(Clone, Debug)]
pub struct AppStartTime {
    pub start_datetime: chrono::DateTime<chrono::Utc>,
}

/// 健康检查：存储连通性 + 运行时长
pub async fn health_check(
    storage: web::Data<Arc<SeaOrmStorage>>,
    app_start_time: web::Data<AppStartTime>,
) -> impl Responder {
    let start_time = Instant::now();
    trace!("Received health check request");

    let backend = storage.backend_name().to_string();

    // 只查 count，不加载全表；5 秒超时
    let counts = tokio::time::timeout(Duration::from_secs(5), async {
        let users = storage.count_users().await?;
        let links = storage.count_links().await?;
        Ok::<(u64, u64), crate::errors::LinkHubError>((users, links))
    })
    .await;

    let storage_check = match counts {
        Ok(Ok((users_count, links_count))) => HealthStorageCheck {
            status: "healthy".to_string(),
            backend,
            users_count: Some(users_count),
            links_count: Some(links_count),
            error: None,
        },
        Ok(Err(e)) => {
            error!("Health check: storage query failed: {}", e);
            HealthStorageCheck {
                status: "unhealthy".to_string(),
                backend,
                users_count: None,
                links_count: None,
                error: Some(e.to_string()),
            }
        }
        Err(_) => {
            error!("Health check: storage query timed out");
            HealthStorageCheck {
                status: "unhealthy".to_string(),
                backend,
                users_count: None,
                links_count: None,
                error: Some("storage query timed out".to_string()),
            }
        }
    };

    let healthy = storage_check.status == "healthy";
    let now = chrono::Utc::now();
    let uptime = (now - app_start_time.start_datetime).num_seconds().max(0) as u32;

    let response = HealthResponse {
        status: if healthy { "ok" } else { "degraded" }.to_string(),
        timestamp: now.to_rfc3339(),
        uptime,
        checks: HealthChecks {
            storage: storage_check,
        },
        response_time_ms: start_time.elapsed().as_millis() as u32,
    };

    if healthy {
        json_response(
            actix_web::http::StatusCode::OK,
            ErrorCode::Success,
            "OK",
            Some(response),
        )
    } else {
        json_response(
            actix_web::http::StatusCode::SERVICE_UNAVAILABLE,
            ErrorCode::ServiceUnavailable,
            "Storage unavailable",
            Some(response),
        )
    }
}
