//! ClickService tests
//!
//! Click accounting: atomic increment, the active gate, and behavior
//! under concurrent calls. Lost updates here are correctness bugs, not
//! acceptable approximations - the counter is the only analytics signal.

use std::sync::{Arc, Once};

use tempfile::TempDir;

use linkhub::config::init_config;
use linkhub::errors::LinkHubError;
use linkhub::services::{ClickService, CreateLinkRequest, LinkService, UpdateLinkRequest};
use linkhub::storage::{Link, NewUser, SeaOrmStorage};

// =============================================================================
// Test Setup
// =============================================================================

static INIT: Once = Once::new();

fn init_test_config() {
    INIT.call_once(|| {
        init_config();
    });
}

async fn create_test_services() -> (ClickService, LinkService, Arc<SeaOrmStorage>, TempDir) {
    init_test_config();

    let dir = TempDir::new().expect("failed to create temp dir");
    let db_path = dir.path().join("linkhub_test.db");
    let url = format!("sqlite://{}", db_path.display());

    let storage = Arc::new(
        SeaOrmStorage::new(&url, "sqlite")
            .await
            .expect("failed to create storage"),
    );

    (
        ClickService::new(storage.clone()),
        LinkService::new(storage.clone()),
        storage,
        dir,
    )
}

async fn create_link(links: &LinkService, storage: &SeaOrmStorage, username: &str) -> Link {
    let owner = storage
        .insert_user(NewUser {
            username: username.to_string(),
            email: format!("{}@example.com", username),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
            display_name: None,
            bio: None,
        })
        .await
        .expect("failed to insert owner");

    links
        .create_link(CreateLinkRequest {
            owner_id: owner.id,
            title: "Clickable".to_string(),
            url: "https://example.com".to_string(),
            icon: None,
            order_index: None,
        })
        .await
        .expect("failed to create link")
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_track_click_returns_post_increment_count() {
    let (clicks, links, storage, _dir) = create_test_services().await;
    let link = create_link(&links, &storage, "alice").await;

    assert_eq!(clicks.track_click(link.id).await.unwrap(), 1);
    assert_eq!(clicks.track_click(link.id).await.unwrap(), 2);
    assert_eq!(clicks.track_click(link.id).await.unwrap(), 3);

    let stored = storage.find_link(link.id).await.unwrap().unwrap();
    assert_eq!(stored.click_count, 3);
}

#[tokio::test]
async fn test_track_click_refreshes_updated_at() {
    let (clicks, links, storage, _dir) = create_test_services().await;
    let link = create_link(&links, &storage, "bob").await;

    tokio::time::sleep(std::time::Duration::from_millis(50)).await;
    clicks.track_click(link.id).await.unwrap();

    let stored = storage.find_link(link.id).await.unwrap().unwrap();
    assert!(stored.updated_at > link.updated_at);
    assert_eq!(stored.created_at, link.created_at);
}

#[tokio::test]
async fn test_track_click_unknown_link() {
    let (clicks, _links, _storage, _dir) = create_test_services().await;

    let err = clicks.track_click(9999).await.unwrap_err();
    assert!(matches!(err, LinkHubError::LinkNotFound(_)));
}

#[tokio::test]
async fn test_track_click_inactive_link_distinct_error() {
    let (clicks, links, storage, _dir) = create_test_services().await;
    let link = create_link(&links, &storage, "carol").await;

    clicks.track_click(link.id).await.unwrap();

    links
        .update_link(
            link.id,
            UpdateLinkRequest {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    // 未激活是独立的错误类型，不是 NotFound
    let err = clicks.track_click(link.id).await.unwrap_err();
    assert!(matches!(err, LinkHubError::LinkInactive(_)));

    // 计数保持不变
    let stored = storage.find_link(link.id).await.unwrap().unwrap();
    assert_eq!(stored.click_count, 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_clicks_add_exactly_n() {
    let (clicks, links, storage, _dir) = create_test_services().await;
    let link = create_link(&links, &storage, "dave").await;
    let clicks = Arc::new(clicks);

    // N 个并发点击必须恰好加 N：增量在数据库侧原子执行
    let mut handles = Vec::new();
    for _ in 0..20 {
        let clicks = clicks.clone();
        let id = link.id;
        handles.push(tokio::spawn(async move { clicks.track_click(id).await }));
    }

    for handle in handles {
        handle
            .await
            .expect("task should join")
            .expect("click should succeed");
    }

    let stored = storage.find_link(link.id).await.unwrap().unwrap();
    assert_eq!(stored.click_count, 20);
}
