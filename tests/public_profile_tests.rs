//! ProfileService tests
//!
//! Public profile assembly: active-only links, display ordering and the
//! sensitive-field boundary.

use std::sync::{Arc, Once};

use tempfile::TempDir;

use linkhub::config::init_config;
use linkhub::errors::LinkHubError;
use linkhub::services::{CreateLinkRequest, LinkService, ProfileService, UpdateLinkRequest};
use linkhub::storage::{NewUser, SeaOrmStorage, User};

// =============================================================================
// Test Setup
// =============================================================================

static INIT: Once = Once::new();

fn init_test_config() {
    INIT.call_once(|| {
        init_config();
    });
}

async fn create_test_services() -> (ProfileService, LinkService, Arc<SeaOrmStorage>, TempDir) {
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
        ProfileService::new(storage.clone()),
        LinkService::new(storage.clone()),
        storage,
        dir,
    )
}

async fn create_owner(storage: &SeaOrmStorage, username: &str) -> User {
    storage
        .insert_user(NewUser {
            username: username.to_string(),
            email: format!("{}@example.com", username),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$c2FsdA$aGFzaA".to_string(),
            display_name: Some(format!("{} display", username)),
            bio: Some("a bio".to_string()),
        })
        .await
        .expect("failed to insert owner")
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_profile_contains_public_fields_and_links() {
    let (profiles, links, storage, _dir) = create_test_services().await;
    let owner = create_owner(&storage, "alice").await;

    links
        .create_link(CreateLinkRequest {
            owner_id: owner.id,
            title: "Blog".to_string(),
            url: "https://blog.example.com".to_string(),
            icon: Some("✍️".to_string()),
            order_index: None,
        })
        .await
        .unwrap();

    let profile = profiles
        .get_public_profile("alice")
        .await
        .expect("profile should assemble");

    assert_eq!(profile.username, "alice");
    assert_eq!(profile.display_name.as_deref(), Some("alice display"));
    assert_eq!(profile.bio.as_deref(), Some("a bio"));
    assert_eq!(profile.links.len(), 1);
    assert_eq!(profile.links[0].title, "Blog");
    assert_eq!(profile.links[0].click_count, 0);
    assert_eq!(profile.links[0].icon.as_deref(), Some("✍️"));
}

#[tokio::test]
async fn test_profile_excludes_inactive_links() {
    let (profiles, links, storage, _dir) = create_test_services().await;
    let owner = create_owner(&storage, "bob").await;

    let visible = links
        .create_link(CreateLinkRequest {
            owner_id: owner.id,
            title: "Visible".to_string(),
            url: "https://example.com/visible".to_string(),
            icon: None,
            order_index: None,
        })
        .await
        .unwrap();

    let hidden = links
        .create_link(CreateLinkRequest {
            owner_id: owner.id,
            title: "Hidden".to_string(),
            url: "https://example.com/hidden".to_string(),
            icon: None,
            order_index: None,
        })
        .await
        .unwrap();

    links
        .update_link(
            hidden.id,
            UpdateLinkRequest {
                is_active: Some(false),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    // 未激活链接完全排除，不是打标记
    let profile = profiles.get_public_profile("bob").await.unwrap();
    assert_eq!(profile.links.len(), 1);
    assert_eq!(profile.links[0].id, visible.id);
}

#[tokio::test]
async fn test_profile_links_sorted_by_order_index() {
    let (profiles, links, storage, _dir) = create_test_services().await;
    let owner = create_owner(&storage, "carol").await;

    let last = links
        .create_link(CreateLinkRequest {
            owner_id: owner.id,
            title: "Last".to_string(),
            url: "https://example.com/last".to_string(),
            icon: None,
            order_index: Some(9),
        })
        .await
        .unwrap();

    let first = links
        .create_link(CreateLinkRequest {
            owner_id: owner.id,
            title: "First".to_string(),
            url: "https://example.com/first".to_string(),
            icon: None,
            order_index: Some(2),
        })
        .await
        .unwrap();

    let profile = profiles.get_public_profile("carol").await.unwrap();
    let ids: Vec<i64> = profile.links.iter().map(|l| l.id).collect();
    assert_eq!(ids, vec![first.id, last.id]);
}

#[tokio::test]
async fn test_profile_empty_links_is_not_an_error() {
    let (profiles, _links, storage, _dir) = create_test_services().await;
    create_owner(&storage, "dave").await;

    let profile = profiles.get_public_profile("dave").await.unwrap();
    assert!(profile.links.is_empty());
}

#[tokio::test]
async fn test_profile_unknown_username() {
    let (profiles, _links, _storage, _dir) = create_test_services().await;

    let err = profiles.get_public_profile("nobody").await.unwrap_err();
    assert!(matches!(err, LinkHubError::UserNotFound(_)));
}

#[tokio::test]
async fn test_deleted_link_disappears_from_profile() {
    let (profiles, links, storage, _dir) = create_test_services().await;
    let owner = create_owner(&storage, "erin").await;

    let link = links
        .create_link(CreateLinkRequest {
            owner_id: owner.id,
            title: "Ephemeral".to_string(),
            url: "https://example.com".to_string(),
            icon: None,
            order_index: None,
        })
        .await
        .unwrap();

    links.delete_link(link.id).await.unwrap();

    let profile = profiles.get_public_profile("erin").await.unwrap();
    assert!(profile.links.is_empty());
}
