use chrono::{DateTime, Utc};
use sea_orm::ActiveValue::{NotSet, Set};

use crate::storage::models::{Link, NewLink, NewUser, User};
use migration::entities::{link, user};

/// 将 Sea-ORM Model 转换为 User
pub fn model_to_user(model: user::Model) -> User {
    User {
        id: model.id,
        username: model.username,
        email: model.email,
        password_hash: model.password_hash,
        display_name: model.display_name,
        bio: model.bio,
        avatar_url: model.avatar_url,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

/// 将 Sea-ORM Model 转换为 Link
pub fn model_to_link(model: link::Model) -> Link {
    Link {
        id: model.id,
        owner_id: model.user_id,
        title: model.title,
        url: model.url,
        icon: model.icon,
        click_count: model.click_count.max(0) as u64,
        is_active: model.is_active,
        order_index: model.order_index.max(0) as u32,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

/// 将 NewUser 转换为 ActiveModel（用于插入，id 由数据库分配）
pub fn new_user_to_active_model(new_user: &NewUser, now: DateTime<Utc>) -> user::ActiveModel {
    user::ActiveModel {
        id: NotSet,
        username: Set(new_user.username.clone()),
        email: Set(new_user.email.clone()),
        password_hash: Set(new_user.password_hash.clone()),
        display_name: Set(new_user.display_name.clone()),
        bio: Set(new_user.bio.clone()),
        avatar_url: Set(None),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

/// 将 NewLink 转换为 ActiveModel（用于插入）
///
/// 新链接始终从 click_count = 0、is_active = true 开始。
pub fn new_link_to_active_model(
    new_link: &NewLink,
    order_index: u32,
    now: DateTime<Utc>,
) -> link::ActiveModel {
    link::ActiveModel {
        id: NotSet,
        user_id: Set(new_link.owner_id),
        title: Set(new_link.title.clone()),
        url: Set(new_link.url.clone()),
        icon: Set(new_link.icon.clone()),
        click_count: Set(0),
        is_active: Set(true),
        order_index: Set(order_index as i32),
        created_at: Set(now),
        updated_at: Set(now),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sea_orm::ActiveValue;

    fn create_test_user_model() -> user::Model {
        user::Model {
            id: 7,
            username: "alice".to_string(),
            email: "alice@example.com".to_string(),
            password_hash: "$argon2id$v=19$m=19456,t=2,p=1$salt$hash".to_string(),
            display_name: Some("Alice".to_string()),
            bio: None,
            avatar_url: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn create_test_link_model() -> link::Model {
        link::Model {
            id: 42,
            user_id: 7,
            title: "My Site".to_string(),
            url: "https://example.com".to_string(),
            icon: Some("🌐".to_string()),
            click_count: 12,
            is_active: true,
            order_index: 3,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_model_to_user_basic() {
        let model = create_test_user_model();
        let expected_username = model.username.clone();
        let expected_email = model.email.clone();

        let user = model_to_user(model);

        assert_eq!(user.id, 7);
        assert_eq!(user.username, expected_username);
        assert_eq!(user.email, expected_email);
        assert_eq!(user.display_name.as_deref(), Some("Alice"));
        assert!(user.bio.is_none());
    }

    #[test]
    fn test_model_to_link_basic() {
        let model = create_test_link_model();
        let link = model_to_link(model);

        assert_eq!(link.id, 42);
        assert_eq!(link.owner_id, 7);
        assert_eq!(link.click_count, 12);
        assert_eq!(link.order_index, 3);
        assert!(link.is_active);
    }

    #[test]
    fn test_model_to_link_negative_click_count() {
        let mut model = create_test_link_model();
        model.click_count = -10; // 负数应该被转换为 0
        let link = model_to_link(model);
        assert_eq!(link.click_count, 0);
    }

    #[test]
    fn test_new_user_to_active_model() {
        let new_user = NewUser {
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            password_hash: "$argon2id$hash".to_string(),
            display_name: None,
            bio: Some("hi".to_string()),
        };

        let active_model = new_user_to_active_model(&new_user, Utc::now());

        // id 由数据库分配
        assert!(matches!(active_model.id, ActiveValue::NotSet));
        assert!(matches!(active_model.username, ActiveValue::Set(_)));
        assert!(matches!(active_model.created_at, ActiveValue::Set(_)));
        assert!(matches!(active_model.updated_at, ActiveValue::Set(_)));

        if let ActiveValue::Set(username) = active_model.username {
            assert_eq!(username, "bob");
        }
        if let ActiveValue::Set(avatar_url) = active_model.avatar_url {
            assert!(avatar_url.is_none());
        }
    }

    #[test]
    fn test_new_link_to_active_model_defaults() {
        let new_link = NewLink {
            owner_id: 7,
            title: "Blog".to_string(),
            url: "https://blog.example.com".to_string(),
            icon: None,
            order_index: None,
        };

        let active_model = new_link_to_active_model(&new_link, 5, Utc::now());

        assert!(matches!(active_model.id, ActiveValue::NotSet));
        if let ActiveValue::Set(click_count) = active_model.click_count {
            assert_eq!(click_count, 0);
        }
        if let ActiveValue::Set(is_active) = active_model.is_active {
            assert!(is_active);
        }
        if let ActiveValue::Set(order_index) = active_model.order_index {
            assert_eq!(order_index, 5);
        }
    }
}
