//! Click accounting
//!
//! The counter is the system's only analytics signal, so the increment
//! must happen server-side in the database; see storage `increment_click`.

use std::sync::Arc;

use tracing::info;

use crate::errors::Result;
use crate::storage::SeaOrmStorage;

/// Service for click accounting
pub struct ClickService {
    storage: Arc<SeaOrmStorage>,
}

impl ClickService {
    pub fn new(storage: Arc<SeaOrmStorage>) -> Self {
        Self { storage }
    }

    /// Record one click on an active link, returning the new count
    ///
    /// 每次调用代表一次真实点击，刻意非幂等。
    pub async fn track_click(&self, link_id: i64) -> Result<u64> {
        let click_count = self.storage.increment_click(link_id).await?;
        info!(
            "ClickService: link {} clicked ({} total)",
            link_id, click_count
        );
        Ok(click_count)
    }
}
