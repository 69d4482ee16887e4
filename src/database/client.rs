use tokio::sync::{Mutex, MutexGuard};
use tracing::info;

use super::feed_store::FeedStore;
use super::fixtures::seed_posts;

#[derive(Debug)]
pub struct DbConfig {
    pub seed_fixtures: bool,
}

/// Process-lifetime handle to the feed. The lock is held for a whole procedure call, so
/// requests are applied one at a time.
#[derive(Debug)]
pub struct Database {
    store: Mutex<FeedStore>,
}

impl Database {
    pub fn connect(config: DbConfig) -> Self {
        info!("->> opening feed store config = {:?}", config);
        let store = if config.seed_fixtures {
            FeedStore::with_posts(seed_posts())
        } else {
            FeedStore::new()
        };
        info!("->> feed store ready with {} posts", store.list_posts().len());
        Self::from_store(store)
    }

    pub fn from_store(store: FeedStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    pub async fn store(&self) -> MutexGuard<'_, FeedStore> {
        self.store.lock().await
    }
}
