use std::sync::Arc;
use std::time::Duration;

use crate::models::StudentProfile;

/// In-process TTL cache for candidate pools
///
/// Candidate pools are keyed by college (or "all" for an unscoped pool).
/// Per-instance staleness within the TTL is acceptable: profiles change
/// rarely, and ranking is recomputed on every request anyway.
pub struct ProfileCache {
    pools: moka::future::Cache<String, Arc<Vec<StudentProfile>>>,
}

impl ProfileCache {
    pub fn new(max_capacity: u64, ttl_secs: u64) -> Self {
        let pools = moka::future::CacheBuilder::new(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { pools }
    }

    /// Build the cache key for a candidate pool
    pub fn pool_key(college: Option<&str>, verified_only: bool) -> String {
        format!(
            "pool:{}:{}",
            college.unwrap_or("all"),
            if verified_only { "verified" } else { "any" }
        )
    }

    pub async fn get_pool(&self, key: &str) -> Option<Arc<Vec<StudentProfile>>> {
        let pool = self.pools.get(key).await;
        if pool.is_some() {
            tracing::trace!("Candidate pool cache hit: {}", key);
        }
        pool
    }

    pub async fn insert_pool(&self, key: String, pool: Vec<StudentProfile>) -> Arc<Vec<StudentProfile>> {
        let pool = Arc::new(pool);
        self.pools.insert(key, Arc::clone(&pool)).await;
        pool
    }

    pub async fn invalidate(&self, key: &str) {
        self.pools.invalidate(key).await;
    }

    pub fn entry_count(&self) -> u64 {
        self.pools.entry_count()
    }
}
