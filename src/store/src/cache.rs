//! Injectable TTL cache over a stats source.

use crate::stats::StatMap;
use crate::{EntityId, StatsSource};
use error::ProgressionError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime};

/// Caches [`StatsSource`] reads for a fixed TTL.
///
/// The cache is owned and injected by the caller, and invalidation is an
/// explicit hook, so no request path depends on hidden process-wide state.
pub struct CachedStatsSource {
    inner: Arc<dyn StatsSource>,
    ttl: Duration,
    entries: Mutex<HashMap<EntityId, (SystemTime, StatMap)>>,
}

impl CachedStatsSource {
    pub fn new(inner: Arc<dyn StatsSource>, ttl: Duration) -> Self {
        Self {
            inner,
            ttl,
            entries: Mutex::new(HashMap::new()),
        }
    }

    /// Drop the cached entry for one entity, forcing the next read through.
    pub fn invalidate(&self, entity: &EntityId) {
        self.lock().remove(entity);
    }

    pub fn invalidate_all(&self) {
        self.lock().clear();
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, HashMap<EntityId, (SystemTime, StatMap)>> {
        match self.entries.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        }
    }
}

impl StatsSource for CachedStatsSource {
    fn stats(&self, entity: &EntityId) -> Result<StatMap, ProgressionError> {
        if let Some((cached_at, stats)) = self.lock().get(entity) {
            let fresh = cached_at
                .elapsed()
                .map(|age| age < self.ttl)
                .unwrap_or(false);
            if fresh {
                return Ok(stats.clone());
            }
        }

        let stats = self.inner.stats(entity)?;
        self.lock()
            .insert(entity.clone(), (SystemTime::now(), stats.clone()));
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    /// Source that counts how often it is read.
    struct CountingSource {
        reads: AtomicU32,
    }

    impl CountingSource {
        fn new() -> Self {
            Self {
                reads: AtomicU32::new(0),
            }
        }

        fn reads(&self) -> u32 {
            self.reads.load(Ordering::SeqCst)
        }
    }

    impl StatsSource for CountingSource {
        fn stats(&self, _entity: &EntityId) -> Result<StatMap, ProgressionError> {
            self.reads.fetch_add(1, Ordering::SeqCst);
            let mut stats = StatMap::new();
            stats.set("mined.total", 42.0);
            Ok(stats)
        }
    }

    #[test]
    fn repeated_reads_hit_the_cache() {
        let source = Arc::new(CountingSource::new());
        let cache = CachedStatsSource::new(source.clone(), Duration::from_secs(60));
        let entity = EntityId::player("steve");

        cache.stats(&entity).unwrap();
        cache.stats(&entity).unwrap();
        cache.stats(&entity).unwrap();
        assert_eq!(source.reads(), 1);
    }

    #[test]
    fn invalidate_forces_a_refetch() {
        let source = Arc::new(CountingSource::new());
        let cache = CachedStatsSource::new(source.clone(), Duration::from_secs(60));
        let entity = EntityId::player("steve");

        cache.stats(&entity).unwrap();
        cache.invalidate(&entity);
        cache.stats(&entity).unwrap();
        assert_eq!(source.reads(), 2);
    }

    #[test]
    fn zero_ttl_never_serves_from_cache() {
        let source = Arc::new(CountingSource::new());
        let cache = CachedStatsSource::new(source.clone(), Duration::ZERO);
        let entity = EntityId::player("steve");

        cache.stats(&entity).unwrap();
        cache.stats(&entity).unwrap();
        assert_eq!(source.reads(), 2);
    }

    #[test]
    fn invalidate_all_clears_every_entity() {
        let source = Arc::new(CountingSource::new());
        let cache = CachedStatsSource::new(source.clone(), Duration::from_secs(60));

        cache.stats(&EntityId::player("steve")).unwrap();
        cache.stats(&EntityId::player("alex")).unwrap();
        cache.invalidate_all();
        cache.stats(&EntityId::player("steve")).unwrap();
        assert_eq!(source.reads(), 3);
    }
}
