//! Aggregation result cache using moka.
//!
//! Entries carry the state stamp they were computed at: the subject's
//! generation plus the engine-wide source-trust epoch. A lookup with a newer
//! stamp is a miss, so writes never need to reach the cache.

use std::fmt;

use moka::sync::Cache;
use trust_core::config::CacheConfig;
use trust_core::models::Identity;

/// Which engine produced a cached score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScoreVariant {
    Base,
    Robust,
}

impl fmt::Display for ScoreVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Base => write!(f, "base"),
            Self::Robust => write!(f, "robust"),
        }
    }
}

/// State a score was computed against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stamp {
    pub generation: u64,
    pub source_epoch: u64,
}

#[derive(Debug, Clone, Copy)]
struct CachedScore {
    stamp: Stamp,
    score: f64,
}

/// Optional score cache keyed by `(subject, variant)`.
pub struct ScoreCache {
    cache: Option<Cache<(Identity, ScoreVariant), CachedScore>>,
}

impl ScoreCache {
    pub fn from_config(config: &CacheConfig) -> Self {
        let cache = config
            .enabled
            .then(|| Cache::builder().max_capacity(config.max_capacity).build());
        Self { cache }
    }

    pub fn is_enabled(&self) -> bool {
        self.cache.is_some()
    }

    /// Cached score, only if it was computed at `stamp`.
    pub fn get(&self, subject: &Identity, variant: ScoreVariant, stamp: Stamp) -> Option<f64> {
        let cache = self.cache.as_ref()?;
        let key = (subject.clone(), variant);
        cache
            .get(&key)
            .filter(|c| c.stamp == stamp)
            .map(|c| c.score)
    }

    pub fn insert(&self, subject: &Identity, variant: ScoreVariant, stamp: Stamp, score: f64) {
        if let Some(cache) = &self.cache {
            cache.insert((subject.clone(), variant), CachedScore { stamp, score });
        }
    }

    /// Number of cached scores, after flushing moka's pending bookkeeping.
    pub fn entry_count(&self) -> u64 {
        match &self.cache {
            Some(cache) => {
                cache.run_pending_tasks();
                cache.entry_count()
            }
            None => 0,
        }
    }
}

impl fmt::Debug for ScoreCache {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScoreCache")
            .field("enabled", &self.is_enabled())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stamp(generation: u64, source_epoch: u64) -> Stamp {
        Stamp {
            generation,
            source_epoch,
        }
    }

    #[test]
    fn stale_stamp_misses() {
        let cache = ScoreCache::from_config(&CacheConfig::default());
        let s = Identity::new("s");
        cache.insert(&s, ScoreVariant::Base, stamp(3, 0), 0.6);
        assert_eq!(cache.get(&s, ScoreVariant::Base, stamp(3, 0)), Some(0.6));
        assert_eq!(cache.get(&s, ScoreVariant::Base, stamp(4, 0)), None);
        assert_eq!(cache.get(&s, ScoreVariant::Base, stamp(3, 1)), None);
        assert_eq!(cache.get(&s, ScoreVariant::Robust, stamp(3, 0)), None);
    }

    #[test]
    fn disabled_cache_never_hits() {
        let cache = ScoreCache::from_config(&CacheConfig {
            enabled: false,
            ..CacheConfig::default()
        });
        let s = Identity::new("s");
        cache.insert(&s, ScoreVariant::Base, stamp(1, 0), 0.6);
        assert_eq!(cache.get(&s, ScoreVariant::Base, stamp(1, 0)), None);
        assert!(!cache.is_enabled());
        assert_eq!(cache.entry_count(), 0);
    }

    #[test]
    fn variants_are_counted_separately() {
        let cache = ScoreCache::from_config(&CacheConfig::default());
        let s = Identity::new("s");
        cache.insert(&s, ScoreVariant::Base, stamp(1, 0), 0.6);
        cache.insert(&s, ScoreVariant::Robust, stamp(1, 0), 0.4);
        assert_eq!(cache.entry_count(), 2);
    }
}
