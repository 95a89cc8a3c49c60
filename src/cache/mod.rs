//! Cache Module
//!
//! Bounded LRU memoization for repeated geocoding lookups within one batch.

mod lru;
mod stats;


// Re-export public types
pub use lru::LruCache;
pub use stats::CacheStats;

// == Public Constants ==
/// Per-batch cache capacity used when none is configured
pub const DEFAULT_CACHE_CAPACITY: usize = 1000;
