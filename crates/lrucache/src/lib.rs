//! # lrucache
//!
//! Fixed-capacity, thread-safe LRU cache held entirely in memory.
//!
//! ## Architecture
//! - **Key index**: AHash-backed `HashMap` for O(1) lookups
//! - **Recency list**: arena-backed doubly-linked list, O(1) promotion and
//!   eviction with no per-node allocation
//! - **Locking**: one `parking_lot::RwLock` around both structures. `get`
//!   promotes the entry and therefore takes the write lock; `peek` and `len`
//!   share the read lock.
//!
//! ## Example
//! ```
//! use lrucache::LruCache;
//!
//! let cache = LruCache::new(2);
//!
//! cache.add("a", "alpha");
//! cache.add("b", "beta");
//!
//! assert_eq!(cache.get(&"a"), Some("alpha"));
//!
//! // "b" is now least recently used, so a third entry evicts it.
//! cache.add("c", "gamma");
//! assert_eq!(cache.get(&"b"), None);
//! assert_eq!(cache.len(), 2);
//! ```
//!
//! All methods take `&self`, so sharing a cache is just cloning an `Arc`:
//! ```
//! use std::sync::Arc;
//! use std::thread;
//!
//! use lrucache::LruCache;
//!
//! let cache = Arc::new(LruCache::new(64));
//!
//! let writer = {
//!     let cache = Arc::clone(&cache);
//!     thread::spawn(move || cache.add("session", 1))
//! };
//! writer.join().unwrap();
//!
//! assert_eq!(cache.get(&"session"), Some(1));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cache;
mod lru;
mod stats;

pub use cache::LruCache;
pub use stats::CacheStats;
