//! LRU Cache Module
//!
//! Bounded least-recently-used cache with O(1) lookup, insertion and eviction.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::hash::Hash;

use crate::cache::CacheStats;
use crate::error::{GeocodeError, Result};

/// Null link in the recency list.
const NIL: usize = usize::MAX;

// == Node ==
/// Slot in the node arena, threaded into the recency list.
#[derive(Debug)]
struct Node<K, V> {
    key: K,
    value: V,
    /// Neighbour towards the most recently used end
    prev: usize,
    /// Neighbour towards the least recently used end
    next: usize,
}

// == LRU Cache ==
/// Fixed-capacity key/value store that evicts the least recently used entry.
///
/// Entries live in an arena; a `HashMap` maps keys to arena slots and the
/// slots form a doubly-linked list ordered by recency:
/// - Head = Most recently used
/// - Tail = Least recently used
///
/// Both [`get`](Self::get) and [`set`](Self::set) move the touched key to the
/// head. A cache is meant to be owned by a single batch of lookups, so there
/// is no internal locking.
#[derive(Debug)]
pub struct LruCache<K, V> {
    /// Key -> arena slot
    map: HashMap<K, usize>,
    /// Node arena. Never shrinks; evicted slots are reused in place.
    nodes: Vec<Node<K, V>>,
    head: usize,
    tail: usize,
    capacity: usize,
    stats: CacheStats,
}

impl<K, V> LruCache<K, V>
where
    K: Hash + Eq + Clone,
{
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// Fails with [`GeocodeError::InvalidConfig`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(GeocodeError::InvalidConfig(
                "cache capacity must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            map: HashMap::new(),
            nodes: Vec::new(),
            head: NIL,
            tail: NIL,
            capacity,
            stats: CacheStats::new(capacity),
        })
    }

    // == Get ==
    /// Looks up `key`, marking it most recently used on a hit.
    ///
    /// A miss returns `None` and leaves the recency order untouched.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        match self.map.get(key).copied() {
            Some(idx) => {
                self.stats.record_hit();
                self.move_to_front(idx);
                Some(&self.nodes[idx].value)
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Set ==
    /// Stores `value` under `key` as the most recently used entry.
    ///
    /// An existing key is overwritten in place and the size is unchanged. A new
    /// key inserted into a full cache first evicts the least recently used entry.
    pub fn set(&mut self, key: K, value: V) {
        if let Some(&idx) = self.map.get(&key) {
            self.nodes[idx].value = value;
            self.move_to_front(idx);
            return;
        }

        let idx = if self.map.len() >= self.capacity {
            // Reuse the LRU slot for the incoming entry
            let idx = self.tail;
            self.unlink(idx);
            let node = &mut self.nodes[idx];
            let evicted = std::mem::replace(&mut node.key, key.clone());
            node.value = value;
            self.map.remove(&evicted);
            self.stats.record_eviction();
            idx
        } else {
            self.nodes.push(Node {
                key: key.clone(),
                value,
                prev: NIL,
                next: NIL,
            });
            self.nodes.len() - 1
        };

        self.map.insert(key, idx);
        self.push_front(idx);
        self.stats.set_total_entries(self.map.len());
    }

    // == Peek ==
    /// Returns the value for `key` without touching recency or statistics.
    pub fn peek<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key).map(|&idx| &self.nodes[idx].value)
    }

    /// Checks whether `key` is cached, without touching recency.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    // == Peek LRU ==
    /// Returns the entry that the next insertion of a new key would evict.
    pub fn peek_lru(&self) -> Option<(&K, &V)> {
        (self.tail != NIL).then(|| {
            let node = &self.nodes[self.tail];
            (&node.key, &node.value)
        })
    }

    // == Iter ==
    /// Iterates entries from most to least recently used.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> + '_ {
        let mut cursor = self.head;
        std::iter::from_fn(move || {
            if cursor == NIL {
                return None;
            }
            let node = &self.nodes[cursor];
            cursor = node.next;
            Some((&node.key, &node.value))
        })
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Stats ==
    /// Returns hit, miss and eviction counters for this cache.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.map.len());
        stats
    }

    // == List Maintenance ==
    fn move_to_front(&mut self, idx: usize) {
        if self.head != idx {
            self.unlink(idx);
            self.push_front(idx);
        }
    }

    fn unlink(&mut self, idx: usize) {
        let (prev, next) = (self.nodes[idx].prev, self.nodes[idx].next);

        if prev != NIL {
            self.nodes[prev].next = next;
        } else {
            self.head = next;
        }

        if next != NIL {
            self.nodes[next].prev = prev;
        } else {
            self.tail = prev;
        }

        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = NIL;
    }

    fn push_front(&mut self, idx: usize) {
        self.nodes[idx].prev = NIL;
        self.nodes[idx].next = self.head;

        if self.head != NIL {
            self.nodes[self.head].prev = idx;
        } else {
            self.tail = idx;
        }

        self.head = idx;
    }
}
