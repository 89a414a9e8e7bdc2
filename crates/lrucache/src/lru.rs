//! LRU recency core: arena-backed intrusive list + key index.
//!
//! Nodes live in a growable `Vec` and link to each other by slot index, so
//! move-to-front, removal, and eviction are O(1) without per-node heap
//! allocation. Vacated slots are recycled through a free list.

use std::collections::HashMap;
use std::hash::Hash;

use ahash::RandomState;

/// Node in the recency list.
///
/// The key is duplicated into the node so that evicting at the tail can
/// delete the index entry without a reverse lookup.
struct Node<K, V> {
    key: K,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Single-threaded LRU core combining the recency list with a key index.
///
/// The front of the list is the most-recently-used entry; the back is the
/// next eviction candidate. `LruCache` wraps this in a lock for concurrent
/// use.
pub struct LruCore<K, V> {
    /// Key -> slot of the node holding that key.
    map: HashMap<K, usize, RandomState>,
    /// Node arena; `None` slots are free.
    nodes: Vec<Option<Node<K, V>>>,
    head: Option<usize>,
    tail: Option<usize>,
    /// Slots vacated by removal or eviction, reused before growing `nodes`.
    free_list: Vec<usize>,
    capacity: usize,
}

impl<K, V> LruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Create a core holding at most `capacity` entries.
    ///
    /// A capacity of 0 is coerced to 1 so the cache can always hold at
    /// least one entry.
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            map: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            nodes: Vec::with_capacity(capacity),
            head: None,
            tail: None,
            free_list: Vec::new(),
            capacity,
        }
    }

    /// Insert a key-value pair, marking it most-recently-used.
    ///
    /// An existing key has its value overwritten in place and moves to the
    /// front; no eviction happens in that case, even at full capacity. A new
    /// key inserted at full capacity evicts exactly one entry first; that
    /// entry is returned.
    pub fn add(&mut self, key: K, value: V) -> Option<(K, V)> {
        if let Some(&idx) = self.map.get(&key) {
            if let Some(node) = &mut self.nodes[idx] {
                node.value = value;
            }
            self.move_to_front(idx);
            return None;
        }

        let evicted = if self.map.len() >= self.capacity {
            self.evict_lru()
        } else {
            None
        };

        let idx = self.alloc_slot();
        self.nodes[idx] = Some(Node {
            key: key.clone(),
            value,
            prev: None,
            next: self.head,
        });

        if let Some(head_idx) = self.head {
            if let Some(head) = &mut self.nodes[head_idx] {
                head.prev = Some(idx);
            }
        }
        self.head = Some(idx);
        if self.tail.is_none() {
            self.tail = Some(idx);
        }
        self.map.insert(key, idx);

        evicted
    }

    /// Look up a key and mark it most-recently-used.
    pub fn get(&mut self, key: &K) -> Option<&V> {
        let idx = *self.map.get(key)?;
        self.move_to_front(idx);
        self.nodes[idx].as_ref().map(|node| &node.value)
    }

    /// Look up a key without touching recency order.
    pub fn peek(&self, key: &K) -> Option<&V> {
        let idx = *self.map.get(key)?;
        self.nodes[idx].as_ref().map(|node| &node.value)
    }

    /// Whether `key` is present. Does not touch recency order.
    pub fn contains(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    /// Remove a key from both the list and the index.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let idx = self.map.remove(key)?;
        self.unlink(idx);
        self.free_list.push(idx);
        self.nodes[idx].take().map(|node| node.value)
    }

    /// Current entry count.
    pub fn len(&self) -> usize {
        self.map.len()
    }

    /// Whether the cache holds no entries.
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Maximum entry count, fixed at construction.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Drop every entry. Capacity is unchanged.
    pub fn clear(&mut self) {
        self.map.clear();
        self.nodes.clear();
        self.free_list.clear();
        self.head = None;
        self.tail = None;
    }

    /// Splice the node at `idx` out of its position and relink it at the
    /// front. No-op when it is already the head.
    fn move_to_front(&mut self, idx: usize) {
        if self.head == Some(idx) {
            return;
        }

        self.unlink(idx);

        if let Some(node) = &mut self.nodes[idx] {
            node.prev = None;
            node.next = self.head;
        }
        if let Some(head_idx) = self.head {
            if let Some(head) = &mut self.nodes[head_idx] {
                head.prev = Some(idx);
            }
        }
        self.head = Some(idx);
    }

    /// Detach the node at `idx`, fixing neighbor links and head/tail.
    /// The node must still be present in its slot.
    fn unlink(&mut self, idx: usize) {
        let (prev, next) = match &self.nodes[idx] {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_node) = &mut self.nodes[prev_idx] {
                    prev_node.next = next;
                }
            }
            None => self.head = next,
        }

        match next {
            Some(next_idx) => {
                if let Some(next_node) = &mut self.nodes[next_idx] {
                    next_node.prev = prev;
                }
            }
            None => self.tail = prev,
        }
    }

    /// Evict the entry at the back of the recency list, returning it.
    ///
    /// The tail is unlinked while its node is still in the arena; only then
    /// is the slot emptied and the key dropped from the index.
    fn evict_lru(&mut self) -> Option<(K, V)> {
        let tail_idx = self.tail?;
        self.unlink(tail_idx);
        self.free_list.push(tail_idx);
        let node = self.nodes[tail_idx].take()?;
        self.map.remove(&node.key);
        Some((node.key, node.value))
    }

    /// Hand out a free slot, growing the arena only when none is available.
    fn alloc_slot(&mut self) -> usize {
        if let Some(idx) = self.free_list.pop() {
            idx
        } else {
            let idx = self.nodes.len();
            self.nodes.push(None);
            idx
        }
    }
}

#[cfg(test)]
impl<K, V> LruCore<K, V>
where
    K: Eq + Hash + Clone,
{
    /// Walk the list front-to-back and check that links are symmetric,
    /// head/tail are consistent, and the index matches the live nodes
    /// exactly.
    pub(crate) fn assert_invariants(&self) {
        assert!(self.map.len() <= self.capacity, "len exceeds capacity");

        if self.map.is_empty() {
            assert_eq!(self.head, None);
            assert_eq!(self.tail, None);
            return;
        }

        let mut seen = 0usize;
        let mut prev = None;
        let mut current = self.head;
        while let Some(idx) = current {
            let node = self.nodes[idx].as_ref().expect("linked slot is empty");
            assert_eq!(node.prev, prev, "prev link out of sync");
            assert_eq!(self.map.get(&node.key), Some(&idx), "index entry missing");
            seen += 1;
            assert!(seen <= self.map.len(), "cycle in recency list");
            prev = Some(idx);
            current = node.next;
        }
        assert_eq!(self.tail, prev, "tail does not end the list");
        assert_eq!(seen, self.map.len(), "index and list disagree");
    }
}
