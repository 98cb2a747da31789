//! Index + recency list with shared node identity.
//!
//! Entries live in a slot arena addressed by stable indices. The key index
//! maps key -> slot, and the recency order is a doubly-linked list of slot
//! indices threaded through the arena: front is least-recently-used, back is
//! most-recently-used. All operations are O(1).

use ahash::RandomState;
use std::collections::HashMap;
use std::hash::Hash;

struct Node<K, V> {
    key: K,
    value: V,
    prev: Option<usize>,
    next: Option<usize>,
}

/// Fixed-capacity LRU store. Not exposed; `MemoCache` owns the only instance
/// and serializes access to it.
pub(crate) struct LruList<K, V> {
    index: HashMap<K, usize, RandomState>,
    slots: Vec<Option<Node<K, V>>>,
    free: Vec<usize>,
    /// Least-recently-used end; evictions come from here.
    front: Option<usize>,
    /// Most-recently-used end; hits and fresh inserts land here.
    back: Option<usize>,
    capacity: usize,
}

impl<K, V> LruList<K, V>
where
    K: Hash + Eq + Clone,
{
    /// Capacity is validated by the caller; the arena never holds more than
    /// `capacity` live slots, so freed slots are always reused.
    pub(crate) fn new(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity_and_hasher(capacity, RandomState::new()),
            slots: Vec::with_capacity(capacity),
            free: Vec::new(),
            front: None,
            back: None,
            capacity,
        }
    }

    /// Probe the index; on a hit, move the entry to the MRU end and return
    /// the stored value.
    pub(crate) fn get_promote(&mut self, key: &K) -> Option<&V> {
        let idx = *self.index.get(key)?;
        if self.back != Some(idx) {
            self.detach(idx);
            self.attach_back(idx);
        }
        self.slots[idx].as_ref().map(|node| &node.value)
    }

    /// Insert a fresh entry at the MRU end, evicting the front entry first
    /// iff already at capacity. The key must not be present: the engine only
    /// inserts after a confirmed miss, so there is no overwrite path.
    pub(crate) fn insert(&mut self, key: K, value: V) {
        debug_assert!(!self.index.contains_key(&key));
        if self.index.len() == self.capacity {
            self.evict_front();
        }
        let idx = self.alloc(Node {
            key: key.clone(),
            value,
            prev: None,
            next: None,
        });
        self.attach_back(idx);
        self.index.insert(key, idx);
        debug_assert!(self.index.len() <= self.capacity);
    }

    pub(crate) fn len(&self) -> usize {
        self.index.len()
    }

    pub(crate) fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    /// Remove the least-recently-used entry from both structures.
    fn evict_front(&mut self) {
        if let Some(idx) = self.front {
            self.detach(idx);
            if let Some(node) = self.slots[idx].take() {
                self.index.remove(&node.key);
            }
            self.free.push(idx);
        }
    }

    /// Unlink a slot from the recency list, patching neighbors and ends.
    fn detach(&mut self, idx: usize) {
        let (prev, next) = match &self.slots[idx] {
            Some(node) => (node.prev, node.next),
            None => return,
        };

        match prev {
            Some(prev_idx) => {
                if let Some(prev_node) = &mut self.slots[prev_idx] {
                    prev_node.next = next;
                }
            }
            None => self.front = next,
        }

        match next {
            Some(next_idx) => {
                if let Some(next_node) = &mut self.slots[next_idx] {
                    next_node.prev = prev;
                }
            }
            None => self.back = prev,
        }
    }

    /// Link a detached slot at the MRU end.
    fn attach_back(&mut self, idx: usize) {
        if let Some(node) = &mut self.slots[idx] {
            node.prev = self.back;
            node.next = None;
        }
        if let Some(back_idx) = self.back {
            if let Some(back_node) = &mut self.slots[back_idx] {
                back_node.next = Some(idx);
            }
        }
        self.back = Some(idx);
        if self.front.is_none() {
            self.front = Some(idx);
        }
    }

    fn alloc(&mut self, node: Node<K, V>) -> usize {
        match self.free.pop() {
            Some(idx) => {
                self.slots[idx] = Some(node);
                idx
            }
            None => {
                self.slots.push(Some(node));
                self.slots.len() - 1
            }
        }
    }

    /// Keys in recency order, front (LRU) to back (MRU). Test-only: walking
    /// the list is O(n).
    #[cfg(test)]
    fn order(&self) -> Vec<K> {
        let mut keys = Vec::with_capacity(self.index.len());
        let mut cursor = self.front;
        while let Some(idx) = cursor {
            let node = self.slots[idx].as_ref().unwrap();
            keys.push(node.key.clone());
            cursor = node.next;
        }
        keys
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn promotes_hit_to_back() {
        let mut list = LruList::new(3);
        list.insert(1, "a");
        list.insert(2, "b");
        list.insert(3, "c");

        assert_eq!(list.get_promote(&1), Some(&"a"));
        assert_eq!(list.order(), vec![2, 3, 1]);
    }

    #[test]
    fn promote_at_back_is_noop() {
        let mut list = LruList::new(3);
        list.insert(1, "a");
        list.insert(2, "b");

        assert_eq!(list.get_promote(&2), Some(&"b"));
        assert_eq!(list.order(), vec![1, 2]);
    }

    #[test]
    fn evicts_strict_front() {
        let mut list = LruList::new(2);
        list.insert(1, "a");
        list.insert(2, "b");
        list.insert(3, "c");

        assert!(!list.contains(&1));
        assert_eq!(list.order(), vec![2, 3]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn eviction_respects_promotion() {
        let mut list = LruList::new(2);
        list.insert(1, "a");
        list.insert(2, "b");
        list.get_promote(&1);
        list.insert(3, "c");

        assert!(list.contains(&1));
        assert!(!list.contains(&2));
    }

    #[test]
    fn arena_reuses_freed_slots() {
        let mut list = LruList::new(2);
        for i in 0..100 {
            list.insert(i, i * 10);
        }

        assert_eq!(list.len(), 2);
        // Evicted slots are recycled, so the arena stays at capacity.
        assert_eq!(list.slots.len(), 2);
        assert_eq!(list.order(), vec![98, 99]);
    }

    #[test]
    fn index_and_order_stay_in_sync() {
        let mut list = LruList::new(4);
        for i in 0..10 {
            list.insert(i, ());
            list.get_promote(&(i / 2));
        }

        let order = list.order();
        assert_eq!(order.len(), list.index.len());
        for key in &order {
            assert!(list.contains(key));
        }
    }

    #[test]
    fn single_entry_is_both_ends() {
        let mut list = LruList::new(5);
        list.insert(7, "x");

        assert_eq!(list.front, list.back);
        assert_eq!(list.get_promote(&7), Some(&"x"));
        assert_eq!(list.order(), vec![7]);
    }
}
