use std::collections::{HashMap, VecDeque};
use std::hash::Hash;

/// A bounded associative store with least-recently-used eviction.
///
/// Recency is tracked across both reads and writes: `get` and `insert`
/// promote the touched key to most-recently-used, while `contains_key` and
/// `remove` leave the ordering of the remaining entries untouched. When an
/// insertion would push the store past its capacity, the least-recently-used
/// entry is dropped first.
pub struct LruCache<K: Eq + Hash + Clone, V> {
    map: HashMap<K, V>,
    order: VecDeque<K>,
    capacity: usize,
}

impl<K: Eq + Hash + Clone, V: Clone> LruCache<K, V> {
    pub fn new(capacity: usize) -> Self {
        assert!(capacity > 0, "cache capacity must be non-zero");
        Self {
            map: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn get(&mut self, key: &K) -> Option<V> {
        let value = self.map.get(key)?.clone();
        self.promote(key);
        Some(value)
    }

    pub fn insert(&mut self, key: K, value: V) {
        if self.map.insert(key.clone(), value).is_some() {
            self.promote(&key);
            return;
        }
        self.order.push_back(key);
        if self.map.len() > self.capacity {
            if let Some(oldest) = self.order.pop_front() {
                self.map.remove(&oldest);
            }
        }
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.map.contains_key(key)
    }

    pub fn remove(&mut self, key: &K) -> Option<V> {
        let value = self.map.remove(key)?;
        self.order.retain(|k| k != key);
        Some(value)
    }

    pub fn clear(&mut self) {
        self.map.clear();
        self.order.clear();
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

    // The order deque never exceeds `capacity` entries, so the linear scan
    // here stays cheap.
    fn promote(&mut self, key: &K) {
        if let Some(position) = self.order.iter().position(|k| k == key) {
            let _ = self.order.remove(position);
        }
        self.order.push_back(key.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::LruCache;

    #[test]
    fn evicts_least_recently_used_on_overflow() {
        let mut cache = LruCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.insert("c", 3);

        assert_eq!(cache.len(), 2);
        assert!(!cache.contains_key(&"a"));
        assert_eq!(cache.get(&"b"), Some(2));
        assert_eq!(cache.get(&"c"), Some(3));
    }

    #[test]
    fn get_promotes_entry() {
        let mut cache = LruCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);
        // Touch "a" so "b" becomes the eviction candidate.
        assert_eq!(cache.get(&"a"), Some(1));
        cache.insert("c", 3);

        assert!(cache.contains_key(&"a"));
        assert!(!cache.contains_key(&"b"));
    }

    #[test]
    fn reinsert_replaces_and_promotes() {
        let mut cache = LruCache::new(2);
        cache.insert("a", 1);
        cache.insert("b", 2);
        cache.insert("a", 10);
        cache.insert("c", 3);

        assert_eq!(cache.get(&"a"), Some(10));
        assert!(!cache.contains_key(&"b"));
    }

    #[test]
    fn remove_and_clear() {
        let mut cache = LruCache::new(4);
        cache.insert("a", 1);
        cache.insert("b", 2);

        assert_eq!(cache.remove(&"a"), Some(1));
        assert_eq!(cache.remove(&"a"), None);
        assert_eq!(cache.len(), 1);

        cache.clear();
        assert!(cache.is_empty());
        assert_eq!(cache.capacity(), 4);
    }

    #[test]
    fn never_exceeds_capacity() {
        let mut cache = LruCache::new(3);
        for i in 0..50 {
            cache.insert(i, i);
            assert!(cache.len() <= 3);
        }
    }
}
