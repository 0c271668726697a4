use std::collections::HashMap;
use std::hash::Hash;

/// Insertion-ordered collection with a hash index on the natural key.
///
/// Records are never removed, so positions in `values` stay valid for the
/// lifetime of the store.
#[derive(Debug, Clone)]
pub struct KeyedStore<K, V> {
    values: Vec<V>,
    index: HashMap<K, usize>,
}

impl<K: Eq + Hash, V> KeyedStore<K, V> {
    pub fn new() -> Self {
        Self {
            values: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn contains(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&pos| &self.values[pos])
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.index.get(key).map(|&pos| &mut self.values[pos])
    }

    /// Hands the value back when the key is already taken.
    pub fn insert(&mut self, key: K, value: V) -> Result<&V, V> {
        if self.index.contains_key(&key) {
            return Err(value);
        }
        let pos = self.values.len();
        self.values.push(value);
        self.index.insert(key, pos);
        Ok(&self.values[pos])
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.values.iter()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<K: Eq + Hash, V> Default for KeyedStore<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_keeps_order() {
        let mut store = KeyedStore::new();
        store.insert("b".to_string(), 2).unwrap();
        store.insert("a".to_string(), 1).unwrap();
        store.insert("c".to_string(), 3).unwrap();

        let values: Vec<i32> = store.values().copied().collect();
        assert_eq!(values, vec![2, 1, 3]);
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn test_duplicate_key_is_rejected() {
        let mut store = KeyedStore::new();
        store.insert("a".to_string(), 1).unwrap();
        assert_eq!(store.insert("a".to_string(), 9), Err(9));
        assert_eq!(store.get(&"a".to_string()), Some(&1));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut store = KeyedStore::new();
        store.insert(1u32, "x".to_string()).unwrap();
        if let Some(v) = store.get_mut(&1) {
            v.push('y');
        }
        assert_eq!(store.get(&1).map(String::as_str), Some("xy"));
        assert!(store.get(&2).is_none());
    }
}
