//! Composite-key document table shared by the in-memory stores.

use std::collections::HashMap;
use std::hash::Hash;

use tokio::sync::RwLock;

struct Row<V> {
    seq: u64,
    value: V,
}

struct Inner<K, V> {
    rows: HashMap<K, Row<V>>,
    next_seq: u64,
}

/// Rows addressed by a composite key, remembering insertion order.
///
/// Each row carries a sequence number assigned on first insert. Replacing
/// a row in place keeps its original sequence number.
pub(crate) struct Table<K, V> {
    inner: RwLock<Inner<K, V>>,
}

impl<K, V> Table<K, V>
where
    K: Eq + Hash,
    V: Clone,
{
    pub(crate) fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                rows: HashMap::new(),
                next_seq: 0,
            }),
        }
    }

    /// Inserts a new row. Returns `false` and leaves the table untouched if
    /// the key is already present.
    pub(crate) async fn insert(&self, key: K, value: V) -> bool {
        let mut inner = self.inner.write().await;
        if inner.rows.contains_key(&key) {
            return false;
        }
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.rows.insert(key, Row { seq, value });
        true
    }

    /// Inserts or replaces the row under `key`.
    pub(crate) async fn upsert(&self, key: K, value: V) {
        let mut inner = self.inner.write().await;
        if let Some(row) = inner.rows.get_mut(&key) {
            row.value = value;
            return;
        }
        let seq = inner.next_seq;
        inner.next_seq += 1;
        inner.rows.insert(key, Row { seq, value });
    }

    pub(crate) async fn get(&self, key: &K) -> Option<V> {
        self.inner.read().await.rows.get(key).map(|r| r.value.clone())
    }

    /// Mutates the row under `key` in place. Returns `false` if absent.
    pub(crate) async fn modify(&self, key: &K, f: impl FnOnce(&mut V)) -> bool {
        match self.inner.write().await.rows.get_mut(key) {
            Some(row) => {
                f(&mut row.value);
                true
            }
            None => false,
        }
    }

    pub(crate) async fn remove(&self, key: &K) -> bool {
        self.inner.write().await.rows.remove(key).is_some()
    }

    /// Rows whose key matches `pred`, in insertion order.
    pub(crate) async fn scan(&self, pred: impl Fn(&K, &V) -> bool) -> Vec<V> {
        let inner = self.inner.read().await;
        let mut hits: Vec<(u64, V)> = inner
            .rows
            .iter()
            .filter(|(k, r)| pred(*k, &r.value))
            .map(|(_, r)| (r.seq, r.value.clone()))
            .collect();
        hits.sort_by_key(|(seq, _)| *seq);
        hits.into_iter().map(|(_, v)| v).collect()
    }

    pub(crate) async fn len(&self) -> usize {
        self.inner.read().await.rows.len()
    }
}
