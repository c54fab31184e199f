use std::borrow::Borrow;
use std::fmt::{self, Debug};
use std::hash::Hash;
use std::iter::Flatten;
use std::{slice, vec};

use super::hash::KeyedMixHash;

/// Number of buckets allocated by [`ChainedHashMap::new`].
const INITIAL_CAPACITY: usize = 16;

/// Ratio of entries to buckets that triggers a resize.
const LOAD_FACTOR: f64 = 0.75;

/// Largest power of two a `usize` holds.
const MAX_BUCKETS: usize = 1 << (usize::BITS - 1);

/// A stored entry. The mixed hash is kept so resizing does not rehash keys.
#[derive(Clone)]
struct Slot<K, V> {
    hash: i32,
    key: K,
    value: V,
}

type Bucket<K, V> = Vec<Slot<K, V>>;

/// Separate-chaining hash map keyed by [`KeyedMixHash`].
///
/// The bucket count is always a power of two, so the bucket index is the mixed
/// hash masked by `capacity - 1`. Once the number of entries reaches
/// `0.75 * capacity` the bucket array doubles and every entry is redistributed.
///
/// Lookups accept any borrowed form of the key, as with the std map.
#[derive(Clone)]
pub struct ChainedHashMap<K, V> {
    buckets: Vec<Bucket<K, V>>,
    len: usize,
}

impl<K, V> ChainedHashMap<K, V>
where
    K: Hash + Eq,
{
    /// Creates an empty map with the default bucket count.
    pub fn new() -> Self {
        Self::with_buckets(INITIAL_CAPACITY)
    }

    /// Creates an empty map able to hold `expected` entries without resizing.
    pub fn with_capacity(expected: usize) -> Self {
        Self::with_buckets(bucket_count_for(expected))
    }

    fn with_buckets(count: usize) -> Self {
        debug_assert!(count.is_power_of_two());
        let mut buckets = Vec::with_capacity(count);
        buckets.resize_with(count, Vec::new);
        ChainedHashMap { buckets, len: 0 }
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of buckets.
    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    /// Length of the longest chain. Useful to inspect clustering.
    pub fn max_chain_len(&self) -> usize {
        self.buckets.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// Inserts `value` under `key`, returning the value it replaced.
    pub fn put(&mut self, key: K, value: V) -> Option<V> {
        let hash = KeyedMixHash::hash(&key);
        if let Some((index, position)) = self.locate(hash, &key) {
            let slot = &mut self.buckets[index][position];
            return Some(std::mem::replace(&mut slot.value, value));
        }

        self.insert_new(hash, key, value);
        None
    }

    /// Inserts `value` only if `key` is absent. Returns the resident value
    /// either way.
    pub fn put_if_absent(&mut self, key: K, value: V) -> &mut V {
        let hash = KeyedMixHash::hash(&key);
        let (index, position) = match self.locate(hash, &key) {
            Some(found) => found,
            None => self.insert_new(hash, key, value),
        };
        &mut self.buckets[index][position].value
    }

    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = KeyedMixHash::hash(key);
        self.locate(hash, key)
            .map(|(index, position)| &self.buckets[index][position].value)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = KeyedMixHash::hash(key);
        let (index, position) = self.locate(hash, key)?;
        Some(&mut self.buckets[index][position].value)
    }

    /// Returns the value under `key`, or `default` when the key is absent.
    pub fn get_or_default<'a, Q>(&'a self, key: &Q, default: &'a V) -> &'a V
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).unwrap_or(default)
    }

    /// Detaches the entry for `key` and returns its value.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = KeyedMixHash::hash(key);
        let (index, position) = self.locate(hash, key)?;
        self.len -= 1;
        // Chains keep insertion order.
        Some(self.buckets[index].remove(position).value)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let hash = KeyedMixHash::hash(key);
        self.locate(hash, key).is_some()
    }

    /// Removes every entry, keeping the bucket array.
    pub fn clear(&mut self) {
        for bucket in self.buckets.iter_mut() {
            bucket.clear();
        }
        self.len = 0;
    }

    fn locate<Q>(&self, hash: i32, key: &Q) -> Option<(usize, usize)>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        let index = self.bucket_index(hash);
        self.buckets[index]
            .iter()
            .position(|slot| slot.hash == hash && slot.key.borrow() == key)
            .map(|position| (index, position))
    }

    #[inline]
    fn bucket_index(&self, hash: i32) -> usize {
        (hash as u32 as usize) & (self.buckets.len() - 1)
    }

    /// Appends a slot for a key known to be absent and returns its location.
    /// The table grows first when this entry would reach the load factor, so
    /// the new slot always ends its chain.
    fn insert_new(&mut self, hash: i32, key: K, value: V) -> (usize, usize) {
        if (self.len + 1) as f64 >= LOAD_FACTOR * self.buckets.len() as f64 {
            self.resize(self.buckets.len().saturating_mul(2).min(MAX_BUCKETS));
        }
        let index = self.bucket_index(hash);
        self.buckets[index].push(Slot { hash, key, value });
        self.len += 1;
        (index, self.buckets[index].len() - 1)
    }

    fn resize(&mut self, new_count: usize) {
        log::debug!("resizing hash map: {} -> {} buckets", self.buckets.len(), new_count);

        let mut fresh: Vec<Bucket<K, V>> = Vec::with_capacity(new_count);
        fresh.resize_with(new_count, Vec::new);
        let old = std::mem::replace(&mut self.buckets, fresh);

        for slot in old.into_iter().flatten() {
            let index = self.bucket_index(slot.hash);
            self.buckets[index].push(slot);
        }
    }
}

/// Power-of-two bucket count that keeps `expected` entries under the load
/// factor. Saturates at [`MAX_BUCKETS`].
fn bucket_count_for(expected: usize) -> usize {
    // `as` saturates the float at usize::MAX.
    let needed = ((expected as f64 / LOAD_FACTOR) as usize).saturating_add(1);
    needed
        .max(INITIAL_CAPACITY)
        .checked_next_power_of_two()
        .unwrap_or(MAX_BUCKETS)
}

impl<K, V> ChainedHashMap<K, V> {
    pub fn keys(&self) -> impl Iterator<Item = &K> + '_ {
        self.entries().map(|(key, _)| key)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> + '_ {
        self.entries().map(|(_, value)| value)
    }

    pub fn values_mut(&mut self) -> impl Iterator<Item = &mut V> + '_ {
        self.buckets
            .iter_mut()
            .flatten()
            .map(|slot| &mut slot.value)
    }

    /// Iterates over `(key, value)` pairs in bucket order.
    pub fn entries(&self) -> Iter<'_, K, V> {
        Iter {
            inner: self.buckets.iter().flatten(),
        }
    }
}

impl<K: Hash + Eq, V> Default for ChainedHashMap<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Debug, V: Debug> Debug for ChainedHashMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.entries()).finish()
    }
}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for ChainedHashMap<K, V> {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = ChainedHashMap::new();
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq, V> Extend<(K, V)> for ChainedHashMap<K, V> {
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.put(key, value);
        }
    }
}

/// Borrowing iterator returned by [`ChainedHashMap::entries`].
pub struct Iter<'a, K, V> {
    inner: Flatten<slice::Iter<'a, Bucket<K, V>>>,
}

impl<'a, K, V> Iterator for Iter<'a, K, V> {
    type Item = (&'a K, &'a V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|slot| (&slot.key, &slot.value))
    }
}

/// Owning iterator over the entries of a [`ChainedHashMap`].
pub struct IntoIter<K, V> {
    inner: Flatten<vec::IntoIter<Bucket<K, V>>>,
}

impl<K, V> Iterator for IntoIter<K, V> {
    type Item = (K, V);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|slot| (slot.key, slot.value))
    }
}

impl<'a, K, V> IntoIterator for &'a ChainedHashMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries()
    }
}

impl<K, V> IntoIterator for ChainedHashMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter {
            inner: self.buckets.into_iter().flatten(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bucket_count_for_small_and_huge_requests() {
        assert_eq!(bucket_count_for(0), INITIAL_CAPACITY);
        assert_eq!(bucket_count_for(12), 32);
        assert_eq!(bucket_count_for(100), 256);
        assert_eq!(bucket_count_for(usize::MAX), MAX_BUCKETS);
        assert_eq!(bucket_count_for(usize::MAX / 2), MAX_BUCKETS);
    }
}
