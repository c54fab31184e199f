use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::{PoisonError, RwLock};

use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// Seed of the substitution table. Fixed so hashes are reproducible across runs.
const TABLE_SEED: u64 = 690;

/// Number of rows (and columns) in the substitution table.
const TABLE_DIM: usize = 1 << 8;

static TABLE: RwLock<Option<MixTable>> = RwLock::new(None);

/// 256x256 grid of pseudorandom 4-byte words.
struct MixTable {
    entries: Box<[[u8; 4]]>,
}

impl MixTable {
    fn generate() -> Self {
        let mut rng = StdRng::seed_from_u64(TABLE_SEED);
        let mut entries = vec![[0u8; 4]; TABLE_DIM * TABLE_DIM].into_boxed_slice();
        for entry in entries.iter_mut() {
            rng.fill_bytes(entry);
        }
        MixTable { entries }
    }

    #[inline]
    fn lookup(&self, row: u8, column: u8) -> &[u8; 4] {
        &self.entries[row as usize * TABLE_DIM + column as usize]
    }
}

/// Keyed table-mixing hash used by [`ChainedHashMap`](super::ChainedHashMap).
///
/// The key's identity hash is folded to 32 bits and split into two 16-bit
/// chunks. Each chunk is XORed with the running state, the resulting byte
/// pair selects a word from a fixed pseudorandom table, and that word is
/// XORed back into the state. Collision rates are close to those of random
/// numbers while equal keys still hash identically.
///
/// The table (256 KiB) is built lazily on first use and can be released with
/// [`KeyedMixHash::release_table`]; it is rebuilt transparently afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyedMixHash;

impl KeyedMixHash {
    /// Hashes `key` into a signed 32-bit value.
    pub fn hash<Q: Hash + ?Sized>(key: &Q) -> i32 {
        let chunks = identity_hash(key).to_be_bytes();
        Self::with_table(|table| mix(table, chunks))
    }

    /// Drops the substitution table. The next call to [`KeyedMixHash::hash`]
    /// rebuilds it from the same seed.
    pub fn release_table() {
        let mut guard = TABLE.write().unwrap_or_else(PoisonError::into_inner);
        if guard.take().is_some() {
            log::debug!("released mix hash table");
        }
    }

    /// Returns true if the substitution table is currently built.
    pub fn is_table_loaded() -> bool {
        TABLE
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Runs `f` against the table while holding the lock, building the table
    /// first if it has been released.
    fn with_table<R>(f: impl FnOnce(&MixTable) -> R) -> R {
        {
            let guard = TABLE.read().unwrap_or_else(PoisonError::into_inner);
            if let Some(table) = guard.as_ref() {
                return f(table);
            }
        }

        let mut guard = TABLE.write().unwrap_or_else(PoisonError::into_inner);
        // Another thread may have won the race for the write lock.
        let table = guard.get_or_insert_with(|| {
            log::debug!("building mix hash table (seed {})", TABLE_SEED);
            MixTable::generate()
        });
        f(table)
    }
}

fn mix(table: &MixTable, chunks: [u8; 4]) -> i32 {
    let mut state = [0u8; 4];
    for pair in chunks.chunks_exact(2) {
        let column = pair[0] ^ state[0];
        let row = pair[1] ^ state[1];
        for (s, t) in state.iter_mut().zip(table.lookup(row, column)) {
            *s ^= t;
        }
    }
    i32::from_be_bytes(state)
}

/// Folds the std identity hash of `key` to 32 bits. `DefaultHasher::new()`
/// uses fixed keys, so the value is stable for a given build.
fn identity_hash<Q: Hash + ?Sized>(key: &Q) -> u32 {
    let mut hasher = DefaultHasher::new();
    key.hash(&mut hasher);
    let full = hasher.finish();
    (full ^ (full >> 32)) as u32
}
