pub mod hash;
pub mod hash_map;
pub mod priority_queue;

pub use hash::KeyedMixHash;
pub use hash_map::ChainedHashMap;
pub use priority_queue::IndexedPriorityQueue;
