use std::collections::{HashMap, HashSet};
use std::hash::{BuildHasher, Hasher};

use log::trace;

use crate::fasthash::hash64_with_order;
use crate::types::WordOrder;

/// A [`Hasher`] backed by fast-hash.
///
/// Every `write` rehashes its bytes seeded with the current state, so a single write of `bytes`
/// finishes to exactly `hash64(bytes, seed)`. Several writes are chained through the seed and
/// do not equal the hash of their concatenation.
#[derive(Clone, Debug, Default)]
pub struct FastHasher {
    state: u64,
    order: WordOrder,
}

impl FastHasher {
    pub fn with_seed(seed: u64) -> Self {
        Self {
            state: seed,
            order: WordOrder::Native,
        }
    }
}

impl Hasher for FastHasher {
    #[inline]
    fn write(&mut self, bytes: &[u8]) {
        self.state = hash64_with_order(bytes, self.state, self.order);
    }

    #[inline]
    fn finish(&self) -> u64 {
        self.state
    }
}

/// Builds [`FastHasher`]s sharing one seed and word order.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct BuildFastHasher {
    seed: u64,
    order: WordOrder,
}

impl BuildFastHasher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(seed: u64) -> Self {
        trace!("fasthash seed set (seed={:#x})", seed);
        Self {
            seed,
            order: WordOrder::Native,
        }
    }

    pub fn with_order(self, order: WordOrder) -> Self {
        trace!("fasthash word order set (order={})", order);
        Self { order, ..self }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn order(&self) -> WordOrder {
        self.order
    }
}

impl BuildHasher for BuildFastHasher {
    type Hasher = FastHasher;

    #[inline]
    fn build_hasher(&self) -> FastHasher {
        FastHasher {
            state: self.seed,
            order: self.order,
        }
    }
}

pub type FastHashMap<K, V> = HashMap<K, V, BuildFastHasher>;
pub type FastHashSet<T> = HashSet<T, BuildFastHasher>;
