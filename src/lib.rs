//! The fast-hash family of non-cryptographic hash functions.
//!
//! fast-hash folds its input into a 64-bit accumulator through a simple
//! Merkle-Damgård style compression loop over 8-byte words, and derives a
//! 32-bit variant by folding the two halves of the 64-bit value together.
//! It is meant for hash tables, checksums and deduplication keys, and makes
//! no claim of resistance against deliberately crafted collisions.
//!
//! ```
//! let h = fasthash::hash64(b"hello world!!", 0);
//! assert_eq!(fasthash::hash32(b"hello world!!", 0), fasthash::fold32(h));
//! ```
//!
//! [`hash64`] and [`hash32`] read whole words in the byte order of the host,
//! matching the reference C implementation bit for bit on the same host. The
//! `*_with_order` variants take an explicit [`WordOrder`] for values that
//! have to be reproducible across hosts of different endianness.

mod consts;
mod fasthash;
mod fingerprint;
mod hasher;
mod sum_hash;
mod types;

pub use crate::consts::{BLOCK_SIZE, MIX_MULTIPLIER, ROUND_MULTIPLIER};
pub use crate::fasthash::{fold32, hash32, hash32_with_order, hash64, hash64_with_order};
pub use crate::fingerprint::{Fingerprint32, Fingerprint64, FingerprintParseError};
pub use crate::hasher::{BuildFastHasher, FastHashMap, FastHashSet, FastHasher};
pub use crate::sum_hash::{FastHash32, FastHash64, SeededHash};
pub use crate::types::{HashType, HashWidth, WordOrder};
