//! The fast-hash compression function.
//!
//! Input is consumed in 8-byte blocks. Each block is scrambled by [`mix`], xored into the
//! accumulator, and the accumulator is scaled by [`ROUND_MULTIPLIER`]. A short tail is packed
//! into a zero-padded word and combined the same way, then the accumulator is mixed once more.

use arrayref::array_ref;

use crate::consts::{BLOCK_SIZE, MIX_MULTIPLIER, MIX_SHIFT_1, MIX_SHIFT_2, ROUND_MULTIPLIER};
use crate::types::WordOrder;

#[inline(always)]
pub(crate) fn mix(mut x: u64) -> u64 {
    x ^= x >> MIX_SHIFT_1;
    x = x.wrapping_mul(MIX_MULTIPLIER);
    x ^= x >> MIX_SHIFT_2;
    x
}

#[inline(always)]
fn compress(h: u64, v: u64) -> u64 {
    (h ^ mix(v)).wrapping_mul(ROUND_MULTIPLIER)
}

#[inline(always)]
fn hash64_imp(input: &[u8], seed: u64, read_word: impl Fn([u8; BLOCK_SIZE]) -> u64) -> u64 {
    let mut h = seed ^ (input.len() as u64).wrapping_mul(ROUND_MULTIPLIER);

    let blocks = input.chunks_exact(BLOCK_SIZE);
    let tail = blocks.remainder();
    for block in blocks {
        h = compress(h, read_word(*array_ref!(block, 0, BLOCK_SIZE)));
    }

    // an empty tail contributes nothing, not even a compression of zero
    if !tail.is_empty() {
        let v = tail
            .iter()
            .enumerate()
            .fold(0u64, |v, (i, &byte)| v ^ ((byte as u64) << (8 * i)));
        h = compress(h, v);
    }

    mix(h)
}

/// Hashes `input` to 64 bits.
///
/// Full blocks are read in the target's native byte order, so the result is bit-identical with
/// the reference fast-hash on a host of the same endianness. Use [`hash64_with_order`] with
/// [`WordOrder::Little`] for values that must agree across hosts.
#[inline]
pub fn hash64(input: &[u8], seed: u64) -> u64 {
    hash64_imp(input, seed, u64::from_ne_bytes)
}

/// Hashes `input` to 32 bits by folding [`hash64`] with [`fold32`].
///
/// The seed is zero-extended to 64 bits.
#[inline]
pub fn hash32(input: &[u8], seed: u32) -> u32 {
    fold32(hash64(input, seed as u64))
}

/// Like [`hash64`], reading full blocks in the given byte order.
pub fn hash64_with_order(input: &[u8], seed: u64, order: WordOrder) -> u64 {
    match order {
        WordOrder::Native => hash64_imp(input, seed, u64::from_ne_bytes),
        WordOrder::Little => hash64_imp(input, seed, u64::from_le_bytes),
        WordOrder::Big => hash64_imp(input, seed, u64::from_be_bytes),
    }
}

/// Like [`hash32`], reading full blocks in the given byte order.
pub fn hash32_with_order(input: &[u8], seed: u32, order: WordOrder) -> u32 {
    fold32(hash64_with_order(input, seed as u64, order))
}

/// Folds a 64-bit hash to 32 bits by subtracting the high half from the whole value, so both
/// halves contribute to the result.
#[inline]
pub fn fold32(h: u64) -> u32 {
    h.wrapping_sub(h >> 32) as u32
}
