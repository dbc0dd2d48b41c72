use std::hash::Hash;

use crate::fasthash::{hash32_with_order, hash64_with_order};
use crate::fingerprint::{Fingerprint32, Fingerprint64};
use crate::types::{HashWidth, WordOrder};

/// A seeded one-shot hash over a complete byte slice.
pub trait SeededHash {
    type Seed: Copy + Default;
    type Sum: Copy + Eq + Hash;
    type Fingerprint: From<Self::Sum>;

    fn width(&self) -> HashWidth;

    fn hash_with_seed(&self, input: &[u8], seed: Self::Seed) -> Self::Sum;

    fn hash(&self, input: &[u8]) -> Self::Sum {
        self.hash_with_seed(input, Self::Seed::default())
    }

    fn fingerprint(&self, input: &[u8], seed: Self::Seed) -> Self::Fingerprint {
        self.hash_with_seed(input, seed).into()
    }

    fn hash_many<'a>(
        &self,
        inputs: impl ExactSizeIterator<Item = &'a [u8]>,
        seed: Self::Seed,
    ) -> impl ExactSizeIterator<Item = Self::Sum> {
        inputs.map(move |input| self.hash_with_seed(input, seed))
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct FastHash64 {
    order: WordOrder,
}

impl FastHash64 {
    pub fn new(order: WordOrder) -> Self {
        Self { order }
    }

    pub fn order(&self) -> WordOrder {
        self.order
    }
}

impl SeededHash for FastHash64 {
    type Seed = u64;
    type Sum = u64;
    type Fingerprint = Fingerprint64;

    fn width(&self) -> HashWidth {
        HashWidth::Bits64
    }

    #[inline]
    fn hash_with_seed(&self, input: &[u8], seed: u64) -> u64 {
        hash64_with_order(input, seed, self.order)
    }
}

#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct FastHash32 {
    order: WordOrder,
}

impl FastHash32 {
    pub fn new(order: WordOrder) -> Self {
        Self { order }
    }

    pub fn order(&self) -> WordOrder {
        self.order
    }
}

impl SeededHash for FastHash32 {
    type Seed = u32;
    type Sum = u32;
    type Fingerprint = Fingerprint32;

    fn width(&self) -> HashWidth {
        HashWidth::Bits32
    }

    #[inline]
    fn hash_with_seed(&self, input: &[u8], seed: u32) -> u32 {
        hash32_with_order(input, seed, self.order)
    }
}

#[cfg(test)]
mod tests {
    use quickcheck_macros::quickcheck;

    use super::{FastHash32, FastHash64, SeededHash};
    use crate::fasthash::{fold32, hash32, hash64};
    use crate::types::{HashType, WordOrder};

    #[test]
    fn defaults_to_native_order() {
        assert_eq!(FastHash64::default().order(), WordOrder::Native);
        assert_eq!(FastHash32::default().order(), WordOrder::Native);
    }

    #[test]
    fn width_matches_fingerprint_size() {
        let h64 = FastHash64::default();
        let h32 = FastHash32::default();
        assert_eq!(h64.width().sum_len(), h64.fingerprint(b"x", 0).to_bytes().len());
        assert_eq!(h32.width().sum_len(), h32.fingerprint(b"x", 0).to_bytes().len());
    }

    #[test]
    fn fingerprint_of_known_input() {
        let fp = FastHash64::new(WordOrder::Little).fingerprint(b"hello world!!", 0);
        assert_eq!(fp.to_string(), "95fae10dfdc8a1df");
        let fp = FastHash32::new(WordOrder::Little).fingerprint(b"hello world!!", 0);
        assert_eq!(fp.to_string(), "67cdc0d2");
    }

    #[quickcheck]
    fn hash_uses_zero_seed(buf: Vec<u8>) -> bool {
        FastHash64::default().hash(&buf) == hash64(&buf, 0)
            && FastHash32::default().hash(&buf) == hash32(&buf, 0)
    }

    #[quickcheck]
    fn widths_agree(buf: Vec<u8>, seed: u32) -> bool {
        let wide = FastHash64::new(WordOrder::Big).hash_with_seed(&buf, seed as u64);
        FastHash32::new(WordOrder::Big).hash_with_seed(&buf, seed) == fold32(wide)
    }

    #[quickcheck]
    fn hash_many_matches_single(bufs: Vec<Vec<u8>>, seed: u64) -> bool {
        let hasher = FastHash64::default();
        let many = hasher.hash_many(bufs.iter().map(|b| b.as_slice()), seed);
        if many.len() != bufs.len() {
            return false;
        }
        let matches = many
            .zip(&bufs)
            .all(|(sum, buf)| sum == hasher.hash_with_seed(buf, seed));
        matches
    }

    #[test]
    fn hash_many_known_inputs() {
        let inputs: [&[u8]; 3] = [b"", b"abcdefgh", b"hello world!!"];
        let sums: Vec<u64> = FastHash64::new(WordOrder::Little)
            .hash_many(inputs.iter().copied(), 0)
            .collect();
        assert_eq!(sums, [0, 0x4b065d0b533bc57d, 0x95fae10dfdc8a1df]);

        let sums: Vec<u32> = FastHash32::new(WordOrder::Little)
            .hash_many(inputs.iter().copied(), 0)
            .collect();
        assert_eq!(sums, [0, 0x08356872, 0x67cdc0d2]);
    }
}
