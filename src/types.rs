use strum::{Display, EnumIter, EnumString, IntoEnumIterator};

use crate::consts::*;

pub trait HashType {
    fn sum_len(&self) -> usize;

    fn iter() -> impl Iterator<Item = Self>;
}

/// Byte order used to turn each full 8-byte block into a `u64`.
///
/// The tail block is always assembled byte by byte in little-endian
/// positions, whatever the order selected here.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, EnumIter, EnumString, Display)]
#[strum(serialize_all = "lowercase")]
pub enum WordOrder {
    /// The byte order of the compilation target. Matches the reference
    /// implementation on the same host, but is not portable across hosts.
    #[default]
    Native,
    /// Portable; identical to `Native` on little-endian targets.
    Little,
    Big,
}

impl WordOrder {
    /// Maps [`WordOrder::Native`] to the concrete order of the target.
    pub fn resolve(self) -> WordOrder {
        match self {
            Self::Native if cfg!(target_endian = "big") => Self::Big,
            Self::Native => Self::Little,
            order => order,
        }
    }
}

#[derive(Copy, Clone, Debug, Eq, PartialEq, EnumIter)]
pub enum HashWidth {
    Bits32,
    Bits64,
}

impl HashType for HashWidth {
    fn sum_len(&self) -> usize {
        match self {
            HashWidth::Bits32 => HASH32_SUM_LENGTH,
            HashWidth::Bits64 => HASH64_SUM_LENGTH,
        }
    }

    fn iter() -> impl Iterator<Item = Self> {
        <Self as IntoEnumIterator>::iter()
    }
}
