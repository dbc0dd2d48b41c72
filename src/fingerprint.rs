use std::error::Error;
use std::fmt;
use std::str::FromStr;

use crate::consts::{HASH32_SUM_LENGTH, HASH64_SUM_LENGTH};

/// Indicates that a fingerprint could not be parsed from hex.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum FingerprintParseError {
    /// The input did not have exactly two hex digits per fingerprint byte.
    InvalidLength {
        /// Number of hex digits the fingerprint needs.
        expected: usize,
        /// Number of bytes in the input.
        found: usize,
    },

    /// The input contained a character that is not a hex digit.
    InvalidDigit {
        /// Byte offset of the offending character.
        index: usize,
    },
}

impl fmt::Display for FingerprintParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, found } => write!(
                f,
                "invalid fingerprint length (expected={} hex digits, found={})",
                expected, found
            ),
            Self::InvalidDigit { index } => {
                write!(f, "invalid hex digit in fingerprint (index={})", index)
            }
        }
    }
}

impl Error for FingerprintParseError {}

macro_rules! fingerprint {
    ($(#[$meta:meta])* $name:ident, $int:ty, $len:expr) => {
        $(#[$meta])*
        #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
        pub struct $name($int);

        impl $name {
            pub const SIZE: usize = $len;

            #[inline]
            pub fn value(self) -> $int {
                self.0
            }

            /// Big-endian bytes of the hash value.
            #[inline]
            pub fn to_bytes(self) -> [u8; Self::SIZE] {
                self.0.to_be_bytes()
            }

            #[inline]
            pub fn from_bytes(bytes: [u8; Self::SIZE]) -> Self {
                Self(<$int>::from_be_bytes(bytes))
            }
        }

        impl From<$int> for $name {
            #[inline]
            fn from(value: $int) -> Self {
                Self(value)
            }
        }

        impl From<$name> for $int {
            #[inline]
            fn from(fingerprint: $name) -> Self {
                fingerprint.0
            }
        }

        impl fmt::LowerHex for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::LowerHex::fmt(&self.0, f)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{:0width$x}", self.0, width = Self::SIZE * 2)
            }
        }

        impl FromStr for $name {
            type Err = FingerprintParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let mut bytes = [0u8; Self::SIZE];
                parse_hex(s, &mut bytes)?;
                Ok(Self::from_bytes(bytes))
            }
        }
    };
}

fingerprint!(
    /// A 64-bit fast-hash value, usable as a dedup key.
    Fingerprint64,
    u64,
    HASH64_SUM_LENGTH
);
fingerprint!(
    /// A 32-bit fast-hash value.
    Fingerprint32,
    u32,
    HASH32_SUM_LENGTH
);

fn parse_hex(s: &str, out: &mut [u8]) -> Result<(), FingerprintParseError> {
    let digits = s.as_bytes();
    if digits.len() != out.len() * 2 {
        return Err(FingerprintParseError::InvalidLength {
            expected: out.len() * 2,
            found: digits.len(),
        });
    }
    let nibble = |index: usize| -> Result<u8, FingerprintParseError> {
        (digits[index] as char)
            .to_digit(16)
            .map(|d| d as u8)
            .ok_or(FingerprintParseError::InvalidDigit { index })
    };
    for (i, byte) in out.iter_mut().enumerate() {
        *byte = (nibble(2 * i)? << 4) | nibble(2 * i + 1)?;
    }
    Ok(())
}
