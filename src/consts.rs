/// Multiplier applied to the accumulator after every block, and to the input length at init.
pub const ROUND_MULTIPLIER: u64 = 0x880355f21e6d1965;

/// Multiplier of the mix step.
pub const MIX_MULTIPLIER: u64 = 0x2127599bf4325c37;

pub(crate) const MIX_SHIFT_1: u32 = 23;
pub(crate) const MIX_SHIFT_2: u32 = 47;

/// Size in bytes of one compression block.
pub const BLOCK_SIZE: usize = 8;

pub const HASH64_SUM_LENGTH: usize = 8;
pub const HASH32_SUM_LENGTH: usize = 4;
