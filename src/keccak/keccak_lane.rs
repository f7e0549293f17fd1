use core::ops::{BitAnd, BitXor, BitXorAssign, Not};

/// A single lane of a Keccak-f[b] state. The lane width is `2 ** LOG2_WIDTH` bits,
/// so `b = 25 * 2 ** LOG2_WIDTH`.
pub trait KeccakLane:
	BitAnd<Output = Self> +
	BitXor<Output = Self> +
	BitXorAssign +
	Not<Output = Self> +
	Default +
	Sized +
	Copy +
{
	const LOG2_WIDTH: usize;
	const BITS: u32 = 1 << Self::LOG2_WIDTH;

	/// Number of rounds in the full Keccak-f permutation for this width.
	const ROUNDS: usize = 12 + 2 * Self::LOG2_WIDTH;

	/// Cyclic left rotation, `amount` taken modulo the lane width.
	fn rotate(self, amount: u32) -> Self;

	/// Truncates to the low `BITS` bits.
	fn from_u64(val: u64) -> Self;

	fn to_u64(self) -> u64;
}

impl KeccakLane for bool {
	const LOG2_WIDTH: usize = 0;

	fn rotate(self, _: u32) -> Self {
		self
	}

	fn from_u64(val: u64) -> Self {
		val & 1 != 0
	}

	fn to_u64(self) -> u64 {
		self as u64
	}
}

macro_rules! impl_keccak_lane {
	($($ty:ty => $log2:expr),* $(,)?) => {$(
		impl KeccakLane for $ty {
			const LOG2_WIDTH: usize = $log2;

			fn rotate(self, amount: u32) -> Self {
				self.rotate_left(amount)
			}

			fn from_u64(val: u64) -> Self {
				val as Self
			}

			fn to_u64(self) -> u64 {
				self as u64
			}
		}
	)*};
}

impl_keccak_lane! {
	u8 => 3,
	u16 => 4,
	u32 => 5,
	u64 => 6,
}

#[test]
fn widths_and_round_counts() {
	assert_eq!(<bool as KeccakLane>::BITS, 1);
	assert_eq!(<bool as KeccakLane>::ROUNDS, 12);
	assert_eq!(<u8 as KeccakLane>::ROUNDS, 18);
	assert_eq!(<u16 as KeccakLane>::BITS, 16);
	assert_eq!(<u16 as KeccakLane>::ROUNDS, 20);
	assert_eq!(<u64 as KeccakLane>::BITS, 64);
	assert_eq!(<u64 as KeccakLane>::ROUNDS, 24);
}

#[test]
fn rotation_wraps_modulo_width() {
	assert_eq!(0x81u8.rotate(1), 0x03);
	assert_eq!(0x81u8.rotate(9), 0x03);
	assert_eq!(0x8000_0000_0000_0001u64.rotate(64 + 4), 0x18);
}

#[test]
fn from_u64_truncates() {
	assert_eq!(<u16 as KeccakLane>::from_u64(0x8000_0000_0001_abcd), 0xabcd);
	assert_eq!(<u8 as KeccakLane>::from_u64(0x8b), 0x8b);
	assert!(<bool as KeccakLane>::from_u64(0x8001));
	assert!(!<bool as KeccakLane>::from_u64(0x8002));
}
