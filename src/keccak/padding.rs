//! Domain separation suffixes and the pad10*1 rule.
//!
//! Bit strings follow FIPS 202 ordering: bit `i` of a message is bit `i % 8` (counting from
//! the least significant end) of byte `i / 8`.

use alloc::vec::Vec;
use core::ops::Deref;

use super::STATE_BYTES;

/// Bits appended to the message before pad10*1, stored least significant bit first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DomainSuffix {
	bits: u8,
	bit_len: u8,
}

impl DomainSuffix {
	/// `01`, used by SHA3-224 through SHA3-512.
	pub const SHA3: Self = Self::new(0b10, 2);

	/// `1111`, used by SHAKE128 and SHAKE256.
	pub const SHAKE: Self = Self::new(0b1111, 4);

	/// No suffix, as in the original Keccak submission.
	pub const NONE: Self = Self::new(0, 0);

	/// `bits` holds the suffix in its low `bit_len` bits, first bit lowest.
	pub const fn new(bits: u8, bit_len: u8) -> Self {
		assert!(bit_len < 8, "domain suffixes are at most 7 bits");
		assert!(bits >> bit_len == 0, "suffix has bits set above its length");

		Self {bits, bit_len}
	}

	pub const fn bits(self) -> u8 {
		self.bits
	}

	pub const fn bit_len(self) -> u8 {
		self.bit_len
	}
}

/// One rate-sized block of padded input.
#[derive(Clone)]
pub struct Block {
	bytes: [u8; STATE_BYTES],
	len: usize,
}

impl Deref for Block {
	type Target = [u8];

	fn deref(&self) -> &[u8] {
		&self.bytes[.. self.len]
	}
}

/// Splits a message into rate-sized blocks without copying it into a padded buffer first.
/// The last one or two blocks carry the domain suffix and pad10*1.
pub struct Padding<'a> {
	bytes: &'a [u8],
	bit_len: usize,
	rate: usize,
	suffix: DomainSuffix,
	tail: Option<Tail>,
}

impl<'a> Padding<'a> {
	/// Pads the first `bit_len` bits of `bytes`; any bits beyond that are ignored.
	///
	/// Panics if `bytes` is shorter than `bit_len` bits, or if `rate_bits` is not a whole
	/// number of bytes between 8 and 1600 bits.
	pub fn new(bytes: &'a [u8], bit_len: usize, rate_bits: usize, suffix: DomainSuffix) -> Self {
		assert!(bit_len <= bytes.len() * 8, "message holds fewer than {} bits", bit_len);
		assert!(rate_bits % 8 == 0 && (8 ..= STATE_BYTES * 8).contains(&rate_bits), "unsupported rate of {} bits", rate_bits);

		Self {
			bytes,
			bit_len,
			rate: rate_bits / 8,
			suffix,
			tail: None,
		}
	}
}

impl<'a> Iterator for Padding<'a> {
	type Item = Block;

	fn next(&mut self) -> Option<Self::Item> {
		if let Some(tail) = &mut self.tail {
			return tail.next_block(self.rate);
		}

		if self.bit_len >= self.rate * 8 {
			let mut block = Block {bytes: [0; STATE_BYTES], len: self.rate};
			block.bytes[.. self.rate].copy_from_slice(&self.bytes[.. self.rate]);

			self.bytes = &self.bytes[self.rate ..];
			self.bit_len -= self.rate * 8;

			return Some(block);
		}

		let tail = self.tail.insert(Tail::new(self.bytes, self.bit_len, self.rate, self.suffix));
		tail.next_block(self.rate)
	}
}

// the final partial block, padded out to one or two whole blocks
struct Tail {
	buf: [u8; 2 * STATE_BYTES],
	blocks: usize,
	emitted: usize,
}

impl Tail {
	fn new(bytes: &[u8], bit_len: usize, rate: usize, suffix: DomainSuffix) -> Self {
		let rate_bits = rate * 8;
		debug_assert!(bit_len < rate_bits);

		let mut buf = [0; 2 * STATE_BYTES];

		let whole_bytes = bit_len / 8;
		let extra_bits = bit_len % 8;

		buf[.. whole_bytes].copy_from_slice(&bytes[.. whole_bytes]);

		if extra_bits > 0 {
			buf[whole_bytes] = bytes[whole_bytes] & ((1 << extra_bits) - 1);
		}

		let mut position = bit_len;

		for i in 0 .. suffix.bit_len {
			if (suffix.bits >> i) & 1 != 0 {
				set_bit(&mut buf, position);
			}

			position += 1;
		}

		// the leading 1 of pad10*1
		set_bit(&mut buf, position);

		// the trailing 1 needs a position of its own after the leading one
		let blocks = (position + 1) / rate_bits + 1;
		set_bit(&mut buf, blocks * rate_bits - 1);

		Self {buf, blocks, emitted: 0}
	}

	fn next_block(&mut self, rate: usize) -> Option<Block> {
		if self.emitted == self.blocks {
			return None;
		}

		let mut block = Block {bytes: [0; STATE_BYTES], len: rate};
		block.bytes[.. rate].copy_from_slice(&self.buf[self.emitted * rate ..][.. rate]);

		self.emitted += 1;

		Some(block)
	}
}

fn set_bit(buf: &mut [u8], position: usize) {
	buf[position / 8] |= 1 << (position % 8);
}

/// Returns `message || suffix || pad10*1`, a whole number of `rate_bits` blocks.
pub fn pad(message: &[u8], rate_bits: usize, suffix: DomainSuffix) -> Vec<u8> {
	pad_bits(message, message.len() * 8, rate_bits, suffix)
}

/// Like [`pad`] for a message of `bit_len` bits.
pub fn pad_bits(message: &[u8], bit_len: usize, rate_bits: usize, suffix: DomainSuffix) -> Vec<u8> {
	let mut out = Vec::with_capacity((bit_len / rate_bits + 2) * rate_bits / 8);

	for block in Padding::new(message, bit_len, rate_bits, suffix) {
		out.extend_from_slice(&block);
	}

	out
}

#[cfg(test)]
const SHA3_256_RATE: usize = 1088;

#[test]
fn empty_message() {
	let padded = pad(b"", SHA3_256_RATE, DomainSuffix::SHA3);

	assert_eq!(padded.len(), 136);
	assert_eq!(padded[0], 0x06);
	assert!(padded[1 .. 135].iter().all(|&byte| byte == 0));
	assert_eq!(padded[135], 0x80);

	let padded = pad(b"", 1344, DomainSuffix::SHAKE);
	assert_eq!(padded.len(), 168);
	assert_eq!(padded[0], 0x1f);
	assert_eq!(padded[167], 0x80);

	let padded = pad(b"", 1088, DomainSuffix::NONE);
	assert_eq!(padded[0], 0x01);
	assert_eq!(padded[135], 0x80);
}

#[test]
fn suffix_and_both_pad_bits_share_a_byte() {
	let message = [0xaa; 135];
	let padded = pad(&message, SHA3_256_RATE, DomainSuffix::SHA3);

	assert_eq!(padded.len(), 136);
	assert_eq!(&padded[.. 135], &message[..]);
	assert_eq!(padded[135], 0x86);

	let padded = pad(&message, SHA3_256_RATE, DomainSuffix::NONE);
	assert_eq!(padded[135], 0x81);
}

#[test]
fn whole_block_message_gets_a_block_of_pure_padding() {
	let message = [0x5c; 136];
	let padded = pad(&message, SHA3_256_RATE, DomainSuffix::SHA3);

	assert_eq!(padded.len(), 272);
	assert_eq!(&padded[.. 136], &message[..]);
	assert_eq!(padded[136], 0x06);
	assert!(padded[137 .. 271].iter().all(|&byte| byte == 0));
	assert_eq!(padded[271], 0x80);
}

#[test]
fn one_bit_short_of_a_block() {
	let message = [0xff; 136];
	let bit_len = SHA3_256_RATE - 1;

	let padded = pad_bits(&message, bit_len, SHA3_256_RATE, DomainSuffix::SHA3);

	assert_eq!(padded.len(), 272);
	// suffix bit 0 lands in the last position of the first block
	assert_eq!(padded[135], 0x7f);
	// suffix bit 1 and the leading pad bit open the second block
	assert_eq!(padded[136], 0x03);
	assert!(padded[137 .. 271].iter().all(|&byte| byte == 0));
	assert_eq!(padded[271], 0x80);
}

#[test]
fn shake_suffix_spills_into_next_byte() {
	// 6 bits of message leave room for 2 of the 4 suffix bits
	let padded = pad_bits(&[0x3f], 6, 1344, DomainSuffix::SHAKE);

	assert_eq!(padded.len(), 168);
	assert_eq!(padded[0], 0xff);
	assert_eq!(padded[1], 0x07);
	assert_eq!(padded[167], 0x80);
}

#[test]
fn partial_byte_is_masked() {
	// 0b10011 in the low bits, garbage above
	let padded = pad_bits(&[0xf3], 5, SHA3_256_RATE, DomainSuffix::SHA3);

	assert_eq!(padded[0], 0xd3);
}

#[test]
fn padded_lengths_over_many_message_sizes() {
	let rate_bits = 64;
	let message = [0xa5u8; 32];

	for suffix in [DomainSuffix::NONE, DomainSuffix::SHA3, DomainSuffix::SHAKE] {
		for bit_len in 0 .. 3 * rate_bits {
			let padded = pad_bits(&message, bit_len, rate_bits, suffix);
			let padded_bits = padded.len() * 8;

			assert_eq!(padded_bits % rate_bits, 0);

			let appended = padded_bits - bit_len - suffix.bit_len() as usize;
			assert!(2 <= appended && appended <= rate_bits + 1, "bit_len {} appended {}", bit_len, appended);

			// the message bits come through unchanged
			for i in 0 .. bit_len {
				assert_eq!((padded[i / 8] >> (i % 8)) & 1, (message[i / 8] >> (i % 8)) & 1);
			}

			// and the last bit is always the trailing pad bit
			assert_eq!(padded[padded.len() - 1] & 0x80, 0x80);
		}
	}
}

#[test]
#[should_panic]
fn bit_length_beyond_message() {
	pad_bits(&[0; 2], 17, SHA3_256_RATE, DomainSuffix::SHA3);
}

#[test]
#[should_panic]
fn rate_must_be_whole_bytes() {
	pad(b"abc", 1087, DomainSuffix::SHA3);
}
