//! The sponge construction over Keccak-f[1600].

use alloc::vec;
use alloc::vec::Vec;

use super::padding::{DomainSuffix, Padding};
use super::{keccak_f, read_bytes, xor_bytes, State, STATE_BITS, STATE_BYTES};

/// Rate/capacity split and domain suffix of a sponge instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SpongeParams {
	rate_bits: usize,
	capacity_bits: usize,
	suffix: DomainSuffix,
}

impl SpongeParams {
	/// Panics unless `rate_bits + capacity_bits == 1600` and the rate is a whole number of
	/// bytes, at least one byte and short of the whole state.
	pub const fn new(rate_bits: usize, capacity_bits: usize, suffix: DomainSuffix) -> Self {
		assert!(rate_bits + capacity_bits == STATE_BITS, "rate and capacity must cover the 1600-bit state");
		assert!(rate_bits % 8 == 0, "rate must be a whole number of bytes");
		assert!(rate_bits >= 8 && capacity_bits > 0, "rate and capacity must both be non-empty");

		Self {rate_bits, capacity_bits, suffix}
	}

	pub const fn rate_bits(self) -> usize {
		self.rate_bits
	}

	pub const fn capacity_bits(self) -> usize {
		self.capacity_bits
	}

	pub const fn suffix(self) -> DomainSuffix {
		self.suffix
	}

	pub const fn rate_bytes(self) -> usize {
		self.rate_bits / 8
	}
}

/// A sponge in its absorbing phase. Input may arrive in pieces of any size; blocks are
/// permuted as soon as they fill.
#[derive(Clone)]
pub struct Sponge {
	state: State<u64>,
	params: SpongeParams,
	pending: [u8; STATE_BYTES],
	pending_len: usize,
	blocks_absorbed: u64,
}

impl Sponge {
	pub fn new(params: SpongeParams) -> Self {
		Self {
			state: [[0; 5]; 5],
			params,
			pending: [0; STATE_BYTES],
			pending_len: 0,
			blocks_absorbed: 0,
		}
	}

	pub fn params(&self) -> SpongeParams {
		self.params
	}

	pub fn absorb(&mut self, mut bytes: &[u8]) {
		let rate = self.params.rate_bytes();

		if self.pending_len > 0 {
			let take = bytes.len().min(rate - self.pending_len);
			self.pending[self.pending_len ..][.. take].copy_from_slice(&bytes[.. take]);
			self.pending_len += take;
			bytes = &bytes[take ..];

			if self.pending_len < rate {
				return;
			}

			let block = self.pending;
			self.absorb_block(&block[.. rate]);
			self.pending_len = 0;
		}

		let mut blocks = bytes.chunks_exact(rate);

		for block in &mut blocks {
			self.absorb_block(block);
		}

		let rest = blocks.remainder();
		self.pending[.. rest.len()].copy_from_slice(rest);
		self.pending_len = rest.len();
	}

	fn absorb_block(&mut self, block: &[u8]) {
		debug_assert_eq!(block.len(), self.params.rate_bytes());

		xor_bytes(&mut self.state, block);
		keccak_f(&mut self.state);

		self.blocks_absorbed += 1;
	}

	/// Pads whatever is buffered and switches to squeezing.
	pub fn finalize(self) -> XofReader {
		self.finalize_bits(0, 0)
	}

	/// Appends the low `bit_count` bits of `last_bits` (fewer than 8) to the absorbed
	/// input, then pads and switches to squeezing.
	pub fn finalize_bits(mut self, last_bits: u8, bit_count: usize) -> XofReader {
		assert!(bit_count < 8, "at most 7 trailing bits");

		let mut bit_len = self.pending_len * 8;

		// pending_len < rate < 200, so there is room for one more byte
		if bit_count > 0 {
			self.pending[self.pending_len] = last_bits;
			bit_len += bit_count;
		}

		let pending = self.pending;
		let tail = &pending[.. (bit_len + 7) / 8];

		for block in Padding::new(tail, bit_len, self.params.rate_bits, self.params.suffix) {
			self.absorb_block(&block);
		}

		tracing::trace!(
			blocks = self.blocks_absorbed,
			rate_bits = self.params.rate_bits,
			"sponge finished absorbing"
		);

		XofReader::new(self.state, self.params.rate_bytes())
	}
}

/// A sponge in its squeezing phase.
///
/// The first rate block comes straight from the absorbed state; the permutation only runs
/// again once another block is actually needed, so reads of zero bytes never permute.
#[derive(Clone)]
pub struct XofReader {
	state: State<u64>,
	rate: usize,
	block: [u8; STATE_BYTES],
	position: usize,
	blocks_squeezed: u64,
}

impl XofReader {
	fn new(state: State<u64>, rate: usize) -> Self {
		let mut block = [0; STATE_BYTES];
		read_bytes(&state, &mut block[.. rate]);

		Self {
			state,
			rate,
			block,
			position: 0,
			blocks_squeezed: 1,
		}
	}

	/// Fills `out` with the next `out.len()` bytes of output.
	pub fn read(&mut self, mut out: &mut [u8]) {
		while !out.is_empty() {
			if self.position == self.rate {
				self.next_block();
			}

			let available = &self.block[self.position .. self.rate];
			let take = available.len().min(out.len());

			out[.. take].copy_from_slice(&available[.. take]);
			self.position += take;
			out = &mut out[take ..];
		}
	}

	pub fn read_vec(&mut self, len: usize) -> Vec<u8> {
		let mut out = vec![0; len];
		self.read(&mut out);
		out
	}

	fn next_block(&mut self) {
		keccak_f(&mut self.state);
		read_bytes(&self.state, &mut self.block[.. self.rate]);

		self.position = 0;
		self.blocks_squeezed += 1;

		tracing::trace!(blocks = self.blocks_squeezed, "squeezed another block");
	}
}

impl Iterator for XofReader {
	type Item = u8;

	fn next(&mut self) -> Option<Self::Item> {
		let mut byte = [0];
		self.read(&mut byte);
		Some(byte[0])
	}
}

#[cfg(feature = "std")]
impl std::io::Read for XofReader {
	fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
		XofReader::read(self, buf);
		Ok(buf.len())
	}
}

/// One-shot sponge: absorbs `message` and squeezes `output_bytes` bytes.
pub fn digest(message: &[u8], params: SpongeParams, output_bytes: usize) -> Vec<u8> {
	let mut sponge = Sponge::new(params);
	sponge.absorb(message);
	sponge.finalize().read_vec(output_bytes)
}

/// Like [`digest`] for a message of `bit_len` bits.
///
/// Panics if `message` holds fewer than `bit_len` bits.
pub fn digest_bits(message: &[u8], bit_len: usize, params: SpongeParams, output_bytes: usize) -> Vec<u8> {
	assert!(bit_len <= message.len() * 8, "message holds fewer than {} bits", bit_len);

	let whole_bytes = bit_len / 8;
	let extra_bits = bit_len % 8;

	let mut sponge = Sponge::new(params);
	sponge.absorb(&message[.. whole_bytes]);

	let last_bits = if extra_bits > 0 {message[whole_bytes]} else {0};

	sponge.finalize_bits(last_bits, extra_bits).read_vec(output_bytes)
}

#[cfg(test)]
const SHA3_256: SpongeParams = SpongeParams::new(1088, 512, DomainSuffix::SHA3);

#[cfg(test)]
const SHAKE128: SpongeParams = SpongeParams::new(1344, 256, DomainSuffix::SHAKE);

#[test]
fn sha3_256_abc() {
	assert_eq!(
		digest(b"abc", SHA3_256, 32),
		hex_literal::hex!("3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"),
	);
}

#[test]
fn five_bit_message() {
	// FIPS 202 example message 11001
	assert_eq!(
		digest_bits(&[0x13], 5, SHA3_256, 32),
		hex_literal::hex!("7b0047cf5a456882363cbf0fb05322cf65f4b7059a46365e830132e3b5d957af"),
	);
}

#[test]
fn absorbing_in_pieces_matches_one_shot() {
	let message: Vec<u8> = (0 .. 1000u32).map(|i| (i * 31 + 7) as u8).collect();
	let expected = digest(&message, SHA3_256, 32);

	for piece in [1, 7, 135, 136, 137, 500] {
		let mut sponge = Sponge::new(SHA3_256);

		for chunk in message.chunks(piece) {
			sponge.absorb(chunk);
		}

		assert_eq!(sponge.finalize().read_vec(32), expected, "piece size {}", piece);
	}
}

#[test]
fn zero_length_output_does_not_permute() {
	let mut reader = Sponge::new(SHAKE128).finalize();
	let before = reader.state;

	assert!(reader.read_vec(0).is_empty());
	assert_eq!(reader.state, before);

	// a full rate block is still served from the absorbed state
	reader.read_vec(168);
	assert_eq!(reader.state, before);

	reader.read_vec(1);
	assert_ne!(reader.state, before);
}

#[test]
fn squeezing_in_pieces_matches_one_shot() {
	let expected = digest(b"squeeze me", SHAKE128, 600);

	let mut reader = Sponge::new(SHAKE128);
	reader.absorb(b"squeeze me");
	let mut reader = reader.finalize();

	let mut out = Vec::new();

	for piece in [0, 1, 166, 1, 0, 168, 169, 95] {
		out.extend(reader.read_vec(piece));
	}

	assert_eq!(out, expected);
}

#[test]
fn iterator_yields_the_same_stream() {
	let mut sponge = Sponge::new(SHAKE128);
	sponge.absorb(b"");

	let streamed: Vec<u8> = sponge.finalize().take(200).collect();

	assert_eq!(streamed, digest(b"", SHAKE128, 200));
}

#[test]
fn finalize_bits_with_zero_count_ignores_byte() {
	let mut a = Sponge::new(SHA3_256);
	a.absorb(b"ab");

	let b = a.clone();

	assert_eq!(a.finalize().read_vec(32), b.finalize_bits(0xff, 0).read_vec(32));
}

#[test]
#[should_panic]
fn params_must_cover_the_state() {
	SpongeParams::new(1088, 511, DomainSuffix::SHA3);
}
