use alloc::vec::Vec;

use crate::keccak::sponge::{self, Sponge, XofReader};
use crate::{Error, Variant};

/// An immutable choice of variant. Every digest call builds and owns its own state, so one
/// `Hasher` can be shared freely between threads.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Hasher {
	variant: Variant,
}

impl Hasher {
	/// Looks up a variant by name (see [`Variant`]'s `FromStr` for accepted spellings).
	pub fn new(variant_name: &str) -> Result<Self, Error> {
		let variant: Variant = variant_name.parse()?;
		let params = variant.params();

		tracing::debug!(
			%variant,
			rate_bits = params.rate_bits(),
			capacity_bits = params.capacity_bits(),
			"hasher ready"
		);

		Ok(Self::with_variant(variant))
	}

	pub const fn with_variant(variant: Variant) -> Self {
		Self {variant}
	}

	pub const fn variant(&self) -> Variant {
		self.variant
	}

	/// Hashes `message` in one go.
	///
	/// `output_len` must be `None` or the digest length for SHA3-224 … SHA3-512, and must be
	/// given for SHAKE128/SHAKE256; anything else is [`Error::InvalidOutputLength`].
	pub fn digest(&self, message: &[u8], output_len: Option<usize>) -> Result<Vec<u8>, Error> {
		let output_len = self.variant.resolve_output_len(output_len)?;

		Ok(sponge::digest(message, self.variant.params(), output_len))
	}

	/// Like [`digest`](Self::digest) for a message of `bit_len` bits, the last partial byte
	/// holding its bits in the low-order positions.
	///
	/// Panics if `message` holds fewer than `bit_len` bits.
	pub fn digest_bits(&self, message: &[u8], bit_len: usize, output_len: Option<usize>) -> Result<Vec<u8>, Error> {
		let output_len = self.variant.resolve_output_len(output_len)?;

		Ok(sponge::digest_bits(message, bit_len, self.variant.params(), output_len))
	}

	/// Starts an incremental computation.
	pub fn stream(&self) -> HashStream {
		HashStream {
			variant: self.variant,
			sponge: Sponge::new(self.variant.params()),
		}
	}
}

/// An incremental digest computation, fed with [`update`](Self::update).
#[derive(Clone)]
pub struct HashStream {
	variant: Variant,
	sponge: Sponge,
}

impl HashStream {
	pub fn variant(&self) -> Variant {
		self.variant
	}

	pub fn update(&mut self, bytes: &[u8]) -> &mut Self {
		self.sponge.absorb(bytes);
		self
	}

	/// Same length policy as [`Hasher::digest`].
	pub fn finalize(self, output_len: Option<usize>) -> Result<Vec<u8>, Error> {
		self.finalize_bits(0, 0, output_len)
	}

	/// Appends the low `bit_count` (< 8) bits of `last_bits` before finishing.
	///
	/// Panics if `bit_count` is 8 or more.
	pub fn finalize_bits(self, last_bits: u8, bit_count: usize, output_len: Option<usize>) -> Result<Vec<u8>, Error> {
		let output_len = self.variant.resolve_output_len(output_len)?;

		Ok(self.sponge.finalize_bits(last_bits, bit_count).read_vec(output_len))
	}

	/// Finishes absorbing and returns a reader for an unbounded output stream. Only
	/// SHAKE128 and SHAKE256 have one.
	pub fn finalize_xof(self) -> Result<XofReader, Error> {
		if !self.variant.is_xof() {
			return Err(Error::InvalidOutputLength {variant: self.variant, requested: None});
		}

		Ok(self.sponge.finalize())
	}
}

#[test]
fn from_name() {
	assert_eq!(Hasher::new("sha3-384").map(|hasher| hasher.variant()), Ok(Variant::Sha3_384));
	assert_eq!(Hasher::new("blake3"), Err(Error::UnsupportedVariant("blake3".into())));
}

#[test]
fn fixed_variants_reject_other_lengths() {
	let hasher = Hasher::with_variant(Variant::Sha3_256);

	assert_eq!(hasher.digest(b"abc", None).map(|digest| digest.len()), Ok(32));
	assert_eq!(hasher.digest(b"abc", Some(32)), hasher.digest(b"abc", None));
	assert_eq!(
		hasher.digest(b"abc", Some(64)),
		Err(Error::InvalidOutputLength {variant: Variant::Sha3_256, requested: Some(64)}),
	);
	assert!(hasher.stream().finalize_xof().is_err());
}

#[test]
fn xof_variants_need_a_length() {
	let hasher = Hasher::with_variant(Variant::Shake256);

	assert_eq!(
		hasher.digest(b"abc", None),
		Err(Error::InvalidOutputLength {variant: Variant::Shake256, requested: None}),
	);
	assert_eq!(hasher.digest(b"abc", Some(0)), Ok(Vec::new()));
	assert_eq!(hasher.digest(b"abc", Some(1000)).map(|out| out.len()), Ok(1000));
}

#[test]
fn stream_matches_one_shot() {
	let message: Vec<u8> = (0 .. 700u32).map(|i| (i ^ (i >> 3)) as u8).collect();

	for variant in Variant::ALL {
		let hasher = Hasher::with_variant(variant);
		let len = variant.output_len().or(Some(333));

		let mut stream = hasher.stream();

		for chunk in message.chunks(97) {
			stream.update(chunk);
		}

		assert_eq!(stream.finalize(len), hasher.digest(&message, len), "{}", variant);
	}
}

#[test]
fn stream_bits_match_one_shot_bits() {
	let hasher = Hasher::with_variant(Variant::Sha3_224);
	let message = [0x61, 0x62, 0x05];

	let mut stream = hasher.stream();
	stream.update(&message[.. 2]);

	assert_eq!(
		stream.finalize_bits(message[2], 3, None),
		hasher.digest_bits(&message, 19, None),
	);
}

#[test]
#[should_panic]
fn finalize_bits_rejects_a_whole_byte() {
	let _ = Hasher::with_variant(Variant::Sha3_256).stream().finalize_bits(0xff, 8, None);
}

#[test]
fn xof_reader_continues_the_digest() {
	let hasher = Hasher::with_variant(Variant::Shake128);

	let mut stream = hasher.stream();
	stream.update(b"abc");

	let mut reader = stream.finalize_xof().unwrap();
	let mut out = [0; 400];
	reader.read(&mut out[.. 150]);
	reader.read(&mut out[150 ..]);

	assert_eq!(hasher.digest(b"abc", Some(400)), Ok(out.to_vec()));
}
