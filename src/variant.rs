use alloc::string::ToString;
use core::fmt;
use core::str::FromStr;

use crate::keccak::sha3::{SHA3_224, SHA3_256, SHA3_384, SHA3_512, SHAKE128, SHAKE256};
use crate::keccak::sponge::SpongeParams;
use crate::Error;

/// The named members of the SHA-3 family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Variant {
	Sha3_224,
	Sha3_256,
	Sha3_384,
	Sha3_512,
	Shake128,
	Shake256,
}

impl Variant {
	pub const ALL: [Variant; 6] = [
		Variant::Sha3_224,
		Variant::Sha3_256,
		Variant::Sha3_384,
		Variant::Sha3_512,
		Variant::Shake128,
		Variant::Shake256,
	];

	pub const fn params(self) -> SpongeParams {
		match self {
			Variant::Sha3_224 => SHA3_224,
			Variant::Sha3_256 => SHA3_256,
			Variant::Sha3_384 => SHA3_384,
			Variant::Sha3_512 => SHA3_512,
			Variant::Shake128 => SHAKE128,
			Variant::Shake256 => SHAKE256,
		}
	}

	/// Digest length in bytes, or `None` for the extendable-output functions.
	pub const fn output_len(self) -> Option<usize> {
		match self {
			Variant::Sha3_224 => Some(28),
			Variant::Sha3_256 => Some(32),
			Variant::Sha3_384 => Some(48),
			Variant::Sha3_512 => Some(64),
			Variant::Shake128 | Variant::Shake256 => None,
		}
	}

	pub const fn is_xof(self) -> bool {
		self.output_len().is_none()
	}

	pub const fn name(self) -> &'static str {
		match self {
			Variant::Sha3_224 => "SHA3-224",
			Variant::Sha3_256 => "SHA3-256",
			Variant::Sha3_384 => "SHA3-384",
			Variant::Sha3_512 => "SHA3-512",
			Variant::Shake128 => "SHAKE128",
			Variant::Shake256 => "SHAKE256",
		}
	}

	/// Resolves the number of output bytes for a request.
	///
	/// Fixed-output variants accept `None` or exactly their digest length. The
	/// extendable-output variants need an explicit length.
	pub fn resolve_output_len(self, requested: Option<usize>) -> Result<usize, Error> {
		match (self.output_len(), requested) {
			(Some(fixed), None) => Ok(fixed),
			(Some(fixed), Some(len)) if len == fixed => Ok(fixed),
			(None, Some(len)) => Ok(len),
			_ => Err(Error::InvalidOutputLength {variant: self, requested}),
		}
	}
}

impl fmt::Display for Variant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.name())
	}
}

/// Case-insensitive, with `-` and `_` interchangeable: `"SHA3-256"`, `"sha3_256"` and
/// `"Shake128"` all parse.
impl FromStr for Variant {
	type Err = Error;

	fn from_str(name: &str) -> Result<Self, Self::Err> {
		let matches = |candidate: &str| {
			name.len() == candidate.len() &&
				name.bytes().zip(candidate.bytes()).all(|(a, b)| {
					let a = if a == b'_' {b'-'} else {a.to_ascii_uppercase()};
					a == b
				})
		};

		Self::ALL
			.into_iter()
			.find(|variant| matches(variant.name()))
			.ok_or_else(|| Error::UnsupportedVariant(name.to_string()))
	}
}

#[test]
fn parses_names() {
	assert_eq!("SHA3-256".parse(), Ok(Variant::Sha3_256));
	assert_eq!("sha3_512".parse(), Ok(Variant::Sha3_512));
	assert_eq!("Sha3-224".parse(), Ok(Variant::Sha3_224));
	assert_eq!("shake128".parse(), Ok(Variant::Shake128));
	assert_eq!("SHAKE256".parse(), Ok(Variant::Shake256));

	for variant in Variant::ALL {
		assert_eq!(variant.to_string().parse(), Ok(variant));
	}
}

#[test]
fn rejects_unknown_names() {
	for name in ["", "sha3", "sha3-255", "sha256", "keccak256", " sha3-256", "sha3-2566"] {
		assert_eq!(name.parse::<Variant>(), Err(Error::UnsupportedVariant(name.to_string())));
	}
}

#[test]
fn parameter_table() {
	let rows = [
		(Variant::Sha3_224, 1152, 448, Some(28)),
		(Variant::Sha3_256, 1088, 512, Some(32)),
		(Variant::Sha3_384, 832, 768, Some(48)),
		(Variant::Sha3_512, 576, 1024, Some(64)),
		(Variant::Shake128, 1344, 256, None),
		(Variant::Shake256, 1088, 512, None),
	];

	for (variant, rate, capacity, output) in rows {
		let params = variant.params();

		assert_eq!(params.rate_bits(), rate);
		assert_eq!(params.capacity_bits(), capacity);
		assert_eq!(variant.output_len(), output);
		assert_eq!(variant.is_xof(), output.is_none());

		// capacity is twice the security level, which is half the digest for SHA3
		if let Some(len) = output {
			assert_eq!(capacity, 2 * 8 * len);
		}
	}
}

#[test]
fn output_length_policy() {
	assert_eq!(Variant::Sha3_384.resolve_output_len(None), Ok(48));
	assert_eq!(Variant::Sha3_384.resolve_output_len(Some(48)), Ok(48));
	assert_eq!(
		Variant::Sha3_384.resolve_output_len(Some(32)),
		Err(Error::InvalidOutputLength {variant: Variant::Sha3_384, requested: Some(32)}),
	);

	assert_eq!(Variant::Shake256.resolve_output_len(Some(0)), Ok(0));
	assert_eq!(Variant::Shake256.resolve_output_len(Some(1 << 20)), Ok(1 << 20));
	assert_eq!(
		Variant::Shake256.resolve_output_len(None),
		Err(Error::InvalidOutputLength {variant: Variant::Shake256, requested: None}),
	);
}
