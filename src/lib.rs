//! SHA-3 and SHAKE ([FIPS 202](https://doi.org/10.6028/NIST.FIPS.202)) on a Keccak sponge.
//!
//! ```
//! let digest = keccak_sponge::hash("SHA3-256", b"abc").unwrap();
//! assert_eq!(digest[.. 4], [0x3a, 0x98, 0x5d, 0xa7]);
//!
//! let stream = keccak_sponge::xof("SHAKE128", b"abc", 100).unwrap();
//! assert_eq!(stream.len(), 100);
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

// to prevent broken links when building documentation in #![no_std] mode
#[cfg(all(not(feature = "std"), doc))]
extern crate std;

extern crate alloc;

use alloc::vec::Vec;

pub mod keccak;
pub mod selftest;

mod error;
mod hasher;
mod variant;

pub use error::Error;
pub use hasher::{HashStream, Hasher};
pub use variant::Variant;

#[doc(inline)]
pub use keccak::sha3::{sha3_224, sha3_256, sha3_384, sha3_512, shake128, shake256};

#[doc(inline)]
pub use keccak::sponge::XofReader;

/// Digest of `message` under a fixed-output variant named `variant_name`.
///
/// Naming SHAKE128 or SHAKE256 here is an [`Error::InvalidOutputLength`]: they need a
/// length, see [`xof`].
pub fn hash(variant_name: &str, message: &[u8]) -> Result<Vec<u8>, Error> {
	Hasher::new(variant_name)?.digest(message, None)
}

/// `output_len` bytes of output for `message` under the variant named `variant_name`.
///
/// Intended for SHAKE128 and SHAKE256; a fixed-output variant is accepted only when
/// `output_len` equals its digest length.
pub fn xof(variant_name: &str, message: &[u8], output_len: usize) -> Result<Vec<u8>, Error> {
	Hasher::new(variant_name)?.digest(message, Some(output_len))
}

#[test]
fn entry_points() {
	assert_eq!(hash("SHA3-256", b"abc"), Ok(sha3_256(b"abc").to_vec()));
	assert_eq!(hash("sha3_512", b""), Ok(sha3_512(b"").to_vec()));
	assert_eq!(xof("SHA3-224", b"abc", 28), Ok(sha3_224(b"abc").to_vec()));

	let mut expected = [0; 77];
	shake256(b"abc", &mut expected);
	assert_eq!(xof("shake256", b"abc", 77), Ok(expected.to_vec()));
}

#[test]
fn entry_point_errors() {
	assert_eq!(hash("md5", b""), Err(Error::UnsupportedVariant("md5".into())));
	assert_eq!(xof("SHAKE512", b"", 8), Err(Error::UnsupportedVariant("SHAKE512".into())));
	assert_eq!(
		hash("SHAKE128", b""),
		Err(Error::InvalidOutputLength {variant: Variant::Shake128, requested: None}),
	);
	assert_eq!(
		xof("SHA3-256", b"", 31),
		Err(Error::InvalidOutputLength {variant: Variant::Sha3_256, requested: Some(31)}),
	);
}
