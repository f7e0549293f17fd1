//! Fixed-size entry points for [SHA-3](https://en.wikipedia.org/wiki/SHA-3) and SHAKE.

use super::padding::DomainSuffix;
use super::sponge::{Sponge, SpongeParams};

pub const SHA3_224: SpongeParams = SpongeParams::new(1152, 448, DomainSuffix::SHA3);
pub const SHA3_256: SpongeParams = SpongeParams::new(1088, 512, DomainSuffix::SHA3);
pub const SHA3_384: SpongeParams = SpongeParams::new(832, 768, DomainSuffix::SHA3);
pub const SHA3_512: SpongeParams = SpongeParams::new(576, 1024, DomainSuffix::SHA3);
pub const SHAKE128: SpongeParams = SpongeParams::new(1344, 256, DomainSuffix::SHAKE);
pub const SHAKE256: SpongeParams = SpongeParams::new(1088, 512, DomainSuffix::SHAKE);

fn fixed<const N: usize>(params: SpongeParams, bytes: &[u8]) -> [u8; N] {
	let mut sponge = Sponge::new(params);
	sponge.absorb(bytes);

	let mut out = [0; N];
	sponge.finalize().read(&mut out);

	out
}

/// Returns the SHA3-224 digest of the byte slice passed to it.
pub fn sha3_224(bytes: &[u8]) -> [u8; 28] {
	fixed(SHA3_224, bytes)
}

/// Returns the SHA3-256 digest of the byte slice passed to it.
pub fn sha3_256(bytes: &[u8]) -> [u8; 32] {
	fixed(SHA3_256, bytes)
}

/// Returns the SHA3-384 digest of the byte slice passed to it.
pub fn sha3_384(bytes: &[u8]) -> [u8; 48] {
	fixed(SHA3_384, bytes)
}

/// Returns the SHA3-512 digest of the byte slice passed to it.
pub fn sha3_512(bytes: &[u8]) -> [u8; 64] {
	fixed(SHA3_512, bytes)
}

/// Fills `out` with SHAKE128 output for `bytes`.
pub fn shake128(bytes: &[u8], out: &mut [u8]) {
	let mut sponge = Sponge::new(SHAKE128);
	sponge.absorb(bytes);
	sponge.finalize().read(out);
}

/// Fills `out` with SHAKE256 output for `bytes`.
pub fn shake256(bytes: &[u8], out: &mut [u8]) {
	let mut sponge = Sponge::new(SHAKE256);
	sponge.absorb(bytes);
	sponge.finalize().read(out);
}

#[cfg(test)]
fn format_hash(bytes: &[u8]) -> alloc::string::String {
	use core::fmt::Write;

	let mut out = alloc::string::String::new();

	for &byte in bytes {
		write!(out, "{:>02x}", byte).unwrap();
	}

	out
}

#[test]
fn test_empty_inputs() {
	assert_eq!(
		format_hash(&sha3_224(b"")),
		"6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7",
	);

	assert_eq!(
		format_hash(&sha3_256(b"")),
		"a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a",
	);

	assert_eq!(
		format_hash(&sha3_384(b"")),
		"0c63a75b845e4f7d01107d852e4c2485c51a50aaaa94fc61995e71bbee983a2ac3713831264adb47fb6bd1e058d5f004",
	);

	assert_eq!(
		format_hash(&sha3_512(b"")),
		"a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a615b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26",
	);
}

#[test]
fn test_abc() {
	assert_eq!(
		format_hash(&sha3_256(b"abc")),
		"3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532",
	);

	assert_eq!(
		format_hash(&sha3_512(b"abc")),
		"b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0",
	);
}

#[test]
fn test_two_block_message() {
	let message = b"abcdbcdecdefdefgefghfghighijhijkijkljklmklmnlmnomnopnopq";

	assert_eq!(
		format_hash(&sha3_224(message)),
		"8a24108b154ada21c9fd5574494479ba5c7e7ab76ef264ead0fcce33",
	);

	assert_eq!(
		format_hash(&sha3_384(message)),
		"991c665755eb3a4b6bbdfb75c78a492e8c56a22c5c4d7e429bfdbc32b9d4ad5aa04a1f076e62fea19eef51acd0657c22",
	);
}

#[test]
fn test_shake_empty() {
	let mut out = [0; 32];

	shake128(b"", &mut out);
	assert_eq!(format_hash(&out), "7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26");

	shake256(b"", &mut out);
	assert_eq!(format_hash(&out), "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f");
}
