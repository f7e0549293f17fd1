//! Known-answer self test, for callers that want to check the build before trusting it.

use hex_literal::hex;

use crate::keccak::{derive_rho_offsets, generate_round_constants, permute, RHO_OFFSETS, ROUND_CONSTANTS};
use crate::{Error, Hasher, Variant};

const ZERO_STATE_FIRST_LANES: [u64; 5] = [
	0xf1258f7940e1dde7,
	0x84d5ccf933c0478a,
	0xd598261ea65aa9ee,
	0xbd1547306f80494d,
	0x8b284e056253d057,
];

struct KnownAnswer {
	check: &'static str,
	variant: Variant,
	message: &'static [u8],
	expected: &'static [u8],
}

const KNOWN_ANSWERS: &[KnownAnswer] = &[
	KnownAnswer {
		check: "SHA3-224 of the empty message",
		variant: Variant::Sha3_224,
		message: b"",
		expected: &hex!("6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7"),
	},
	KnownAnswer {
		check: "SHA3-224 of \"abc\"",
		variant: Variant::Sha3_224,
		message: b"abc",
		expected: &hex!("e642824c3f8cf24ad09234ee7d3c766fc9a3a5168d0c94ad73b46fdf"),
	},
	KnownAnswer {
		check: "SHA3-256 of the empty message",
		variant: Variant::Sha3_256,
		message: b"",
		expected: &hex!("a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"),
	},
	KnownAnswer {
		check: "SHA3-256 of \"abc\"",
		variant: Variant::Sha3_256,
		message: b"abc",
		expected: &hex!("3a985da74fe225b2045c172d6bd390bd855f086e3e9d525b46bfe24511431532"),
	},
	KnownAnswer {
		check: "SHA3-384 of the empty message",
		variant: Variant::Sha3_384,
		message: b"",
		expected: &hex!("0c63a75b845e4f7d01107d852e4c2485c51a50aaaa94fc61995e71bbee983a2ac3713831264adb47fb6bd1e058d5f004"),
	},
	KnownAnswer {
		check: "SHA3-384 of \"abc\"",
		variant: Variant::Sha3_384,
		message: b"abc",
		expected: &hex!("ec01498288516fc926459f58e2c6ad8df9b473cb0fc08c2596da7cf0e49be4b298d88cea927ac7f539f1edf228376d25"),
	},
	KnownAnswer {
		check: "SHA3-512 of the empty message",
		variant: Variant::Sha3_512,
		message: b"",
		expected: &hex!("a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a615b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26"),
	},
	KnownAnswer {
		check: "SHA3-512 of \"abc\"",
		variant: Variant::Sha3_512,
		message: b"abc",
		expected: &hex!("b751850b1a57168a5693cd924b6b096e08f621827444f70d884f5d0240d2712e10e116e9192af3c91a7ec57647e3934057340b4cf408d5a56592f8274eec53f0"),
	},
	KnownAnswer {
		check: "SHAKE128 of the empty message",
		variant: Variant::Shake128,
		message: b"",
		expected: &hex!("7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef26"),
	},
	KnownAnswer {
		check: "SHAKE128 of \"abc\"",
		variant: Variant::Shake128,
		message: b"abc",
		expected: &hex!("5881092dd818bf5cf8a3ddb793fbcba74097d5c526a6d35f97b83351940f2cc844c50af32acd3f2cdd066568706f509bc1bdde58295dae3f891a9a0fca578378"),
	},
	KnownAnswer {
		check: "SHAKE256 of the empty message",
		variant: Variant::Shake256,
		message: b"",
		expected: &hex!("46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762f"),
	},
	KnownAnswer {
		check: "SHAKE256 of \"abc\"",
		variant: Variant::Shake256,
		message: b"abc",
		expected: &hex!("483366601360a8771c6863080cc4114d8db44530f8f1e1ee4f94ea37e78b5739d5a15bef186a5386c75744c0527e1faa9f8726e462a12a4feb06bd8801e751e4"),
	},
];

/// Checks the embedded tables against the procedures that define them, the permutation
/// against its zero-state output, and every variant against published digests.
pub fn self_test() -> Result<(), Error> {
	if ROUND_CONSTANTS != generate_round_constants() {
		return Err(Error::SelfTestFailed {check: "round constants"});
	}

	if RHO_OFFSETS != derive_rho_offsets() {
		return Err(Error::SelfTestFailed {check: "rotation offsets"});
	}

	let state = permute([[0; 5]; 5]);

	if (0 .. 5).any(|x| state[x][0] != ZERO_STATE_FIRST_LANES[x]) {
		return Err(Error::SelfTestFailed {check: "Keccak-f[1600] of the zero state"});
	}

	for answer in KNOWN_ANSWERS {
		let output_len = Some(answer.expected.len());
		let actual = Hasher::with_variant(answer.variant).digest(answer.message, output_len)?;

		if actual != answer.expected {
			return Err(Error::SelfTestFailed {check: answer.check});
		}
	}

	tracing::debug!(checks = KNOWN_ANSWERS.len() + 3, "self test passed");

	Ok(())
}

#[test]
fn passes() {
	assert_eq!(self_test(), Ok(()));
}

#[test]
fn covers_every_variant() {
	for variant in Variant::ALL {
		assert!(KNOWN_ANSWERS.iter().any(|answer| answer.variant == variant));
	}
}
