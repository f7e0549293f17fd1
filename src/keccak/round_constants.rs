/// Round constants of Keccak-f[1600] as listed in FIPS 202. Narrower widths use the
/// low-order bits of the same values.
pub const ROUND_CONSTANTS: [u64; 24] = [
	0x0000_0000_0000_0001,
	0x0000_0000_0000_8082,
	0x8000_0000_0000_808a,
	0x8000_0000_8000_8000,
	0x0000_0000_0000_808b,
	0x0000_0000_8000_0001,
	0x8000_0000_8000_8081,
	0x8000_0000_0000_8009,
	0x0000_0000_0000_008a,
	0x0000_0000_0000_0088,
	0x0000_0000_8000_8009,
	0x0000_0000_8000_000a,
	0x0000_0000_8000_808b,
	0x8000_0000_0000_008b,
	0x8000_0000_0000_8089,
	0x8000_0000_0000_8003,
	0x8000_0000_0000_8002,
	0x8000_0000_0000_0080,
	0x0000_0000_0000_800a,
	0x8000_0000_8000_000a,
	0x8000_0000_8000_8081,
	0x8000_0000_0000_8080,
	0x0000_0000_8000_0001,
	0x8000_0000_8000_8008,
];

// x^8 + x^6 + x^5 + x^4 + 1, shifted out of the top bit
const fn step_lfsr(state: u8) -> (u8, bool) {
	let new_bit = ((state & 0x8e).count_ones() & 1) as u8;
	let lfsr_output = state & 0x80 != 0;
	let new_state = (state << 1) | new_bit;

	(new_state, lfsr_output)
}

/// Regenerates the round constants from the LFSR that defines them.
pub const fn generate_round_constants() -> [u64; 24] {
	let mut lfsr = 0x80;
	let mut out = [0; 24];

	let mut i = 0;

	while i < 24 {
		let mut j = 0;

		while j < 7 {
			let place = (1 << j) - 1;

			let (new_lfsr, lfsr_out) = step_lfsr(lfsr);
			lfsr = new_lfsr;

			if lfsr_out {
				out[i] |= 1 << place;
			}

			j += 1;
		}

		i += 1;
	}

	out
}

#[test]
fn table_matches_lfsr() {
	assert_eq!(ROUND_CONSTANTS, generate_round_constants());
}

#[test]
fn constants_only_touch_sparse_positions() {
	// bits 2^j - 1 for j in 0..=6
	let mask = 0x8000_0000_8000_808b;

	for rc in ROUND_CONSTANTS {
		assert_eq!(rc & !mask, 0);
	}
}
