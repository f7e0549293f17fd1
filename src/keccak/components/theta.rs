use super::super::{KeccakLane, State};

/// Column-parity diffusion: every lane absorbs the parities of the two neighbouring columns,
/// the right-hand one rotated by a bit.
pub fn theta<T: KeccakLane>(state: &mut State<T>) {
	let mut parities: [T; 5] = [Default::default(); 5];

	for (parity, column) in parities.iter_mut().zip(state.iter()) {
		for &lane in column {
			*parity ^= lane;
		}
	}

	for x in 0 .. 5 {
		let crossed = parities[(x + 4) % 5] ^ parities[(x + 1) % 5].rotate(1);

		for lane in &mut state[x] {
			*lane ^= crossed;
		}
	}
}

#[test]
fn single_bit_spreads_to_two_columns() {
	let mut state = [[0u64; 5]; 5];
	state[2][3] = 1;

	theta(&mut state);

	for y in 0 .. 5 {
		// column 1 sees column 2 rotated, column 3 sees column 2 as is
		assert_eq!(state[1][y], 2);
		assert_eq!(state[3][y], 1);
		assert_eq!(state[0][y], 0);
		assert_eq!(state[4][y], 0);
	}

	assert_eq!(state[2][3], 1);
	assert_eq!(state[2][0], 0);
}

#[test]
fn zero_parity_leaves_state_alone() {
	let mut state = [[0u16; 5]; 5];
	state[4][0] = 0xbeef;
	state[4][1] = 0xbeef;

	let before = state;
	theta(&mut state);

	assert_eq!(state, before);
}
