use super::super::{KeccakLane, State, ROUND_CONSTANTS};

pub fn iota<T: KeccakLane>(state: &mut State<T>, round_index: usize) {
	state[0][0] ^= T::from_u64(ROUND_CONSTANTS[round_index]);
}

#[test]
fn only_origin_lane_changes() {
	let mut state = [[0u64; 5]; 5];
	iota(&mut state, 2);

	assert_eq!(state[0][0], 0x8000_0000_0000_808a);

	let lanes_set = state.iter().flatten().filter(|&&lane| lane != 0).count();
	assert_eq!(lanes_set, 1);
}

#[test]
fn narrow_lanes_take_low_bits() {
	let mut state = [[0u8; 5]; 5];
	iota(&mut state, 2);

	assert_eq!(state[0][0], 0x8a);
}
