use super::super::{KeccakLane, State};

/// The only nonlinear step: `a[x] ^= !a[x + 1] & a[x + 2]` along each row.
pub fn chi<T: KeccakLane>(state: &mut State<T>) {
	for y in 0 .. 5 {
		let row = [state[0][y], state[1][y], state[2][y], state[3][y], state[4][y]];

		for x in 0 .. 5 {
			state[x][y] = row[x] ^ (!row[(x + 1) % 5] & row[(x + 2) % 5]);
		}
	}
}

#[test]
fn row_rule() {
	let mut state = [[false; 5]; 5];
	// row 0 = 0, 0, 1, 0, 0
	state[2][0] = true;

	chi(&mut state);

	// x = 0 picks up !a[1] & a[2]
	assert_eq!([state[0][0], state[1][0], state[2][0], state[3][0], state[4][0]], [true, false, true, false, false]);
}

#[test]
fn zero_and_all_ones_rows_are_fixed() {
	let mut state = [[0u8; 5]; 5];

	for x in 0 .. 5 {
		state[x][1] = 0xff;
	}

	let before = state;
	chi(&mut state);

	assert_eq!(state, before);
}
