use super::super::{KeccakLane, State};

/// Moves lane `(x, y)` to `(y, 2x + 3y)`.
pub fn pi<T: KeccakLane>(state: &mut State<T>) {
	let mut new_state = [[Default::default(); 5]; 5];

	for x in 0 .. 5 {
		for y in 0 .. 5 {
			new_state[y][(2 * x + 3 * y) % 5] = state[x][y];
		}
	}

	*state = new_state;
}

#[test]
fn relabels_without_touching_bits() {
	let mut state = [[0u32; 5]; 5];

	for x in 0 .. 5 {
		for y in 0 .. 5 {
			state[x][y] = (10 * x + y) as u32;
		}
	}

	pi(&mut state);

	assert_eq!(state[0][0], 0);
	// (1, 0) -> (0, 2)
	assert_eq!(state[0][2], 10);
	// (0, 1) -> (1, 3)
	assert_eq!(state[1][3], 1);
	// (4, 4) -> (4, 0)
	assert_eq!(state[4][0], 44);
}
