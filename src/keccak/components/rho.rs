use super::super::{KeccakLane, State};

/// Left-rotation offsets indexed `[x][y]`, reduced mod 64.
pub const RHO_OFFSETS: [[u32; 5]; 5] = [
	[0, 36, 3, 41, 18],
	[1, 44, 10, 45, 2],
	[62, 6, 43, 15, 61],
	[28, 55, 25, 21, 56],
	[27, 20, 39, 8, 14],
];

pub fn rho<T: KeccakLane>(state: &mut State<T>) {
	for x in 0 .. 5 {
		for y in 0 .. 5 {
			state[x][y] = state[x][y].rotate(RHO_OFFSETS[x][y]);
		}
	}
}

/// Derives the offsets by walking `(x, y) -> (y, 2x + 3y)` from `(1, 0)` and
/// accumulating triangular numbers.
pub const fn derive_rho_offsets() -> [[u32; 5]; 5] {
	let mut out = [[0; 5]; 5];
	let mut rotation_amount = 0;

	let mut x = 1;
	let mut y = 0;

	let mut t = 0;

	while t < 24 {
		rotation_amount += t + 1;

		out[x][y] = rotation_amount % 64;

		let new_x = y;
		let new_y = (2 * x + 3 * y) % 5;

		x = new_x;
		y = new_y;

		t += 1;
	}

	out
}

#[test]
fn table_matches_walk() {
	assert_eq!(RHO_OFFSETS, derive_rho_offsets());
}

#[test]
fn offsets_are_distinct() {
	let mut seen = [false; 64];

	for column in RHO_OFFSETS {
		for offset in column {
			assert!(!seen[offset as usize]);
			seen[offset as usize] = true;
		}
	}
}

#[test]
fn origin_lane_is_not_rotated() {
	let mut state = [[1u64; 5]; 5];
	rho(&mut state);

	assert_eq!(state[0][0], 1);
	assert_eq!(state[1][0], 2);
	assert_eq!(state[2][0], 1 << 62);
}
