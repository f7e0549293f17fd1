//! The Keccak-f[b] permutation family and the sponge built on Keccak-f[1600].
//!
//! States are indexed `state[x][y]`. The byte encoding used by the sponge walks lanes in
//! the order `x + 5 * y`, each lane little-endian.

mod keccak_lane;
mod round_constants;

pub use keccak_lane::KeccakLane;
pub use round_constants::ROUND_CONSTANTS;

pub(crate) use round_constants::generate_round_constants;

mod components {
	pub mod chi;
	pub mod iota;
	pub mod pi;
	pub mod rho;
	pub mod theta;
}

pub use components::rho::RHO_OFFSETS;

pub(crate) use components::rho::derive_rho_offsets;

use components::chi::chi;
use components::iota::iota;
use components::pi::pi;
use components::rho::rho;
use components::theta::theta;

pub mod padding;
pub mod sha3;
pub mod sponge;
pub mod trace;

/// A 5×5 grid of lanes.
pub type State<T> = [[T; 5]; 5];

/// Width of the sponge state in bits. Every variant uses the full 1600.
pub const STATE_BITS: usize = 1600;

pub const STATE_BYTES: usize = STATE_BITS / 8;

/// Applies the full Keccak-f permutation for the lane width of `T`
/// (24 rounds for `u64`).
pub fn keccak_f<T: KeccakLane>(state: &mut State<T>) {
	keccak_p(state, T::ROUNDS);
}

/// Keccak-p[b, nr]: the last `num_rounds` rounds of Keccak-f[b].
///
/// Panics if `num_rounds` exceeds the round count of the full permutation.
pub fn keccak_p<T: KeccakLane>(state: &mut State<T>, num_rounds: usize) {
	assert!(num_rounds <= T::ROUNDS, "Keccak-p for this width has at most {} rounds", T::ROUNDS);

	for round_index in T::ROUNDS - num_rounds .. T::ROUNDS {
		round(state, round_index);
	}
}

/// Keccak-f[1600] by value.
pub fn permute(mut state: State<u64>) -> State<u64> {
	keccak_f(&mut state);
	state
}

fn round<T: KeccakLane>(state: &mut State<T>, round_index: usize) {
	theta(state);
	rho(state);
	pi(state);
	chi(state);
	iota(state, round_index);
}

/// XORs `bytes` into the leading bytes of the state. Lanes past the end of `bytes` are
/// not touched.
pub(crate) fn xor_bytes(state: &mut State<u64>, bytes: &[u8]) {
	debug_assert!(bytes.len() <= STATE_BYTES);

	for (i, chunk) in bytes.chunks(8).enumerate() {
		let mut lane = [0; 8];
		lane[.. chunk.len()].copy_from_slice(chunk);

		state[i % 5][i / 5] ^= u64::from_le_bytes(lane);
	}
}

/// Copies the leading `out.len()` bytes of the state into `out`.
pub(crate) fn read_bytes(state: &State<u64>, out: &mut [u8]) {
	debug_assert!(out.len() <= STATE_BYTES);

	for (i, chunk) in out.chunks_mut(8).enumerate() {
		let lane = state[i % 5][i / 5].to_le_bytes();
		chunk.copy_from_slice(&lane[.. chunk.len()]);
	}
}

#[cfg(test)]
const ZERO_STATE_F1600: [u64; 25] = [
	0xf1258f7940e1dde7, 0x84d5ccf933c0478a, 0xd598261ea65aa9ee, 0xbd1547306f80494d, 0x8b284e056253d057,
	0xff97a42d7f8e6fd4, 0x90fee5a0a44647c4, 0x8c5bda0cd6192e76, 0xad30a6f71b19059c, 0x30935ab7d08ffc64,
	0xeb5aa93f2317d635, 0xa9a6e6260d712103, 0x81a57c16dbcf555f, 0x43b831cd0347c826, 0x01f22f1a11a5569f,
	0x05e5635a21d9ae61, 0x64befef28cc970f2, 0x613670957bc46611, 0xb87c5a554fd00ecb, 0x8c3ee88a1ccf32c8,
	0x940c7922ae3a2614, 0x1841f924a2c509e4, 0x16f53526e70465c2, 0x75f644e97f30a13b, 0xeaf1ff7b5ceca249,
];

#[test]
fn f1600_on_zero_state() {
	let state = permute([[0; 5]; 5]);

	for (i, expected) in ZERO_STATE_F1600.into_iter().enumerate() {
		assert_eq!(state[i % 5][i / 5], expected, "lane {}", i);
	}
}

#[test]
fn narrow_widths_on_zero_state() {
	let mut f200 = [[0u8; 5]; 5];
	keccak_f(&mut f200);
	assert_eq!([f200[0][0], f200[1][0], f200[2][0], f200[3][0], f200[4][0]], [0x3c, 0x28, 0x26, 0x84, 0x1c]);

	let mut f400 = [[0u16; 5]; 5];
	keccak_f(&mut f400);
	assert_eq!([f400[0][0], f400[1][0], f400[2][0], f400[3][0], f400[4][0]], [0x09f5, 0x40ac, 0x0fa9, 0x14f5, 0xe89f]);

	let mut f800 = [[0u32; 5]; 5];
	keccak_f(&mut f800);
	assert_eq!(f800[0][0], 0xe531d45d);
	assert_eq!(f800[1][0], 0xf404c6fb);

	let mut f25 = [[false; 5]; 5];
	keccak_f(&mut f25);
	assert_eq!([f25[0][0], f25[1][0], f25[2][0], f25[3][0], f25[4][0]], [false, false, true, true, false]);
}

#[test]
fn reduced_round_keccak_p() {
	let mut state = [[0u64; 5]; 5];
	keccak_p(&mut state, 12);

	assert_eq!(state[0][0], 0x8e5e5438b9a78617);
	assert_eq!(state[1][0], 0xd9cd6a50f259d01e);

	let mut untouched = [[7u64; 5]; 5];
	keccak_p(&mut untouched, 0);
	assert_eq!(untouched, [[7; 5]; 5]);
}

#[test]
#[should_panic]
fn too_many_rounds() {
	let mut state = [[0u8; 5]; 5];
	keccak_p(&mut state, 19);
}

#[test]
fn distinct_inputs_stay_distinct() {
	let mut a = [[0u64; 5]; 5];
	let mut b = [[0u64; 5]; 5];
	b[3][1] = 1 << 17;

	a = permute(a);
	b = permute(b);

	assert_ne!(a, b);
}

#[test]
fn byte_view_round_trip() {
	let mut state = [[0u64; 5]; 5];
	let bytes: [u8; 13] = core::array::from_fn(|i| i as u8 + 1);

	xor_bytes(&mut state, &bytes);

	assert_eq!(state[0][0], 0x0807_0605_0403_0201);
	assert_eq!(state[1][0], 0x0000_000d_0c0b_0a09);
	assert_eq!(state[2][0], 0);

	let mut out = [0; 13];
	read_bytes(&state, &mut out);
	assert_eq!(out, bytes);
}
