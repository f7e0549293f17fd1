//! Step-by-step views of the permutation for debugging and test harnesses.

use core::fmt;

use super::components::{chi::chi, iota::iota, pi::pi, rho::rho, theta::theta};
use super::{KeccakLane, State};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Step {
	Theta,
	Rho,
	Pi,
	Chi,
	Iota,
}

impl Step {
	pub const ALL: [Step; 5] = [Step::Theta, Step::Rho, Step::Pi, Step::Chi, Step::Iota];

	fn apply<T: KeccakLane>(self, state: &mut State<T>, round_index: usize) {
		match self {
			Step::Theta => theta(state),
			Step::Rho => rho(state),
			Step::Pi => pi(state),
			Step::Chi => chi(state),
			Step::Iota => iota(state, round_index),
		}
	}
}

impl fmt::Display for Step {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Step::Theta => "theta",
			Step::Rho => "rho",
			Step::Pi => "pi",
			Step::Chi => "chi",
			Step::Iota => "iota",
		})
	}
}

/// Runs the full Keccak-f permutation, calling `observer` with the round index, the step
/// just applied and the resulting state after each of the five steps of every round.
///
/// The final state equals what [`keccak_f`](super::keccak_f) produces.
pub fn permute_observed<T, F>(state: &mut State<T>, mut observer: F)
where
	T: KeccakLane,
	F: FnMut(usize, Step, &State<T>),
{
	for round_index in 0 .. T::ROUNDS {
		for step in Step::ALL {
			step.apply(state, round_index);
			observer(round_index, step, state);
		}
	}
}

/// Like [`permute_observed`], reporting every intermediate state as a `trace` event.
pub fn permute_traced<T: KeccakLane>(state: &mut State<T>) {
	tracing::trace!(state = %StateDisplay(state), "permutation input");

	permute_observed(state, |round, step, state| {
		tracing::trace!(round, %step, state = %StateDisplay(state), "after step");
	});
}

/// Renders a state as five rows (one per `y`) of hex lanes.
pub struct StateDisplay<'a, T>(pub &'a State<T>);

impl<T: KeccakLane> fmt::Display for StateDisplay<'_, T> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let digits = ((T::BITS as usize) + 3) / 4;

		for y in 0 .. 5 {
			if y > 0 {
				f.write_str(" / ")?;
			}

			for x in 0 .. 5 {
				if x > 0 {
					f.write_str(" ")?;
				}

				write!(f, "{:0width$x}", self.0[x][y].to_u64(), width = digits)?;
			}
		}

		Ok(())
	}
}

#[test]
fn observed_matches_plain_permutation() {
	let mut observed = [[0u64; 5]; 5];
	observed[1][2] = 0x0123_4567_89ab_cdef;

	let mut plain = observed;
	super::keccak_f(&mut plain);

	let mut calls = 0;
	let mut last = None;

	permute_observed(&mut observed, |round, step, _| {
		assert_eq!(step, Step::ALL[calls % 5]);
		assert_eq!(round, calls / 5);
		calls += 1;
		last = Some((round, step));
	});

	assert_eq!(calls, 24 * 5);
	assert_eq!(last, Some((23, Step::Iota)));
	assert_eq!(observed, plain);
}

#[test]
fn first_round_on_zero_state_only_sets_round_constant() {
	let mut state = [[0u16; 5]; 5];
	let mut after_first_round = None;

	permute_observed(&mut state, |round, step, state| {
		if round == 0 && step == Step::Iota {
			after_first_round = Some(*state);
		}
	});

	let mut expected = [[0u16; 5]; 5];
	expected[0][0] = 1;

	assert_eq!(after_first_round, Some(expected));
}

#[test]
fn display_pads_lanes_to_width() {
	use alloc::string::ToString;

	let mut state = [[0u16; 5]; 5];
	state[0][0] = 0xab;
	state[4][4] = 0xffff;

	let rendered = StateDisplay(&state).to_string();

	assert!(rendered.starts_with("00ab 0000 0000 0000 0000 / 0000"));
	assert!(rendered.ends_with("0000 ffff"));
}
