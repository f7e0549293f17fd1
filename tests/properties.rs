use std::io::Read;

use keccak_sponge::keccak::trace::permute_traced;
use keccak_sponge::keccak::{permute, State};
use keccak_sponge::{Hasher, Variant};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

fn digest(variant: Variant, message: &[u8]) -> Vec<u8> {
	let requested = if variant.is_xof() {Some(64)} else {None};
	Hasher::with_variant(variant).digest(message, requested).unwrap()
}

#[test]
fn deterministic_with_fixed_lengths() {
	let message = b"The quick brown fox jumps over the lazy dog";

	for variant in Variant::ALL {
		let first = digest(variant, message);

		assert_eq!(first, digest(variant, message), "{}", variant);
		assert_eq!(first.len(), variant.output_len().unwrap_or(64), "{}", variant);
	}
}

#[test]
fn empty_input() {
	let expected = [
		(Variant::Sha3_224, "6b4e03423667dbb73b6e15454f0eb1abd4597f9a1b078e3f5b5a6bc7"),
		(Variant::Sha3_256, "a7ffc6f8bf1ed76651c14756a061d662f580ff4de43b49fa82d80a4b80f8434a"),
		(Variant::Sha3_384, "0c63a75b845e4f7d01107d852e4c2485c51a50aaaa94fc61995e71bbee983a2ac3713831264adb47fb6bd1e058d5f004"),
		(Variant::Sha3_512, "a69f73cca23a9ac5c8b567dc185a756e97c982164fe25859e0d1dcc1475c80a615b2123af1f5f94c11e3e9402c3ac558f500199d95b6d3e301758586281dcd26"),
		(Variant::Shake128, "7f9c2ba4e88f827d616045507605853ed73b8093f6efbc88eb1a6eacfa66ef263cb1eea988004b93103cfb0aeefd2a686e01fa4a58e8a3639ca8a1e3f9ae57e2"),
		(Variant::Shake256, "46b9dd2b0ba88d13233b3feb743eeb243fcd52ea62b81b82b50c27646ed5762fd75dc4ddd8c0f200cb05019d67b592f6fc821c49479ab48640292eacb3b7c4be"),
	];

	for (variant, hex_digest) in expected {
		assert_eq!(hex::encode(digest(variant, b"")), hex_digest);
	}

	// an empty stream and an empty one-shot agree for every variant
	for variant in Variant::ALL {
		let requested = if variant.is_xof() {Some(64)} else {None};
		let stream = Hasher::with_variant(variant).stream();

		assert_eq!(stream.finalize(requested).unwrap(), digest(variant, b""));
	}
}

#[test]
fn avalanche() {
	let mut rng = StdRng::seed_from_u64(0x5eed_cafe);

	for variant in Variant::ALL {
		let mut total_flipped = 0;
		let mut trials = 0;

		for _ in 0 .. 64 {
			let len = rng.gen_range(1 .. 300);
			let mut message: Vec<u8> = (0 .. len).map(|_| rng.gen()).collect();
			let before = digest(variant, &message);

			let bit = rng.gen_range(0 .. len * 8);
			message[bit / 8] ^= 1 << (bit % 8);
			let after = digest(variant, &message);

			let flipped: u32 = before.iter().zip(&after).map(|(a, b)| (a ^ b).count_ones()).sum();
			assert_ne!(flipped, 0, "{}", variant);

			total_flipped += flipped as usize;
			trials += 1;
		}

		let output_bits = 8 * variant.output_len().unwrap_or(64);
		let average = total_flipped as f64 / trials as f64;

		assert!(
			(average - output_bits as f64 / 2.0).abs() < output_bits as f64 / 10.0,
			"{}: {} of {} bits flipped on average",
			variant,
			average,
			output_bits,
		);
	}
}

#[test]
fn xof_outputs_extend_each_other() {
	for variant in [Variant::Shake128, Variant::Shake256] {
		let hasher = Hasher::with_variant(variant);
		let long = hasher.digest(b"prefix", Some(1000)).unwrap();

		for len in [0, 1, 31, 32, 167, 168, 169, 335, 336, 337, 999] {
			assert_eq!(hasher.digest(b"prefix", Some(len)).unwrap(), long[.. len], "{} {}", variant, len);
		}
	}
}

#[test]
fn incremental_squeeze_matches_one_read() {
	let hasher = Hasher::with_variant(Variant::Shake128);
	let expected = hasher.digest(b"squeeze", Some(2048)).unwrap();

	let mut stream = hasher.stream();
	stream.update(b"squeeze");
	let mut reader = stream.finalize_xof().unwrap();

	let mut actual = Vec::new();
	let mut piece = 0;

	while actual.len() < expected.len() {
		let take = (piece % 170).min(expected.len() - actual.len());
		actual.extend(reader.read_vec(take));
		piece += 7;
	}

	assert_eq!(actual, expected);
}

#[test]
fn io_read_matches_read_vec() {
	let mut stream = Hasher::with_variant(Variant::Shake256).stream();
	stream.update(b"reader");

	let mut reader = stream.clone().finalize_xof().unwrap();
	let mut via_io = [0; 300];
	reader.read_exact(&mut via_io).unwrap();

	let expected = stream.finalize(Some(300)).unwrap();
	assert_eq!(via_io.to_vec(), expected);
}

#[test]
fn padding_boundaries_are_distinct() {
	for variant in Variant::ALL {
		let rate = variant.params().rate_bytes();
		let mut seen = Vec::new();

		for len in [rate - 2, rate - 1, rate, rate + 1, 2 * rate - 1, 2 * rate] {
			let message = vec![0; len];
			let output = digest(variant, &message);

			assert!(!seen.contains(&output), "{} collides at {} bytes", variant, len);
			seen.push(output);
		}
	}
}

#[test]
fn trailing_zero_bits_change_the_digest() {
	let hasher = Hasher::with_variant(Variant::Sha3_256);

	let bytes = hasher.digest_bits(&[0xa5], 8, None).unwrap();
	let extended = hasher.digest_bits(&[0xa5, 0x00], 9, None).unwrap();
	let truncated = hasher.digest_bits(&[0xa5], 7, None).unwrap();

	assert_ne!(bytes, extended);
	assert_ne!(bytes, truncated);
}

#[test]
fn shared_hasher_across_threads() {
	let hasher = Hasher::with_variant(Variant::Sha3_512);
	let messages: Vec<Vec<u8>> = (0 .. 8u8).map(|i| vec![i; 100 * i as usize]).collect();
	let expected: Vec<Vec<u8>> = messages.iter().map(|m| hasher.digest(m, None).unwrap()).collect();

	let actual: Vec<Vec<u8>> = std::thread::scope(|scope| {
		let handles: Vec<_> = messages
			.iter()
			.map(|message| scope.spawn(move || hasher.digest(message, None).unwrap()))
			.collect();

		handles.into_iter().map(|handle| handle.join().unwrap()).collect()
	});

	assert_eq!(actual, expected);
}

#[test]
fn traced_permutation_matches_plain() {
	let subscriber = tracing_subscriber::fmt()
		.with_test_writer()
		.with_max_level(tracing::Level::TRACE)
		.finish();

	let mut state: State<u64> = [[0; 5]; 5];
	state[1][2] = 0x0123_4567_89ab_cdef;
	let expected = permute(state);

	tracing::subscriber::with_default(subscriber, || {
		permute_traced(&mut state);

		let mut stream = Hasher::new("shake128").unwrap().stream();
		stream.update(b"logged");
		let mut reader = stream.finalize_xof().unwrap();
		assert_eq!(reader.read_vec(400).len(), 400);
	});

	assert_eq!(state, expected);
}
