use core::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use keccak_sponge::keccak::{keccak_f, State};
use keccak_sponge::{Hasher, Variant};
use tracing_subscriber::EnvFilter;

const SIZES: [usize; 4] = [0, 64, 1024, 16 * 1024];

fn init_logging() {
	// RUST_LOG=keccak_sponge=trace shows every round while benchmarking
	let _ = tracing_subscriber::fmt()
		.with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
		.try_init();
}

fn permutation(c: &mut Criterion) {
	init_logging();

	let mut g = c.benchmark_group("keccak-f");

	g.bench_function("1600", |b| {
		let mut state: State<u64> = [[0; 5]; 5];
		b.iter(|| keccak_f(black_box(&mut state)));
	});

	g.bench_function("800", |b| {
		let mut state: State<u32> = [[0; 5]; 5];
		b.iter(|| keccak_f(black_box(&mut state)));
	});

	g.bench_function("200", |b| {
		let mut state: State<u8> = [[0; 5]; 5];
		b.iter(|| keccak_f(black_box(&mut state)));
	});

	g.finish();
}

fn variants(c: &mut Criterion) {
	init_logging();

	for variant in Variant::ALL {
		let hasher = Hasher::with_variant(variant);
		let requested = if variant.is_xof() {Some(64)} else {None};
		let mut g = c.benchmark_group(variant.name());

		for size in SIZES {
			let message: Vec<u8> = (0 .. size).map(|i| i as u8).collect();
			g.throughput(Throughput::Bytes(size as u64));

			g.bench_with_input(BenchmarkId::new("digest", size), &message, |b, message| {
				b.iter(|| black_box(hasher.digest(black_box(message), requested)));
			});
		}

		g.finish();
	}
}

fn squeeze(c: &mut Criterion) {
	let mut g = c.benchmark_group("squeeze");
	g.throughput(Throughput::Bytes(4096));

	for variant in [Variant::Shake128, Variant::Shake256] {
		g.bench_function(variant.name(), |b| {
			let mut stream = Hasher::with_variant(variant).stream();
			stream.update(b"seed");
			let mut reader = stream.finalize_xof().unwrap();
			let mut out = [0; 4096];

			b.iter(|| reader.read(black_box(&mut out)));
		});
	}

	g.finish();
}

criterion_group!(benches, permutation, variants, squeeze);
criterion_main!(benches);
