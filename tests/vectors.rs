use keccak_sponge::{Hasher, Variant};

const SHA3_224: &str = include_str!("data/sha3_224.rsp");
const SHA3_256: &str = include_str!("data/sha3_256.rsp");
const SHA3_384: &str = include_str!("data/sha3_384.rsp");
const SHA3_512: &str = include_str!("data/sha3_512.rsp");
const SHAKE128: &str = include_str!("data/shake128.rsp");
const SHAKE256: &str = include_str!("data/shake256.rsp");

// byte-oriented known answers shipped with the RustCrypto sha3 crate
const RUSTCRYPTO: [(&str, Variant); 6] = [
	(include_str!("data/sha3_224_rustcrypto.rsp"), Variant::Sha3_224),
	(include_str!("data/sha3_256_rustcrypto.rsp"), Variant::Sha3_256),
	(include_str!("data/sha3_384_rustcrypto.rsp"), Variant::Sha3_384),
	(include_str!("data/sha3_512_rustcrypto.rsp"), Variant::Sha3_512),
	(include_str!("data/shake128_rustcrypto.rsp"), Variant::Shake128),
	(include_str!("data/shake256_rustcrypto.rsp"), Variant::Shake256),
];

struct Record {
	bit_len: usize,
	msg: Vec<u8>,
	output_bits: Option<usize>,
	expected: Vec<u8>,
}

fn field<'a>(fields: &[(&'a str, &'a str)], key: &str) -> Option<&'a str> {
	fields.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}

fn record_from(fields: &[(&str, &str)]) -> Record {
	let bit_len = field(fields, "Len").expect("Len").parse().expect("Len value");
	let msg = hex::decode(field(fields, "Msg").expect("Msg")).expect("Msg hex");
	let output_bits = field(fields, "Outputlen").map(|v| v.parse().expect("Outputlen value"));
	let expected = field(fields, "MD").or_else(|| field(fields, "Output")).expect("digest");

	Record {
		bit_len,
		msg,
		output_bits,
		expected: hex::decode(expected).expect("digest hex"),
	}
}

fn parse_records(data: &str) -> Vec<Record> {
	let mut records = Vec::new();
	let mut fields = Vec::new();

	for line in data.lines().chain([""]) {
		let line = line.trim();

		if line.is_empty() {
			if !fields.is_empty() {
				records.push(record_from(&fields));
				fields.clear();
			}

			continue;
		}

		if line.starts_with('#') || line.starts_with('[') {
			continue;
		}

		let (key, value) = line.split_once('=').expect("key = value");
		fields.push((key.trim(), value.trim()));
	}

	records
}

fn run(data: &str, variant: Variant) -> usize {
	let hasher = Hasher::with_variant(variant);
	let records = parse_records(data);

	for record in &records {
		let output_len = record.output_bits.map(|bits| bits / 8);

		let actual = hasher
			.digest_bits(&record.msg, record.bit_len, output_len)
			.expect("valid request");

		assert_eq!(
			hex::encode(&actual),
			hex::encode(&record.expected),
			"{} mismatch for a {}-bit message",
			variant,
			record.bit_len,
		);

		if let Some(len) = variant.output_len() {
			assert_eq!(actual.len(), len);
		}

		// byte-aligned records must agree with the byte-oriented entry point too
		if record.bit_len % 8 == 0 {
			assert_eq!(hasher.digest(&record.msg[.. record.bit_len / 8], output_len).unwrap(), actual);
		}
	}

	records.len()
}

#[test]
fn sha3_224_vectors() {
	assert!(run(SHA3_224, Variant::Sha3_224) > 300);
}

#[test]
fn sha3_256_vectors() {
	assert!(run(SHA3_256, Variant::Sha3_256) > 300);
}

#[test]
fn sha3_384_vectors() {
	assert!(run(SHA3_384, Variant::Sha3_384) > 300);
}

#[test]
fn sha3_512_vectors() {
	assert!(run(SHA3_512, Variant::Sha3_512) > 200);
}

#[test]
fn shake128_vectors() {
	assert!(run(SHAKE128, Variant::Shake128) > 400);
}

#[test]
fn shake256_vectors() {
	assert!(run(SHAKE256, Variant::Shake256) > 300);
}

#[test]
fn rustcrypto_known_answers() {
	for (data, variant) in RUSTCRYPTO {
		assert!(run(data, variant) >= 255, "{}", variant);
	}
}

#[test]
fn fips202_bit_examples() {
	// the 5-bit message 11001 and the 30-bit message 1100101000011010110111101001 10
	let five_bits = [0x13];
	let thirty_bits = [0x53, 0x58, 0x7b, 0x19];

	let expected = [
		(Variant::Sha3_224, 5, "ffbad5da96bad71789330206dc6768ecaeb1b32dca6b3301489674ab"),
		(Variant::Sha3_256, 5, "7b0047cf5a456882363cbf0fb05322cf65f4b7059a46365e830132e3b5d957af"),
		(Variant::Sha3_224, 30, "d666a514cc9dba25ac1ba69ed3930460deaac9851b5f0baab007df3b"),
		(Variant::Sha3_256, 30, "c8242fef409e5ae9d1f1c857ae4dc624b92b19809f62aa8c07411c54a078b1d0"),
		(Variant::Sha3_384, 30, "955b4dd1be03261bd76f807a7efd432435c417362811b8a50c564e7ee9585e1ac7626dde2fdc030f876196ea267f08c3"),
		(Variant::Sha3_512, 30, "9834c05a11e1c5d3da9c740e1c106d9e590a0e530b6f6aaa7830525d075ca5db1bd8a6aa981a28613ac334934a01823cd45f45e49b6d7e6917f2f16778067bab"),
	];

	for (variant, bit_len, digest) in expected {
		let message: &[u8] = if bit_len == 5 {&five_bits} else {&thirty_bits};
		let actual = Hasher::with_variant(variant).digest_bits(message, bit_len, None).unwrap();

		assert_eq!(hex::encode(actual), digest, "{} of a {}-bit message", variant, bit_len);
	}
}

#[test]
fn vector_files_cover_rate_boundaries() {
	for (data, variant) in [
		(SHA3_224, Variant::Sha3_224),
		(SHA3_256, Variant::Sha3_256),
		(SHA3_384, Variant::Sha3_384),
		(SHA3_512, Variant::Sha3_512),
		(SHAKE128, Variant::Shake128),
		(SHAKE256, Variant::Shake256),
	] {
		let rate = variant.params().rate_bits();
		let lengths: Vec<usize> = parse_records(data).iter().map(|record| record.bit_len).collect();

		for boundary in [0, rate - 1, rate, rate + 1, 2 * rate - 1, 2 * rate] {
			assert!(lengths.contains(&boundary), "{} lacks a {}-bit message", variant, boundary);
		}
	}
}

#[test]
fn one_million_a() {
	let message = vec![b'a'; 1_000_000];

	let expected = [
		(Variant::Sha3_224, "d69335b93325192e516a912e6d19a15cb51c6ed5c15243e7a7fd653c"),
		(Variant::Sha3_256, "5c8875ae474a3634ba4fd55ec85bffd661f32aca75c6d699d0cdcb6c115891c1"),
		(Variant::Sha3_384, "eee9e24d78c1855337983451df97c8ad9eedf256c6334f8e948d252d5e0e76847aa0774ddb90a842190d2c558b4b8340"),
		(Variant::Sha3_512, "3c3a876da14034ab60627c077bb98f7e120a2a5370212dffb3385a18d4f38859ed311d0a9d5141ce9cc5c66ee689b266a8aa18ace8282a0e0db596c90b0a7b87"),
	];

	for (variant, digest) in expected {
		let actual = Hasher::with_variant(variant).digest(&message, None).unwrap();
		assert_eq!(hex::encode(actual), digest, "{}", variant);
	}
}
