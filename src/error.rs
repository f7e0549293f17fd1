use alloc::string::String;
use core::fmt;

use crate::Variant;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
	/// The name given at construction is not one of the supported variants.
	#[error("unsupported hash variant `{0}`")]
	UnsupportedVariant(String),

	/// A fixed-output variant was asked for a length other than its digest length, or an
	/// extendable-output variant was asked for output without a length.
	#[error("{variant} cannot produce {}", Requested(.requested))]
	InvalidOutputLength {
		variant: Variant,
		requested: Option<usize>,
	},

	/// A known-answer check in [`self_test`](crate::selftest::self_test) failed.
	#[error("self test failed: {check}")]
	SelfTestFailed {
		check: &'static str,
	},
}

struct Requested<'a>(&'a Option<usize>);

impl fmt::Display for Requested<'_> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match *self.0 {
			Some(len) => write!(f, "{} bytes of output", len),
			None => f.write_str("output of unspecified length"),
		}
	}
}

#[test]
fn messages() {
	use alloc::string::ToString;

	assert_eq!(
		Error::UnsupportedVariant("md5".into()).to_string(),
		"unsupported hash variant `md5`",
	);

	assert_eq!(
		Error::InvalidOutputLength {variant: Variant::Sha3_256, requested: Some(16)}.to_string(),
		"SHA3-256 cannot produce 16 bytes of output",
	);

	assert_eq!(
		Error::InvalidOutputLength {variant: Variant::Shake128, requested: None}.to_string(),
		"SHAKE128 cannot produce output of unspecified length",
	);
}
