//! Support ticket key derivation.
//!
//! Keys have the form `<CAT>-<YYYY>-<P>-<RANDOM8>`. The category, year and
//! priority segments are a pure function of the issue; the eight-character
//! alphanumeric suffix is drawn from a random source on every generation.

mod generator;
mod key;

pub use generator::IssueKeyGenerator;
pub use key::{IssueKey, KEY_LEN, KEY_SEPARATOR, KEY_YEARS, SUFFIX_LEN};
