//! Byte-level ASCII comparison used by the ignore-case strategies.
//!
//! The comparison is deliberately one-sided: the stored string must already
//! be lowercase, while the query may use any letter case. Non-ASCII bytes are
//! compared verbatim.

/// Returns true if `query` equals `lowercase` up to ASCII letter case.
///
/// A byte matches when it is equal to the stored byte, or when the stored
/// byte is a lowercase ASCII letter and the query byte is its uppercase
/// counterpart. Strings of different length never match.
///
/// ```
/// use cul_bimap::ascii::eq_ignore_case_lowercase;
///
/// assert!(eq_ignore_case_lowercase("ok", "OK"));
/// assert!(eq_ignore_case_lowercase("ok", "oK"));
/// assert!(!eq_ignore_case_lowercase("OK", "ok"));
/// ```
pub fn eq_ignore_case_lowercase(lowercase: &str, query: &str) -> bool {
	lowercase.len() == query.len()
		&& lowercase
			.bytes()
			.zip(query.bytes())
			.all(|(stored, queried)| {
				stored == queried || (stored.is_ascii_lowercase() && stored == queried.to_ascii_lowercase())
			})
}

/// Returns true if `s` contains an uppercase ASCII letter.
pub fn contains_uppercase_ascii(s: &str) -> bool {
	s.bytes().any(|b| b.is_ascii_uppercase())
}

#[cfg(test)]
mod tests {
	use rstest::rstest;

	use super::*;

	#[rstest]
	#[case("ok", "ok", true)]
	#[case("ok", "OK", true)]
	#[case("ok", "Ok", true)]
	#[case("ok", "oK", true)]
	#[case("ok", "ko", false)]
	#[case("ok", "okk", false)]
	#[case("ok", "o", false)]
	#[case("", "", true)]
	#[case("not-found", "NOT-FOUND", true)]
	#[case("a1_b", "A1_B", true)]
	#[case("@", "`", false)]
	#[case("[", "{", false)]
	fn ascii_case_folding(#[case] stored: &str, #[case] query: &str, #[case] expected: bool) {
		assert_eq!(eq_ignore_case_lowercase(stored, query), expected);
	}

	#[test]
	fn stored_side_is_not_folded() {
		assert!(!eq_ignore_case_lowercase("OK", "ok"));
		assert!(eq_ignore_case_lowercase("OK", "OK"));
	}

	#[test]
	fn non_ascii_bytes_compare_verbatim() {
		assert!(eq_ignore_case_lowercase("straße", "STRAßE"));
		assert!(!eq_ignore_case_lowercase("é", "É"));
	}

	#[test]
	fn detects_uppercase() {
		assert!(!contains_uppercase_ascii("lower-case_1"));
		assert!(contains_uppercase_ascii("lowerCase"));
		assert!(!contains_uppercase_ascii("École"));
		assert!(!contains_uppercase_ascii(""));
	}
}
