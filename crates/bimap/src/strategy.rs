//! The four lookup strategies.
//!
//! Each strategy holds a query key and an initially empty result. Driven by
//! a [`PairSource`](crate::PairSource), it records the mapped value of the
//! first pair whose key side matches and ignores every later pair.

use std::borrow::Borrow;

use crate::ascii::{contains_uppercase_ascii, eq_ignore_case_lowercase};
use crate::switch::Switch;

const LOWERCASE_TARGETS: &str = "ignore-case lookup targets must be lowercase ASCII";

/// Finds the second value of the first pair whose first value equals the key.
#[derive(Debug)]
pub struct ByFirst<'k, Q: ?Sized, S> {
	key: &'k Q,
	result: Option<S>,
}

impl<'k, Q: ?Sized, S> ByFirst<'k, Q, S> {
	/// Starts a lookup for `key`.
	pub fn new(key: &'k Q) -> Self {
		Self { key, result: None }
	}

	/// Returns the recorded match, if any.
	pub fn into_result(self) -> Option<S> {
		self.result
	}
}

impl<F, S, Q> Switch<F, S> for ByFirst<'_, Q, S>
where
	F: Borrow<Q>,
	Q: PartialEq + ?Sized,
	S: Clone,
{
	fn case(&mut self, first: &F, second: &S) {
		if self.result.is_none() && Borrow::<Q>::borrow(first) == self.key {
			self.result = Some(second.clone());
		}
	}

	fn is_settled(&self) -> bool {
		self.result.is_some()
	}
}

/// Finds the first value of the first pair whose second value equals the key.
#[derive(Debug)]
pub struct BySecond<'k, Q: ?Sized, F> {
	key: &'k Q,
	result: Option<F>,
}

impl<'k, Q: ?Sized, F> BySecond<'k, Q, F> {
	/// Starts a lookup for `key`.
	pub fn new(key: &'k Q) -> Self {
		Self { key, result: None }
	}

	/// Returns the recorded match, if any.
	pub fn into_result(self) -> Option<F> {
		self.result
	}
}

impl<F, S, Q> Switch<F, S> for BySecond<'_, Q, F>
where
	S: Borrow<Q>,
	Q: PartialEq + ?Sized,
	F: Clone,
{
	fn case(&mut self, first: &F, second: &S) {
		if self.result.is_none() && Borrow::<Q>::borrow(second) == self.key {
			self.result = Some(first.clone());
		}
	}

	fn is_settled(&self) -> bool {
		self.result.is_some()
	}
}

/// Ignore-case variant of [`ByFirst`] for string-like first values.
///
/// Every declared first value must be lowercase ASCII. Debug builds assert
/// this for each visited pair, so the strategy never settles early.
#[derive(Debug)]
pub struct ByFirstIgnoreCase<'k, S> {
	key: &'k str,
	result: Option<S>,
}

impl<'k, S> ByFirstIgnoreCase<'k, S> {
	/// Starts a lookup for `key`, which may use any letter case.
	pub fn new(key: &'k str) -> Self {
		Self { key, result: None }
	}

	/// Returns the recorded match, if any.
	pub fn into_result(self) -> Option<S> {
		self.result
	}
}

impl<F, S> Switch<F, S> for ByFirstIgnoreCase<'_, S>
where
	F: AsRef<str>,
	S: Clone,
{
	fn case(&mut self, first: &F, second: &S) {
		let stored = first.as_ref();
		debug_assert!(!contains_uppercase_ascii(stored), "{LOWERCASE_TARGETS}: {stored:?}");

		if self.result.is_none() && eq_ignore_case_lowercase(stored, self.key) {
			self.result = Some(second.clone());
		}
	}
}

/// Ignore-case variant of [`BySecond`] for string-like second values.
///
/// Every declared second value must be lowercase ASCII. Debug builds assert
/// this for each visited pair, so the strategy never settles early.
#[derive(Debug)]
pub struct BySecondIgnoreCase<'k, F> {
	key: &'k str,
	result: Option<F>,
}

impl<'k, F> BySecondIgnoreCase<'k, F> {
	/// Starts a lookup for `key`, which may use any letter case.
	pub fn new(key: &'k str) -> Self {
		Self { key, result: None }
	}

	/// Returns the recorded match, if any.
	pub fn into_result(self) -> Option<F> {
		self.result
	}
}

impl<F, S> Switch<F, S> for BySecondIgnoreCase<'_, F>
where
	S: AsRef<str>,
	F: Clone,
{
	fn case(&mut self, first: &F, second: &S) {
		let stored = second.as_ref();
		debug_assert!(!contains_uppercase_ascii(stored), "{LOWERCASE_TARGETS}: {stored:?}");

		if self.result.is_none() && eq_ignore_case_lowercase(stored, self.key) {
			self.result = Some(first.clone());
		}
	}
}
