/// A visitor that receives every declared pair of a table, in order.
///
/// Lookup strategies implement this trait. A [`PairSource`] drives it by
/// calling [`Switch::case`] once per pair.
///
/// [`PairSource`]: crate::PairSource
pub trait Switch<F, S> {
	/// Visits one declared pair.
	fn case(&mut self, first: &F, second: &S);

	/// Returns true once further pairs can no longer change the outcome.
	///
	/// Materialized sources may stop early when this holds. Closure sources
	/// always replay every pair.
	fn is_settled(&self) -> bool {
		false
	}
}

/// Chainable handle a closure builder uses to declare its pairs.
///
/// ```
/// use cul_bimap::BiMap;
///
/// let digits = BiMap::from_fn(|cases| {
/// 	cases.case(1_u8, "one").case(2, "two").case(3, "three");
/// });
/// assert_eq!(digits.find_by_second("three"), Some(3));
/// ```
pub struct Cases<'s, F, S> {
	switch: &'s mut dyn Switch<F, S>,
}

impl<'s, F, S> Cases<'s, F, S> {
	pub(crate) fn new(switch: &'s mut dyn Switch<F, S>) -> Self {
		Self { switch }
	}

	/// Declares the pair `(first, second)`.
	pub fn case(&mut self, first: F, second: S) -> &mut Self {
		self.switch.case(&first, &second);
		self
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[derive(Default)]
	struct Recorder {
		seen: Vec<(u8, &'static str)>,
	}

	impl Switch<u8, &'static str> for Recorder {
		fn case(&mut self, first: &u8, second: &&'static str) {
			self.seen.push((*first, *second));
		}
	}

	#[test]
	fn cases_forward_in_declaration_order() {
		let mut recorder = Recorder::default();
		Cases::<u8, &str>::new(&mut recorder).case(2, "two").case(1, "one").case(2, "deux");
		assert_eq!(recorder.seen, [(2, "two"), (1, "one"), (2, "deux")]);
	}

	#[test]
	fn default_switch_never_settles() {
		let recorder = Recorder::default();
		assert!(!recorder.is_settled());
	}
}
