use std::fmt;
use std::marker::PhantomData;

use crate::switch::{Cases, Switch};

/// An ordered, immutable description of the pairs in a table.
///
/// The associated types are the two domains of the table. Every lookup calls
/// [`PairSource::replay`] with a fresh strategy, so implementations must
/// visit the same pairs in the same order on every call.
pub trait PairSource {
	/// Domain of the first element of each pair.
	type First;
	/// Domain of the second element of each pair.
	type Second;

	/// Feeds every pair to `switch` in declaration order.
	fn replay(&self, switch: &mut dyn Switch<Self::First, Self::Second>);
}

/// A pair source backed by a builder closure.
///
/// The closure is called once per lookup and declares its pairs through
/// [`Cases`]. It must be side-effect free and deterministic. The domain types
/// are whatever the closure passes to [`Cases::case`]; declaring pairs of
/// different types is rejected by the compiler.
pub struct FnPairs<F, S, B> {
	builder: B,
	_domains: PhantomData<fn() -> (F, S)>,
}

impl<F, S, B> FnPairs<F, S, B>
where
	B: Fn(&mut Cases<'_, F, S>),
{
	/// Wraps a builder closure.
	pub const fn new(builder: B) -> Self {
		Self {
			builder,
			_domains: PhantomData,
		}
	}
}

impl<F, S, B: Clone> Clone for FnPairs<F, S, B> {
	fn clone(&self) -> Self {
		Self {
			builder: self.builder.clone(),
			_domains: PhantomData,
		}
	}
}

impl<F, S, B: Copy> Copy for FnPairs<F, S, B> {}

impl<F, S, B> fmt::Debug for FnPairs<F, S, B> {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("FnPairs")
			.field("first", &std::any::type_name::<F>())
			.field("second", &std::any::type_name::<S>())
			.finish_non_exhaustive()
	}
}

impl<F, S, B> PairSource for FnPairs<F, S, B>
where
	B: Fn(&mut Cases<'_, F, S>),
{
	type First = F;
	type Second = S;

	fn replay(&self, switch: &mut dyn Switch<F, S>) {
		(self.builder)(&mut Cases::new(switch));
	}
}

/// Scans a materialized list, stopping once the strategy is settled.
fn replay_pairs<A, B>(pairs: &[(A, B)], switch: &mut dyn Switch<A, B>) {
	for (first, second) in pairs {
		if switch.is_settled() {
			break;
		}
		switch.case(first, second);
	}
}

impl<A, B, const N: usize> PairSource for [(A, B); N] {
	type First = A;
	type Second = B;

	fn replay(&self, switch: &mut dyn Switch<A, B>) {
		replay_pairs(self, switch);
	}
}

impl<A, B> PairSource for &[(A, B)] {
	type First = A;
	type Second = B;

	fn replay(&self, switch: &mut dyn Switch<A, B>) {
		replay_pairs(self, switch);
	}
}

impl<A, B> PairSource for Vec<(A, B)> {
	type First = A;
	type Second = B;

	fn replay(&self, switch: &mut dyn Switch<A, B>) {
		replay_pairs(self, switch);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	/// Counts visited pairs and settles after `limit` of them.
	struct Counter {
		visited: usize,
		limit: usize,
	}

	impl<A, B> Switch<A, B> for Counter {
		fn case(&mut self, _: &A, _: &B) {
			self.visited += 1;
		}

		fn is_settled(&self) -> bool {
			self.visited >= self.limit
		}
	}

	#[test]
	fn closure_source_replays_every_pair() {
		let source = FnPairs::new(|cases: &mut Cases<'_, u8, char>| {
			cases.case(1, 'a').case(2, 'b').case(3, 'c');
		});
		let mut counter = Counter { visited: 0, limit: 1 };
		source.replay(&mut counter);
		assert_eq!(counter.visited, 3);
	}

	#[test]
	fn list_sources_stop_once_settled() {
		let pairs = [(1_u8, 'a'), (2, 'b'), (3, 'c')];

		let mut counter = Counter { visited: 0, limit: 2 };
		pairs.replay(&mut counter);
		assert_eq!(counter.visited, 2);

		let mut counter = Counter { visited: 0, limit: 2 };
		pairs.as_slice().replay(&mut counter);
		assert_eq!(counter.visited, 2);

		let mut counter = Counter { visited: 0, limit: usize::MAX };
		pairs.to_vec().replay(&mut counter);
		assert_eq!(counter.visited, 3);
	}

	#[test]
	fn debug_names_the_domains() {
		let source = FnPairs::new(|cases: &mut Cases<'_, u8, &str>| {
			cases.case(1, "one");
		});
		let rendered = format!("{source:?}");
		assert!(rendered.contains("u8"), "{rendered}");
		assert!(rendered.contains("&str"), "{rendered}");
	}
}
