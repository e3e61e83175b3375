use std::borrow::Borrow;

use crate::audit::Audit;
use crate::dispatch::{Resolve, ResolveIgnoreCase};
use crate::source::{FnPairs, PairSource};
use crate::strategy::{ByFirst, ByFirstIgnoreCase, BySecond, BySecondIgnoreCase};
use crate::switch::{Cases, Switch};


/// A fixed bidirectional table between the two domains of a [`PairSource`].
///
/// Lookups replay the source and return the mapped value of the first
/// declared pair that matches, or `None`. Duplicates are allowed and
/// resolved by declaration order.
///
/// Ignore-case lookups require every string on the searched side to be
/// lowercase ASCII. Debug builds assert this while scanning; release builds
/// may silently miss. [`BiMap::audit`] reports violations as values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct BiMap<P> {
	source: P,
}

impl<P> BiMap<P> {
	/// Creates a table over `source`. The source is not replayed here.
	pub const fn new(source: P) -> Self {
		Self { source }
	}

	/// Returns the underlying pair source.
	pub fn source(&self) -> &P {
		&self.source
	}

	/// Consumes the table and returns its pair source.
	pub fn into_source(self) -> P {
		self.source
	}
}

impl<F, S, B> BiMap<FnPairs<F, S, B>>
where
	B: Fn(&mut Cases<'_, F, S>),
{
	/// Creates a table from a builder closure that declares its pairs.
	///
	/// The domain types are inferred from the closure's `case` calls.
	pub const fn from_fn(builder: B) -> Self {
		Self::new(FnPairs::new(builder))
	}
}

impl<P: PairSource> BiMap<P> {
	/// Returns the second value paired with `key`.
	pub fn find_by_first<Q>(&self, key: &Q) -> Option<P::Second>
	where
		P::First: Borrow<Q>,
		P::Second: Clone,
		Q: PartialEq + ?Sized,
	{
		let mut strategy = ByFirst::<Q, P::Second>::new(key);
		self.source.replay(&mut strategy);
		strategy.into_result()
	}

	/// Returns the first value paired with `key`.
	pub fn find_by_second<Q>(&self, key: &Q) -> Option<P::First>
	where
		P::Second: Borrow<Q>,
		P::First: Clone,
		Q: PartialEq + ?Sized,
	{
		let mut strategy = BySecond::<Q, P::First>::new(key);
		self.source.replay(&mut strategy);
		strategy.into_result()
	}

	/// Returns the second value whose lowercase first value matches `key` in
	/// any ASCII letter case.
	pub fn find_by_first_ignore_case(&self, key: &str) -> Option<P::Second>
	where
		P::First: AsRef<str>,
		P::Second: Clone,
	{
		let mut strategy = ByFirstIgnoreCase::<P::Second>::new(key);
		self.source.replay(&mut strategy);
		strategy.into_result()
	}

	/// Returns the first value whose lowercase second value matches `key` in
	/// any ASCII letter case.
	pub fn find_by_second_ignore_case(&self, key: &str) -> Option<P::First>
	where
		P::Second: AsRef<str>,
		P::First: Clone,
	{
		let mut strategy = BySecondIgnoreCase::<P::First>::new(key);
		self.source.replay(&mut strategy);
		strategy.into_result()
	}

	/// Looks `key` up on whichever side borrows as the key's type.
	///
	/// See [`Resolve`] for how the direction is chosen.
	pub fn find<Q, Via>(&self, key: &Q) -> Option<Q::Mapped>
	where
		Q: Resolve<P::First, P::Second, Via> + ?Sized,
	{
		<Q as Resolve<P::First, P::Second, Via>>::resolve(key, self)
	}

	/// Ignore-case lookup on whichever side is string-like.
	///
	/// See [`ResolveIgnoreCase`] for how the direction is chosen.
	pub fn find_ignore_case<Via>(
		&self,
		key: &str,
	) -> Option<<str as ResolveIgnoreCase<P::First, P::Second, Via>>::Mapped>
	where
		str: ResolveIgnoreCase<P::First, P::Second, Via>,
	{
		<str as ResolveIgnoreCase<P::First, P::Second, Via>>::resolve_ignore_case(key, self)
	}

	/// Returns true if some pair has `key` as its first value.
	pub fn contains_first<Q>(&self, key: &Q) -> bool
	where
		P::First: Borrow<Q>,
		Q: PartialEq + ?Sized,
	{
		let mut found = false;
		self.for_each_pair(|first, _| found |= Borrow::<Q>::borrow(first) == key);
		found
	}

	/// Returns true if some pair has `key` as its second value.
	pub fn contains_second<Q>(&self, key: &Q) -> bool
	where
		P::Second: Borrow<Q>,
		Q: PartialEq + ?Sized,
	{
		let mut found = false;
		self.for_each_pair(|_, second| found |= Borrow::<Q>::borrow(second) == key);
		found
	}

	/// Calls `visit` for every declared pair, in declaration order.
	pub fn for_each_pair(&self, visit: impl FnMut(&P::First, &P::Second)) {
		self.source.replay(&mut Visit(visit));
	}

	/// Returns the number of declared pairs, duplicates included.
	pub fn len(&self) -> usize {
		let mut len = 0;
		self.for_each_pair(|_, _| len += 1);
		len
	}

	/// Returns true if the source declares no pairs.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}

	/// Starts an audit of the declared pairs.
	pub fn audit(&self) -> Audit<'_, P> {
		Audit::new(self)
	}
}

/// Adapts a closure into a [`Switch`] that sees every pair.
struct Visit<G>(G);

impl<F, S, G> Switch<F, S> for Visit<G>
where
	G: FnMut(&F, &S),
{
	fn case(&mut self, first: &F, second: &S) {
		(self.0)(first, second);
	}
}
