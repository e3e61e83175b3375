//! Direction selection for [`BiMap::find`] and [`BiMap::find_ignore_case`].
//!
//! The direction is picked by trait selection over the marker types
//! [`ViaFirst`] and [`ViaSecond`]. Keys are passed by reference and match a
//! domain that borrows as the key type. Exactly one marker must apply: a key
//! type matching both domains, or neither, does not compile.
//!
//! ```compile_fail
//! use cul_bimap::bimap;
//!
//! // Both domains are string slices, so the direction is ambiguous.
//! let words = bimap! { "one" => "uno", "two" => "dos" };
//! let _ = words.find("one");
//! ```
//!
//! ```compile_fail
//! use cul_bimap::bimap;
//!
//! // Neither domain is a `char`.
//! let digits = bimap! { 1_u8 => "one" };
//! let _ = digits.find(&'1');
//! ```
//!
//! ```compile_fail
//! use cul_bimap::bimap;
//!
//! // The first domain is not a string, so there is no ignore-case lookup on it.
//! let digits = bimap! { 1_u8 => "one" };
//! let _ = digits.find_by_first_ignore_case("ONE");
//! ```
//!
//! ```compile_fail
//! use cul_bimap::BiMap;
//!
//! // Both domains are strings, so an ignore-case key is ambiguous too.
//! let words = BiMap::new(vec![(String::from("one"), "uno")]);
//! let _ = words.find_ignore_case("ONE");
//! ```

use std::borrow::Borrow;

use crate::map::BiMap;
use crate::source::PairSource;

/// Marker selecting a lookup keyed by the first domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViaFirst {}

/// Marker selecting a lookup keyed by the second domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViaSecond {}

/// A borrowed key that can be looked up in a table with domains `F` and `S`.
///
/// Implemented through [`ViaFirst`] when `F: Borrow<Self>` and through
/// [`ViaSecond`] when `S: Borrow<Self>`, the same bounds as
/// [`BiMap::find_by_first`] and [`BiMap::find_by_second`]. A `str` key thus
/// reaches `&'static str`, `String` and `Box<str>` domains alike. When both
/// domains borrow as the key type the call is rejected as ambiguous.
pub trait Resolve<F, S, Via> {
	/// The domain on the other side of the table.
	type Mapped;

	/// Looks `self` up in `map`.
	fn resolve<P>(&self, map: &BiMap<P>) -> Option<Self::Mapped>
	where
		P: PairSource<First = F, Second = S>;
}

impl<Q, F, S> Resolve<F, S, ViaFirst> for Q
where
	Q: PartialEq + ?Sized,
	F: Borrow<Q>,
	S: Clone,
{
	type Mapped = S;

	fn resolve<P>(&self, map: &BiMap<P>) -> Option<S>
	where
		P: PairSource<First = F, Second = S>,
	{
		map.find_by_first::<Q>(self)
	}
}

impl<Q, F, S> Resolve<F, S, ViaSecond> for Q
where
	Q: PartialEq + ?Sized,
	S: Borrow<Q>,
	F: Clone,
{
	type Mapped = F;

	fn resolve<P>(&self, map: &BiMap<P>) -> Option<F>
	where
		P: PairSource<First = F, Second = S>,
	{
		map.find_by_second::<Q>(self)
	}
}

/// Ignore-case lookup of a `str` key in a table with domains `F` and `S`.
///
/// Implemented through [`ViaFirst`] when `F: AsRef<str>` and through
/// [`ViaSecond`] when `S: AsRef<str>`, so literal and owned string domains
/// answer the same queries.
pub trait ResolveIgnoreCase<F, S, Via> {
	/// The domain on the other side of the table.
	type Mapped;

	/// Looks `self` up in `map`, ignoring ASCII letter case.
	fn resolve_ignore_case<P>(&self, map: &BiMap<P>) -> Option<Self::Mapped>
	where
		P: PairSource<First = F, Second = S>;
}

impl<F: AsRef<str>, S: Clone> ResolveIgnoreCase<F, S, ViaFirst> for str {
	type Mapped = S;

	fn resolve_ignore_case<P>(&self, map: &BiMap<P>) -> Option<S>
	where
		P: PairSource<First = F, Second = S>,
	{
		map.find_by_first_ignore_case(self)
	}
}

impl<F: Clone, S: AsRef<str>> ResolveIgnoreCase<F, S, ViaSecond> for str {
	type Mapped = F;

	fn resolve_ignore_case<P>(&self, map: &BiMap<P>) -> Option<F>
	where
		P: PairSource<First = F, Second = S>,
	{
		map.find_by_second_ignore_case(self)
	}
}

#[cfg(test)]
mod tests {
	use crate::{BiMap, bimap};

	#[derive(Debug, Clone, Copy, PartialEq, Eq)]
	enum Method {
		Get,
		Post,
	}

	#[test]
	fn find_follows_the_key_type() {
		let status = bimap! { 200_u16 => "ok", 404 => "not found" };
		assert_eq!(status.find(&404_u16), Some("not found"));
		assert_eq!(status.find("ok"), Some(200));
		assert_eq!(status.find(&500_u16), None);
		assert_eq!(status.find("gone"), None);
	}

	#[test]
	fn find_accepts_keys_shorter_lived_than_the_table() {
		let status = bimap! { 200_u16 => "ok", 404 => "not found" };
		let name = String::from("not found");
		assert_eq!(status.find(name.as_str()), Some(404));
	}

	#[test]
	fn find_ignore_case_picks_the_string_side() {
		let by_name = bimap! { "get" => Method::Get, "post" => Method::Post };
		assert_eq!(by_name.find_ignore_case("POST"), Some(Method::Post));

		let by_method = bimap! { Method::Get => "get", Method::Post => "post" };
		assert_eq!(by_method.find_ignore_case("Get"), Some(Method::Get));
		assert_eq!(by_method.find_ignore_case("put"), None);
	}

	#[test]
	fn owned_string_tables_answer_str_keys() {
		let table = BiMap::new(vec![(String::from("get"), Method::Get), (String::from("post"), Method::Post)]);
		assert_eq!(table.find("get"), Some(Method::Get));
		assert_eq!(table.find(&Method::Post), Some(String::from("post")));
		assert_eq!(table.find_ignore_case("GET"), Some(Method::Get));
		assert_eq!(table.find_ignore_case("Post"), Some(Method::Post));
		assert_eq!(table.find_ignore_case("put"), None);
	}

	#[test]
	fn boxed_string_tables_answer_str_keys() {
		let table = BiMap::new(vec![(Method::Get, Box::<str>::from("get")), (Method::Post, Box::from("post"))]);
		assert_eq!(table.find("post"), Some(Method::Post));
		assert_eq!(table.find_ignore_case("GET"), Some(Method::Get));
		assert_eq!(table.find(&Method::Get).as_deref(), Some("get"));
	}
}
