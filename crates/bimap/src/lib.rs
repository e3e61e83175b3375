//! Fixed bidirectional association tables.
//!
//! A [`BiMap`] relates two domains, typically an enumerated tag and its
//! string name, and answers lookups in either direction. The table is built
//! once from an ordered description of pairs and never changes afterward.
//!
//! The description is a [`PairSource`]: either a closure that declares pairs
//! through [`Cases`], or a plain list of tuples. Every lookup replays the
//! source with a [`Switch`] strategy that keeps the first matching pair, so
//! no index or hash table is ever built.
//!
//! ```
//! use cul_bimap::BiMap;
//!
//! #[derive(Debug, Clone, Copy, PartialEq, Eq)]
//! enum Level {
//! 	Info,
//! 	Warn,
//! }
//!
//! let levels = BiMap::from_fn(|cases| {
//! 	cases.case(Level::Info, "info").case(Level::Warn, "warn");
//! });
//!
//! assert_eq!(levels.find_by_first(&Level::Warn), Some("warn"));
//! assert_eq!(levels.find_by_second("info"), Some(Level::Info));
//! assert_eq!(levels.find_ignore_case("WARN"), Some(Level::Warn));
//! ```

/// ASCII comparison helpers for ignore-case lookups.
pub mod ascii;
/// Table audit for invariants lookups do not enforce.
pub mod audit;
/// Type-driven direction selection for `find` and `find_ignore_case`.
pub mod dispatch;
/// Audit error types.
pub mod error;
/// The table facade.
pub mod map;
/// Pair sources: closure builders and materialized lists.
pub mod source;
/// Lookup strategies driven by a pair source.
pub mod strategy;
/// The visitor protocol between pair sources and strategies.
pub mod switch;

pub use audit::Audit;
pub use dispatch::{Resolve, ResolveIgnoreCase, ViaFirst, ViaSecond};
pub use error::{AuditError, AuditIssue, Side};
pub use map::BiMap;
pub use source::{FnPairs, PairSource};
pub use strategy::{ByFirst, ByFirstIgnoreCase, BySecond, BySecondIgnoreCase};
pub use switch::{Cases, Switch};

/// Builds an array-backed [`BiMap`] from `first => second` entries.
///
/// The expansion is a `const` expression, so the result can initialize a
/// `static` table.
///
/// ```
/// use cul_bimap::{BiMap, bimap};
///
/// static STATUS: BiMap<[(u16, &str); 2]> = bimap! {
/// 	200 => "ok",
/// 	404 => "not found",
/// };
///
/// assert_eq!(STATUS.find(&404_u16), Some("not found"));
/// assert_eq!(STATUS.find("ok"), Some(200));
/// ```
#[macro_export]
macro_rules! bimap {
	($($first:expr => $second:expr),* $(,)?) => {
		$crate::BiMap::new([$(($first, $second)),*])
	};
}
