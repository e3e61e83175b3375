//! Runtime checks for table invariants that lookups rely on but never verify.
//!
//! Duplicate values are legal but shadow later pairs, and ignore-case sides
//! must hold lowercase ASCII. An [`Audit`] runs the requested checks by
//! replaying the table, so it needs no extra bounds beyond what each check
//! compares.
//!
//! ```
//! use cul_bimap::{AuditIssue, Side, bimap};
//!
//! let table = bimap! { 1_u8 => "one", 2 => "Two", 1 => "uno" };
//! let err = table.audit().duplicates().lowercase_second().finish().unwrap_err();
//!
//! assert!(matches!(
//! 	err.issues(),
//! 	[
//! 		AuditIssue::Duplicate { side: Side::First, index: 2, earlier: 0, .. },
//! 		AuditIssue::NotLowercase { side: Side::Second, index: 1, .. },
//! 	]
//! ));
//! ```

use std::fmt::Debug;

use crate::ascii::contains_uppercase_ascii;
use crate::error::{AuditError, AuditIssue, Side};
use crate::map::BiMap;
use crate::source::PairSource;

/// Collects [`AuditIssue`]s for a table. Created by [`BiMap::audit`].
#[must_use = "an audit reports nothing until `finish` is called"]
pub struct Audit<'m, P> {
	map: &'m BiMap<P>,
	issues: Vec<AuditIssue>,
}

impl<'m, P: PairSource> Audit<'m, P> {
	pub(crate) fn new(map: &'m BiMap<P>) -> Self {
		tracing::trace!(pairs = map.len(), "bimap.audit.start");
		Self {
			map,
			issues: Vec::new(),
		}
	}

	/// Reports every pair whose first or second value repeats an earlier pair.
	pub fn duplicates(mut self) -> Self
	where
		P::First: PartialEq + Debug,
		P::Second: PartialEq + Debug,
	{
		let map = self.map;
		let issues = &mut self.issues;
		let mut index = 0;

		map.for_each_pair(|first, second| {
			let mut earlier_first = None;
			let mut earlier_second = None;
			let mut position = 0;
			map.for_each_pair(|other_first, other_second| {
				if position < index {
					if earlier_first.is_none() && other_first == first {
						earlier_first = Some(position);
					}
					if earlier_second.is_none() && other_second == second {
						earlier_second = Some(position);
					}
				}
				position += 1;
			});

			if let Some(earlier) = earlier_first {
				push(issues, AuditIssue::Duplicate {
					side: Side::First,
					index,
					earlier,
					value: format!("{first:?}"),
				});
			}
			if let Some(earlier) = earlier_second {
				push(issues, AuditIssue::Duplicate {
					side: Side::Second,
					index,
					earlier,
					value: format!("{second:?}"),
				});
			}
			index += 1;
		});

		self
	}

	/// Reports first values containing uppercase ASCII.
	pub fn lowercase_first(mut self) -> Self
	where
		P::First: AsRef<str>,
	{
		let issues = &mut self.issues;
		let mut index = 0;
		self.map.for_each_pair(|first, _| {
			check_lowercase(issues, Side::First, index, first.as_ref());
			index += 1;
		});
		self
	}

	/// Reports second values containing uppercase ASCII.
	pub fn lowercase_second(mut self) -> Self
	where
		P::Second: AsRef<str>,
	{
		let issues = &mut self.issues;
		let mut index = 0;
		self.map.for_each_pair(|_, second| {
			check_lowercase(issues, Side::Second, index, second.as_ref());
			index += 1;
		});
		self
	}

	/// Issues found so far.
	pub fn issues(&self) -> &[AuditIssue] {
		&self.issues
	}

	/// Ends the audit, failing if any check reported an issue.
	pub fn finish(self) -> Result<(), AuditError> {
		tracing::debug!(issues = self.issues.len(), "bimap.audit.finish");
		if self.issues.is_empty() {
			Ok(())
		} else {
			Err(AuditError::new(self.issues))
		}
	}
}

fn check_lowercase(issues: &mut Vec<AuditIssue>, side: Side, index: usize, value: &str) {
	if contains_uppercase_ascii(value) {
		push(issues, AuditIssue::NotLowercase {
			side,
			index,
			value: value.to_owned(),
		});
	}
}

fn push(issues: &mut Vec<AuditIssue>, issue: AuditIssue) {
	match &issue {
		AuditIssue::Duplicate { side, index, earlier, .. } => {
			tracing::warn!(%side, index, earlier, %issue, "bimap.audit.issue");
		}
		AuditIssue::NotLowercase { side, index, .. } => {
			tracing::warn!(%side, index, %issue, "bimap.audit.issue");
		}
	}
	issues.push(issue);
}
