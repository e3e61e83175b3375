//! Error types for table audits.

use std::fmt;

use thiserror::Error;

/// One side of a pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
	/// The first element of each pair.
	First,
	/// The second element of each pair.
	Second,
}

impl fmt::Display for Side {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(match self {
			Self::First => "first",
			Self::Second => "second",
		})
	}
}

/// A single problem found by an [`Audit`](crate::Audit).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuditIssue {
	/// A value repeats one declared by an earlier pair, so lookups by that
	/// value can never reach the later pair.
	#[error("pair {index} repeats the {side} value {value} of pair {earlier}")]
	Duplicate {
		/// Side on which the value repeats.
		side: Side,
		/// Position of the shadowed pair.
		index: usize,
		/// Position of the pair that wins lookups.
		earlier: usize,
		/// Debug rendering of the repeated value.
		value: String,
	},

	/// A string on an ignore-case side contains uppercase ASCII.
	#[error("pair {index} declares {value:?} on the {side} side, but ignore-case targets must be lowercase ASCII")]
	NotLowercase {
		/// Side holding the string.
		side: Side,
		/// Position of the pair.
		index: usize,
		/// The offending string.
		value: String,
	},
}

/// Returned by [`Audit::finish`](crate::Audit::finish) when any check failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("pair table failed audit with {} issue(s)", .issues.len())]
pub struct AuditError {
	issues: Vec<AuditIssue>,
}

impl AuditError {
	pub(crate) fn new(issues: Vec<AuditIssue>) -> Self {
		Self { issues }
	}

	/// Every issue found, in the order the checks ran.
	pub fn issues(&self) -> &[AuditIssue] {
		&self.issues
	}

	/// Consumes the error and returns its issues.
	pub fn into_issues(self) -> Vec<AuditIssue> {
		self.issues
	}
}
