use thiserror::Error;

use crate::position::CharIdx;

/// Reasons a host refuses an edit batch.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EditError {
	/// Two edits in one batch touch the same characters.
	#[error("overlapping edits at {first}..{first_end} and {second}..{second_end}")]
	Overlapping {
		/// Start of the earlier edit.
		first: CharIdx,
		/// End of the earlier edit.
		first_end: CharIdx,
		/// Start of the later edit.
		second: CharIdx,
		/// End of the later edit.
		second_end: CharIdx,
	},

	/// The editor does not accept modifications.
	#[error("editor is read-only")]
	ReadOnly,

	/// The host rejected the batch for its own reasons.
	#[error("edit rejected: {0}")]
	Rejected(String),
}
