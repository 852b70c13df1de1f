//! Edit batches issued against a host, and their resolution into change sets.
//!
//! An [`EditBatch`] is the scoped unit a host applies atomically: every
//! instruction in it is positioned against the document as it was before the
//! batch, so a deletion never shifts the coordinates of a sibling instruction.

mod changeset;
mod types;

pub use changeset::ChangeSet;
pub use types::{Bias, Change, Insertion, Operation};

use crate::RopeSlice;
use crate::error::EditError;
use crate::position::{Position, Range};
use crate::rope::position_to_char;

/// One instruction in an [`EditBatch`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Edit {
	/// Remove the characters in the range.
	Delete(Range),
	/// Insert text at a position.
	Insert {
		/// Where the text goes.
		at: Position,
		/// The literal text.
		text: String,
	},
}

/// An ordered set of delete/insert instructions applied as one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBatch {
	edits: Vec<Edit>,
}

impl EditBatch {
	/// Creates an empty batch.
	pub fn new() -> Self {
		Self::default()
	}

	/// Queues a deletion.
	pub fn delete(&mut self, range: Range) {
		self.edits.push(Edit::Delete(range));
	}

	/// Queues an insertion.
	pub fn insert(&mut self, at: Position, text: impl Into<String>) {
		self.edits.push(Edit::Insert { at, text: text.into() });
	}

	/// Returns the queued instructions in issue order.
	pub fn edits(&self) -> &[Edit] {
		&self.edits
	}

	/// Number of delete instructions, including zero-width ones.
	pub fn deletions(&self) -> usize {
		self.edits.iter().filter(|e| matches!(e, Edit::Delete(_))).count()
	}

	/// Number of insert instructions.
	pub fn insertions(&self) -> usize {
		self.edits.iter().filter(|e| matches!(e, Edit::Insert { .. })).count()
	}

	/// Returns true if nothing is queued.
	pub fn is_empty(&self) -> bool {
		self.edits.is_empty()
	}

	/// Resolves every instruction against `doc` and orders them by position.
	///
	/// Instructions at the same position keep their issue order. Two
	/// instructions covering the same characters are rejected.
	pub fn resolve(&self, doc: RopeSlice) -> Result<Vec<Change>, EditError> {
		let mut changes: Vec<Change> = self
			.edits
			.iter()
			.map(|edit| match edit {
				Edit::Delete(range) => Change {
					start: position_to_char(doc, range.start),
					end: position_to_char(doc, range.end),
					replacement: None,
				},
				Edit::Insert { at, text } => {
					let at = position_to_char(doc, *at);
					Change {
						start: at,
						end: at,
						replacement: Some(text.clone()),
					}
				}
			})
			.collect();
		changes.sort_by_key(|change| (change.start, change.end));

		for pair in changes.windows(2) {
			let (a, b) = (&pair[0], &pair[1]);
			if a.end > b.start {
				return Err(EditError::Overlapping {
					first: a.start,
					first_end: a.end,
					second: b.start,
					second_end: b.end,
				});
			}
		}
		Ok(changes)
	}

	/// Builds the change set that applies this whole batch to `doc` at once.
	pub fn to_changeset(&self, doc: RopeSlice) -> Result<ChangeSet, EditError> {
		let changes = self.resolve(doc)?;
		let mut cs = ChangeSet::new();
		let mut last = 0;
		for change in changes {
			cs.retain(change.start - last);
			cs.delete(change.end - change.start);
			if let Some(text) = change.replacement {
				cs.insert(text);
			}
			last = change.end;
		}
		cs.retain(doc.len_chars() - last);
		Ok(cs)
	}
}
