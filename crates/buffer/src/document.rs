//! Text content and the cursor that edits it.

use keycycle_primitives::transaction::Bias;
use keycycle_primitives::{CharIdx, EditBatch, EditError, Position, Rope, char_to_position, position_to_char};

/// Buffer content plus its single cursor.
///
/// The cursor is kept as a char index so it survives edits through
/// [`ChangeSet::map_pos`](keycycle_primitives::ChangeSet::map_pos); hosts see
/// it as a [`Position`].
#[derive(Debug, Clone, Default)]
pub struct Document {
	content: Rope,
	cursor: CharIdx,
	version: u64,
}

impl Document {
	/// Creates a document holding `text` with the cursor at the start.
	pub fn new(text: &str) -> Self {
		Self {
			content: Rope::from(text),
			cursor: 0,
			version: 0,
		}
	}

	/// The text content.
	pub fn content(&self) -> &Rope {
		&self.content
	}

	/// Cursor as a char index.
	pub fn cursor_char(&self) -> CharIdx {
		self.cursor
	}

	/// Cursor as a line/column position.
	pub fn cursor(&self) -> Position {
		char_to_position(self.content.slice(..), self.cursor)
	}

	/// Incremented on every applied batch.
	pub fn version(&self) -> u64 {
		self.version
	}

	/// Moves the cursor, clamping to the text.
	pub fn set_cursor(&mut self, pos: Position) {
		self.cursor = position_to_char(self.content.slice(..), pos);
	}

	/// Applies every edit in `batch` as one change.
	///
	/// Ranges are resolved against the text as it is before the batch. The
	/// cursor follows the change, ending up after text inserted at its spot.
	pub fn apply(&mut self, batch: &EditBatch) -> Result<(), EditError> {
		if batch.is_empty() {
			return Ok(());
		}
		let changes = batch.to_changeset(self.content.slice(..))?;
		changes.apply(&mut self.content);
		self.cursor = changes.map_pos(self.cursor, Bias::Right);
		self.version += 1;
		Ok(())
	}
}

#[cfg(test)]
mod tests {
	use keycycle_primitives::Range;
	use pretty_assertions::assert_eq;

	use super::*;

	fn p(line: usize, column: usize) -> Position {
		Position::new(line, column)
	}

	#[test]
	fn insert_at_cursor_moves_cursor_past_text() {
		let mut doc = Document::new("ab");
		doc.set_cursor(p(0, 1));
		let mut batch = EditBatch::new();
		batch.insert(p(0, 1), "XYZ");
		doc.apply(&batch).unwrap();
		assert_eq!(doc.content().to_string(), "aXYZb");
		assert_eq!(doc.cursor(), p(0, 4));
		assert_eq!(doc.version(), 1);
	}

	#[test]
	fn replace_around_cursor() {
		let mut doc = Document::new("===><===");
		doc.set_cursor(p(0, 4));
		let mut batch = EditBatch::new();
		batch.delete(Range::new(p(0, 4), p(0, 8)));
		batch.delete(Range::new(p(0, 0), p(0, 4)));
		batch.insert(p(0, 4), "A");
		doc.apply(&batch).unwrap();
		assert_eq!(doc.content().to_string(), "A");
		assert_eq!(doc.cursor(), p(0, 1));
	}

	#[test]
	fn overlapping_batch_leaves_text_alone() {
		let mut doc = Document::new("abcdef");
		let mut batch = EditBatch::new();
		batch.delete(Range::new(p(0, 0), p(0, 3)));
		batch.delete(Range::new(p(0, 2), p(0, 4)));
		assert!(matches!(doc.apply(&batch), Err(EditError::Overlapping { .. })));
		assert_eq!(doc.content().to_string(), "abcdef");
		assert_eq!(doc.version(), 0);
	}

	#[test]
	fn empty_batch_is_a_no_op() {
		let mut doc = Document::new("x");
		doc.apply(&EditBatch::new()).unwrap();
		assert_eq!(doc.version(), 0);
	}

	#[test]
	fn cursor_is_clamped() {
		let mut doc = Document::new("ab\nc");
		doc.set_cursor(p(0, 9));
		assert_eq!(doc.cursor(), p(0, 2));
		doc.set_cursor(p(5, 0));
		assert_eq!(doc.cursor(), p(1, 0));
	}
}
