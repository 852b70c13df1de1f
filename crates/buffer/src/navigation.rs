//! Cursor motions.

use keycycle_primitives::{Position, line_len_chars};

use crate::document::Document;

/// A single-step cursor motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
	/// One character back, wrapping to the end of the previous line.
	Left,
	/// One character forward, wrapping to the start of the next line.
	Right,
	/// One line up, clamping the column.
	Up,
	/// One line down, clamping the column.
	Down,
	/// Start of the current line.
	LineStart,
	/// End of the current line.
	LineEnd,
}

impl Motion {
	/// Where the cursor ends up after this motion in `doc`.
	pub fn target(self, doc: &Document) -> Position {
		let text = doc.content().slice(..);
		let Position { line, column } = doc.cursor();
		let last_line = text.len_lines().saturating_sub(1);
		match self {
			Self::Left if column > 0 => Position::new(line, column - 1),
			Self::Left if line > 0 => Position::new(line - 1, line_len_chars(text, line - 1)),
			Self::Left => Position::new(0, 0),
			Self::Right if column < line_len_chars(text, line) => Position::new(line, column + 1),
			Self::Right if line < last_line => Position::new(line + 1, 0),
			Self::Right => Position::new(line, column),
			Self::Up => {
				let line = line.saturating_sub(1);
				Position::new(line, column.min(line_len_chars(text, line)))
			}
			Self::Down => {
				let line = (line + 1).min(last_line);
				Position::new(line, column.min(line_len_chars(text, line)))
			}
			Self::LineStart => Position::new(line, 0),
			Self::LineEnd => Position::new(line, line_len_chars(text, line)),
		}
	}
}
