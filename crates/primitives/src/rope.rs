//! Conversions between host line/column positions and rope character indices.

use ropey::RopeSlice;

use crate::position::{CharIdx, CharLen, Position};

/// Returns the character length of `line`, excluding its line ending.
///
/// Lines past the end of the text have length zero.
pub fn line_len_chars(text: RopeSlice, line: usize) -> CharLen {
	if line >= text.len_lines() {
		return 0;
	}
	let slice = text.line(line);
	let mut len = slice.len_chars();
	if len > 0 && slice.char(len - 1) == '\n' {
		len -= 1;
		if len > 0 && slice.char(len - 1) == '\r' {
			len -= 1;
		}
	}
	len
}

/// Resolves `pos` to a character index.
///
/// The line is clamped to the last line and the column to the line's length,
/// the way hosts validate positions before editing.
pub fn position_to_char(text: RopeSlice, pos: Position) -> CharIdx {
	let last_line = text.len_lines().saturating_sub(1);
	let line = pos.line.min(last_line);
	let column = pos.column.min(line_len_chars(text, line));
	text.line_to_char(line) + column
}

/// Converts a character index back into a line/column position.
pub fn char_to_position(text: RopeSlice, idx: CharIdx) -> Position {
	let idx = idx.min(text.len_chars());
	let line = text.char_to_line(idx);
	Position::new(line, idx - text.line_to_char(line))
}

#[cfg(test)]
mod tests {
	use ropey::Rope;

	use super::*;

	#[test]
	fn line_len_excludes_newline() {
		let text = Rope::from("hello\nwor\r\n\n");
		assert_eq!(line_len_chars(text.slice(..), 0), 5);
		assert_eq!(line_len_chars(text.slice(..), 1), 3);
		assert_eq!(line_len_chars(text.slice(..), 2), 0);
		assert_eq!(line_len_chars(text.slice(..), 3), 0);
		assert_eq!(line_len_chars(text.slice(..), 9), 0);
	}

	#[test]
	fn position_round_trips_inside_text() {
		let text = Rope::from("ab\ncde\nf");
		let slice = text.slice(..);
		for idx in 0..=text.len_chars() {
			let pos = char_to_position(slice, idx);
			assert_eq!(position_to_char(slice, pos), idx);
		}
	}

	#[test]
	fn position_clamps_column_and_line() {
		let text = Rope::from("ab\ncde");
		let slice = text.slice(..);
		assert_eq!(position_to_char(slice, Position::new(0, 10)), 2);
		assert_eq!(position_to_char(slice, Position::new(7, 1)), 4);
	}

	#[test]
	fn empty_text() {
		let text = Rope::from("");
		let slice = text.slice(..);
		assert_eq!(position_to_char(slice, Position::new(0, 3)), 0);
		assert_eq!(char_to_position(slice, 0), Position::new(0, 0));
	}
}
