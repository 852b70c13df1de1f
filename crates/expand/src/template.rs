//! Compiled substitution candidates.

use keycycle_primitives::{CharLen, EditBatch, Position, Range};
use smallvec::{SmallVec, smallvec};

/// Marks where the cursor lands inside an authored pattern.
pub const CURSOR_MARKER: &str = "!!";

/// One candidate a key can expand to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Template {
	/// Literal text; the cursor ends up after it.
	Plain {
		/// The inserted text.
		text: String,
	},
	/// Text with the cursor placed between `prefix` and `suffix`.
	Marked {
		/// Text before the cursor.
		prefix: String,
		/// Text after the cursor.
		suffix: String,
	},
}

/// What inserting a template at a cursor produces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Insertion {
	/// Where the text goes.
	pub at: Position,
	/// The literal text.
	pub text: String,
	/// Columns to move the cursor by once the host has placed it after `text`.
	pub cursor_offset: isize,
}

impl Template {
	/// Compiles an authored pattern.
	///
	/// The first [`CURSOR_MARKER`] splits the pattern into prefix and suffix;
	/// later markers stay in the suffix verbatim.
	pub fn parse(pattern: &str) -> Self {
		match pattern.split_once(CURSOR_MARKER) {
			Some((prefix, suffix)) => Self::Marked {
				prefix: prefix.to_owned(),
				suffix: suffix.to_owned(),
			},
			None => Self::Plain {
				text: pattern.to_owned(),
			},
		}
	}

	/// Text to insert at `cursor` and the cursor adjustment that follows it.
	pub fn insertion(&self, cursor: Position) -> Insertion {
		match self {
			Self::Plain { text } => Insertion {
				at: cursor,
				text: text.clone(),
				cursor_offset: 0,
			},
			Self::Marked { prefix, suffix } => Insertion {
				at: cursor,
				text: format!("{prefix}{suffix}"),
				cursor_offset: -(char_len(suffix) as isize),
			},
		}
	}

	/// Ranges that remove this template's text, given the cursor it left behind.
	///
	/// Every range is computed from `cursor` as it is before any of them is
	/// applied.
	pub fn cleanup(&self, cursor: Position) -> SmallVec<[Range; 2]> {
		match self {
			Self::Plain { text } => smallvec![Range::before(cursor, char_len(text))],
			Self::Marked { prefix, suffix } => smallvec![
				Range::after(cursor, char_len(suffix)),
				Range::before(cursor, char_len(prefix)),
			],
		}
	}

	/// Queues the cleanup ranges into `batch`.
	pub fn push_cleanup(&self, cursor: Position, batch: &mut EditBatch) {
		for range in self.cleanup(cursor) {
			batch.delete(range);
		}
	}

	/// Queues the insertion into `batch`, returning the cursor offset to apply
	/// once the edit has settled.
	pub fn push_insertion(&self, cursor: Position, batch: &mut EditBatch) -> isize {
		let Insertion {
			at,
			text,
			cursor_offset,
		} = self.insertion(cursor);
		batch.insert(at, text);
		cursor_offset
	}
}

fn char_len(s: &str) -> CharLen {
	s.chars().count()
}

#[cfg(test)]
mod tests {
	use super::*;

	fn p(column: usize) -> Position {
		Position::new(0, column)
	}

	#[test]
	fn parse_plain() {
		assert_eq!(Template::parse(" == "), Template::Plain { text: " == ".into() });
		assert_eq!(Template::parse(""), Template::Plain { text: String::new() });
		assert_eq!(Template::parse("!"), Template::Plain { text: "!".into() });
	}

	#[test]
	fn parse_marked_splits_on_first_marker() {
		assert_eq!(
			Template::parse("===>!!<==="),
			Template::Marked {
				prefix: "===>".into(),
				suffix: "<===".into(),
			}
		);
		assert_eq!(
			Template::parse("a!!b!!c"),
			Template::Marked {
				prefix: "a".into(),
				suffix: "b!!c".into(),
			}
		);
		assert_eq!(
			Template::parse("!!"),
			Template::Marked {
				prefix: String::new(),
				suffix: String::new(),
			}
		);
	}

	#[test]
	fn plain_insertion_keeps_cursor() {
		let ins = Template::parse("AA").insertion(p(3));
		assert_eq!(ins.at, p(3));
		assert_eq!(ins.text, "AA");
		assert_eq!(ins.cursor_offset, 0);
	}

	#[test]
	fn marked_insertion_walks_back_over_suffix() {
		let ins = Template::parse("$(!!)").insertion(p(0));
		assert_eq!(ins.text, "$()");
		assert_eq!(ins.cursor_offset, -1);
	}

	#[test]
	fn lengths_are_counted_in_characters() {
		let ins = Template::parse("«!!»→").insertion(p(0));
		assert_eq!(ins.cursor_offset, -2);
		assert_eq!(
			Template::parse("→→").cleanup(p(5)).as_slice(),
			[Range::new(p(3), p(5))]
		);
	}

	#[test]
	fn plain_cleanup_removes_text_before_cursor() {
		let ranges = Template::parse("AA").cleanup(Position::new(2, 7));
		assert_eq!(ranges.as_slice(), [Range::new(Position::new(2, 5), Position::new(2, 7))]);
	}

	#[test]
	fn marked_cleanup_removes_both_sides() {
		let ranges = Template::parse("===>!!<===").cleanup(p(4));
		assert_eq!(
			ranges.as_slice(),
			[Range::new(p(4), p(8)), Range::new(p(0), p(4))]
		);
	}

	#[test]
	fn marked_cleanup_with_empty_suffix_still_issues_two_ranges() {
		let ranges = Template::parse("foo!!").cleanup(p(3));
		assert_eq!(ranges.len(), 2);
		assert!(ranges[0].is_empty());
	}

	#[test]
	fn push_helpers_fill_a_batch() {
		let mut batch = EditBatch::new();
		let template = Template::parse("<!!>");
		template.push_cleanup(p(1), &mut batch);
		let offset = template.push_insertion(p(1), &mut batch);
		assert_eq!(offset, -1);
		assert_eq!(batch.deletions(), 2);
		assert_eq!(batch.insertions(), 1);
	}
}
