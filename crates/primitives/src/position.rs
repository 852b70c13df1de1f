/// A position in the text, measured in characters (not bytes).
pub type CharIdx = usize;

/// A length or count in the text, measured in characters (not bytes).
///
/// This is distinct from CharIdx to avoid accidentally passing an index
/// where a length is expected or vice versa.
pub type CharLen = usize;

/// A cursor location as a host reports it: zero-based line and column.
///
/// Columns count characters on the line, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
	/// Zero-based line index.
	pub line: usize,
	/// Zero-based character column within the line.
	pub column: CharIdx,
}

impl Position {
	/// Creates a position at `line`, `column`.
	pub const fn new(line: usize, column: CharIdx) -> Self {
		Self { line, column }
	}

	/// Returns the position `delta` columns away on the same line.
	///
	/// Saturates at column zero; lines are never crossed.
	#[inline]
	pub fn offset(self, delta: isize) -> Self {
		let column = if delta < 0 {
			self.column.saturating_sub(delta.unsigned_abs())
		} else {
			self.column.saturating_add(delta.unsigned_abs())
		};
		Self { line: self.line, column }
	}
}

/// A half-open span `[start, end)` between two positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Range {
	/// Inclusive start.
	pub start: Position,
	/// Exclusive end.
	pub end: Position,
}

impl Range {
	/// Creates a range, ordering the endpoints so that `start <= end`.
	pub fn new(a: Position, b: Position) -> Self {
		if a <= b {
			Self { start: a, end: b }
		} else {
			Self { start: b, end: a }
		}
	}

	/// Creates a zero-width range at `pos`.
	pub fn point(pos: Position) -> Self {
		Self { start: pos, end: pos }
	}

	/// The `len` characters immediately before `cursor` on its line.
	pub fn before(cursor: Position, len: CharLen) -> Self {
		Self::new(cursor.offset(-(len as isize)), cursor)
	}

	/// The `len` characters immediately after `cursor` on its line.
	pub fn after(cursor: Position, len: CharLen) -> Self {
		Self::new(cursor, cursor.offset(len as isize))
	}

	/// Returns true if start equals end.
	#[inline]
	pub fn is_empty(&self) -> bool {
		self.start == self.end
	}
}
