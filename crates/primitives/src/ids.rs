use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of an editor instance.
///
/// Two handles refer to the same editor iff their ids are equal; the text they
/// hold never takes part in the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EditorId(pub u64);

impl EditorId {
	/// Allocates a process-unique id.
	pub fn next() -> Self {
		static NEXT: AtomicU64 = AtomicU64::new(1);
		Self(NEXT.fetch_add(1, Ordering::Relaxed))
	}
}

impl fmt::Display for EditorId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "editor#{}", self.0)
	}
}
