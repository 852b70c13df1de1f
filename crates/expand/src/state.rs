//! The single in-progress expansion cycle.

use std::sync::Arc;

use keycycle_primitives::{EditorId, Position};

use crate::template::Template;

/// What the current cycle last did.
#[derive(Debug, Clone)]
pub struct ActiveCycle {
	/// Key being cycled.
	pub key: String,
	/// Template inserted by the last press.
	pub template: Arc<Template>,
	/// Editor the cycle runs in.
	pub editor: EditorId,
}

/// Cycle bookkeeping owned by the controller.
///
/// Key, template, and editor live together in [`ActiveCycle`], so either all
/// of them are recorded or none is. `last_cursor` is `None` while an edit is
/// in flight and while idle; otherwise the cycle only stays valid as long as
/// the cursor sits exactly there.
#[derive(Debug, Clone, Default)]
pub struct CycleState {
	active: Option<ActiveCycle>,
	repeat: usize,
	last_cursor: Option<Position>,
}

impl CycleState {
	/// Returns true if no cycle is in progress.
	pub fn is_idle(&self) -> bool {
		self.active.is_none()
	}

	/// The cycle in progress, if any.
	pub fn active(&self) -> Option<&ActiveCycle> {
		self.active.as_ref()
	}

	/// Consecutive presses of the active key, minus one, after wrapping.
	pub fn repeat_count(&self) -> usize {
		self.repeat
	}

	/// Where the cursor settled after the last completed expansion.
	pub fn last_cursor(&self) -> Option<Position> {
		self.last_cursor
	}

	/// Returns to idle.
	pub(crate) fn reset(&mut self) {
		*self = Self::default();
	}

	/// Whether pressing `key` in `editor` continues the current cycle.
	pub(crate) fn continues(&self, key: &str, editor: EditorId) -> bool {
		self.active
			.as_ref()
			.is_some_and(|active| active.key == key && active.editor == editor)
	}

	/// Moves to the next candidate index out of `len`.
	pub(crate) fn advance(&mut self, continuing: bool, len: usize) -> usize {
		self.repeat = if continuing { self.repeat + 1 } else { 0 };
		if self.repeat >= len {
			self.repeat = 0;
		}
		self.repeat
	}

	/// Records the press being applied and suspends drift detection until the
	/// edit settles.
	pub(crate) fn begin(&mut self, active: ActiveCycle) {
		self.active = Some(active);
		self.last_cursor = None;
	}

	/// Re-arms drift detection at `pos`. Does nothing while idle.
	pub(crate) fn settle(&mut self, editor: EditorId, pos: Position) {
		if self.active.as_ref().is_some_and(|active| active.editor == editor) {
			self.last_cursor = Some(pos);
		}
	}

	/// Whether a reported cursor at `pos` invalidates the cycle.
	pub(crate) fn drifted(&self, pos: Position) -> bool {
		self.last_cursor.is_some_and(|last| last != pos)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn active(key: &str, editor: EditorId) -> ActiveCycle {
		ActiveCycle {
			key: key.into(),
			template: Arc::new(Template::parse(key)),
			editor,
		}
	}

	#[test]
	fn idle_never_continues() {
		let state = CycleState::default();
		assert!(state.is_idle());
		assert!(!state.continues("A", EditorId(1)));
	}

	#[test]
	fn continues_only_same_key_and_editor() {
		let mut state = CycleState::default();
		state.begin(active("A", EditorId(1)));
		assert!(state.continues("A", EditorId(1)));
		assert!(!state.continues("B", EditorId(1)));
		assert!(!state.continues("A", EditorId(2)));
	}

	#[test]
	fn advance_wraps() {
		let mut state = CycleState::default();
		assert_eq!(state.advance(false, 3), 0);
		assert_eq!(state.advance(true, 3), 1);
		assert_eq!(state.advance(true, 3), 2);
		assert_eq!(state.advance(true, 3), 0);
		assert_eq!(state.advance(true, 3), 1);
		assert_eq!(state.advance(false, 3), 0);
	}

	#[test]
	fn advance_wraps_when_candidates_shrink() {
		let mut state = CycleState::default();
		state.advance(false, 5);
		state.advance(true, 5);
		state.advance(true, 5);
		assert_eq!(state.advance(true, 2), 0);
	}

	#[test]
	fn drift_window() {
		let mut state = CycleState::default();
		assert!(!state.drifted(Position::new(0, 3)));

		state.begin(active("A", EditorId(1)));
		assert!(!state.drifted(Position::new(0, 3)));

		state.settle(EditorId(1), Position::new(0, 1));
		assert!(!state.drifted(Position::new(0, 1)));
		assert!(state.drifted(Position::new(0, 3)));
		assert!(state.drifted(Position::new(1, 1)));
	}

	#[test]
	fn settle_ignored_when_idle_or_other_editor() {
		let mut state = CycleState::default();
		state.settle(EditorId(1), Position::new(0, 1));
		assert_eq!(state.last_cursor(), None);

		state.begin(active("A", EditorId(1)));
		state.settle(EditorId(2), Position::new(0, 1));
		assert_eq!(state.last_cursor(), None);
	}

	#[test]
	fn reset_clears_everything() {
		let mut state = CycleState::default();
		state.begin(active("A", EditorId(1)));
		state.advance(true, 3);
		state.settle(EditorId(1), Position::new(0, 1));
		state.reset();
		assert!(state.is_idle());
		assert_eq!(state.repeat_count(), 0);
		assert_eq!(state.last_cursor(), None);
	}
}
