//! The expansion state machine.
//!
//! [`ExpansionController::process`] is the only operation that edits. Each call
//! either forwards the key to ordinary typing (a miss) or issues one edit
//! batch that removes the previous candidate and inserts the next one, then
//! fixes the cursor up once the editor reports the edit as settled.
//!
//! Drift detection is suspended from the moment a batch is issued until the
//! cursor fixup has run, so the editor's own cursor movement never cancels
//! the cycle that caused it.


use std::sync::Arc;

use arc_swap::ArcSwap;
use keycycle_config::{Config, ConfigSource};
use keycycle_primitives::{EditBatch, EditorHandle, EditorId, Position};
use parking_lot::Mutex;
use tracing::{debug, trace, warn};

use crate::error::Result;
use crate::host::{ContextResolver, DefaultInput};
use crate::keymap::{Candidates, LanguageMap};
use crate::state::{ActiveCycle, CycleState};

/// Result of a [`ExpansionController::process`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
	/// No template applied; the key went to ordinary typing.
	Forwarded,
	/// A candidate was inserted.
	Expanded {
		/// Index of the inserted candidate.
		index: usize,
		/// Whether the previous candidate was replaced.
		continued: bool,
	},
}

/// Result of a reload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReloadOutcome {
	/// Nothing to load; the previous mapping stays.
	Unchanged,
	/// The mapping was replaced.
	Replaced {
		/// Contexts in the new mapping.
		contexts: usize,
	},
}

/// Owns the key mapping and the one in-progress expansion cycle.
pub struct ExpansionController {
	languages: ArcSwap<LanguageMap>,
	state: Mutex<CycleState>,
	resolver: Box<dyn ContextResolver>,
	input: Box<dyn DefaultInput>,
	source: Option<Box<dyn ConfigSource>>,
}

impl ExpansionController {
	/// Creates a controller with an empty mapping.
	pub fn new(resolver: impl ContextResolver + 'static, input: impl DefaultInput + 'static) -> Self {
		Self {
			languages: ArcSwap::from_pointee(LanguageMap::default()),
			state: Mutex::new(CycleState::default()),
			resolver: Box::new(resolver),
			input: Box::new(input),
			source: None,
		}
	}

	/// Sets where [`reload`](Self::reload) fetches configuration from.
	pub fn with_source(mut self, source: impl ConfigSource + 'static) -> Self {
		self.source = Some(Box::new(source));
		self
	}

	/// Loads `config` as the initial mapping.
	pub fn with_config(self, config: &Config) -> Self {
		self.reload_from(Some(config));
		self
	}

	/// The mapping currently in effect.
	pub fn languages(&self) -> Arc<LanguageMap> {
		self.languages.load_full()
	}

	/// A copy of the cycle bookkeeping.
	pub fn state(&self) -> CycleState {
		self.state.lock().clone()
	}

	/// Ends any cycle in progress. Idempotent.
	pub fn cancel(&self) {
		let mut state = self.state.lock();
		if !state.is_idle() {
			trace!("cycle cancelled");
		}
		state.reset();
	}

	/// Fetches configuration from the source and swaps the mapping in.
	///
	/// The new mapping is built completely before it replaces the old one, so
	/// a failing source leaves the previous mapping in effect. The cycle state
	/// is not touched.
	pub fn reload(&self) -> Result<ReloadOutcome> {
		let Some(source) = &self.source else {
			return Ok(ReloadOutcome::Unchanged);
		};
		let config = source.fetch()?;
		Ok(self.reload_from(config.as_ref()))
	}

	/// Replaces the mapping with one built from `config`.
	///
	/// `None` or an empty config keeps the current mapping.
	pub fn reload_from(&self, config: Option<&Config>) -> ReloadOutcome {
		let Some(config) = config.filter(|config| !config.is_empty()) else {
			debug!("no configuration to load, keeping current definitions");
			return ReloadOutcome::Unchanged;
		};
		for warning in &config.warnings {
			warn!(%warning, "configuration warning");
		}
		let map = LanguageMap::from_config(config);
		let contexts = map.len();
		self.languages.store(Arc::new(map));
		debug!(contexts, "definitions reloaded");
		ReloadOutcome::Replaced { contexts }
	}

	/// Handles a selection change reported by the host.
	///
	/// Only the primary position is inspected. A cursor that left the spot the
	/// last expansion settled on ends the cycle; reports arriving while an
	/// edit is in flight are ignored.
	pub fn on_cursor_moved(&self, editor: EditorId, positions: &[Position]) {
		let Some(&primary) = positions.first() else {
			return;
		};
		let mut state = self.state.lock();
		if state.drifted(primary) {
			trace!(%editor, line = primary.line, column = primary.column, "cursor drifted, cancelling cycle");
			state.reset();
		}
	}

	/// Handles one press of `key` in `editor`.
	///
	/// Dispatch is expected to be serialized: the returned future should run
	/// to completion before the next key is processed.
	pub async fn process<E>(&self, key: &str, editor: &E) -> Result<Outcome>
	where
		E: EditorHandle + ?Sized,
	{
		let Some(defs) = self.lookup(key) else {
			trace!(key, "no templates bound, forwarding");
			self.cancel();
			self.input.type_text(key);
			return Ok(Outcome::Forwarded);
		};

		let editor_id = editor.id();
		let cursor = editor.cursor();
		let (batch, cursor_offset, index, continued) = {
			let mut state = self.state.lock();
			let continued = state.continues(key, editor_id);
			let index = state.advance(continued, defs.len());
			let def = Arc::clone(&defs[index]);

			let mut batch = EditBatch::new();
			if continued && let Some(previous) = state.active() {
				previous.template.push_cleanup(cursor, &mut batch);
			}
			let cursor_offset = def.push_insertion(cursor, &mut batch);
			state.begin(ActiveCycle {
				key: key.to_owned(),
				template: def,
				editor: editor_id,
			});
			(batch, cursor_offset, index, continued)
		};

		debug!(
			key,
			index,
			continued,
			editor = %editor_id,
			deletions = batch.deletions(),
			"expanding"
		);

		if let Err(error) = editor.apply(batch).await {
			warn!(key, editor = %editor_id, %error, "expansion edit rejected");
			self.cancel();
			return Err(error.into());
		}

		let mut settled = editor.cursor();
		if cursor_offset != 0 {
			editor.set_cursor(settled.offset(cursor_offset));
			settled = editor.cursor();
		}
		self.state.lock().settle(editor_id, settled);
		trace!(line = settled.line, column = settled.column, "cursor settled");

		Ok(Outcome::Expanded { index, continued })
	}

	fn lookup(&self, key: &str) -> Option<Candidates> {
		let context = self.resolver.context_id()?;
		self.languages.load().lookup(&context, key).cloned()
	}
}
