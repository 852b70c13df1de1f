//! A buffer wired to an expansion controller.

use std::sync::Arc;

use anyhow::Context;
use keycycle_buffer::Buffer;
use keycycle_config::ConfigSource;
use keycycle_expand::{ExpandError, ExpansionController, ReloadOutcome};
use tracing::warn;

use crate::script::Step;

/// Runs script steps against one buffer.
pub struct Session {
	buffer: Arc<Buffer>,
	controller: Arc<ExpansionController>,
}

impl Session {
	/// Creates a session typing in `language`, reloading from `source`.
	///
	/// Nothing is loaded until [`reload`](Self::reload) is called.
	pub fn new(language: Option<String>, source: Option<impl ConfigSource + 'static>) -> Self {
		let buffer = Arc::new(Buffer::new());

		let typing = Arc::downgrade(&buffer);
		let mut controller = ExpansionController::new(
			move || language.clone(),
			move |text: &str| {
				if let Some(buffer) = typing.upgrade()
					&& let Err(error) = buffer.type_text(text)
				{
					warn!(%error, "typing failed");
				}
			},
		);
		if let Some(source) = source {
			controller = controller.with_source(source);
		}
		let controller = Arc::new(controller);

		let listener = Arc::downgrade(&controller);
		buffer.on_selection_change(move |editor, positions| {
			if let Some(controller) = listener.upgrade() {
				controller.on_cursor_moved(editor, positions);
			}
		});

		Self { buffer, controller }
	}

	/// The edited buffer.
	pub fn buffer(&self) -> &Buffer {
		&self.buffer
	}

	/// Reloads definitions from the configured source.
	pub fn reload(&self) -> Result<ReloadOutcome, ExpandError> {
		self.controller.reload()
	}

	/// Executes one step.
	///
	/// A failed reload is logged and leaves the previous definitions active.
	pub async fn run(&self, step: &Step) -> anyhow::Result<()> {
		match step {
			Step::Key(key) => {
				self.controller
					.process(key, self.buffer.as_ref())
					.await
					.with_context(|| format!("failed to expand {key:?}"))?;
			}
			Step::Move(motion) => self.buffer.move_cursor(*motion),
			Step::Cancel => self.controller.cancel(),
			Step::Reload => {
				if let Err(error) = self.reload() {
					warn!(%error, "reload failed, keeping current definitions");
				}
			}
			Step::Newline => self.buffer.type_text("\n").context("failed to type newline")?,
		}
		Ok(())
	}

	/// The buffer text followed by a cursor line.
	pub fn render(&self) -> String {
		let text = self.buffer.text();
		let cursor = self.buffer.with_doc(|doc| doc.cursor());
		let newline = if text.ends_with('\n') || text.is_empty() { "" } else { "\n" };
		format!("{text}{newline}-- cursor {}:{}\n", cursor.line + 1, cursor.column + 1)
	}
}
