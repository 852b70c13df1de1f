//! An in-memory text buffer that implements [`EditorHandle`].
//!
//! A [`Buffer`] owns a rope and one cursor. Expansion batches are applied
//! atomically; selection listeners hear about every cursor change, including
//! the ones an expansion causes, once the document lock is released.

pub mod document;
pub mod navigation;


use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

pub use document::Document;
use keycycle_primitives::{BoxFutureSend, EditBatch, EditError, EditorHandle, EditorId, Position};
pub use navigation::Motion;
use parking_lot::{Mutex, RwLock};
use tracing::trace;

/// Called with the buffer id and its cursor positions after every cursor change.
pub type SelectionListener = Arc<dyn Fn(EditorId, &[Position]) + Send + Sync>;

/// A single-cursor text buffer.
pub struct Buffer {
	id: EditorId,
	document: RwLock<Document>,
	read_only: AtomicBool,
	listeners: Mutex<Vec<SelectionListener>>,
}

impl Default for Buffer {
	fn default() -> Self {
		Self::new()
	}
}

impl Buffer {
	/// Creates an empty buffer.
	pub fn new() -> Self {
		Self::from_text("")
	}

	/// Creates a buffer holding `text` with the cursor at the start.
	pub fn from_text(text: &str) -> Self {
		Self {
			id: EditorId::next(),
			document: RwLock::new(Document::new(text)),
			read_only: AtomicBool::new(false),
			listeners: Mutex::new(Vec::new()),
		}
	}

	/// Executes a closure with read access to the document.
	pub fn with_doc<R>(&self, f: impl FnOnce(&Document) -> R) -> R {
		f(&self.document.read())
	}

	/// The full text.
	pub fn text(&self) -> String {
		self.with_doc(|doc| doc.content().to_string())
	}

	/// Registers a listener for cursor changes.
	pub fn on_selection_change(&self, listener: impl Fn(EditorId, &[Position]) + Send + Sync + 'static) {
		self.listeners.lock().push(Arc::new(listener));
	}

	/// Makes every subsequent edit fail with [`EditError::ReadOnly`].
	pub fn set_read_only(&self, read_only: bool) {
		self.read_only.store(read_only, Ordering::Relaxed);
	}

	/// Returns true if edits are refused.
	pub fn is_read_only(&self) -> bool {
		self.read_only.load(Ordering::Relaxed)
	}

	/// Moves the cursor by one motion.
	pub fn move_cursor(&self, motion: Motion) {
		let pos = {
			let mut doc = self.document.write();
			let target = motion.target(&doc);
			doc.set_cursor(target);
			doc.cursor()
		};
		self.notify(pos);
	}

	/// Inserts `text` at the cursor as ordinary typing.
	pub fn type_text(&self, text: &str) -> Result<(), EditError> {
		let mut batch = EditBatch::new();
		batch.insert(self.cursor(), text);
		self.commit(&batch)
	}

	fn commit(&self, batch: &EditBatch) -> Result<(), EditError> {
		if self.is_read_only() {
			return Err(EditError::ReadOnly);
		}
		let (pos, version) = {
			let mut doc = self.document.write();
			doc.apply(batch)?;
			(doc.cursor(), doc.version())
		};
		trace!(buffer = %self.id, version, edits = batch.edits().len(), "batch applied");
		self.notify(pos);
		Ok(())
	}

	fn notify(&self, pos: Position) {
		let listeners = self.listeners.lock().clone();
		for listener in listeners {
			listener(self.id, &[pos]);
		}
	}
}

impl EditorHandle for Buffer {
	fn id(&self) -> EditorId {
		self.id
	}

	fn cursor(&self) -> Position {
		self.with_doc(Document::cursor)
	}

	fn apply(&self, batch: EditBatch) -> BoxFutureSend<'_, Result<(), EditError>> {
		Box::pin(async move {
			tokio::task::yield_now().await;
			self.commit(&batch)
		})
	}

	fn set_cursor(&self, pos: Position) {
		let pos = {
			let mut doc = self.document.write();
			doc.set_cursor(pos);
			doc.cursor()
		};
		self.notify(pos);
	}
}
