use crate::error::EditError;
use crate::future::BoxFutureSend;
use crate::ids::EditorId;
use crate::position::Position;
use crate::transaction::EditBatch;

/// What a host editor exposes to cursor-relative expansion.
///
/// Methods take `&self`; implementations keep their document behind interior
/// locking so that selection-change notifications can be delivered while an
/// edit is still being applied.
pub trait EditorHandle: Send + Sync {
	/// Identity used for "same editor" comparisons.
	fn id(&self) -> EditorId;

	/// Current primary cursor position.
	fn cursor(&self) -> Position;

	/// Applies every instruction in `batch` as one indivisible edit.
	///
	/// Positions in the batch refer to the document before the edit. The
	/// returned future completes once the host has settled the edit and
	/// placed the cursor where it naturally lands after the inserted text.
	fn apply(&self, batch: EditBatch) -> BoxFutureSend<'_, Result<(), EditError>>;

	/// Moves the primary cursor, collapsing any selection.
	fn set_cursor(&self, pos: Position);
}
