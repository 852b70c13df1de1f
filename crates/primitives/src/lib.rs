//! Core types for cursor-relative editing: positions, edit batches, and change sets.

/// The editor handle seam that hosts implement.
pub mod editor;
/// Edit failure types.
pub mod error;
/// Async future aliases.
pub mod future;
/// Identifier types for editor entities.
pub mod ids;
/// Line/column positions and ranges.
pub mod position;
/// Rope coordinate conversions.
pub mod rope;
/// Edit batches and the change sets they resolve to.
pub mod transaction;

pub use editor::EditorHandle;
pub use error::EditError;
pub use future::BoxFutureSend;
pub use ids::EditorId;
pub use position::{CharIdx, CharLen, Position, Range};
pub use rope::{char_to_position, line_len_chars, position_to_char};
pub use ropey::{Rope, RopeSlice};
pub use transaction::{ChangeSet, Edit, EditBatch};
