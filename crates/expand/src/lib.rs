//! Cyclic key expansion.
//!
//! Pressing a bound key inserts its first template; pressing it again at the
//! same spot replaces that insertion with the next template, wrapping around
//! after the last one. Typing another key, switching editors, or moving the
//! cursor ends the cycle.
//!
//! ```text
//! "="  ->  " = "  ->  " == "  ->  "="  ->  " = "  ...
//! ```

pub mod controller;
pub mod error;
pub mod host;
pub mod keymap;
pub mod state;
pub mod template;

pub use controller::{ExpansionController, Outcome, ReloadOutcome};
pub use error::{ExpandError, Result};
pub use host::{ContextResolver, DefaultInput};
pub use keymap::{Candidates, KeyMap, LanguageMap};
pub use state::{ActiveCycle, CycleState};
pub use template::{CURSOR_MARKER, Insertion, Template};
