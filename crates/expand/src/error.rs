use keycycle_config::ConfigError;
use keycycle_primitives::EditError;
use thiserror::Error;

/// Failures surfaced by the expansion controller.
#[derive(Debug, Error)]
pub enum ExpandError {
	/// The editor refused the expansion edit.
	#[error("expansion edit failed: {0}")]
	Edit(#[from] EditError),

	/// The configuration source failed; the previous mapping is still active.
	#[error("reload failed: {0}")]
	Config(#[from] ConfigError),
}

/// Result type for expansion operations.
pub type Result<T> = std::result::Result<T, ExpandError>;
