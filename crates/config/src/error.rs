//! Error types for configuration parsing.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur when parsing configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
	/// Error parsing TOML syntax, or a value of the wrong shape
	/// (for example a pattern that is not a string).
	#[error("TOML parse error: {0}")]
	Toml(#[from] toml::de::Error),

	/// Error reading a configuration file.
	#[error("I/O error reading {path}: {error}")]
	Io {
		/// Path to the file that failed to read.
		path: PathBuf,
		/// The underlying I/O error.
		error: std::io::Error,
	},
}

/// Non-fatal problems found while building a [`Config`](crate::Config).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigWarning {
	/// A key was bound to an empty list and has been dropped.
	#[error("key {key:?} in {context:?} has no patterns and will be ignored")]
	EmptyKey {
		/// Context identifier the key belongs to.
		context: String,
		/// The key string.
		key: String,
	},

	/// A pattern spans several lines. Cursor arithmetic stays on one line, so
	/// cycling away from it only removes its last line.
	#[error("pattern {index} of key {key:?} in {context:?} spans several lines")]
	MultiLinePattern {
		/// Context identifier the key belongs to.
		context: String,
		/// The key string.
		key: String,
		/// Position of the pattern in the key's list.
		index: usize,
	},
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;
