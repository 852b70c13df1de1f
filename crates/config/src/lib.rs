//! Configuration system for keycycle.
//!
//! Definitions are written in TOML, one table per context identifier, each
//! mapping a key to the ordered list of patterns it cycles through:
//!
//! ```toml
//! [definitions.rust]
//! "=" = [" = ", " == ", "="]
//! "-" = ["-", " -> ", "->"]
//!
//! [definitions.markdown]
//! "*" = ["*", "**!!**"]
//! ```
//!
//! A pattern containing `!!` places the cursor where the marker was.
//!
//! # Configuration Files
//!
//! keycycle looks for `$XDG_CONFIG_HOME/keycycle/config.toml` (or
//! `~/.config/keycycle/config.toml`) unless a path is given explicitly.
//!
//! # Warnings
//!
//! Keys bound to an empty list are dropped and patterns spanning several lines
//! are flagged. Both are collected in [`Config::warnings`] rather than failing
//! the parse.

pub mod error;
pub mod source;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

pub use error::{ConfigError, ConfigWarning, Result};
pub use source::{ConfigSource, FileSource};

/// Patterns per key, in authored order.
pub type KeyDefinitions = BTreeMap<String, Vec<String>>;

/// Key definitions per context identifier.
pub type Definitions = BTreeMap<String, KeyDefinitions>;

/// On-disk shape of the configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawConfig {
	definitions: Option<Definitions>,
}

/// Parsed configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
	/// Key definitions per context. Every listed key has at least one pattern.
	pub definitions: Definitions,
	/// Non-fatal warnings encountered while building the definitions.
	pub warnings: Vec<ConfigWarning>,
}

impl Config {
	/// Parse a TOML string into a [`Config`].
	///
	/// A document without a `definitions` table yields an empty config.
	pub fn parse(input: &str) -> Result<Self> {
		let raw: RawConfig = toml::from_str(input)?;
		Ok(Self::from_definitions(raw.definitions.unwrap_or_default()))
	}

	/// Load configuration from a file.
	pub fn load(path: impl AsRef<Path>) -> Result<Self> {
		let path = path.as_ref();
		let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
			path: path.to_path_buf(),
			error: e,
		})?;
		Self::parse(&content)
	}

	/// Builds a config from already-structured definitions, dropping empty
	/// keys and collecting warnings.
	pub fn from_definitions(definitions: Definitions) -> Self {
		let mut warnings = Vec::new();
		let mut kept = Definitions::new();

		for (context, keys) in definitions {
			let mut kept_keys = KeyDefinitions::new();
			for (key, patterns) in keys {
				if patterns.is_empty() {
					warnings.push(ConfigWarning::EmptyKey {
						context: context.clone(),
						key,
					});
					continue;
				}
				for (index, pattern) in patterns.iter().enumerate() {
					if pattern.contains('\n') {
						warnings.push(ConfigWarning::MultiLinePattern {
							context: context.clone(),
							key: key.clone(),
							index,
						});
					}
				}
				kept_keys.insert(key, patterns);
			}
			if !kept_keys.is_empty() {
				kept.insert(context, kept_keys);
			}
		}

		Self {
			definitions: kept,
			warnings,
		}
	}

	/// Returns true if no context defines any key.
	pub fn is_empty(&self) -> bool {
		self.definitions.is_empty()
	}

	/// Patterns bound to `key` in `context`, if any.
	pub fn patterns(&self, context: &str, key: &str) -> Option<&[String]> {
		self.definitions.get(context)?.get(key).map(Vec::as_slice)
	}

	/// Merge another config into this one.
	///
	/// Keys defined in `other` replace the same keys in `self`; other keys of
	/// the same context are kept.
	pub fn merge(&mut self, other: Config) {
		for (context, keys) in other.definitions {
			self.definitions.entry(context).or_default().extend(keys);
		}
		self.warnings.extend(other.warnings);
	}
}

/// Default configuration file location.
pub fn default_config_path() -> Option<PathBuf> {
	dirs::config_dir().map(|dir| dir.join("keycycle").join("config.toml"))
}
