//! Where configuration comes from when a reload is requested.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, Result};
use crate::{Config, default_config_path};

/// Supplies configuration on demand.
///
/// `Ok(None)` means "nothing to load right now": the caller keeps whatever
/// mapping it already has.
pub trait ConfigSource: Send + Sync {
	/// Fetches the current configuration.
	fn fetch(&self) -> Result<Option<Config>>;
}

impl ConfigSource for Config {
	fn fetch(&self) -> Result<Option<Config>> {
		Ok((!self.is_empty()).then(|| self.clone()))
	}
}

/// Reads configuration from a TOML file on every fetch.
#[derive(Debug, Clone)]
pub struct FileSource {
	path: PathBuf,
}

impl FileSource {
	/// A source reading `path`.
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self { path: path.into() }
	}

	/// A source reading the default configuration location.
	pub fn default_location() -> Option<Self> {
		default_config_path().map(Self::new)
	}

	/// The file this source reads.
	pub fn path(&self) -> &Path {
		&self.path
	}
}

impl ConfigSource for FileSource {
	fn fetch(&self) -> Result<Option<Config>> {
		let content = match std::fs::read_to_string(&self.path) {
			Ok(content) => content,
			Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
			Err(e) => {
				return Err(ConfigError::Io {
					path: self.path.clone(),
					error: e,
				});
			}
		};
		let config = Config::parse(&content)?;
		Ok((!config.is_empty()).then_some(config))
	}
}
