//! Lookup tables from context and key to template candidates.

use std::sync::Arc;

use keycycle_config::{Config, KeyDefinitions};
use rustc_hash::FxHashMap as HashMap;

use crate::template::Template;

/// Candidates bound to one key, in cycle order. Never empty.
pub type Candidates = Arc<[Arc<Template>]>;

/// Keys of one context.
#[derive(Debug, Clone, Default)]
pub struct KeyMap {
	keys: HashMap<Box<str>, Candidates>,
}

impl KeyMap {
	/// Compiles the patterns of one context. Keys without patterns are left out.
	pub fn from_definitions(definitions: &KeyDefinitions) -> Self {
		let keys = definitions
			.iter()
			.filter(|(_, patterns)| !patterns.is_empty())
			.map(|(key, patterns)| {
				let candidates: Candidates = patterns
					.iter()
					.map(|pattern| Arc::new(Template::parse(pattern)))
					.collect();
				(Box::from(key.as_str()), candidates)
			})
			.collect();
		Self { keys }
	}

	/// Candidates for `key`, if bound.
	#[inline]
	pub fn get(&self, key: &str) -> Option<&Candidates> {
		self.keys.get(key)
	}

	/// Number of bound keys.
	pub fn len(&self) -> usize {
		self.keys.len()
	}

	/// Returns true if no key is bound.
	pub fn is_empty(&self) -> bool {
		self.keys.is_empty()
	}
}

/// Key maps per context identifier.
#[derive(Debug, Clone, Default)]
pub struct LanguageMap {
	contexts: HashMap<Box<str>, KeyMap>,
}

impl LanguageMap {
	/// Compiles every context in `config`.
	pub fn from_config(config: &Config) -> Self {
		let contexts = config
			.definitions
			.iter()
			.map(|(context, keys)| (Box::from(context.as_str()), KeyMap::from_definitions(keys)))
			.filter(|(_, keymap)| !keymap.is_empty())
			.collect();
		Self { contexts }
	}

	/// The key map of `context`, if any.
	#[inline]
	pub fn keymap(&self, context: &str) -> Option<&KeyMap> {
		self.contexts.get(context)
	}

	/// Candidates for `key` in `context`, if bound.
	pub fn lookup(&self, context: &str, key: &str) -> Option<&Candidates> {
		self.keymap(context)?.get(key)
	}

	/// Number of contexts with at least one bound key.
	pub fn len(&self) -> usize {
		self.contexts.len()
	}

	/// Returns true if no context binds any key.
	pub fn is_empty(&self) -> bool {
		self.contexts.is_empty()
	}
}
