//! Collaborators the controller calls back into.

/// Reports the context identifier (language, mode, content type) of the
/// place keys are being typed into.
pub trait ContextResolver: Send + Sync {
	/// Current context, or `None` when there is none.
	fn context_id(&self) -> Option<String>;
}

impl<F> ContextResolver for F
where
	F: Fn() -> Option<String> + Send + Sync,
{
	fn context_id(&self) -> Option<String> {
		self()
	}
}

/// Ordinary typing, used for keys that have no templates.
pub trait DefaultInput: Send + Sync {
	/// Inserts `text` as if typed, bypassing expansion.
	fn type_text(&self, text: &str);
}

impl<F> DefaultInput for F
where
	F: Fn(&str) + Send + Sync,
{
	fn type_text(&self, text: &str) {
		self(text)
	}
}
