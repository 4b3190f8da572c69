use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

/// Named aliases for common patterns.
///
/// `expand` passes unknown names through untouched, so callers can hand it
/// either an alias or a literal pattern and get a pattern back either way.
#[derive(Clone, Default)]
pub struct Formats {
    inner: Arc<RwLock<HashMap<String, String>>>,
}

impl Formats {
    pub fn new() -> Self {
        Self::default()
    }

    /// The stock aliases: `app`, `default` and `title`.
    pub fn builtin() -> Self {
        let formats = Self::new();
        formats.set("app", ":app");
        formats.set("default", ":title - :app");
        formats.set("title", ":title");
        formats
    }

    pub fn get(&self, alias: &str) -> Option<String> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.get(alias).cloned()
    }

    /// Insert or overwrite an alias.
    pub fn set(&self, alias: impl Into<String>, pattern: impl Into<String>) {
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.insert(alias.into(), pattern.into());
    }

    /// Resolve `format` as an alias if one is defined; otherwise `format` is
    /// already a pattern and comes back as-is.
    pub fn expand(&self, format: &str) -> String {
        self.get(format).unwrap_or_else(|| format.to_string())
    }
}
