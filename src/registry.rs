use crate::env::Env;
use crate::errors::{InterpolateError, Result};
use once_cell::sync::Lazy;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};
use tracing::debug;

/// Trait for pluggable tag resolvers used by the interpolation engine.
///
/// Any `Fn(&Env, &[Value]) -> Result<String>` closure implements it for free,
/// so custom tags can be added without naming a type:
///
/// ```
/// use tag_interpolation::{Env, Registry};
///
/// let registry = Registry::new();
/// registry.register("shout", |env: &Env, _: &[serde_json::Value]| {
///     Ok(env.title().unwrap_or_default().to_uppercase())
/// });
/// ```
pub trait Resolver: Send + Sync {
    fn resolve(&self, env: &Env, args: &[Value]) -> Result<String>;
}

impl<F> Resolver for F
where
    F: Fn(&Env, &[Value]) -> Result<String> + Send + Sync,
{
    fn resolve(&self, env: &Env, args: &[Value]) -> Result<String> {
        self(env, args)
    }
}

/// Thread-safe resolver registry.
///
/// Clones are handles onto the same underlying map, so an entry registered
/// through any handle is visible through all of them. Registration takes the
/// write lock; `names` and `resolve` take read locks, so readers never
/// observe a half-updated map.
#[derive(Clone, Default)]
pub struct Registry {
    inner: Arc<RwLock<HashMap<String, Arc<dyn Resolver>>>>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the built-in `app` and `title` resolvers.
    ///
    /// `app_fallback` supplies the application display name whenever the env
    /// carries no usable `app` option; how the name is derived (translation
    /// lookup, config, hardcoded) is the caller's business.
    pub fn with_builtins<F>(app_fallback: F) -> Self
    where
        F: Fn() -> String + Send + Sync + 'static,
    {
        let registry = Self::new();
        registry.register("app", move |env: &Env, _: &[Value]| {
            Ok(match env.option_str("app") {
                Some(app) => app.to_string(),
                None => app_fallback(),
            })
        });
        registry.register("title", |env: &Env, _: &[Value]| {
            Ok(env.title().unwrap_or_default().to_string())
        });
        registry
    }

    /// Insert or overwrite. Last registration under a name wins; overwriting
    /// is the intended override mechanism, not a conflict.
    pub fn register<R: Resolver + 'static>(&self, name: impl Into<String>, resolver: R) {
        let name = name.into();
        debug!(tag = %name, "registering resolver");
        let mut map = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        map.insert(name, Arc::new(resolver));
    }

    /// Snapshot of every registered tag name, in no particular order.
    pub fn names(&self) -> Vec<String> {
        let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        map.keys().cloned().collect()
    }

    /// Invoke the resolver registered under `name`.
    ///
    /// The resolver runs outside the lock, so it may itself register tags.
    pub fn resolve(&self, name: &str, env: &Env, args: &[Value]) -> Result<String> {
        let resolver = {
            let map = self.inner.read().unwrap_or_else(PoisonError::into_inner);
            map.get(name).cloned()
        };
        match resolver {
            Some(resolver) => resolver.resolve(env, args),
            None => Err(InterpolateError::NotFound(name.to_string())),
        }
    }
}

static DEFAULT: Lazy<Registry> = Lazy::new(|| {
    Registry::with_builtins(|| {
        std::env::current_exe()
            .ok()
            .and_then(|p| p.file_stem().map(|s| humanize(&s.to_string_lossy())))
            .unwrap_or_else(|| "Application".to_string())
    })
});

/// Process-wide registry backing the convenience API in the crate root.
/// Created on first use; callers may register into it at any time.
pub fn default_registry() -> &'static Registry {
    &DEFAULT
}

/// "my_app-name" -> "My app name".
fn humanize(name: &str) -> String {
    let spaced = name.replace(['_', '-'], " ");
    let mut chars = spaced.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => spaced,
    }
}
