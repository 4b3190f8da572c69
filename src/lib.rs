pub mod engine;
pub mod env;
pub mod errors;
pub mod formats;
pub mod options;
pub mod registry;

use serde_json::Value;

pub use env::Env;
pub use errors::{InterpolateError, Result};
pub use formats::Formats;
pub use options::Options;
pub use registry::{default_registry, Registry, Resolver};

/// The interpolation engine bound to one registry.
///
/// Most callers want [`Registry::with_builtins`] plus whatever custom tags
/// they register; the free functions below cover the one-registry-per-process
/// case.
pub struct Interpolator {
    registry: Registry,
}

impl Interpolator {
    pub fn new(registry: Registry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Substitute every registered tag in `pattern` against `env`.
    pub fn interpolate(&self, pattern: &str, env: &Env) -> Result<String> {
        engine::interpolate(&self.registry, pattern, env, &[])
    }

    /// Same, forwarding extra positional arguments to every resolver call.
    pub fn interpolate_with_args(
        &self,
        pattern: &str,
        env: &Env,
        args: &[Value],
    ) -> Result<String> {
        engine::interpolate(&self.registry, pattern, env, args)
    }
}

/// Convenience: interpolate against the process-wide default registry.
pub fn interpolate(pattern: &str, env: &Env) -> Result<String> {
    engine::interpolate(default_registry(), pattern, env, &[])
}

/// Convenience: add a custom tag to the process-wide default registry.
pub fn register<R: Resolver + 'static>(name: impl Into<String>, resolver: R) {
    default_registry().register(name, resolver);
}
