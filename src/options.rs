use crate::errors::{InterpolateError, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Per-call options layered over crate defaults.
///
/// Never consulted by the engine core; integrators merge these before
/// constructing an [`Env`](crate::Env), then project the relevant pieces in
/// via [`to_env_options`](Options::to_env_options).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// Explicit application display name override for the `:app` tag.
    pub app: Option<String>,
    /// Format alias or literal pattern to interpolate.
    pub format: String,
    /// Lookup key tried by the host when no title was set for the request.
    pub default: String,
    /// Lookup-key suffix the host appends when deriving a title key.
    pub suffix: String,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            app: None,
            format: "default".to_string(),
            default: "app.tagline".to_string(),
            suffix: "title".to_string(),
        }
    }
}

impl Options {
    /// Layer caller overrides onto the defaults. Unknown keys are rejected
    /// with [`InterpolateError::InvalidOption`]; non-string values for known
    /// keys are ignored rather than coerced.
    pub fn merge(overrides: &HashMap<String, Value>) -> Result<Self> {
        let mut options = Self::default();
        for (key, value) in overrides {
            let value = value.as_str();
            match key.as_str() {
                "app" => options.app = value.map(str::to_string),
                "format" => {
                    if let Some(format) = value {
                        options.format = format.to_string();
                    }
                }
                "default" => {
                    if let Some(default) = value {
                        options.default = default.to_string();
                    }
                }
                "suffix" => {
                    if let Some(suffix) = value {
                        options.suffix = suffix.to_string();
                    }
                }
                other => return Err(InterpolateError::InvalidOption(other.to_string())),
            }
        }
        Ok(options)
    }

    /// Project into the option map carried by an `Env`. Only keys resolvers
    /// actually read end up in the env.
    pub fn to_env_options(&self) -> HashMap<String, Value> {
        let mut map = HashMap::new();
        if let Some(app) = &self.app {
            map.insert("app".to_string(), Value::String(app.clone()));
        }
        map
    }
}
