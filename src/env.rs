use serde_json::Value;
use std::any::Any;
use std::collections::HashMap;
use std::sync::Arc;

/// The evaluation context passed into each resolver call.
///
/// Built fresh per interpolation request and treated as immutable afterwards.
/// `view` and `controller` are opaque passthrough handles owned by the
/// caller; the engine never looks inside them, they exist so custom resolvers
/// can reach back into whatever host context spawned the request.
#[derive(Clone, Default)]
pub struct Env {
    options: HashMap<String, Value>,
    title: Option<String>,
    view: Option<Arc<dyn Any + Send + Sync>>,
    controller: Option<Arc<dyn Any + Send + Sync>>,
}

impl Env {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(mut self, options: HashMap<String, Value>) -> Self {
        self.options = options;
        self
    }

    pub fn with_option(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.options.insert(key.into(), value.into());
        self
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_view(mut self, view: Arc<dyn Any + Send + Sync>) -> Self {
        self.view = Some(view);
        self
    }

    pub fn with_controller(mut self, controller: Arc<dyn Any + Send + Sync>) -> Self {
        self.controller = Some(controller);
        self
    }

    pub fn options(&self) -> &HashMap<String, Value> {
        &self.options
    }

    /// Option value as a string, if present and non-empty.
    pub fn option_str(&self, key: &str) -> Option<&str> {
        self.options
            .get(key)
            .and_then(Value::as_str)
            .filter(|s| !s.is_empty())
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn view(&self) -> Option<&(dyn Any + Send + Sync)> {
        self.view.as_deref()
    }

    pub fn controller(&self) -> Option<&(dyn Any + Send + Sync)> {
        self.controller.as_deref()
    }
}
