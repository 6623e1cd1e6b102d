//! Render context shared down a component tree
//!
//! A [`RenderContext`] is built once per render call and passed by reference
//! to every constructor in the tree. It is read-only: components look things
//! up in it but never write to it, so a context can be shared across threads.
//!
//! ```rust,ignore
//! use ccs_frontend_helpers::RenderContext;
//!
//! let context = RenderContext::new()
//!     .with_field_error("email", "Enter an email address")
//!     .with_error_prefix("Gwall");
//! ```

use indexmap::IndexMap;
use serde::Deserialize;

/// Construction-time context for a component tree
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RenderContext {
    pub(crate) field_errors: IndexMap<String, Vec<String>>,
    pub(crate) error_prefix: String,
}

impl RenderContext {
    /// Create a new context with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a validation error for a field attribute
    ///
    /// Errors for the same attribute accumulate in order; fields show the
    /// first one.
    pub fn with_field_error(mut self, attribute: impl Into<String>, message: impl Into<String>) -> Self {
        self.field_errors
            .entry(attribute.into())
            .or_default()
            .push(message.into());
        self
    }

    /// Replace all recorded field errors
    pub fn with_field_errors(mut self, errors: IndexMap<String, Vec<String>>) -> Self {
        self.field_errors = errors;
        self
    }

    /// Set the visually hidden prefix read before each error message
    pub fn with_error_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.error_prefix = prefix.into();
        self
    }

    // Accessors
    pub fn field_error(&self, attribute: &str) -> Option<&str> {
        self.field_errors
            .get(attribute)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }
    pub fn field_errors(&self) -> impl Iterator<Item = (&str, &str)> {
        self.field_errors.iter().filter_map(|(attribute, messages)| {
            messages
                .first()
                .map(|message| (attribute.as_str(), message.as_str()))
        })
    }
    pub fn has_errors(&self) -> bool {
        self.field_errors().next().is_some()
    }
    pub fn error_prefix(&self) -> &str {
        &self.error_prefix
    }
}

impl Default for RenderContext {
    fn default() -> Self {
        Self {
            field_errors: IndexMap::new(),
            error_prefix: "Error".to_string(),
        }
    }
}
