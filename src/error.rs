//! Error handling for ccs-frontend-helpers
//!
//! Every failure in this crate happens while a component is being constructed.
//! Rendering a constructed component cannot fail, so `render` returns a plain
//! `String` while constructors return [`Result`].
//!
//! # Error Types
//!
//! - [`Error::ConfigError`] - structurally wrong option data
//! - [`Error::MissingField`] - a required semantic field was not supplied
//! - [`Error::TypeMismatch`] - the attribute merger found a scalar where a
//!   namespace map was expected, or the reverse
//! - [`Error::JsonError`] - raw JSON errors for callers using the JSON boundary
//!
//! # Usage
//!
//! ```rust,ignore
//! use ccs_frontend_helpers::{Error, RenderContext};
//! use ccs_frontend_helpers::components::Button;
//!
//! match Button::from_json(&RenderContext::default(), json!({})) {
//!     Ok(button) => println!("{}", button.render()),
//!     Err(Error::MissingField { component, field }) => {
//!         println!("{component} needs {field}");
//!     }
//!     Err(err) => println!("Other error: {}", err),
//! }
//! ```
//!
//! Messages use `Cow<'static, str>` so that fixed messages do not allocate.

use std::borrow::Cow;
use thiserror::Error;

/// Error type for all component construction failures
#[derive(Error, Debug)]
pub enum Error {
    /// Caller passed structurally wrong data
    ///
    /// The message names the component and the offending field, e.g. a map
    /// where a list of items was expected or an unknown item kind.
    #[error("Config error: {0}")]
    ConfigError(Cow<'static, str>),

    /// A required field was not supplied
    #[error("Missing field: {component} requires `{field}`")]
    MissingField {
        component: Cow<'static, str>,
        field: Cow<'static, str>,
    },

    /// The attribute merger met incompatible values at the same key
    ///
    /// Raised when one side holds a namespace map (`data`, `aria`) and the
    /// other a scalar. The merger never coerces one into the other.
    #[error("Type mismatch at `{key}`: component owns {owned}, caller supplied {supplied}")]
    TypeMismatch {
        key: String,
        owned: &'static str,
        supplied: &'static str,
    },

    /// JSON parsing and conversion errors
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl Error {
    /// Create a config error with a static string
    pub fn config_static(msg: &'static str) -> Self {
        Error::ConfigError(Cow::Borrowed(msg))
    }

    /// Create a config error with an owned string
    ///
    /// ```rust,ignore
    /// let error = Error::config_owned(format!("{}: items must be a list", component));
    /// ```
    pub fn config_owned(msg: String) -> Self {
        Error::ConfigError(Cow::Owned(msg))
    }

    /// Create a missing field error
    pub fn missing_field(
        component: impl Into<Cow<'static, str>>,
        field: impl Into<Cow<'static, str>>,
    ) -> Self {
        Error::MissingField {
            component: component.into(),
            field: field.into(),
        }
    }

    pub(crate) fn type_mismatch(key: &str, owned: &'static str, supplied: &'static str) -> Self {
        Error::TypeMismatch {
            key: key.to_string(),
            owned,
            supplied,
        }
    }
}

/// Result type alias for component construction
pub type Result<T> = std::result::Result<T, Error>;
