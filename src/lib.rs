//! Server-side rendering of GOV.UK and CCS design-system components
//!
//! Each component takes a typed options record and renders an HTML fragment
//! that follows the design system's markup: CSS classes, ARIA attributes and
//! the `data-module` hooks its JavaScript enhances.
//!
//! Every component is built on the same four rules:
//!
//! - options are normalized so `classes` and `attributes` are always present
//!   ([`options`])
//! - classes are composed base first, then modifiers, then the caller's
//!   ([`classes`])
//! - component-owned attributes win over caller attributes, and the `data`
//!   and `aria` namespaces merge key by key ([`attributes`])
//! - `aria-describedby` and friends are joined from their contributors in a
//!   fixed order ([`aria`])
//!
//! # Examples
//!
//! ```rust,ignore
//! use ccs_frontend_helpers::components::Input;
//! use ccs_frontend_helpers::{Component, RenderContext};
//! use serde_json::json;
//!
//! # fn example() -> ccs_frontend_helpers::Result<()> {
//! let context = RenderContext::new().with_field_error("email", "Enter an email");
//! let input = Input::from_json(&context, json!({
//!     "attribute": "email",
//!     "type": "email",
//!     "label": {"text": "Email address"}
//! }))?;
//!
//! // <input ... id="email" aria-describedby="email-error">
//! let html = input.render();
//! # Ok(())
//! # }
//! ```

pub mod aria;
pub mod attributes;
pub mod classes;
pub mod component;
pub mod components;
pub mod context;
pub mod error;
pub mod markup;
pub mod options;

#[cfg(any(test, feature = "test-utils"))]
pub mod node_ext;
#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

// Re-export commonly used types
pub use aria::{compute_described_by, join_ids};
pub use attributes::{merge_attributes, AttributeValue, Attributes};
pub use classes::{compose_classes, ClassList};
pub use component::Component;
pub use components::render;
pub use context::RenderContext;
pub use error::{Error, Result};
pub use markup::Markup;
pub use options::{merge_owned, normalize, ComponentDefaults, Content, NormalizedOptions, Options};
