//! Options normalization
//!
//! Every component takes a typed options record. The fields shared by all of
//! them live in [`Options`] and are flattened into each record, so the JSON
//! form of any component accepts `classes` and `attributes` at the top level.
//!
//! Two entry points:
//!
//! - [`from_json`] turns a loosely-typed `serde_json::Value` into a typed
//!   record. Shape problems are reported here and nowhere else.
//! - [`normalize`] turns the shared fields into their canonical form. It is
//!   total: absent fields get defaults and nothing is rejected.
//!
//! Component defaults ([`ComponentDefaults`]) are `const` values. They are
//! never mutated; every merge reads them and allocates a fresh result.

use indexmap::IndexMap;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::attributes::{merge_attributes, AttributeValue, Attributes, NAMESPACES};
use crate::classes::ClassList;
use crate::error::{Error, Result};

/// Fields accepted by every component
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Options {
    /// Extra classes, appended after the component's own
    #[serde(default)]
    pub classes: Option<String>,
    /// Extra attributes; the component's owned attributes take precedence
    #[serde(default)]
    pub attributes: Attributes,
}

impl Options {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_classes(mut self, classes: impl Into<String>) -> Self {
        self.classes = Some(classes.into());
        self
    }

    pub fn with_attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }
}

/// Canonical form of [`Options`]
#[derive(Debug, Clone, PartialEq)]
pub struct NormalizedOptions {
    /// Caller classes, whitespace-normalized; empty when none were given
    pub classes: String,
    /// Caller attributes with `data` and `aria` present as maps
    pub attributes: Attributes,
}

/// Normalize the shared option fields
pub fn normalize(raw: &Options) -> NormalizedOptions {
    let classes = raw
        .classes
        .as_deref()
        .map(|c| c.split_whitespace().collect::<Vec<_>>().join(" "))
        .unwrap_or_default();

    NormalizedOptions {
        classes,
        attributes: raw.attributes.normalized(),
    }
}

/// An attribute a component always renders with a fixed value
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OwnedAttribute {
    Plain(&'static str, &'static str),
    Data(&'static str, &'static str),
    Aria(&'static str, &'static str),
}

/// Static defaults for one component type
#[derive(Debug, Clone, Copy)]
pub struct ComponentDefaults {
    pub name: &'static str,
    pub base_classes: &'static [&'static str],
    pub owned_attributes: &'static [OwnedAttribute],
}

impl ComponentDefaults {
    /// Fresh class list seeded with the base classes
    pub fn class_list(&self) -> ClassList {
        ClassList::new(self.base_classes)
    }

    /// Fresh attribute map holding the owned attributes
    pub fn owned(&self) -> Attributes {
        let mut attributes = Attributes::new();
        for owned in self.owned_attributes {
            match *owned {
                OwnedAttribute::Plain(key, value) => {
                    attributes.insert(key, value);
                }
                OwnedAttribute::Data(key, value) => attributes.insert_namespaced("data", key, value),
                OwnedAttribute::Aria(key, value) => attributes.insert_namespaced("aria", key, value),
            }
        }
        attributes
    }

    /// Build the final attribute map for a component
    ///
    /// `class` is the composed class string and leads the map. `owned` holds
    /// the component's static owned attributes plus any it computed (ids,
    /// names, types). `supplied` is the caller's normalized attributes.
    pub fn finish(
        &self,
        class: String,
        owned: Attributes,
        supplied: &Attributes,
    ) -> Result<Attributes> {
        let mut all_owned = Attributes::new().with("class", class);
        for (key, value) in self.owned().iter().chain(owned.iter()) {
            let existing_is_map = all_owned.get(key).map_or(false, AttributeValue::is_map);
            match value {
                AttributeValue::Map(map) if existing_is_map => {
                    for (sub_key, sub_value) in map {
                        all_owned.insert_namespaced(key, sub_key.clone(), sub_value.clone());
                    }
                }
                _ => {
                    all_owned.insert(key.clone(), value.clone());
                }
            }
        }
        merge_owned(all_owned, supplied)
    }
}

/// Merge computed owned attributes with the caller's, for child elements
/// that carry no class or static defaults of their own
///
/// Both namespaces are seeded on the owned side first, so a caller scalar at
/// `data` or `aria` is a [`Error::TypeMismatch`] on every merge path.
pub fn merge_owned(mut owned: Attributes, supplied: &Attributes) -> Result<Attributes> {
    for namespace in NAMESPACES {
        if !owned.contains_key(namespace) {
            owned.insert(*namespace, AttributeValue::Map(IndexMap::new()));
        }
    }
    merge_attributes(&owned, supplied)
}

/// Convert loosely-typed JSON into a typed options record
///
/// A missing required field becomes [`Error::MissingField`]; any other shape
/// problem becomes [`Error::ConfigError`] naming the component.
pub fn from_json<T: DeserializeOwned>(component: &'static str, value: serde_json::Value) -> Result<T> {
    serde_json::from_value(value).map_err(|err| {
        tracing::debug!("Rejected {} options: {}", component, err);
        let message = err.to_string();
        match missing_field_name(&message) {
            Some(field) => Error::missing_field(component, field.to_string()),
            None => Error::config_owned(format!("{}: {}", component, message)),
        }
    })
}

static MISSING_FIELD_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^missing field `([^`]+)`").expect("Invalid missing field regex"));

fn missing_field_name(message: &str) -> Option<&str> {
    MISSING_FIELD_REGEX
        .captures(message)
        .and_then(|captures| captures.get(1))
        .map(|field| field.as_str())
}

/// Content that is either escaped text or trusted HTML
#[derive(Debug, Clone, PartialEq)]
pub enum Content {
    Text(String),
    Html(String),
}

impl Content {
    /// `html` wins over `text` when both are present
    pub fn pick(text: Option<&str>, html: Option<&str>) -> Option<Content> {
        match (html, text) {
            (Some(html), _) => Some(Content::Html(html.to_string())),
            (None, Some(text)) => Some(Content::Text(text.to_string())),
            (None, None) => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            Content::Text(s) | Content::Html(s) => s.is_empty(),
        }
    }
}
