//! Attribute values and the attribute merger
//!
//! Attributes are held in an insertion-ordered map so the rendered attribute
//! order is deterministic. A value is either a scalar or a namespace map; the
//! `data` and `aria` namespaces render as `data-*` and `aria-*` attributes.
//!
//! # Merging
//!
//! [`merge_attributes`] combines the attributes a component owns with the
//! attributes a caller supplied:
//!
//! - scalar keys: the owned value wins, caller-only keys pass through
//! - namespace maps: merged one level deep, key by key, with the same rule
//! - map against scalar: [`Error::TypeMismatch`]
//!
//! ```rust,ignore
//! use ccs_frontend_helpers::attributes::{merge_attributes, Attributes};
//!
//! let owned = Attributes::new().with_data("module", "govuk-button");
//! let caller = Attributes::new().with_data("test", "save");
//! let merged = merge_attributes(&owned, &caller)?;
//! // data-module="govuk-button" data-test="save"
//! ```

use std::borrow::Cow;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Keys whose values are always namespace maps
pub const NAMESPACES: &[&str] = &["data", "aria"];

/// A single attribute value: a scalar or a nested namespace map
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Number(serde_json::Number),
    Str(String),
    Map(IndexMap<String, AttributeValue>),
}

impl AttributeValue {
    fn kind(&self) -> &'static str {
        match self {
            AttributeValue::Bool(_) => "boolean",
            AttributeValue::Number(_) => "number",
            AttributeValue::Str(_) => "string",
            AttributeValue::Map(_) => "map",
        }
    }

    pub fn is_map(&self) -> bool {
        matches!(self, AttributeValue::Map(_))
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            AttributeValue::Str(s) => Some(s.as_str()),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&IndexMap<String, AttributeValue>> {
        match self {
            AttributeValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Scalar value as text, as it appears inside a namespaced attribute
    pub(crate) fn to_text(&self) -> Cow<'_, str> {
        match self {
            AttributeValue::Bool(b) => Cow::Borrowed(if *b { "true" } else { "false" }),
            AttributeValue::Number(n) => Cow::Owned(n.to_string()),
            AttributeValue::Str(s) => Cow::Borrowed(s.as_str()),
            AttributeValue::Map(_) => {
                Cow::Owned(serde_json::to_string(self).unwrap_or_default())
            }
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        AttributeValue::Str(value.to_string())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        AttributeValue::Str(value)
    }
}

impl From<&String> for AttributeValue {
    fn from(value: &String) -> Self {
        AttributeValue::Str(value.clone())
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        AttributeValue::Bool(value)
    }
}

macro_rules! impl_attribute_value_for_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for AttributeValue {
                fn from(value: $t) -> Self {
                    AttributeValue::Number(serde_json::Number::from(value))
                }
            }
        )*
    };
}

impl_attribute_value_for_number!(i32, i64, u8, u32, u64, usize);

impl From<IndexMap<String, AttributeValue>> for AttributeValue {
    fn from(value: IndexMap<String, AttributeValue>) -> Self {
        AttributeValue::Map(value)
    }
}

/// An ordered attribute map
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Attributes(IndexMap<String, AttributeValue>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Attributes::insert`]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Builder form of [`Attributes::insert_namespaced`] for `data`
    pub fn with_data(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.insert_namespaced("data", key, value);
        self
    }

    /// Builder form of [`Attributes::insert_namespaced`] for `aria`
    pub fn with_aria(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.insert_namespaced("aria", key, value);
        self
    }

    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) -> Option<AttributeValue> {
        self.0.insert(key.into(), value.into())
    }

    /// Insert into a namespace map, creating it when absent
    ///
    /// A scalar sitting at the namespace key is replaced by a fresh map.
    pub fn insert_namespaced(
        &mut self,
        namespace: &str,
        key: impl Into<String>,
        value: impl Into<AttributeValue>,
    ) {
        let slot = self
            .0
            .entry(namespace.to_string())
            .or_insert_with(|| AttributeValue::Map(IndexMap::new()));
        if !slot.is_map() {
            *slot = AttributeValue::Map(IndexMap::new());
        }
        if let AttributeValue::Map(map) = slot {
            map.insert(key.into(), value.into());
        }
    }

    pub fn get(&self, key: &str) -> Option<&AttributeValue> {
        self.0.get(key)
    }

    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.0.get(key).and_then(AttributeValue::as_str)
    }

    pub fn get_namespaced(&self, namespace: &str, key: &str) -> Option<&AttributeValue> {
        self.0.get(namespace)?.as_map()?.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<AttributeValue> {
        self.0.shift_remove(key)
    }

    pub fn remove_namespaced(&mut self, namespace: &str, key: &str) -> Option<AttributeValue> {
        match self.0.get_mut(namespace) {
            Some(AttributeValue::Map(map)) => map.shift_remove(key),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttributeValue)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Canonical form used by the options normalizer
    ///
    /// Flat `data-foo` / `aria-foo` keys are folded into their namespace map
    /// and both namespace maps are present afterwards. A namespace key holding
    /// a scalar is left untouched, so that the merger can report it.
    pub fn normalized(&self) -> Attributes {
        let mut out = Attributes::new();
        for namespace in NAMESPACES {
            out.0
                .insert(namespace.to_string(), AttributeValue::Map(IndexMap::new()));
        }

        for (key, value) in &self.0 {
            if NAMESPACES.contains(&key.as_str()) {
                match (out.0.get_mut(key.as_str()), value) {
                    (Some(AttributeValue::Map(target)), AttributeValue::Map(source)) => {
                        for (sub_key, sub_value) in source {
                            target.insert(sub_key.clone(), sub_value.clone());
                        }
                    }
                    _ => {
                        out.0.insert(key.clone(), value.clone());
                    }
                }
                continue;
            }

            let folded = NAMESPACES.iter().find_map(|namespace| {
                key.strip_prefix(namespace)
                    .and_then(|rest| rest.strip_prefix('-'))
                    .filter(|rest| !rest.is_empty())
                    .map(|rest| (*namespace, rest))
            });

            match folded {
                Some((namespace, rest)) => match out.0.get_mut(namespace) {
                    Some(AttributeValue::Map(target)) => {
                        target.insert(rest.to_string(), value.clone());
                    }
                    _ => {
                        out.0.insert(key.clone(), value.clone());
                    }
                },
                None => {
                    out.0.insert(key.clone(), value.clone());
                }
            }
        }

        out
    }

    /// Flatten into HTML attribute pairs
    ///
    /// `None` as the value marks a bare boolean attribute. `false` scalars,
    /// empty namespace maps and an empty `class` produce nothing.
    pub fn to_html_pairs(&self) -> Vec<(String, Option<String>)> {
        let mut pairs = Vec::with_capacity(self.0.len());
        for (key, value) in &self.0 {
            match value {
                AttributeValue::Map(map) => {
                    for (sub_key, sub_value) in map {
                        let name = format!("{}-{}", key, sub_key.replace('_', "-"));
                        pairs.push((name, Some(sub_value.to_text().into_owned())));
                    }
                }
                AttributeValue::Bool(true) => pairs.push((key.clone(), None)),
                AttributeValue::Bool(false) => {}
                AttributeValue::Str(s) if key == "class" && s.is_empty() => {}
                scalar => pairs.push((key.clone(), Some(scalar.to_text().into_owned()))),
            }
        }
        pairs
    }
}

impl<K: Into<String>, V: Into<AttributeValue>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Attributes(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

/// Merge component-owned attributes with caller-supplied ones
///
/// Owned keys come first in the result, in their declared order, followed by
/// caller-only keys. Neither input is modified.
pub fn merge_attributes(owned: &Attributes, supplied: &Attributes) -> Result<Attributes> {
    let mut merged = IndexMap::with_capacity(owned.len() + supplied.len());

    for (key, owned_value) in &owned.0 {
        let value = match supplied.0.get(key) {
            None => owned_value.clone(),
            Some(supplied_value) => merge_value(key, owned_value, supplied_value)?,
        };
        merged.insert(key.clone(), value);
    }

    for (key, supplied_value) in &supplied.0 {
        if !merged.contains_key(key) {
            merged.insert(key.clone(), supplied_value.clone());
        }
    }

    Ok(Attributes(merged))
}

fn merge_value(
    key: &str,
    owned: &AttributeValue,
    supplied: &AttributeValue,
) -> Result<AttributeValue> {
    match (owned, supplied) {
        (AttributeValue::Map(owned_map), AttributeValue::Map(supplied_map)) => {
            let mut map = owned_map.clone();
            for (sub_key, sub_value) in supplied_map {
                if let Some(existing) = map.get(sub_key) {
                    if existing.is_map() != sub_value.is_map() {
                        let path = format!("{}.{}", key, sub_key);
                        tracing::warn!("Attribute type mismatch at {}", path);
                        return Err(Error::type_mismatch(&path, existing.kind(), sub_value.kind()));
                    }
                    continue;
                }
                map.insert(sub_key.clone(), sub_value.clone());
            }
            Ok(AttributeValue::Map(map))
        }
        (o, s) if o.is_map() != s.is_map() => {
            tracing::warn!("Attribute type mismatch at {}", key);
            Err(Error::type_mismatch(key, o.kind(), s.kind()))
        }
        (o, _) => Ok(o.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn attrs(value: serde_json::Value) -> Attributes {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_owned_scalar_wins() {
        let merged = merge_attributes(&attrs(json!({"role": "button"})), &attrs(json!({"role": "link"})))
            .unwrap();
        assert_eq!(merged, attrs(json!({"role": "button"})));
    }

    #[test]
    fn test_caller_only_keys_pass_through() {
        let merged = merge_attributes(
            &attrs(json!({"role": "button"})),
            &attrs(json!({"id": "save", "lang": "cy"})),
        )
        .unwrap();
        assert_eq!(merged.get_str("role"), Some("button"));
        assert_eq!(merged.get_str("id"), Some("save"));
        assert_eq!(merged.get_str("lang"), Some("cy"));
    }

    #[test]
    fn test_namespace_merge_keeps_both_keys() {
        let merged = merge_attributes(
            &attrs(json!({"data": {"module": "x"}})),
            &attrs(json!({"data": {"test": "y"}})),
        )
        .unwrap();
        assert_eq!(merged, attrs(json!({"data": {"module": "x", "test": "y"}})));
    }

    #[test]
    fn test_namespace_owned_sub_key_wins() {
        let merged = merge_attributes(
            &attrs(json!({"data": {"module": "govuk-button"}})),
            &attrs(json!({"data": {"module": "evil", "track": "1"}})),
        )
        .unwrap();
        assert_eq!(
            merged.get_namespaced("data", "module"),
            Some(&AttributeValue::from("govuk-button"))
        );
        assert_eq!(merged.get_namespaced("data", "track"), Some(&AttributeValue::from("1")));
    }

    #[test]
    fn test_scalar_against_namespace_is_mismatch() {
        let err = merge_attributes(
            &attrs(json!({"data": {"module": "x"}})),
            &attrs(json!({"data": "oops"})),
        )
        .unwrap_err();
        match err {
            Error::TypeMismatch { key, owned, supplied } => {
                assert_eq!(key, "data");
                assert_eq!(owned, "map");
                assert_eq!(supplied, "string");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_nested_mismatch_reports_path() {
        let err = merge_attributes(
            &attrs(json!({"aria": {"label": "x"}})),
            &attrs(json!({"aria": {"label": {"nested": true}}})),
        )
        .unwrap_err();
        assert!(matches!(err, Error::TypeMismatch { ref key, .. } if key == "aria.label"));
    }

    #[test]
    fn test_merge_commutes_on_disjoint_keys() {
        let a = attrs(json!({"id": "a", "data": {"x": "1"}}));
        let b = attrs(json!({"lang": "en", "aria": {"hidden": true}}));
        assert_eq!(merge_attributes(&a, &b).unwrap(), merge_attributes(&b, &a).unwrap());
    }

    #[test]
    fn test_merge_does_not_mutate_inputs() {
        let owned = attrs(json!({"data": {"module": "x"}}));
        let supplied = attrs(json!({"data": {"test": "y"}}));
        let owned_before = owned.clone();
        let supplied_before = supplied.clone();
        let _ = merge_attributes(&owned, &supplied).unwrap();
        assert_eq!(owned, owned_before);
        assert_eq!(supplied, supplied_before);
    }

    #[test]
    fn test_normalized_folds_flat_keys_and_adds_namespaces() {
        let normalized = attrs(json!({"data-track": "x", "aria-label": "Close", "id": "a"})).normalized();
        assert_eq!(normalized.get_namespaced("data", "track"), Some(&AttributeValue::from("x")));
        assert_eq!(normalized.get_namespaced("aria", "label"), Some(&AttributeValue::from("Close")));
        assert_eq!(normalized.get_str("id"), Some("a"));

        let empty = Attributes::new().normalized();
        assert!(empty.get("data").unwrap().is_map());
        assert!(empty.get("aria").unwrap().is_map());
    }

    #[test]
    fn test_normalized_keeps_scalar_namespace() {
        let normalized = attrs(json!({"data": "oops"})).normalized();
        assert_eq!(normalized.get("data"), Some(&AttributeValue::from("oops")));
    }

    #[test]
    fn test_html_pairs() {
        let pairs = attrs(json!({
            "class": "",
            "disabled": true,
            "hidden": false,
            "rows": 5,
            "data": {"prevent_double_click": true},
            "aria": {}
        }))
        .to_html_pairs();

        assert_eq!(
            pairs,
            vec![
                ("disabled".to_string(), None),
                ("rows".to_string(), Some("5".to_string())),
                ("data-prevent-double-click".to_string(), Some("true".to_string())),
            ]
        );
    }
}
