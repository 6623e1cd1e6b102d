//! Integration tests for the composition rules every component shares
//!
//! Class order, owned-attribute precedence, namespace merging and
//! `aria-describedby` wiring, checked through the public API.

use ccs_frontend_helpers::components::{Button, Input, Tag};
use ccs_frontend_helpers::{
    compose_classes, compute_described_by, merge_attributes, AttributeValue, Attributes,
    Component, Error, RenderContext,
};
use pretty_assertions::assert_eq;
use serde_json::json;

fn attrs(value: serde_json::Value) -> Attributes {
    serde_json::from_value(value).unwrap()
}

#[test]
fn test_class_order() {
    assert_eq!(
        compose_classes(&["govuk-tag"], &["govuk-tag--red"], Some("my-class")),
        "govuk-tag govuk-tag--red my-class"
    );
    assert_eq!(
        compose_classes(&["a", "b"], &["c"], Some("  z   y ")),
        "a b c z y"
    );
    assert_eq!(compose_classes(&[], &[], None), "");
}

#[test]
fn test_owned_scalar_wins() {
    let merged = merge_attributes(&attrs(json!({"role": "button"})), &attrs(json!({"role": "link"})))
        .unwrap();
    assert_eq!(merged, attrs(json!({"role": "button"})));
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
fn test_merge_does_not_touch_inputs() {
    let owned = attrs(json!({"data": {"module": "x"}}));
    let supplied = attrs(json!({"data": {"test": "y"}, "id": "a"}));
    let owned_before = owned.clone();
    let supplied_before = supplied.clone();
    merge_attributes(&owned, &supplied).unwrap();
    assert_eq!(owned, owned_before);
    assert_eq!(supplied, supplied_before);
}

#[test]
fn test_merge_type_mismatch() {
    let err = merge_attributes(&attrs(json!({"data": {"module": "x"}})), &attrs(json!({"data": "oops"})))
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
fn test_described_by_examples() {
    assert_eq!(
        compute_described_by(None, Some("f-hint"), Some("f-error")).as_deref(),
        Some("f-hint f-error")
    );
    assert_eq!(compute_described_by(None, None, None), None);
    assert_eq!(
        compute_described_by(Some("custom"), Some("f-hint"), None).as_deref(),
        Some("custom f-hint")
    );
    assert_eq!(compute_described_by(Some("  "), Some(""), None), None);
}

#[test]
fn test_component_owned_attribute_cannot_be_overridden() {
    let button = Button::from_json(
        &RenderContext::default(),
        json!({"text": "Go", "href": "/go", "attributes": {"role": "link", "data": {"module": "mine", "track": "go"}}}),
    )
    .unwrap();
    let html = button.render();
    assert!(html.contains(r#"role="button""#));
    assert!(html.contains(r#"data-module="govuk-button""#));
    assert!(html.contains(r#"data-track="go""#));
    assert!(!html.contains("mine"));
}

#[test]
fn test_caller_aria_map_is_kept() {
    let tag = Tag::from_json(
        &RenderContext::default(),
        json!({"text": "Beta", "attributes": {"aria": {"label": "Beta service"}}}),
    )
    .unwrap();
    assert_eq!(
        tag.render(),
        r#"<strong class="govuk-tag" aria-label="Beta service">Beta</strong>"#
    );
}

#[test]
fn test_scalar_namespace_fails_construction() {
    let err = Input::from_json(
        &RenderContext::default(),
        json!({"attribute": "email", "attributes": {"data": "oops"}}),
    )
    .unwrap_err();
    assert!(matches!(err, Error::TypeMismatch { .. }));
}

#[test]
fn test_attribute_value_kinds() {
    let attributes = attrs(json!({"maxlength": 10, "hidden": true, "data": {"a": "b"}}));
    assert!(matches!(attributes.get("maxlength"), Some(AttributeValue::Number(_))));
    assert_eq!(attributes.get("hidden"), Some(&AttributeValue::Bool(true)));
    assert!(attributes.get("data").unwrap().is_map());
}
