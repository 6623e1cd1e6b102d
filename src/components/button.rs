use serde::Deserialize;

use crate::attributes::Attributes;
use crate::component::Component;
use crate::context::RenderContext;
use crate::error::{Error, Result};
use crate::markup::Markup;
use crate::options::{normalize, ComponentDefaults, Content, Options, OwnedAttribute};

const DEFAULTS: ComponentDefaults = ComponentDefaults {
    name: "button",
    base_classes: &["govuk-button"],
    owned_attributes: &[OwnedAttribute::Data("module", "govuk-button")],
};

const START_ICON: &str = concat!(
    r#"<svg class="govuk-button__start-icon" xmlns="http://www.w3.org/2000/svg" width="17.5" height="19" viewBox="0 0 33 40" aria-hidden="true" focusable="false">"#,
    r#"<path fill="currentColor" d="M0 0h13l20 20-20 20H0l20-20z"/>"#,
    r#"</svg>"#
);

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonVariant {
    Secondary,
    Warning,
    Inverse,
}

impl ButtonVariant {
    fn class(self) -> &'static str {
        match self {
            ButtonVariant::Secondary => "govuk-button--secondary",
            ButtonVariant::Warning => "govuk-button--warning",
            ButtonVariant::Inverse => "govuk-button--inverse",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ButtonElement {
    Button,
    A,
    Input,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ButtonOptions {
    pub text: Option<String>,
    pub html: Option<String>,
    /// Renders the button as a link
    pub href: Option<String>,
    /// Forces the element; defaults to `a` with an `href`, else `button`
    pub element: Option<ButtonElement>,
    pub name: Option<String>,
    #[serde(rename = "type")]
    pub button_type: Option<String>,
    pub value: Option<String>,
    pub id: Option<String>,
    pub variant: Option<ButtonVariant>,
    pub disabled: bool,
    pub prevent_double_click: Option<bool>,
    pub is_start_button: bool,
    #[serde(flatten)]
    pub options: Options,
}

impl ButtonOptions {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct Button {
    element: ButtonElement,
    content: Content,
    start_icon: bool,
    attributes: Attributes,
}

impl Component for Button {
    type Options = ButtonOptions;
    const NAME: &'static str = "button";

    fn new(_context: &RenderContext, options: ButtonOptions) -> Result<Self> {
        let normalized = normalize(&options.options);
        let content = Content::pick(options.text.as_deref(), options.html.as_deref())
            .ok_or_else(|| Error::missing_field(DEFAULTS.name, "text"))?;

        let element = options.element.unwrap_or(if options.href.is_some() {
            ButtonElement::A
        } else {
            ButtonElement::Button
        });

        let class = DEFAULTS
            .class_list()
            .modifier_opt(options.variant.map(ButtonVariant::class))
            .modifier_if(options.disabled, "govuk-button--disabled")
            .modifier_if(options.is_start_button, "govuk-button--start")
            .caller(&normalized.classes)
            .compose();

        let mut owned = Attributes::new();
        if let Some(id) = &options.id {
            owned.insert("id", id);
        }
        match element {
            ButtonElement::A => {
                owned.insert("href", options.href.as_deref().unwrap_or("#"));
                owned.insert("role", "button");
                owned.insert("draggable", "false");
            }
            ButtonElement::Button | ButtonElement::Input => {
                if let Some(name) = &options.name {
                    owned.insert("name", name);
                }
                owned.insert("type", options.button_type.as_deref().unwrap_or("submit"));
                // An input carries its label in `value`, which only takes text
                let value = match element {
                    ButtonElement::Input => Some(
                        options
                            .text
                            .as_ref()
                            .ok_or_else(|| Error::missing_field(DEFAULTS.name, "text"))?,
                    ),
                    _ => options.value.as_ref(),
                };
                if let Some(value) = value {
                    owned.insert("value", value);
                }
                if options.disabled {
                    owned.insert("disabled", true);
                    owned.insert_namespaced("aria", "disabled", "true");
                }
            }
        }
        if let Some(prevent) = options.prevent_double_click {
            owned.insert_namespaced("data", "prevent-double-click", prevent);
        }

        tracing::trace!("Button rendered as {:?} with class {}", element, class);

        Ok(Self {
            element,
            content,
            start_icon: options.is_start_button,
            attributes: DEFAULTS.finish(class, owned, &normalized.attributes)?,
        })
    }

    fn render_to(&self, out: &mut Markup) {
        let tag = match self.element {
            ButtonElement::Button => "button",
            ButtonElement::A => "a",
            ButtonElement::Input => {
                out.void("input", &self.attributes);
                return;
            }
        };
        out.open(tag, &self.attributes);
        out.content(&self.content);
        if self.start_icon {
            out.raw(START_ICON);
        }
        out.close(tag);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn render(value: serde_json::Value) -> String {
        Button::from_json(&RenderContext::default(), value).unwrap().render()
    }

    #[test]
    fn test_default_button() {
        assert_eq!(
            render(json!({"text": "Save and continue"})),
            r#"<button class="govuk-button" data-module="govuk-button" type="submit">Save and continue</button>"#
        );
    }

    #[test]
    fn test_link_button_owns_role() {
        assert_eq!(
            render(json!({
                "text": "Start now",
                "href": "/start",
                "is_start_button": true,
                "attributes": {"role": "link", "data-test": "start"}
            })),
            concat!(
                r#"<a class="govuk-button govuk-button--start" data-module="govuk-button" data-test="start" href="/start" role="button" draggable="false">"#,
                r#"Start now"#,
                r#"<svg class="govuk-button__start-icon" xmlns="http://www.w3.org/2000/svg" width="17.5" height="19" viewBox="0 0 33 40" aria-hidden="true" focusable="false">"#,
                r#"<path fill="currentColor" d="M0 0h13l20 20-20 20H0l20-20z"/></svg></a>"#
            )
        );
    }

    #[test]
    fn test_disabled_secondary_button() {
        assert_eq!(
            render(json!({"text": "Cancel", "variant": "secondary", "disabled": true})),
            r#"<button class="govuk-button govuk-button--secondary govuk-button--disabled" data-module="govuk-button" type="submit" disabled aria-disabled="true">Cancel</button>"#
        );
    }

    #[test]
    fn test_prevent_double_click_and_input_element() {
        assert_eq!(
            render(json!({"text": "Go", "element": "input", "prevent_double_click": true})),
            r#"<input class="govuk-button" data-module="govuk-button" data-prevent-double-click="true" type="submit" value="Go">"#
        );
    }

    #[test]
    fn test_input_button_value_is_text_not_html() {
        assert_eq!(
            render(json!({"text": "Go", "html": "<em>Go</em>", "element": "input"})),
            r#"<input class="govuk-button" data-module="govuk-button" type="submit" value="Go">"#
        );

        let err = Button::from_json(
            &RenderContext::default(),
            json!({"html": "<em>Go</em>", "element": "input"}),
        )
        .unwrap_err();
        assert!(matches!(err, Error::MissingField { ref field, .. } if field == "text"));
    }

    #[test]
    fn test_button_requires_text() {
        let err = Button::from_json(&RenderContext::default(), json!({})).unwrap_err();
        assert!(matches!(err, Error::MissingField { ref field, .. } if field == "text"));
    }

    #[test]
    fn test_unknown_variant_is_config_error() {
        let err = Button::from_json(&RenderContext::default(), json!({"text": "x", "variant": "huge"}))
            .unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }
}
