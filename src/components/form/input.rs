use serde::Deserialize;

use super::field::{Field, FieldLayout, FieldOptions};
use crate::attributes::Attributes;
use crate::classes::ClassList;
use crate::component::Component;
use crate::context::RenderContext;
use crate::error::Result;
use crate::markup::Markup;
use crate::options::{ComponentDefaults, Content, Options};

const DEFAULTS: ComponentDefaults = ComponentDefaults {
    name: "input",
    base_classes: &["govuk-input"],
    owned_attributes: &[],
};

fn default_input_type() -> String {
    "text".to_string()
}

/// Prefix or suffix shown beside the input
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AffixOptions {
    pub text: Option<String>,
    pub html: Option<String>,
    pub classes: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputOptions {
    #[serde(flatten)]
    pub field: FieldOptions,
    #[serde(rename = "type", default = "default_input_type")]
    pub input_type: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub prefix: Option<AffixOptions>,
    #[serde(default)]
    pub suffix: Option<AffixOptions>,
    #[serde(default)]
    pub autocomplete: Option<String>,
    #[serde(default)]
    pub inputmode: Option<String>,
    #[serde(default)]
    pub pattern: Option<String>,
    #[serde(default)]
    pub spellcheck: Option<bool>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(flatten)]
    pub options: Options,
}

impl InputOptions {
    pub fn new(field: FieldOptions) -> Self {
        Self {
            field,
            input_type: default_input_type(),
            value: None,
            prefix: None,
            suffix: None,
            autocomplete: None,
            inputmode: None,
            pattern: None,
            spellcheck: None,
            disabled: false,
            options: Options::default(),
        }
    }
}

#[derive(Debug, Clone)]
struct Affix {
    content: Content,
    class: String,
}

impl Affix {
    fn build(options: Option<AffixOptions>, base: &'static str) -> Option<Self> {
        let options = options?;
        let content = Content::pick(options.text.as_deref(), options.html.as_deref())?;
        Some(Self {
            content,
            class: ClassList::new(&[base])
                .caller(options.classes.as_deref().unwrap_or_default())
                .compose(),
        })
    }

    fn render_to(&self, out: &mut Markup) {
        out.open("div", &Attributes::new().with("class", self.class.as_str()).with("aria-hidden", "true"));
        out.content(&self.content);
        out.close("div");
    }
}

/// A text input field
#[derive(Debug, Clone)]
pub struct Input {
    field: Field,
    prefix: Option<Affix>,
    suffix: Option<Affix>,
    attributes: Attributes,
}

impl Input {
    pub fn field(&self) -> &Field {
        &self.field
    }
}

impl Component for Input {
    type Options = InputOptions;
    const NAME: &'static str = "input";

    fn new(context: &RenderContext, options: InputOptions) -> Result<Self> {
        let (field, normalized) = Field::prepare(
            context,
            options.field,
            &options.options,
            FieldLayout::Label,
            None,
        )?;

        let class = DEFAULTS
            .class_list()
            .modifier_if(field.has_error(), "govuk-input--error")
            .caller(&normalized.classes)
            .compose();

        let mut owned = Attributes::new()
            .with("id", field.id())
            .with("name", field.name())
            .with("type", options.input_type.as_str());
        if let Some(value) = &options.value {
            owned.insert("value", value);
        }
        if let Some(spellcheck) = options.spellcheck {
            owned.insert("spellcheck", if spellcheck { "true" } else { "false" });
        }
        if let Some(autocomplete) = &options.autocomplete {
            owned.insert("autocomplete", autocomplete);
        }
        if let Some(pattern) = &options.pattern {
            owned.insert("pattern", pattern);
        }
        if let Some(inputmode) = &options.inputmode {
            owned.insert("inputmode", inputmode);
        }
        if options.disabled {
            owned.insert("disabled", true);
        }

        let attributes = DEFAULTS.finish(class, owned, &normalized.attributes)?;

        Ok(Self {
            field,
            prefix: Affix::build(options.prefix, "govuk-input__prefix"),
            suffix: Affix::build(options.suffix, "govuk-input__suffix"),
            attributes,
        })
    }

    fn render_to(&self, out: &mut Markup) {
        self.field.render_with(out, |out| {
            let wrapped = self.prefix.is_some() || self.suffix.is_some();
            if wrapped {
                out.open_class("div", "govuk-input__wrapper");
            }
            if let Some(prefix) = &self.prefix {
                prefix.render_to(out);
            }
            out.void("input", &self.attributes);
            if let Some(suffix) = &self.suffix {
                suffix.render_to(out);
            }
            if wrapped {
                out.close("div");
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_minimal_input() {
        let input = Input::from_json(&RenderContext::default(), json!({"attribute": "name"})).unwrap();
        assert_eq!(
            input.render(),
            r#"<div class="govuk-form-group"><input class="govuk-input" id="name" name="name" type="text"></div>"#
        );
    }

    #[test]
    fn test_input_with_error() {
        let input = Input::from_json(
            &RenderContext::default(),
            json!({
                "attribute": "email",
                "type": "email",
                "label": {"text": "Email address"},
                "error_message": "Enter an email"
            }),
        )
        .unwrap();
        let html = input.render();
        assert!(html.contains(r#"<label class="govuk-label" for="email">Email address</label>"#));
        assert!(html.contains(
            r#"<input class="govuk-input govuk-input--error" id="email" name="email" type="email" aria-describedby="email-error">"#
        ));
    }

    #[test]
    fn test_input_owned_attributes_win() {
        let input = Input::from_json(
            &RenderContext::default(),
            json!({
                "attribute": "email",
                "attributes": {"id": "hijack", "data-test": "email-field"}
            }),
        )
        .unwrap();
        let html = input.render();
        assert!(html.contains(r#"id="email""#));
        assert!(!html.contains("hijack"));
        assert!(html.contains(r#"data-test="email-field""#));
    }

    #[test]
    fn test_input_prefix_and_suffix() {
        let input = Input::from_json(
            &RenderContext::default(),
            json!({
                "attribute": "cost",
                "prefix": {"text": "£"},
                "suffix": {"text": "per item"},
                "spellcheck": false,
                "classes": "govuk-input--width-5"
            }),
        )
        .unwrap();
        assert_eq!(
            input.render(),
            concat!(
                r#"<div class="govuk-form-group"><div class="govuk-input__wrapper">"#,
                r#"<div class="govuk-input__prefix" aria-hidden="true">£</div>"#,
                r#"<input class="govuk-input govuk-input--width-5" id="cost" name="cost" type="text" spellcheck="false">"#,
                r#"<div class="govuk-input__suffix" aria-hidden="true">per item</div>"#,
                r#"</div></div>"#
            )
        );
    }
}
