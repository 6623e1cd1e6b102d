use serde::Deserialize;

use crate::attributes::Attributes;
use crate::component::Component;
use crate::context::RenderContext;
use crate::error::{Error, Result};
use crate::markup::Markup;
use crate::options::{normalize, ComponentDefaults, Content, Options};

const DEFAULTS: ComponentDefaults = ComponentDefaults {
    name: "hint",
    base_classes: &["govuk-hint"],
    owned_attributes: &[],
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct HintOptions {
    pub text: Option<String>,
    pub html: Option<String>,
    pub id: Option<String>,
    #[serde(flatten)]
    pub options: Options,
}

impl HintOptions {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

/// Hint text for a form control
#[derive(Debug, Clone)]
pub struct Hint {
    id: Option<String>,
    content: Content,
    attributes: Attributes,
}

impl Hint {
    /// Build a hint owned by a field
    ///
    /// `default_id` is used unless the caller set one; `modifier` is an extra
    /// class the parent needs (e.g. `govuk-radios__hint`).
    pub(crate) fn for_field(
        options: HintOptions,
        default_id: &str,
        modifier: Option<&'static str>,
    ) -> Result<Self> {
        let id = options.id.clone().unwrap_or_else(|| default_id.to_string());
        Self::build(HintOptions { id: Some(id), ..options }, modifier)
    }

    /// Like [`Hint::for_field`], but a hint with empty text is no hint
    pub(crate) fn optional_for_field(
        options: Option<HintOptions>,
        default_id: &str,
        modifier: Option<&'static str>,
    ) -> Result<Option<Self>> {
        options
            .filter(|options| {
                !Content::pick(options.text.as_deref(), options.html.as_deref())
                    .is_some_and(|content| content.is_empty())
            })
            .map(|options| Self::for_field(options, default_id, modifier))
            .transpose()
    }

    fn build(options: HintOptions, modifier: Option<&'static str>) -> Result<Self> {
        let normalized = normalize(&options.options);
        let content = Content::pick(options.text.as_deref(), options.html.as_deref())
            .ok_or_else(|| Error::missing_field(DEFAULTS.name, "text"))?;

        let class = DEFAULTS
            .class_list()
            .modifier_opt(modifier)
            .caller(&normalized.classes)
            .compose();

        let mut owned = Attributes::new();
        if let Some(id) = &options.id {
            owned.insert("id", id);
        }
        let attributes = DEFAULTS.finish(class, owned, &normalized.attributes)?;

        Ok(Self {
            id: options.id,
            content,
            attributes,
        })
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Component for Hint {
    type Options = HintOptions;
    const NAME: &'static str = "hint";

    fn new(_context: &RenderContext, options: HintOptions) -> Result<Self> {
        Self::build(options, None)
    }

    fn render_to(&self, out: &mut Markup) {
        out.open("div", &self.attributes);
        out.content(&self.content);
        out.close("div");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_hint() {
        let hint = Hint::from_json(&RenderContext::default(), json!({"text": "Use your work address"}))
            .unwrap();
        assert_eq!(hint.render(), r#"<div class="govuk-hint">Use your work address</div>"#);
    }

    #[test]
    fn test_field_hint_takes_default_id() {
        let hint = Hint::for_field(HintOptions::text("x"), "email-hint", None).unwrap();
        assert_eq!(hint.id(), Some("email-hint"));
        assert_eq!(hint.render(), r#"<div class="govuk-hint" id="email-hint">x</div>"#);
    }

    #[test]
    fn test_field_hint_caller_id_wins() {
        let options = HintOptions {
            id: Some("custom".to_string()),
            ..HintOptions::text("x")
        };
        let hint = Hint::for_field(options, "email-hint", Some("govuk-radios__hint")).unwrap();
        assert_eq!(hint.id(), Some("custom"));
        assert!(hint.render().contains(r#"class="govuk-hint govuk-radios__hint""#));
    }

    #[test]
    fn test_hint_requires_content() {
        let err = Hint::new(&RenderContext::default(), HintOptions::default()).unwrap_err();
        assert!(matches!(err, Error::MissingField { .. }));
    }
}
