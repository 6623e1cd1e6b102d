use serde::Deserialize;

use crate::attributes::Attributes;
use crate::component::Component;
use crate::context::RenderContext;
use crate::error::{Error, Result};
use crate::markup::Markup;
use crate::options::{normalize, ComponentDefaults, Content, Options};

const DEFAULTS: ComponentDefaults = ComponentDefaults {
    name: "label",
    base_classes: &["govuk-label"],
    owned_attributes: &[],
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LabelOptions {
    pub text: Option<String>,
    pub html: Option<String>,
    /// Id of the control this label is for
    #[serde(rename = "for")]
    pub for_id: Option<String>,
    /// Wrap the label in an `h1`
    pub is_page_heading: bool,
    #[serde(flatten)]
    pub options: Options,
}

impl LabelOptions {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone)]
pub struct Label {
    content: Content,
    is_page_heading: bool,
    attributes: Attributes,
}

impl Label {
    /// Build a label for a control whose id the parent has already fixed
    pub(crate) fn for_control(
        options: LabelOptions,
        control_id: &str,
        modifier: Option<&'static str>,
    ) -> Result<Self> {
        let for_id = options.for_id.clone().unwrap_or_else(|| control_id.to_string());
        Self::build(
            LabelOptions {
                for_id: Some(for_id),
                ..options
            },
            modifier,
        )
    }

    fn build(options: LabelOptions, modifier: Option<&'static str>) -> Result<Self> {
        let normalized = normalize(&options.options);
        let content = Content::pick(options.text.as_deref(), options.html.as_deref())
            .ok_or_else(|| Error::missing_field(DEFAULTS.name, "text"))?;

        let class = DEFAULTS
            .class_list()
            .modifier_opt(modifier)
            .caller(&normalized.classes)
            .compose();

        let mut owned = Attributes::new();
        if let Some(for_id) = &options.for_id {
            owned.insert("for", for_id);
        }

        Ok(Self {
            content,
            is_page_heading: options.is_page_heading,
            attributes: DEFAULTS.finish(class, owned, &normalized.attributes)?,
        })
    }
}

impl Component for Label {
    type Options = LabelOptions;
    const NAME: &'static str = "label";

    fn new(_context: &RenderContext, options: LabelOptions) -> Result<Self> {
        Self::build(options, None)
    }

    fn render_to(&self, out: &mut Markup) {
        if self.is_page_heading {
            out.open_class("h1", "govuk-label-wrapper");
        }
        out.open("label", &self.attributes);
        out.content(&self.content);
        out.close("label");
        if self.is_page_heading {
            out.close("h1");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_label() {
        let label = Label::from_json(
            &RenderContext::default(),
            json!({"text": "Email address", "for": "email"}),
        )
        .unwrap();
        assert_eq!(label.render(), r#"<label class="govuk-label" for="email">Email address</label>"#);
    }

    #[test]
    fn test_label_as_page_heading() {
        let options = LabelOptions {
            is_page_heading: true,
            options: Options::new().with_classes("govuk-label--l"),
            ..LabelOptions::text("What is your name?")
        };
        let label = Label::for_control(options, "name", None).unwrap();
        assert_eq!(
            label.render(),
            r#"<h1 class="govuk-label-wrapper"><label class="govuk-label govuk-label--l" for="name">What is your name?</label></h1>"#
        );
    }

    #[test]
    fn test_label_modifier_before_caller_classes() {
        let options = LabelOptions {
            options: Options::new().with_classes("bold"),
            ..LabelOptions::text("Yes")
        };
        let label = Label::for_control(options, "a-2", Some("govuk-radios__label")).unwrap();
        assert!(label
            .render()
            .starts_with(r#"<label class="govuk-label govuk-radios__label bold" for="a-2">"#));
    }
}
