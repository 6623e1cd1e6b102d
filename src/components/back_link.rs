use serde::Deserialize;

use crate::attributes::Attributes;
use crate::component::Component;
use crate::context::RenderContext;
use crate::error::Result;
use crate::markup::Markup;
use crate::options::{normalize, ComponentDefaults, Content, Options};

const DEFAULTS: ComponentDefaults = ComponentDefaults {
    name: "back_link",
    base_classes: &["govuk-back-link"],
    owned_attributes: &[],
};

#[derive(Debug, Clone, Deserialize)]
pub struct BackLinkOptions {
    pub href: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(flatten)]
    pub options: Options,
}

impl BackLinkOptions {
    pub fn new(href: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            text: None,
            html: None,
            options: Options::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct BackLink {
    content: Content,
    attributes: Attributes,
}

impl Component for BackLink {
    type Options = BackLinkOptions;
    const NAME: &'static str = "back_link";

    fn new(_context: &RenderContext, options: BackLinkOptions) -> Result<Self> {
        let normalized = normalize(&options.options);
        let content = Content::pick(options.text.as_deref(), options.html.as_deref())
            .unwrap_or_else(|| Content::Text("Back".to_string()));
        let class = DEFAULTS.class_list().caller(&normalized.classes).compose();

        Ok(Self {
            content,
            attributes: DEFAULTS.finish(
                class,
                Attributes::new().with("href", options.href),
                &normalized.attributes,
            )?,
        })
    }

    fn render_to(&self, out: &mut Markup) {
        out.open("a", &self.attributes);
        out.content(&self.content);
        out.close("a");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_back_link_defaults_text() {
        let link = BackLink::new(&RenderContext::default(), BackLinkOptions::new("/previous")).unwrap();
        assert_eq!(link.render(), r#"<a class="govuk-back-link" href="/previous">Back</a>"#);
    }

    #[test]
    fn test_back_link_requires_href() {
        let err = BackLink::from_json(&RenderContext::default(), json!({"text": "Back"})).unwrap_err();
        assert!(matches!(err, Error::MissingField { ref field, .. } if field == "href"));
    }
}
