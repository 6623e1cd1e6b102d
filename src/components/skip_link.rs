use serde::Deserialize;

use crate::attributes::Attributes;
use crate::component::Component;
use crate::context::RenderContext;
use crate::error::Result;
use crate::markup::Markup;
use crate::options::{normalize, ComponentDefaults, Content, Options, OwnedAttribute};

const DEFAULTS: ComponentDefaults = ComponentDefaults {
    name: "skip_link",
    base_classes: &["govuk-skip-link"],
    owned_attributes: &[OwnedAttribute::Data("module", "govuk-skip-link")],
};

fn default_href() -> String {
    "#content".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct SkipLinkOptions {
    #[serde(default = "default_href")]
    pub href: String,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(flatten)]
    pub options: Options,
}

#[derive(Debug, Clone)]
pub struct SkipLink {
    content: Content,
    attributes: Attributes,
}

impl Component for SkipLink {
    type Options = SkipLinkOptions;
    const NAME: &'static str = "skip_link";

    fn new(_context: &RenderContext, options: SkipLinkOptions) -> Result<Self> {
        let normalized = normalize(&options.options);
        let content = Content::pick(options.text.as_deref(), options.html.as_deref())
            .unwrap_or_else(|| Content::Text("Skip to main content".to_string()));
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
