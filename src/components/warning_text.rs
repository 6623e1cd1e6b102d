use serde::Deserialize;

use crate::attributes::Attributes;
use crate::component::Component;
use crate::context::RenderContext;
use crate::error::{Error, Result};
use crate::markup::Markup;
use crate::options::{normalize, ComponentDefaults, Content, Options};

const DEFAULTS: ComponentDefaults = ComponentDefaults {
    name: "warning_text",
    base_classes: &["govuk-warning-text"],
    owned_attributes: &[],
};

fn default_icon_fallback_text() -> String {
    "Warning".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct WarningTextOptions {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
    /// Assistive text read in place of the icon
    #[serde(default = "default_icon_fallback_text")]
    pub icon_fallback_text: String,
    #[serde(flatten)]
    pub options: Options,
}

#[derive(Debug, Clone)]
pub struct WarningText {
    content: Content,
    icon_fallback_text: String,
    attributes: Attributes,
}

impl Component for WarningText {
    type Options = WarningTextOptions;
    const NAME: &'static str = "warning_text";

    fn new(_context: &RenderContext, options: WarningTextOptions) -> Result<Self> {
        let normalized = normalize(&options.options);
        let content = Content::pick(options.text.as_deref(), options.html.as_deref())
            .ok_or_else(|| Error::missing_field(DEFAULTS.name, "text"))?;
        let class = DEFAULTS.class_list().caller(&normalized.classes).compose();

        Ok(Self {
            content,
            icon_fallback_text: options.icon_fallback_text,
            attributes: DEFAULTS.finish(class, Attributes::new(), &normalized.attributes)?,
        })
    }

    fn render_to(&self, out: &mut Markup) {
        out.open("div", &self.attributes);
        out.open(
            "span",
            &Attributes::new()
                .with("class", "govuk-warning-text__icon")
                .with("aria-hidden", "true"),
        );
        out.text("!");
        out.close("span");
        out.open_class("strong", "govuk-warning-text__text");
        if !self.icon_fallback_text.is_empty() {
            out.open_class("span", "govuk-warning-text__assistive");
            out.text(&self.icon_fallback_text);
            out.close("span");
        }
        out.content(&self.content);
        out.close("strong");
        out.close("div");
    }
}
