use serde::Deserialize;

use super::heading_tag;
use crate::attributes::Attributes;
use crate::component::Component;
use crate::context::RenderContext;
use crate::error::{Error, Result};
use crate::markup::Markup;
use crate::options::{normalize, ComponentDefaults, Content, Options};

const DEFAULTS: ComponentDefaults = ComponentDefaults {
    name: "panel",
    base_classes: &["govuk-panel", "govuk-panel--confirmation"],
    owned_attributes: &[],
};

fn default_heading_level() -> u8 {
    1
}

#[derive(Debug, Clone, Deserialize)]
pub struct PanelOptions {
    #[serde(default)]
    pub title_text: Option<String>,
    #[serde(default)]
    pub title_html: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default = "default_heading_level")]
    pub heading_level: u8,
    #[serde(flatten)]
    pub options: Options,
}

/// A confirmation panel shown at the end of a transaction
#[derive(Debug, Clone)]
pub struct Panel {
    heading: &'static str,
    title: Content,
    body: Option<Content>,
    attributes: Attributes,
}

impl Component for Panel {
    type Options = PanelOptions;
    const NAME: &'static str = "panel";

    fn new(_context: &RenderContext, options: PanelOptions) -> Result<Self> {
        let normalized = normalize(&options.options);
        let title = Content::pick(options.title_text.as_deref(), options.title_html.as_deref())
            .ok_or_else(|| Error::missing_field(DEFAULTS.name, "title_text"))?;
        let class = DEFAULTS.class_list().caller(&normalized.classes).compose();

        Ok(Self {
            heading: heading_tag(DEFAULTS.name, options.heading_level)?,
            title,
            body: Content::pick(options.text.as_deref(), options.html.as_deref()),
            attributes: DEFAULTS.finish(class, Attributes::new(), &normalized.attributes)?,
        })
    }

    fn render_to(&self, out: &mut Markup) {
        out.open("div", &self.attributes);
        out.class_element(self.heading, "govuk-panel__title", &self.title);
        if let Some(body) = &self.body {
            out.class_element("div", "govuk-panel__body", body);
        }
        out.close("div");
    }
}
