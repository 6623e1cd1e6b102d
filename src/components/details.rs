use serde::Deserialize;

use crate::attributes::Attributes;
use crate::component::Component;
use crate::context::RenderContext;
use crate::error::{Error, Result};
use crate::markup::Markup;
use crate::options::{normalize, ComponentDefaults, Content, Options, OwnedAttribute};

const DEFAULTS: ComponentDefaults = ComponentDefaults {
    name: "details",
    base_classes: &["govuk-details"],
    owned_attributes: &[OwnedAttribute::Data("module", "govuk-details")],
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DetailsOptions {
    pub summary_text: Option<String>,
    pub summary_html: Option<String>,
    pub text: Option<String>,
    pub html: Option<String>,
    pub id: Option<String>,
    pub open: bool,
    #[serde(flatten)]
    pub options: Options,
}

/// A disclosure widget with a summary line
#[derive(Debug, Clone)]
pub struct Details {
    summary: Content,
    content: Content,
    attributes: Attributes,
}

impl Component for Details {
    type Options = DetailsOptions;
    const NAME: &'static str = "details";

    fn new(_context: &RenderContext, options: DetailsOptions) -> Result<Self> {
        let normalized = normalize(&options.options);
        let summary = Content::pick(options.summary_text.as_deref(), options.summary_html.as_deref())
            .ok_or_else(|| Error::missing_field(DEFAULTS.name, "summary_text"))?;
        let content = Content::pick(options.text.as_deref(), options.html.as_deref())
            .ok_or_else(|| Error::missing_field(DEFAULTS.name, "text"))?;

        let class = DEFAULTS.class_list().caller(&normalized.classes).compose();
        let mut owned = Attributes::new();
        if let Some(id) = &options.id {
            owned.insert("id", id);
        }
        if options.open {
            owned.insert("open", true);
        }

        Ok(Self {
            summary,
            content,
            attributes: DEFAULTS.finish(class, owned, &normalized.attributes)?,
        })
    }

    fn render_to(&self, out: &mut Markup) {
        out.open("details", &self.attributes);
        out.open_class("summary", "govuk-details__summary");
        out.class_element("span", "govuk-details__summary-text", &self.summary);
        out.close("summary");
        out.class_element("div", "govuk-details__text", &self.content);
        out.close("details");
    }
}
