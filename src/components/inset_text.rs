use serde::Deserialize;

use crate::attributes::Attributes;
use crate::component::Component;
use crate::context::RenderContext;
use crate::error::{Error, Result};
use crate::markup::Markup;
use crate::options::{normalize, ComponentDefaults, Content, Options};

const DEFAULTS: ComponentDefaults = ComponentDefaults {
    name: "inset_text",
    base_classes: &["govuk-inset-text"],
    owned_attributes: &[],
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct InsetTextOptions {
    pub text: Option<String>,
    pub html: Option<String>,
    pub id: Option<String>,
    #[serde(flatten)]
    pub options: Options,
}

#[derive(Debug, Clone)]
pub struct InsetText {
    content: Content,
    attributes: Attributes,
}

impl Component for InsetText {
    type Options = InsetTextOptions;
    const NAME: &'static str = "inset_text";

    fn new(_context: &RenderContext, options: InsetTextOptions) -> Result<Self> {
        let normalized = normalize(&options.options);
        let content = Content::pick(options.text.as_deref(), options.html.as_deref())
            .ok_or_else(|| Error::missing_field(DEFAULTS.name, "text"))?;

        let mut owned = Attributes::new();
        if let Some(id) = &options.id {
            owned.insert("id", id);
        }
        let class = DEFAULTS.class_list().caller(&normalized.classes).compose();

        Ok(Self {
            content,
            attributes: DEFAULTS.finish(class, owned, &normalized.attributes)?,
        })
    }

    fn render_to(&self, out: &mut Markup) {
        out.open("div", &self.attributes);
        out.content(&self.content);
        out.close("div");
    }
}
