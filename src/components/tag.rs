use serde::Deserialize;

use crate::attributes::Attributes;
use crate::component::Component;
use crate::context::RenderContext;
use crate::error::{Error, Result};
use crate::markup::Markup;
use crate::options::{normalize, ComponentDefaults, Content, Options};

const DEFAULTS: ComponentDefaults = ComponentDefaults {
    name: "tag",
    base_classes: &["govuk-tag"],
    owned_attributes: &[],
};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TagColour {
    Grey,
    Green,
    Turquoise,
    Blue,
    LightBlue,
    Purple,
    Pink,
    Red,
    Orange,
    Yellow,
}

impl TagColour {
    fn class(self) -> &'static str {
        match self {
            TagColour::Grey => "govuk-tag--grey",
            TagColour::Green => "govuk-tag--green",
            TagColour::Turquoise => "govuk-tag--turquoise",
            TagColour::Blue => "govuk-tag--blue",
            TagColour::LightBlue => "govuk-tag--light-blue",
            TagColour::Purple => "govuk-tag--purple",
            TagColour::Pink => "govuk-tag--pink",
            TagColour::Red => "govuk-tag--red",
            TagColour::Orange => "govuk-tag--orange",
            TagColour::Yellow => "govuk-tag--yellow",
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TagOptions {
    pub text: Option<String>,
    pub html: Option<String>,
    pub colour: Option<TagColour>,
    #[serde(flatten)]
    pub options: Options,
}

/// A short status label
#[derive(Debug, Clone)]
pub struct Tag {
    content: Content,
    attributes: Attributes,
}

impl Component for Tag {
    type Options = TagOptions;
    const NAME: &'static str = "tag";

    fn new(_context: &RenderContext, options: TagOptions) -> Result<Self> {
        let normalized = normalize(&options.options);
        let content = Content::pick(options.text.as_deref(), options.html.as_deref())
            .ok_or_else(|| Error::missing_field(DEFAULTS.name, "text"))?;

        let mut classes = DEFAULTS.class_list();
        if let Some(colour) = options.colour {
            // the colour occupies the base slot rather than trailing it
            classes = classes.replace_base(1, ["govuk-tag", colour.class()]);
        }
        let class = classes.caller(&normalized.classes).compose();

        Ok(Self {
            content,
            attributes: DEFAULTS.finish(class, Attributes::new(), &normalized.attributes)?,
        })
    }

    fn render_to(&self, out: &mut Markup) {
        out.open("strong", &self.attributes);
        out.content(&self.content);
        out.close("strong");
    }
}
