use serde::Deserialize;

use super::choices::{Choices, ChoicesOptions, Variant};
use super::field::Field;
use crate::component::Component;
use crate::context::RenderContext;
use crate::error::Result;
use crate::markup::Markup;
use crate::options::{ComponentDefaults, OwnedAttribute};

static RADIOS: Variant = Variant {
    defaults: ComponentDefaults {
        name: "radios",
        base_classes: &["govuk-radios"],
        owned_attributes: &[OwnedAttribute::Data("module", "govuk-radios")],
    },
    input_type: "radio",
    item: "govuk-radios__item",
    input: "govuk-radios__input",
    label: "govuk-radios__label",
    hint: "govuk-radios__hint",
    conditional: "govuk-radios__conditional",
    conditional_hidden: "govuk-radios__conditional--hidden",
    divider: "govuk-radios__divider",
    inline: "govuk-radios--inline",
    small: "govuk-radios--small",
    exclusive: false,
};

#[derive(Debug, Clone, Deserialize)]
pub struct RadiosOptions {
    #[serde(flatten)]
    pub choices: ChoicesOptions,
    /// The submitted value; the matching item is checked
    #[serde(default)]
    pub value: Option<String>,
}

/// A single-choice list of radio buttons
#[derive(Debug, Clone)]
pub struct Radios(Choices);

impl Radios {
    pub fn field(&self) -> &Field {
        self.0.field()
    }
}

impl Component for Radios {
    type Options = RadiosOptions;
    const NAME: &'static str = "radios";

    fn new(context: &RenderContext, options: RadiosOptions) -> Result<Self> {
        let checked: Vec<String> = options.value.into_iter().collect();
        Choices::build(&RADIOS, context, options.choices, &checked).map(Radios)
    }

    fn render_to(&self, out: &mut Markup) {
        self.0.render_to(out);
    }
}
