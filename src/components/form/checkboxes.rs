use serde::Deserialize;

use super::choices::{Choices, ChoicesOptions, Variant};
use super::field::Field;
use crate::component::Component;
use crate::context::RenderContext;
use crate::error::Result;
use crate::markup::Markup;
use crate::options::{ComponentDefaults, OwnedAttribute};

static CHECKBOXES: Variant = Variant {
    defaults: ComponentDefaults {
        name: "checkboxes",
        base_classes: &["govuk-checkboxes"],
        owned_attributes: &[OwnedAttribute::Data("module", "govuk-checkboxes")],
    },
    input_type: "checkbox",
    item: "govuk-checkboxes__item",
    input: "govuk-checkboxes__input",
    label: "govuk-checkboxes__label",
    hint: "govuk-checkboxes__hint",
    conditional: "govuk-checkboxes__conditional",
    conditional_hidden: "govuk-checkboxes__conditional--hidden",
    divider: "govuk-checkboxes__divider",
    inline: "govuk-checkboxes--inline",
    small: "govuk-checkboxes--small",
    exclusive: true,
};

#[derive(Debug, Clone, Deserialize)]
pub struct CheckboxesOptions {
    #[serde(flatten)]
    pub choices: ChoicesOptions,
    /// The submitted values; every matching item is checked
    #[serde(default)]
    pub values: Vec<String>,
}

/// A multiple-choice list of checkboxes
#[derive(Debug, Clone)]
pub struct Checkboxes(Choices);

impl Checkboxes {
    pub fn field(&self) -> &Field {
        self.0.field()
    }
}

impl Component for Checkboxes {
    type Options = CheckboxesOptions;
    const NAME: &'static str = "checkboxes";

    fn new(context: &RenderContext, options: CheckboxesOptions) -> Result<Self> {
        Choices::build(&CHECKBOXES, context, options.choices, &options.values).map(Checkboxes)
    }

    fn render_to(&self, out: &mut Markup) {
        self.0.render_to(out);
    }
}
