use serde::Deserialize;

use super::field::{Field, FieldLayout, FieldOptions};
use crate::attributes::Attributes;
use crate::component::Component;
use crate::context::RenderContext;
use crate::error::{Error, Result};
use crate::markup::Markup;
use crate::options::{merge_owned, ComponentDefaults, Options};

const DEFAULTS: ComponentDefaults = ComponentDefaults {
    name: "select",
    base_classes: &["govuk-select"],
    owned_attributes: &[],
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SelectItemOptions {
    pub value: Option<String>,
    pub text: Option<String>,
    /// Explicit selection; otherwise an item is selected when its value
    /// matches the select's value
    pub selected: Option<bool>,
    pub disabled: bool,
    pub attributes: Attributes,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SelectOptions {
    #[serde(flatten)]
    pub field: FieldOptions,
    #[serde(default)]
    pub items: Vec<SelectItemOptions>,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(flatten)]
    pub options: Options,
}

#[derive(Debug, Clone)]
struct SelectItem {
    text: String,
    attributes: Attributes,
}

/// A drop-down list
#[derive(Debug, Clone)]
pub struct Select {
    field: Field,
    items: Vec<SelectItem>,
    attributes: Attributes,
}

impl Select {
    pub fn field(&self) -> &Field {
        &self.field
    }
}

fn build_item(index: usize, item: SelectItemOptions, value: Option<&str>) -> Result<SelectItem> {
    let text = item
        .text
        .or_else(|| item.value.clone())
        .ok_or_else(|| Error::missing_field(DEFAULTS.name, format!("items[{}].text", index)))?;

    let selected = item
        .selected
        .unwrap_or_else(|| value.is_some() && item.value.as_deref() == value);

    let mut owned = Attributes::new();
    if let Some(item_value) = &item.value {
        owned.insert("value", item_value);
    }
    if selected {
        owned.insert("selected", true);
    }
    if item.disabled {
        owned.insert("disabled", true);
    }

    let attributes = merge_owned(owned, &item.attributes.normalized())?;

    Ok(SelectItem { text, attributes })
}

impl Component for Select {
    type Options = SelectOptions;
    const NAME: &'static str = "select";

    fn new(context: &RenderContext, options: SelectOptions) -> Result<Self> {
        let (field, normalized) = Field::prepare(
            context,
            options.field,
            &options.options,
            FieldLayout::Label,
            None,
        )?;

        let class = DEFAULTS
            .class_list()
            .modifier_if(field.has_error(), "govuk-select--error")
            .caller(&normalized.classes)
            .compose();

        let mut owned = Attributes::new()
            .with("id", field.id())
            .with("name", field.name());
        if options.disabled {
            owned.insert("disabled", true);
        }
        let attributes = DEFAULTS.finish(class, owned, &normalized.attributes)?;

        let items = options
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| build_item(index, item, options.value.as_deref()))
            .collect::<Result<Vec<_>>>()?;

        tracing::trace!("Select {} built with {} items", field.id(), items.len());

        Ok(Self {
            field,
            items,
            attributes,
        })
    }

    fn render_to(&self, out: &mut Markup) {
        self.field.render_with(out, |out| {
            out.element("select", &self.attributes, |out| {
                for item in &self.items {
                    out.element("option", &item.attributes, |out| out.text(&item.text));
                }
            });
        });
    }
}
