//! Shared construction for radios and checkboxes
//!
//! Both components render a list of items inside a field laid out with a
//! fieldset. Items are either dividers or choices; a choice owns an input, a
//! label, an optional hint and an optional conditionally revealed panel.
//! Item ids are positional: the first item takes the field id, later ones
//! `<field id>-<n>` with `n` counting dividers too.

use serde::Deserialize;

use super::field::{Field, FieldLayout, FieldOptions};
use super::hint::{Hint, HintOptions};
use super::label::{Label, LabelOptions};
use crate::aria::join_ids;
use crate::attributes::Attributes;
use crate::classes::ClassList;
use crate::component::Component;
use crate::context::RenderContext;
use crate::error::{Error, Result};
use crate::markup::Markup;
use crate::options::{normalize, ComponentDefaults, Options};

/// Class names and behaviour of one choice component
#[derive(Debug)]
pub(crate) struct Variant {
    pub defaults: ComponentDefaults,
    pub input_type: &'static str,
    pub item: &'static str,
    pub input: &'static str,
    pub label: &'static str,
    pub hint: &'static str,
    pub conditional: &'static str,
    pub conditional_hidden: &'static str,
    pub divider: &'static str,
    pub inline: &'static str,
    pub small: &'static str,
    /// Whether items may declare `behaviour: exclusive`
    pub exclusive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Behaviour {
    Exclusive,
}

/// Panel revealed when its item is checked
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConditionalOptions {
    pub html: String,
}

/// One entry of `items`, as supplied
///
/// An entry with `divider` set is a divider and nothing else is read from
/// it; every other entry needs `value` and one of `text`/`html`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChoiceItemOptions {
    pub divider: Option<String>,
    pub value: Option<String>,
    pub text: Option<String>,
    pub html: Option<String>,
    pub id: Option<String>,
    pub name: Option<String>,
    pub checked: Option<bool>,
    pub disabled: bool,
    pub label: Options,
    pub hint: Option<HintOptions>,
    pub conditional: Option<ConditionalOptions>,
    pub behaviour: Option<Behaviour>,
    pub attributes: Attributes,
}

impl ChoiceItemOptions {
    pub fn new(value: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            value: Some(value.into()),
            text: Some(text.into()),
            ..Self::default()
        }
    }

    pub fn divider(text: impl Into<String>) -> Self {
        Self {
            divider: Some(text.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChoicesOptions {
    #[serde(flatten)]
    pub field: FieldOptions,
    #[serde(default)]
    pub items: Vec<ChoiceItemOptions>,
    /// Ids leading the inputs' `aria-describedby`
    #[serde(default)]
    pub described_by: Option<String>,
    #[serde(default)]
    pub inline: bool,
    #[serde(default)]
    pub small: bool,
    #[serde(flatten)]
    pub options: Options,
}

impl ChoicesOptions {
    pub fn new(field: FieldOptions, items: Vec<ChoiceItemOptions>) -> Self {
        Self {
            field,
            items,
            described_by: None,
            inline: false,
            small: false,
            options: Options::default(),
        }
    }
}

#[derive(Debug, Clone)]
struct Conditional {
    id: String,
    class: String,
    html: String,
}

#[derive(Debug, Clone)]
struct Choice {
    label: Label,
    hint: Option<Hint>,
    conditional: Option<Conditional>,
    attributes: Attributes,
}

#[derive(Debug, Clone)]
enum ChoiceItem {
    Divider(String),
    Choice(Box<Choice>),
}

/// A constructed radios or checkboxes component
#[derive(Debug, Clone)]
pub(crate) struct Choices {
    variant: &'static Variant,
    field: Field,
    items: Vec<ChoiceItem>,
    attributes: Attributes,
}

impl Choices {
    /// `checked` holds the submitted values; an item is checked when its
    /// `checked` flag says so, or else when its value is among them
    pub(crate) fn build(
        variant: &'static Variant,
        context: &RenderContext,
        options: ChoicesOptions,
        checked: &[String],
    ) -> Result<Self> {
        let component = variant.defaults.name;
        let normalized = normalize(&options.options);
        let field = Field::new(
            context,
            options.field,
            FieldLayout::Fieldset { role: None },
            options.described_by.as_deref(),
        )?;

        let class = variant
            .defaults
            .class_list()
            .modifier_if(options.inline, variant.inline)
            .modifier_if(options.small, variant.small)
            .caller(&normalized.classes)
            .compose();
        let attributes = variant
            .defaults
            .finish(class, Attributes::new(), &normalized.attributes)?;

        let items = options
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let item_id = match &item.id {
                    Some(id) => id.clone(),
                    None if index == 0 => field.id().to_string(),
                    None => format!("{}-{}", field.id(), index + 1),
                };
                build_item(variant, &field, index, item_id, item, checked)
            })
            .collect::<Result<Vec<_>>>()?;

        tracing::debug!(
            "Built {} {} with {} items",
            component,
            field.id(),
            items.len()
        );

        Ok(Self {
            variant,
            field,
            items,
            attributes,
        })
    }

    pub(crate) fn field(&self) -> &Field {
        &self.field
    }

    pub(crate) fn render_to(&self, out: &mut Markup) {
        self.field.render_with(out, |out| {
            out.element("div", &self.attributes, |out| {
                for item in &self.items {
                    match item {
                        ChoiceItem::Divider(text) => {
                            out.open_class("div", self.variant.divider);
                            out.text(text);
                            out.close("div");
                        }
                        ChoiceItem::Choice(choice) => self.render_choice(out, choice),
                    }
                }
            });
        });
    }

    fn render_choice(&self, out: &mut Markup, choice: &Choice) {
        out.open_class("div", self.variant.item);
        out.void("input", &choice.attributes);
        choice.label.render_to(out);
        if let Some(hint) = &choice.hint {
            hint.render_to(out);
        }
        out.close("div");

        if let Some(conditional) = &choice.conditional {
            out.open(
                "div",
                &Attributes::new()
                    .with("class", conditional.class.as_str())
                    .with("id", conditional.id.as_str()),
            );
            out.raw(&conditional.html);
            out.close("div");
        }
    }
}

fn build_item(
    variant: &'static Variant,
    field: &Field,
    index: usize,
    item_id: String,
    item: ChoiceItemOptions,
    checked: &[String],
) -> Result<ChoiceItem> {
    let component = variant.defaults.name;
    if let Some(divider) = item.divider {
        return Ok(ChoiceItem::Divider(divider));
    }

    let value = item
        .value
        .ok_or_else(|| Error::missing_field(component, format!("items[{}].value", index)))?;
    if item.text.is_none() && item.html.is_none() {
        return Err(Error::missing_field(component, format!("items[{}].text", index)));
    }
    if item.behaviour.is_some() && !variant.exclusive {
        return Err(Error::config_owned(format!(
            "{}: items[{}].behaviour is not supported",
            component, index
        )));
    }

    let is_checked = item
        .checked
        .unwrap_or_else(|| checked.iter().any(|c| *c == value));

    let label = Label::for_control(
        LabelOptions {
            text: item.text,
            html: item.html,
            options: item.label,
            ..LabelOptions::default()
        },
        &item_id,
        Some(variant.label),
    )?;
    let hint = Hint::optional_for_field(
        item.hint,
        &format!("{}-item-hint", item_id),
        Some(variant.hint),
    )?;
    let conditional = item
        .conditional
        .filter(|conditional| !conditional.html.is_empty())
        .map(|conditional| Conditional {
            id: format!("conditional-{}", item_id),
            class: ClassList::new(&[variant.conditional])
                .modifier_if(!is_checked, variant.conditional_hidden)
                .compose(),
            html: conditional.html,
        });

    let mut owned = Attributes::new()
        .with("id", item_id.as_str())
        .with("name", item.name.as_deref().unwrap_or(field.name()))
        .with("type", variant.input_type)
        .with("value", value);
    if is_checked {
        owned.insert("checked", true);
    }
    if item.disabled {
        owned.insert("disabled", true);
    }
    if let Some(described_by) = join_ids([field.described_by(), hint.as_ref().and_then(Hint::id)]) {
        owned.insert_namespaced("aria", "describedby", described_by);
    }
    if let Some(conditional) = &conditional {
        owned.insert_namespaced("data", "aria-controls", conditional.id.as_str());
    }
    if item.behaviour == Some(Behaviour::Exclusive) {
        owned.insert_namespaced("data", "behaviour", "exclusive");
    }

    let input = ComponentDefaults {
        name: component,
        base_classes: &[],
        owned_attributes: &[],
    };
    let attributes = input.finish(
        variant.input.to_string(),
        owned,
        &item.attributes.normalized(),
    )?;

    Ok(ChoiceItem::Choice(Box::new(Choice {
        label,
        hint,
        conditional,
        attributes,
    })))
}
