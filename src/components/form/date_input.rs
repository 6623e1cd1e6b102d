use indexmap::IndexMap;
use serde::Deserialize;

use super::field::{Field, FieldLayout, FieldOptions};
use super::label::{Label, LabelOptions};
use crate::attributes::Attributes;
use crate::component::Component;
use crate::context::RenderContext;
use crate::error::{Error, Result};
use crate::markup::Markup;
use crate::options::{normalize, ComponentDefaults, Options};

const DEFAULTS: ComponentDefaults = ComponentDefaults {
    name: "date_input",
    base_classes: &["govuk-date-input"],
    owned_attributes: &[],
};

const ITEM_INPUT: ComponentDefaults = ComponentDefaults {
    name: "date_input",
    base_classes: &["govuk-input", "govuk-date-input__input"],
    owned_attributes: &[],
};

/// One part of the date
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DateItemOptions {
    pub name: Option<String>,
    pub id: Option<String>,
    /// Label text; defaults to the capitalized name
    pub label: Option<String>,
    pub value: Option<String>,
    pub autocomplete: Option<String>,
    pub pattern: Option<String>,
    pub inputmode: Option<String>,
    #[serde(flatten)]
    pub options: Options,
}

impl DateItemOptions {
    fn part(name: &str, width: u8) -> Self {
        Self {
            name: Some(name.to_string()),
            options: Options::new().with_classes(format!("govuk-input--width-{}", width)),
            ..Self::default()
        }
    }
}

/// The day, month and year items used when none are given
pub fn default_items() -> Vec<DateItemOptions> {
    vec![
        DateItemOptions::part("day", 2),
        DateItemOptions::part("month", 2),
        DateItemOptions::part("year", 4),
    ]
}

#[derive(Debug, Clone, Deserialize)]
pub struct DateInputOptions {
    #[serde(flatten)]
    pub field: FieldOptions,
    #[serde(default)]
    pub items: Option<Vec<DateItemOptions>>,
    /// Submitted values keyed by item name, used for items without a value
    #[serde(default)]
    pub values: IndexMap<String, String>,
    #[serde(flatten)]
    pub options: Options,
}

impl DateInputOptions {
    pub fn new(field: FieldOptions) -> Self {
        Self {
            field,
            items: None,
            values: IndexMap::new(),
            options: Options::default(),
        }
    }
}

#[derive(Debug, Clone)]
struct DateItem {
    label: Label,
    attributes: Attributes,
}

/// A memorable date entered as separate day, month and year fields
#[derive(Debug, Clone)]
pub struct DateInput {
    field: Field,
    items: Vec<DateItem>,
    attributes: Attributes,
}

impl DateInput {
    pub fn field(&self) -> &Field {
        &self.field
    }
}

fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

fn build_item(
    field: &Field,
    index: usize,
    item: DateItemOptions,
    values: &IndexMap<String, String>,
) -> Result<DateItem> {
    let name = item
        .name
        .ok_or_else(|| Error::missing_field(DEFAULTS.name, format!("items[{}].name", index)))?;
    let id = item
        .id
        .unwrap_or_else(|| format!("{}-{}", field.id(), name));
    let normalized = normalize(&item.options);

    let label = Label::for_control(
        LabelOptions::text(item.label.unwrap_or_else(|| capitalize(&name))),
        &id,
        Some("govuk-date-input__label"),
    )?;

    let class = ITEM_INPUT
        .class_list()
        .caller(&normalized.classes)
        .modifier_if(field.has_error(), "govuk-input--error")
        .compose();

    let mut owned = Attributes::new()
        .with("id", id.as_str())
        .with("name", format!("{}-{}", field.name(), name))
        .with("type", "text")
        .with("inputmode", item.inputmode.as_deref().unwrap_or("numeric"));
    if let Some(value) = item.value.as_ref().or_else(|| values.get(&name)) {
        owned.insert("value", value);
    }
    if let Some(autocomplete) = &item.autocomplete {
        owned.insert("autocomplete", autocomplete);
    }
    if let Some(pattern) = &item.pattern {
        owned.insert("pattern", pattern);
    }

    Ok(DateItem {
        label,
        attributes: ITEM_INPUT.finish(class, owned, &normalized.attributes)?,
    })
}

impl Component for DateInput {
    type Options = DateInputOptions;
    const NAME: &'static str = "date_input";

    fn new(context: &RenderContext, options: DateInputOptions) -> Result<Self> {
        let normalized = normalize(&options.options);
        let field = Field::new(
            context,
            options.field,
            FieldLayout::Fieldset { role: Some("group") },
            None,
        )?;

        let class = DEFAULTS.class_list().caller(&normalized.classes).compose();
        let attributes = DEFAULTS.finish(
            class,
            Attributes::new().with("id", field.id()),
            &normalized.attributes,
        )?;

        let items = options
            .items
            .filter(|items| !items.is_empty())
            .unwrap_or_else(default_items)
            .into_iter()
            .enumerate()
            .map(|(index, item)| build_item(&field, index, item, &options.values))
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            field,
            items,
            attributes,
        })
    }

    fn render_to(&self, out: &mut Markup) {
        self.field.render_with(out, |out| {
            out.element("div", &self.attributes, |out| {
                for item in &self.items {
                    out.open_class("div", "govuk-date-input__item");
                    out.open_class("div", "govuk-form-group");
                    item.label.render_to(out);
                    out.void("input", &item.attributes);
                    out.close("div");
                    out.close("div");
                }
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_default_items() {
        let date = DateInput::from_json(
            &RenderContext::default(),
            json!({
                "attribute": "dob",
                "fieldset": {"legend": {"text": "What is your date of birth?"}},
                "hint": {"text": "For example, 31 3 1980"},
                "values": {"year": "1980"}
            }),
        )
        .unwrap();

        assert_eq!(
            date.render(),
            concat!(
                r#"<div class="govuk-form-group">"#,
                r#"<fieldset class="govuk-fieldset" role="group" aria-describedby="dob-hint">"#,
                r#"<legend class="govuk-fieldset__legend">What is your date of birth?</legend>"#,
                r#"<div class="govuk-hint" id="dob-hint">For example, 31 3 1980</div>"#,
                r#"<div class="govuk-date-input" id="dob">"#,
                r#"<div class="govuk-date-input__item"><div class="govuk-form-group">"#,
                r#"<label class="govuk-label govuk-date-input__label" for="dob-day">Day</label>"#,
                r#"<input class="govuk-input govuk-date-input__input govuk-input--width-2" id="dob-day" name="dob-day" type="text" inputmode="numeric">"#,
                r#"</div></div>"#,
                r#"<div class="govuk-date-input__item"><div class="govuk-form-group">"#,
                r#"<label class="govuk-label govuk-date-input__label" for="dob-month">Month</label>"#,
                r#"<input class="govuk-input govuk-date-input__input govuk-input--width-2" id="dob-month" name="dob-month" type="text" inputmode="numeric">"#,
                r#"</div></div>"#,
                r#"<div class="govuk-date-input__item"><div class="govuk-form-group">"#,
                r#"<label class="govuk-label govuk-date-input__label" for="dob-year">Year</label>"#,
                r#"<input class="govuk-input govuk-date-input__input govuk-input--width-4" id="dob-year" name="dob-year" type="text" inputmode="numeric" value="1980">"#,
                r#"</div></div>"#,
                r#"</div></fieldset></div>"#
            )
        );
    }

    #[test]
    fn test_error_marks_every_input() {
        let context = RenderContext::new().with_field_error("dob", "Enter a real date");
        let date = DateInput::from_json(
            &context,
            json!({"attribute": "dob", "fieldset": {"legend": {"text": "Date"}}}),
        )
        .unwrap();
        let html = date.render();
        assert_eq!(html.matches("govuk-input--error").count(), 3);
        assert!(html.contains(r#"aria-describedby="dob-error""#));
    }

    #[test]
    fn test_custom_items() {
        let date = DateInput::from_json(
            &RenderContext::default(),
            json!({
                "attribute": "expiry",
                "items": [
                    {"name": "month", "classes": "govuk-input--width-2", "value": "04"},
                    {"name": "year", "label": "Year (YYYY)", "classes": "govuk-input--width-4"}
                ]
            }),
        )
        .unwrap();
        let html = date.render();
        assert!(!html.contains("expiry-day"));
        assert!(html.contains(r#"value="04""#));
        assert!(html.contains(">Year (YYYY)</label>"));
    }

    #[test]
    fn test_item_without_name_is_rejected() {
        let err = DateInput::from_json(
            &RenderContext::default(),
            json!({"attribute": "expiry", "items": [{"label": "Month"}]}),
        )
        .unwrap_err();
        assert!(matches!(err, Error::MissingField { ref field, .. } if field == "items[0].name"));
    }
}
