use serde::Deserialize;

use super::field::{Field, FieldLayout, FieldOptions};
use crate::attributes::Attributes;
use crate::component::Component;
use crate::context::RenderContext;
use crate::error::{Error, Result};
use crate::markup::Markup;
use crate::options::{ComponentDefaults, Options};

const DEFAULTS: ComponentDefaults = ComponentDefaults {
    name: "textarea",
    base_classes: &["govuk-textarea"],
    owned_attributes: &[],
};

pub(crate) fn default_rows() -> u32 {
    5
}

#[derive(Debug, Clone, Deserialize)]
pub struct TextareaOptions {
    #[serde(flatten)]
    pub field: FieldOptions,
    #[serde(default = "default_rows")]
    pub rows: u32,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub autocomplete: Option<String>,
    #[serde(default)]
    pub spellcheck: Option<bool>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(flatten)]
    pub options: Options,
}

impl TextareaOptions {
    pub fn new(field: FieldOptions) -> Self {
        Self {
            field,
            rows: default_rows(),
            value: None,
            autocomplete: None,
            spellcheck: None,
            disabled: false,
            options: Options::default(),
        }
    }
}

/// A multi-line text field
#[derive(Debug, Clone)]
pub struct Textarea {
    field: Field,
    value: Option<String>,
    attributes: Attributes,
}

impl Textarea {
    /// Build with extra ids leading `aria-describedby` and extra classes
    /// ahead of the caller's (used by the character count)
    pub(crate) fn build(
        context: &RenderContext,
        options: TextareaOptions,
        leading_ids: Option<&str>,
        modifier: Option<&'static str>,
    ) -> Result<Self> {
        if options.rows == 0 {
            return Err(Error::config_static("textarea: rows must be at least 1"));
        }

        let (field, normalized) = Field::prepare(
            context,
            options.field,
            &options.options,
            FieldLayout::Label,
            leading_ids,
        )?;

        let class = DEFAULTS
            .class_list()
            .modifier_opt(modifier)
            .modifier_if(field.has_error(), "govuk-textarea--error")
            .caller(&normalized.classes)
            .compose();

        let mut owned = Attributes::new()
            .with("id", field.id())
            .with("name", field.name())
            .with("rows", options.rows);
        if let Some(spellcheck) = options.spellcheck {
            owned.insert("spellcheck", if spellcheck { "true" } else { "false" });
        }
        if let Some(autocomplete) = &options.autocomplete {
            owned.insert("autocomplete", autocomplete);
        }
        if options.disabled {
            owned.insert("disabled", true);
        }

        let attributes = DEFAULTS.finish(class, owned, &normalized.attributes)?;

        Ok(Self {
            field,
            value: options.value,
            attributes,
        })
    }

    pub fn field(&self) -> &Field {
        &self.field
    }
}

impl Component for Textarea {
    type Options = TextareaOptions;
    const NAME: &'static str = "textarea";

    fn new(context: &RenderContext, options: TextareaOptions) -> Result<Self> {
        Self::build(context, options, None, None)
    }

    fn render_to(&self, out: &mut Markup) {
        self.field.render_with(out, |out| {
            out.open("textarea", &self.attributes);
            if let Some(value) = &self.value {
                out.text(value);
            }
            out.close("textarea");
        });
    }
}
