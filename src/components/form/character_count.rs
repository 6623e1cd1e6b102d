use serde::Deserialize;

use super::hint::{Hint, HintOptions};
use super::textarea::{Textarea, TextareaOptions};
use crate::attributes::Attributes;
use crate::component::Component;
use crate::context::RenderContext;
use crate::error::{Error, Result};
use crate::markup::Markup;
use crate::options::{ComponentDefaults, OwnedAttribute};

const DEFAULTS: ComponentDefaults = ComponentDefaults {
    name: "character_count",
    base_classes: &["govuk-character-count"],
    owned_attributes: &[OwnedAttribute::Data("module", "govuk-character-count")],
};

#[derive(Debug, Clone, Deserialize)]
pub struct CharacterCountOptions {
    #[serde(flatten)]
    pub textarea: TextareaOptions,
    #[serde(default)]
    pub maxlength: Option<u32>,
    #[serde(default)]
    pub maxwords: Option<u32>,
    /// Percentage of the limit at which the count appears
    #[serde(default)]
    pub threshold: Option<u32>,
    /// Replaces the default "You can enter up to ..." message
    #[serde(default)]
    pub count_message: Option<String>,
}

/// A textarea with a live character or word count
#[derive(Debug, Clone)]
pub struct CharacterCount {
    textarea: Textarea,
    message: Hint,
    attributes: Attributes,
}

impl Component for CharacterCount {
    type Options = CharacterCountOptions;
    const NAME: &'static str = "character_count";

    fn new(context: &RenderContext, options: CharacterCountOptions) -> Result<Self> {
        let (limit, unit) = match (options.maxwords, options.maxlength) {
            (Some(words), _) => (words, "words"),
            (None, Some(length)) => (length, "characters"),
            (None, None) => return Err(Error::missing_field(DEFAULTS.name, "maxlength")),
        };

        let field = &options.textarea.field;
        let info_id = format!(
            "{}-info",
            field.id.as_deref().unwrap_or(&field.attribute)
        );

        let message = Hint::for_field(
            HintOptions::text(
                options
                    .count_message
                    .unwrap_or_else(|| format!("You can enter up to {} {}", limit, unit)),
            ),
            &info_id,
            Some("govuk-character-count__message"),
        )?;

        let textarea = Textarea::build(
            context,
            options.textarea,
            message.id(),
            Some("govuk-js-character-count"),
        )?;

        let mut owned = Attributes::new();
        if let Some(maxlength) = options.maxlength {
            owned.insert_namespaced("data", "maxlength", maxlength);
        }
        if let Some(maxwords) = options.maxwords {
            owned.insert_namespaced("data", "maxwords", maxwords);
        }
        if let Some(threshold) = options.threshold {
            owned.insert_namespaced("data", "threshold", threshold);
        }
        let attributes = DEFAULTS.finish(
            DEFAULTS.class_list().compose(),
            owned,
            &Attributes::new(),
        )?;

        Ok(Self {
            textarea,
            message,
            attributes,
        })
    }

    fn render_to(&self, out: &mut Markup) {
        out.open("div", &self.attributes);
        self.textarea.render_to(out);
        self.message.render_to(out);
        out.close("div");
    }
}
