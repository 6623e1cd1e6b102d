use serde::Deserialize;

use super::error_message::ErrorMessage;
use crate::attributes::Attributes;
use crate::component::Component;
use crate::context::RenderContext;
use crate::error::Result;
use crate::markup::Markup;
use crate::options::{normalize, ComponentDefaults, Options};

const DEFAULTS: ComponentDefaults = ComponentDefaults {
    name: "form_group",
    base_classes: &["govuk-form-group"],
    owned_attributes: &[],
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FormGroupOptions {
    /// Body for a standalone form group
    pub html: Option<String>,
    /// Render in the error state without an attached message
    pub error: bool,
    #[serde(flatten)]
    pub options: Options,
}

/// Wrapper around a field; owns the field's error message
#[derive(Debug, Clone)]
pub struct FormGroup {
    error_message: Option<ErrorMessage>,
    body: Option<String>,
    attributes: Attributes,
}

impl FormGroup {
    pub(crate) fn for_field(
        options: FormGroupOptions,
        error_message: Option<ErrorMessage>,
    ) -> Result<Self> {
        let normalized = normalize(&options.options);
        let class = DEFAULTS
            .class_list()
            .modifier_if(
                options.error || error_message.is_some(),
                "govuk-form-group--error",
            )
            .caller(&normalized.classes)
            .compose();

        Ok(Self {
            error_message,
            body: options.html,
            attributes: DEFAULTS.finish(class, Attributes::new(), &normalized.attributes)?,
        })
    }

    pub fn error_message(&self) -> Option<&ErrorMessage> {
        self.error_message.as_ref()
    }

    pub fn has_error(&self) -> bool {
        self.error_message.is_some()
    }

    /// Render the group with `body` inside it
    pub fn render_with<F>(&self, out: &mut Markup, body: F)
    where
        F: FnOnce(&mut Markup),
    {
        out.element("div", &self.attributes, body);
    }
}

impl Component for FormGroup {
    type Options = FormGroupOptions;
    const NAME: &'static str = "form_group";

    fn new(_context: &RenderContext, options: FormGroupOptions) -> Result<Self> {
        Self::for_field(options, None)
    }

    fn render_to(&self, out: &mut Markup) {
        self.render_with(out, |out| {
            if let Some(body) = &self.body {
                out.raw(body);
            }
        });
    }
}
