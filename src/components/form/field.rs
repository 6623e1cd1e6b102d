//! The field composite shared by every form control
//!
//! A [`Field`] owns the chrome around a control: the form group (which owns
//! the error message), the label or fieldset, and the hint. Constructing one
//! fixes every id up front, so that the control's `aria-describedby` can be
//! wired before the control finalizes its own attributes.

use serde::Deserialize;

use super::error_message::{ErrorMessage, ErrorMessageInput};
use super::fieldset::{Fieldset, FieldsetOptions};
use super::form_group::{FormGroup, FormGroupOptions};
use super::hint::{Hint, HintOptions};
use super::label::{Label, LabelOptions};
use crate::aria::{compute_described_by, FieldIds, IdList};
use crate::component::Component;
use crate::context::RenderContext;
use crate::error::Result;
use crate::markup::Markup;
use crate::options::{normalize, NormalizedOptions, Options};

/// Options common to every field
#[derive(Debug, Clone, Deserialize)]
pub struct FieldOptions {
    /// The model attribute; default source of the id, name and child ids
    pub attribute: String,
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub label: Option<LabelOptions>,
    #[serde(default)]
    pub fieldset: Option<FieldsetOptions>,
    #[serde(default)]
    pub hint: Option<HintOptions>,
    #[serde(default)]
    pub error_message: Option<ErrorMessageInput>,
    #[serde(default)]
    pub form_group: FormGroupOptions,
}

impl FieldOptions {
    pub fn new(attribute: impl Into<String>) -> Self {
        Self {
            attribute: attribute.into(),
            id: None,
            name: None,
            label: None,
            fieldset: None,
            hint: None,
            error_message: None,
            form_group: FormGroupOptions::default(),
        }
    }

    pub fn with_label(mut self, text: impl Into<String>) -> Self {
        self.label = Some(LabelOptions::text(text));
        self
    }

    pub fn with_hint(mut self, text: impl Into<String>) -> Self {
        self.hint = Some(HintOptions::text(text));
        self
    }

    pub fn with_error_message(mut self, text: impl Into<String>) -> Self {
        self.error_message = Some(ErrorMessageInput::Text(text.into()));
        self
    }

    pub fn with_legend(mut self, text: impl Into<String>) -> Self {
        let mut fieldset = self.fieldset.take().unwrap_or_default();
        fieldset.legend = Some(super::fieldset::LegendOptions {
            text: Some(text.into()),
            ..Default::default()
        });
        self.fieldset = Some(fieldset);
        self
    }
}

/// How a field labels its control
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldLayout {
    /// A single control with a `label`
    Label,
    /// A group of controls inside an optional `fieldset`
    Fieldset { role: Option<&'static str> },
}

#[derive(Debug, Clone)]
pub struct Field {
    id: String,
    name: String,
    form_group: FormGroup,
    label: Option<Label>,
    fieldset: Option<Fieldset>,
    hint: Option<Hint>,
    described_by: Option<String>,
}

impl Field {
    /// Construct the field's children and wire their ids
    ///
    /// `caller_described_by` leads the control's `aria-describedby`. With a
    /// fieldset present the hint and error ids go on the fieldset instead and
    /// the control keeps only the caller's ids.
    pub fn new(
        context: &RenderContext,
        options: FieldOptions,
        layout: FieldLayout,
        caller_described_by: Option<&str>,
    ) -> Result<Self> {
        let attribute = options.attribute;
        let id = options.id.unwrap_or_else(|| attribute.clone());
        let name = options.name.unwrap_or_else(|| attribute.clone());
        let ids = FieldIds::for_attribute(&attribute);

        let hint = Hint::optional_for_field(options.hint, &ids.hint, None)?;
        let error_message =
            ErrorMessage::for_field(context, options.error_message, &attribute, &ids.error)?;

        let hint_id = hint.as_ref().and_then(Hint::id);
        let error_id = error_message.as_ref().and_then(ErrorMessage::id);

        let (label, fieldset, described_by) = match layout {
            FieldLayout::Label => {
                let label = options
                    .label
                    .map(|label| Label::for_control(label, &id, None))
                    .transpose()?;
                (label, None, compute_described_by(caller_described_by, hint_id, error_id))
            }
            FieldLayout::Fieldset { role } => match options.fieldset {
                Some(fieldset) => {
                    let fieldset = Fieldset::for_field(fieldset, &[hint_id, error_id], role)?;
                    (None, Some(fieldset), IdList::new().push(caller_described_by).finish())
                }
                None => (None, None, compute_described_by(caller_described_by, hint_id, error_id)),
            },
        };

        tracing::trace!(
            "Field {} wired: hint={:?} error={:?} describedby={:?}",
            id,
            hint_id,
            error_id,
            described_by
        );

        let form_group = FormGroup::for_field(options.form_group, error_message)?;

        Ok(Self {
            id,
            name,
            form_group,
            label,
            fieldset,
            hint,
            described_by,
        })
    }

    /// Shared first half of every single-control component
    ///
    /// Normalizes the control's own options, lifts the caller's
    /// `aria-describedby` out of them, builds the field, and puts the wired
    /// value back as a caller-supplied attribute.
    pub(crate) fn prepare(
        context: &RenderContext,
        field: FieldOptions,
        options: &Options,
        layout: FieldLayout,
        leading_ids: Option<&str>,
    ) -> Result<(Field, NormalizedOptions)> {
        let mut normalized = normalize(options);
        let caller = normalized
            .attributes
            .remove_namespaced("aria", "describedby")
            .map(|value| value.to_text().into_owned());
        let caller = IdList::new()
            .push(caller.as_deref())
            .push(leading_ids)
            .finish();

        let field = Field::new(context, field, layout, caller.as_deref())?;
        if let Some(described_by) = field.described_by() {
            normalized
                .attributes
                .insert_namespaced("aria", "describedby", described_by);
        }
        Ok((field, normalized))
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The control's wired `aria-describedby`
    pub fn described_by(&self) -> Option<&str> {
        self.described_by.as_deref()
    }

    pub fn has_error(&self) -> bool {
        self.form_group.has_error()
    }

    pub fn hint_id(&self) -> Option<&str> {
        self.hint.as_ref().and_then(Hint::id)
    }

    pub fn error_id(&self) -> Option<&str> {
        self.form_group.error_message().and_then(ErrorMessage::id)
    }

    /// Render the field chrome with `control` in place of the control
    pub fn render_with<F>(&self, out: &mut Markup, control: F)
    where
        F: FnOnce(&mut Markup),
    {
        self.form_group.render_with(out, |out| match &self.fieldset {
            Some(fieldset) => fieldset.render_with(out, |out| self.render_inner(out, control)),
            None => {
                if let Some(label) = &self.label {
                    label.render_to(out);
                }
                self.render_inner(out, control);
            }
        });
    }

    fn render_inner<F>(&self, out: &mut Markup, control: F)
    where
        F: FnOnce(&mut Markup),
    {
        if let Some(hint) = &self.hint {
            hint.render_to(out);
        }
        if let Some(error_message) = self.form_group.error_message() {
            error_message.render_to(out);
        }
        control(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn render(field: &Field) -> String {
        let mut out = Markup::new();
        field.render_with(&mut out, |out| out.raw("<input>"));
        out.into_string()
    }

    #[test]
    fn test_ids_derive_from_attribute() {
        let options = FieldOptions::new("email")
            .with_hint("We will only use this to contact you")
            .with_error_message("Enter an email");
        let field = Field::new(&RenderContext::default(), options, FieldLayout::Label, None).unwrap();

        assert_eq!(field.id(), "email");
        assert_eq!(field.name(), "email");
        assert_eq!(field.hint_id(), Some("email-hint"));
        assert_eq!(field.error_id(), Some("email-error"));
        assert_eq!(field.described_by(), Some("email-hint email-error"));
        assert!(field.has_error());
    }

    #[test]
    fn test_id_override_does_not_move_child_ids() {
        let mut options = FieldOptions::new("email").with_hint("x");
        options.id = Some("contact-email".into());
        let field = Field::new(&RenderContext::default(), options, FieldLayout::Label, None).unwrap();
        assert_eq!(field.id(), "contact-email");
        assert_eq!(field.hint_id(), Some("email-hint"));
    }

    #[test]
    fn test_caller_ids_lead() {
        let options = FieldOptions::new("email").with_error_message("Enter an email");
        let field =
            Field::new(&RenderContext::default(), options, FieldLayout::Label, Some("custom")).unwrap();
        assert_eq!(field.described_by(), Some("custom email-error"));
    }

    #[test]
    fn test_context_error_used_when_no_explicit_message() {
        let context = RenderContext::new().with_field_error("email", "Email is taken");
        let field = Field::new(&context, FieldOptions::new("email"), FieldLayout::Label, None).unwrap();
        assert_eq!(field.described_by(), Some("email-error"));
        assert!(render(&field).contains("Email is taken"));
    }

    #[test]
    fn test_label_layout_render_order() {
        let options = FieldOptions::new("email")
            .with_label("Email address")
            .with_hint("Hint")
            .with_error_message("Enter an email");
        let field = Field::new(&RenderContext::default(), options, FieldLayout::Label, None).unwrap();

        assert_eq!(
            render(&field),
            concat!(
                r#"<div class="govuk-form-group govuk-form-group--error">"#,
                r#"<label class="govuk-label" for="email">Email address</label>"#,
                r#"<div class="govuk-hint" id="email-hint">Hint</div>"#,
                r#"<p class="govuk-error-message" id="email-error"><span class="govuk-visually-hidden">Error:</span> Enter an email</p>"#,
                r#"<input></div>"#
            )
        );
    }

    #[test]
    fn test_fieldset_layout_moves_ids_to_fieldset() {
        let options = FieldOptions::new("contact")
            .with_legend("How should we contact you?")
            .with_hint("Select one option");
        let field = Field::new(
            &RenderContext::default(),
            options,
            FieldLayout::Fieldset { role: None },
            None,
        )
        .unwrap();

        assert_eq!(field.described_by(), None);
        let html = render(&field);
        assert!(html.contains(r#"<fieldset class="govuk-fieldset" aria-describedby="contact-hint">"#));
        assert!(html.contains(r#"<legend class="govuk-fieldset__legend">How should we contact you?</legend>"#));
    }

    #[test]
    fn test_fieldset_layout_without_fieldset_keeps_ids_on_control() {
        let options = FieldOptions::new("terms").with_hint("Read them first");
        let field = Field::new(
            &RenderContext::default(),
            options,
            FieldLayout::Fieldset { role: None },
            None,
        )
        .unwrap();
        assert_eq!(field.described_by(), Some("terms-hint"));
    }

    #[test]
    fn test_prepare_lifts_caller_described_by() {
        let options = Options::new().with_attributes(
            crate::attributes::Attributes::new().with("aria-describedby", "mine"),
        );
        let (field, normalized) = Field::prepare(
            &RenderContext::default(),
            FieldOptions::new("email").with_hint("x"),
            &options,
            FieldLayout::Label,
            Some("email-info"),
        )
        .unwrap();
        assert_eq!(field.described_by(), Some("mine email-info email-hint"));
        assert_eq!(
            normalized
                .attributes
                .get_namespaced("aria", "describedby")
                .and_then(|v| v.as_str()),
            Some("mine email-info email-hint")
        );
    }
}
