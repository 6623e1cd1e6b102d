use serde::Deserialize;

use crate::attributes::Attributes;
use crate::component::Component;
use crate::context::RenderContext;
use crate::error::{Error, Result};
use crate::markup::Markup;
use crate::options::{normalize, ComponentDefaults, Content, Options};

const DEFAULTS: ComponentDefaults = ComponentDefaults {
    name: "error_message",
    base_classes: &["govuk-error-message"],
    owned_attributes: &[],
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ErrorMessageOptions {
    pub text: Option<String>,
    pub html: Option<String>,
    pub id: Option<String>,
    /// Visually hidden prefix; defaults to the context's error prefix,
    /// an empty string drops it
    pub visually_hidden_text: Option<String>,
    #[serde(flatten)]
    pub options: Options,
}

impl ErrorMessageOptions {
    fn has_empty_content(&self) -> bool {
        Content::pick(self.text.as_deref(), self.html.as_deref()).is_some_and(|c| c.is_empty())
    }
}

/// A field's `error_message` option: a bare message or full options
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum ErrorMessageInput {
    Text(String),
    Options(ErrorMessageOptions),
}

impl From<&str> for ErrorMessageInput {
    fn from(text: &str) -> Self {
        ErrorMessageInput::Text(text.to_string())
    }
}

impl ErrorMessageInput {
    fn into_options(self) -> ErrorMessageOptions {
        match self {
            ErrorMessageInput::Text(text) => ErrorMessageOptions {
                text: Some(text),
                ..ErrorMessageOptions::default()
            },
            ErrorMessageInput::Options(options) => options,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ErrorMessage {
    id: Option<String>,
    prefix: Option<String>,
    content: Content,
    attributes: Attributes,
}

impl ErrorMessage {
    /// Resolve a field's error message
    ///
    /// An explicit `error_message` wins; otherwise the first context error
    /// recorded for `attribute` is used. An empty message counts as no
    /// message. `None` when the field has no error.
    pub(crate) fn for_field(
        context: &RenderContext,
        input: Option<ErrorMessageInput>,
        attribute: &str,
        default_id: &str,
    ) -> Result<Option<Self>> {
        let explicit = input
            .map(ErrorMessageInput::into_options)
            .filter(|options| !options.has_empty_content());
        let options = match explicit {
            Some(options) => options,
            None => match context.field_error(attribute).filter(|m| !m.is_empty()) {
                Some(message) => ErrorMessageOptions {
                    text: Some(message.to_string()),
                    ..ErrorMessageOptions::default()
                },
                None => return Ok(None),
            },
        };

        let id = options.id.clone().unwrap_or_else(|| default_id.to_string());
        Self::build(context, ErrorMessageOptions { id: Some(id), ..options }).map(Some)
    }

    fn build(context: &RenderContext, options: ErrorMessageOptions) -> Result<Self> {
        let normalized = normalize(&options.options);
        let content = Content::pick(options.text.as_deref(), options.html.as_deref())
            .ok_or_else(|| Error::missing_field(DEFAULTS.name, "text"))?;

        let prefix = options
            .visually_hidden_text
            .unwrap_or_else(|| context.error_prefix().to_string());

        let mut owned = Attributes::new();
        if let Some(id) = &options.id {
            owned.insert("id", id);
        }
        let class = DEFAULTS.class_list().caller(&normalized.classes).compose();

        Ok(Self {
            id: options.id,
            prefix: Some(prefix).filter(|p| !p.is_empty()),
            content,
            attributes: DEFAULTS.finish(class, owned, &normalized.attributes)?,
        })
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

impl Component for ErrorMessage {
    type Options = ErrorMessageOptions;
    const NAME: &'static str = "error_message";

    fn new(context: &RenderContext, options: ErrorMessageOptions) -> Result<Self> {
        Self::build(context, options)
    }

    fn render_to(&self, out: &mut Markup) {
        out.open("p", &self.attributes);
        if let Some(prefix) = &self.prefix {
            out.open_class("span", "govuk-visually-hidden");
            out.text(prefix);
            out.raw(":");
            out.close("span");
            out.raw(" ");
        }
        out.content(&self.content);
        out.close("p");
    }
}
