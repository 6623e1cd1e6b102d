use serde::Deserialize;

use crate::attributes::Attributes;
use crate::component::Component;
use crate::context::RenderContext;
use crate::error::{Error, Result};
use crate::markup::Markup;
use crate::options::{merge_owned, normalize, ComponentDefaults, Content, Options, OwnedAttribute};

const DEFAULTS: ComponentDefaults = ComponentDefaults {
    name: "error_summary",
    base_classes: &["govuk-error-summary"],
    owned_attributes: &[OwnedAttribute::Data("module", "govuk-error-summary")],
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ErrorLinkOptions {
    pub text: Option<String>,
    pub html: Option<String>,
    pub href: Option<String>,
    pub attributes: Attributes,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ErrorSummaryOptions {
    pub title_text: Option<String>,
    pub title_html: Option<String>,
    pub description_text: Option<String>,
    pub description_html: Option<String>,
    /// Explicit list; when empty the context's field errors are listed
    pub error_list: Vec<ErrorLinkOptions>,
    pub disable_auto_focus: Option<bool>,
    #[serde(flatten)]
    pub options: Options,
}

#[derive(Debug, Clone)]
struct ErrorLink {
    content: Content,
    link: Option<Attributes>,
}

/// The list of errors shown at the top of a page
#[derive(Debug, Clone)]
pub struct ErrorSummary {
    title: Content,
    description: Option<Content>,
    errors: Vec<ErrorLink>,
    attributes: Attributes,
}

impl ErrorSummary {
    /// Number of errors listed
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }
}

fn explicit_errors(error_list: Vec<ErrorLinkOptions>) -> Result<Vec<ErrorLink>> {
    error_list
        .into_iter()
        .enumerate()
        .map(|(index, error)| {
            let content = Content::pick(error.text.as_deref(), error.html.as_deref())
                .ok_or_else(|| {
                    Error::missing_field(DEFAULTS.name, format!("error_list[{}].text", index))
                })?;
            let link = match &error.href {
                Some(href) => Some(merge_owned(
                    Attributes::new().with("href", href),
                    &error.attributes.normalized(),
                )?),
                None => None,
            };
            Ok(ErrorLink { content, link })
        })
        .collect()
}

fn context_errors(context: &RenderContext) -> Vec<ErrorLink> {
    context
        .field_errors()
        .map(|(attribute, message)| ErrorLink {
            content: Content::Text(message.to_string()),
            link: Some(Attributes::new().with("href", format!("#{}", attribute))),
        })
        .collect()
}

impl Component for ErrorSummary {
    type Options = ErrorSummaryOptions;
    const NAME: &'static str = "error_summary";

    fn new(context: &RenderContext, options: ErrorSummaryOptions) -> Result<Self> {
        let normalized = normalize(&options.options);
        let title = Content::pick(options.title_text.as_deref(), options.title_html.as_deref())
            .unwrap_or_else(|| Content::Text("There is a problem".to_string()));
        let description = Content::pick(
            options.description_text.as_deref(),
            options.description_html.as_deref(),
        );

        let errors = if options.error_list.is_empty() {
            context_errors(context)
        } else {
            explicit_errors(options.error_list)?
        };
        tracing::debug!("Error summary lists {} errors", errors.len());

        let class = DEFAULTS.class_list().caller(&normalized.classes).compose();
        let mut owned = Attributes::new();
        if let Some(disable) = options.disable_auto_focus {
            owned.insert_namespaced("data", "disable-auto-focus", disable);
        }

        Ok(Self {
            title,
            description,
            errors,
            attributes: DEFAULTS.finish(class, owned, &normalized.attributes)?,
        })
    }

    fn render_to(&self, out: &mut Markup) {
        out.open("div", &self.attributes);
        out.open("div", &Attributes::new().with("role", "alert"));
        out.class_element("h2", "govuk-error-summary__title", &self.title);
        out.open_class("div", "govuk-error-summary__body");
        if let Some(description) = &self.description {
            out.class_element("p", "", description);
        }
        out.open_class("ul", "govuk-list govuk-error-summary__list");
        for error in &self.errors {
            out.open_class("li", "");
            match &error.link {
                Some(link) => out.element("a", link, |out| out.content(&error.content)),
                None => out.content(&error.content),
            }
            out.close("li");
        }
        out.close("ul");
        out.close("div");
        out.close("div");
        out.close("div");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_error_summary_from_context() {
        let context = RenderContext::new()
            .with_field_error("email", "Enter an email address")
            .with_field_error("dob", "Enter your date of birth");
        let summary = ErrorSummary::from_json(&context, json!({})).unwrap();

        assert_eq!(summary.len(), 2);
        assert_eq!(
            summary.render(),
            concat!(
                r#"<div class="govuk-error-summary" data-module="govuk-error-summary">"#,
                r#"<div role="alert">"#,
                r#"<h2 class="govuk-error-summary__title">There is a problem</h2>"#,
                r#"<div class="govuk-error-summary__body">"#,
                r#"<ul class="govuk-list govuk-error-summary__list">"#,
                r##"<li><a href="#email">Enter an email address</a></li>"##,
                r##"<li><a href="#dob">Enter your date of birth</a></li>"##,
                r#"</ul></div></div></div>"#
            )
        );
    }

    #[test]
    fn test_explicit_list_wins() {
        let context = RenderContext::new().with_field_error("email", "From the model");
        let summary = ErrorSummary::from_json(
            &context,
            json!({
                "title_text": "Check your answers",
                "description_text": "Fix the following",
                "error_list": [{"text": "Explicit", "href": "#name"}, {"text": "No link"}]
            }),
        )
        .unwrap();
        let html = summary.render();
        assert!(!html.contains("From the model"));
        assert!(html.contains(r##"<li><a href="#name">Explicit</a></li>"##));
        assert!(html.contains("<li>No link</li>"));
        assert!(html.contains("<p>Fix the following</p>"));
    }
}
