use serde::Deserialize;

use super::heading_tag;
use crate::attributes::Attributes;
use crate::classes::ClassList;
use crate::component::Component;
use crate::context::RenderContext;
use crate::error::{Error, Result};
use crate::markup::Markup;
use crate::options::{normalize, ComponentDefaults, Content, Options, OwnedAttribute};

const DEFAULTS: ComponentDefaults = ComponentDefaults {
    name: "accordion",
    base_classes: &["govuk-accordion"],
    owned_attributes: &[OwnedAttribute::Data("module", "govuk-accordion")],
};

fn default_heading_level() -> u8 {
    2
}

/// Text or HTML for one part of a section
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ContentOptions {
    pub text: Option<String>,
    pub html: Option<String>,
}

impl ContentOptions {
    fn content(&self) -> Option<Content> {
        Content::pick(self.text.as_deref(), self.html.as_deref())
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AccordionSectionOptions {
    pub heading: ContentOptions,
    pub summary: Option<ContentOptions>,
    pub content: ContentOptions,
    pub expanded: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AccordionOptions {
    /// Prefix of every section id; must be unique on the page
    pub id: String,
    #[serde(default = "default_heading_level")]
    pub heading_level: u8,
    #[serde(default)]
    pub items: Vec<AccordionSectionOptions>,
    #[serde(default)]
    pub remember_expanded: Option<bool>,
    #[serde(flatten)]
    pub options: Options,
}

#[derive(Debug, Clone)]
struct Section {
    class: String,
    heading_id: String,
    heading: Content,
    summary: Option<(String, Content)>,
    content: Content,
    content_attributes: Attributes,
}

#[derive(Debug, Clone)]
pub struct Accordion {
    heading: &'static str,
    sections: Vec<Section>,
    attributes: Attributes,
}

fn build_section(id: &str, index: usize, section: AccordionSectionOptions) -> Result<Section> {
    let number = index + 1;
    let heading = section.heading.content().ok_or_else(|| {
        Error::missing_field(DEFAULTS.name, format!("items[{}].heading.text", index))
    })?;
    let content = section.content.content().ok_or_else(|| {
        Error::missing_field(DEFAULTS.name, format!("items[{}].content.text", index))
    })?;

    let heading_id = format!("{}-heading-{}", id, number);
    let summary = section
        .summary
        .as_ref()
        .and_then(ContentOptions::content)
        .map(|summary| (format!("{}-summary-{}", id, number), summary));

    let content_attributes = Attributes::new()
        .with("id", format!("{}-content-{}", id, number))
        .with("class", "govuk-accordion__section-content")
        .with_aria("labelledby", heading_id.as_str());

    Ok(Section {
        class: ClassList::new(&["govuk-accordion__section"])
            .modifier_if(section.expanded, "govuk-accordion__section--expanded")
            .compose(),
        heading_id,
        heading,
        summary,
        content,
        content_attributes,
    })
}

impl Component for Accordion {
    type Options = AccordionOptions;
    const NAME: &'static str = "accordion";

    fn new(_context: &RenderContext, options: AccordionOptions) -> Result<Self> {
        let normalized = normalize(&options.options);
        if options.id.trim().is_empty() {
            return Err(Error::missing_field(DEFAULTS.name, "id"));
        }
        let heading = heading_tag(DEFAULTS.name, options.heading_level)?;

        let class = DEFAULTS.class_list().caller(&normalized.classes).compose();
        let mut owned = Attributes::new().with("id", options.id.as_str());
        if let Some(remember) = options.remember_expanded {
            owned.insert_namespaced("data", "remember-expanded", remember);
        }
        let attributes = DEFAULTS.finish(class, owned, &normalized.attributes)?;

        let sections = options
            .items
            .into_iter()
            .enumerate()
            .map(|(index, section)| build_section(&options.id, index, section))
            .collect::<Result<Vec<_>>>()?;

        tracing::trace!("Accordion {} built with {} sections", options.id, sections.len());

        Ok(Self {
            heading,
            sections,
            attributes,
        })
    }

    fn render_to(&self, out: &mut Markup) {
        out.open("div", &self.attributes);
        for section in &self.sections {
            out.open_class("div", &section.class);
            out.open_class("div", "govuk-accordion__section-header");
            out.open_class(self.heading, "govuk-accordion__section-heading");
            out.open(
                "span",
                &Attributes::new()
                    .with("class", "govuk-accordion__section-button")
                    .with("id", section.heading_id.as_str()),
            );
            out.content(&section.heading);
            out.close("span");
            out.close(self.heading);
            if let Some((id, summary)) = &section.summary {
                out.open(
                    "div",
                    &Attributes::new()
                        .with("class", "govuk-accordion__section-summary govuk-body")
                        .with("id", id.as_str()),
                );
                out.content(summary);
                out.close("div");
            }
            out.close("div");
            out.element("div", &section.content_attributes, |out| {
                out.content(&section.content)
            });
            out.close("div");
        }
        out.close("div");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_accordion_wires_section_ids() {
        let accordion = Accordion::from_json(
            &RenderContext::default(),
            json!({
                "id": "faq",
                "items": [
                    {
                        "heading": {"text": "Writing well"},
                        "summary": {"text": "Introduction"},
                        "content": {"html": "<p class=\"govuk-body\">Content</p>"},
                        "expanded": true
                    }
                ]
            }),
        )
        .unwrap();

        assert_eq!(
            accordion.render(),
            concat!(
                r#"<div class="govuk-accordion" data-module="govuk-accordion" id="faq">"#,
                r#"<div class="govuk-accordion__section govuk-accordion__section--expanded">"#,
                r#"<div class="govuk-accordion__section-header">"#,
                r#"<h2 class="govuk-accordion__section-heading">"#,
                r#"<span class="govuk-accordion__section-button" id="faq-heading-1">Writing well</span>"#,
                r#"</h2>"#,
                r#"<div class="govuk-accordion__section-summary govuk-body" id="faq-summary-1">Introduction</div>"#,
                r#"</div>"#,
                r#"<div id="faq-content-1" class="govuk-accordion__section-content" aria-labelledby="faq-heading-1">"#,
                r#"<p class="govuk-body">Content</p></div>"#,
                r#"</div></div>"#
            )
        );
    }

    #[test]
    fn test_heading_level_is_validated() {
        let accordion = Accordion::from_json(
            &RenderContext::default(),
            json!({"id": "a", "heading_level": 3, "items": [{"heading": {"text": "H"}, "content": {"text": "C"}}]}),
        )
        .unwrap();
        assert!(accordion.render().contains("<h3 class=\"govuk-accordion__section-heading\">"));

        let err = Accordion::from_json(&RenderContext::default(), json!({"id": "a", "heading_level": 0}))
            .unwrap_err();
        assert!(matches!(err, Error::ConfigError(_)));
    }

    #[test]
    fn test_accordion_requires_id_and_section_heading() {
        let err = Accordion::from_json(&RenderContext::default(), json!({"items": []})).unwrap_err();
        assert!(matches!(err, Error::MissingField { ref field, .. } if field == "id"));

        let err = Accordion::from_json(
            &RenderContext::default(),
            json!({"id": "a", "items": [{"content": {"text": "C"}}]}),
        )
        .unwrap_err();
        assert!(matches!(err, Error::MissingField { ref field, .. } if field == "items[0].heading.text"));
    }

    #[test]
    fn test_remember_expanded() {
        let accordion = Accordion::from_json(
            &RenderContext::default(),
            json!({"id": "a", "remember_expanded": false}),
        )
        .unwrap();
        assert!(accordion.render().contains(r#"data-remember-expanded="false""#));
    }
}
