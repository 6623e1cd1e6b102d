use serde::Deserialize;

use crate::attributes::Attributes;
use crate::component::Component;
use crate::context::RenderContext;
use crate::error::{Error, Result};
use crate::markup::Markup;
use crate::options::{merge_owned, normalize, ComponentDefaults, Content, Options};

const DEFAULTS: ComponentDefaults = ComponentDefaults {
    name: "breadcrumbs",
    base_classes: &["govuk-breadcrumbs"],
    owned_attributes: &[],
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BreadcrumbItemOptions {
    pub text: Option<String>,
    pub html: Option<String>,
    /// Items without a link are the current page
    pub href: Option<String>,
    pub attributes: Attributes,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct BreadcrumbsOptions {
    pub items: Vec<BreadcrumbItemOptions>,
    pub collapse_on_mobile: bool,
    #[serde(flatten)]
    pub options: Options,
}

#[derive(Debug, Clone)]
struct Crumb {
    content: Content,
    link: Option<Attributes>,
}

#[derive(Debug, Clone)]
pub struct Breadcrumbs {
    items: Vec<Crumb>,
    attributes: Attributes,
}

impl Component for Breadcrumbs {
    type Options = BreadcrumbsOptions;
    const NAME: &'static str = "breadcrumbs";

    fn new(_context: &RenderContext, options: BreadcrumbsOptions) -> Result<Self> {
        let normalized = normalize(&options.options);
        let class = DEFAULTS
            .class_list()
            .modifier_if(options.collapse_on_mobile, "govuk-breadcrumbs--collapse-on-mobile")
            .caller(&normalized.classes)
            .compose();

        let items = options
            .items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                let content = Content::pick(item.text.as_deref(), item.html.as_deref())
                    .ok_or_else(|| {
                        Error::missing_field(DEFAULTS.name, format!("items[{}].text", index))
                    })?;
                let link = match &item.href {
                    Some(href) => Some(merge_owned(
                        Attributes::new()
                            .with("class", "govuk-breadcrumbs__link")
                            .with("href", href),
                        &item.attributes.normalized(),
                    )?),
                    None => None,
                };
                Ok(Crumb { content, link })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            items,
            attributes: DEFAULTS.finish(class, Attributes::new(), &normalized.attributes)?,
        })
    }

    fn render_to(&self, out: &mut Markup) {
        out.open("div", &self.attributes);
        out.open_class("ol", "govuk-breadcrumbs__list");
        for item in &self.items {
            match &item.link {
                Some(link) => {
                    out.open_class("li", "govuk-breadcrumbs__list-item");
                    out.open("a", link);
                    out.content(&item.content);
                    out.close("a");
                }
                None => {
                    out.open(
                        "li",
                        &Attributes::new()
                            .with("class", "govuk-breadcrumbs__list-item")
                            .with("aria-current", "page"),
                    );
                    out.content(&item.content);
                }
            }
            out.close("li");
        }
        out.close("ol");
        out.close("div");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_breadcrumbs() {
        let breadcrumbs = Breadcrumbs::from_json(
            &RenderContext::default(),
            json!({
                "collapse_on_mobile": true,
                "items": [
                    {"text": "Home", "href": "/"},
                    {"text": "Passports, travel and living abroad"}
                ]
            }),
        )
        .unwrap();
        assert_eq!(
            breadcrumbs.render(),
            concat!(
                r#"<div class="govuk-breadcrumbs govuk-breadcrumbs--collapse-on-mobile">"#,
                r#"<ol class="govuk-breadcrumbs__list">"#,
                r#"<li class="govuk-breadcrumbs__list-item"><a class="govuk-breadcrumbs__link" href="/">Home</a></li>"#,
                r#"<li class="govuk-breadcrumbs__list-item" aria-current="page">Passports, travel and living abroad</li>"#,
                r#"</ol></div>"#
            )
        );
    }
}
