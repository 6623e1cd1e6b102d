use serde::Deserialize;

use super::heading_tag;
use crate::attributes::Attributes;
use crate::component::Component;
use crate::context::RenderContext;
use crate::error::{Error, Result};
use crate::markup::Markup;
use crate::options::{normalize, ComponentDefaults, Content, Options, OwnedAttribute};

const DEFAULTS: ComponentDefaults = ComponentDefaults {
    name: "notification_banner",
    base_classes: &["govuk-notification-banner"],
    owned_attributes: &[OwnedAttribute::Data("module", "govuk-notification-banner")],
};

fn default_title_id() -> String {
    "govuk-notification-banner-title".to_string()
}

fn default_title_heading_level() -> u8 {
    2
}

#[derive(Debug, Clone, Deserialize)]
pub struct NotificationBannerOptions {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub html: Option<String>,
    #[serde(default)]
    pub title_text: Option<String>,
    #[serde(default)]
    pub title_html: Option<String>,
    #[serde(default = "default_title_id")]
    pub title_id: String,
    #[serde(default = "default_title_heading_level")]
    pub title_heading_level: u8,
    /// Green success styling; the banner becomes an alert
    #[serde(default)]
    pub success: bool,
    /// Overrides the owned `role`; `attributes.role` cannot
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub disable_auto_focus: Option<bool>,
    #[serde(flatten)]
    pub options: Options,
}

#[derive(Debug, Clone)]
pub struct NotificationBanner {
    heading: &'static str,
    title_id: String,
    title: Content,
    content: Content,
    attributes: Attributes,
}

impl Component for NotificationBanner {
    type Options = NotificationBannerOptions;
    const NAME: &'static str = "notification_banner";

    fn new(_context: &RenderContext, options: NotificationBannerOptions) -> Result<Self> {
        let normalized = normalize(&options.options);
        let content = Content::pick(options.text.as_deref(), options.html.as_deref())
            .ok_or_else(|| Error::missing_field(DEFAULTS.name, "text"))?;
        let title = Content::pick(options.title_text.as_deref(), options.title_html.as_deref())
            .unwrap_or_else(|| {
                Content::Text(if options.success { "Success" } else { "Important" }.to_string())
            });

        let class = DEFAULTS
            .class_list()
            .modifier_if(options.success, "govuk-notification-banner--success")
            .caller(&normalized.classes)
            .compose();

        let role = options
            .role
            .as_deref()
            .unwrap_or(if options.success { "alert" } else { "region" });
        let mut owned = Attributes::new()
            .with("role", role)
            .with_aria("labelledby", options.title_id.as_str());
        if let Some(disable) = options.disable_auto_focus {
            owned.insert_namespaced("data", "disable-auto-focus", disable);
        }

        Ok(Self {
            heading: heading_tag(DEFAULTS.name, options.title_heading_level)?,
            title_id: options.title_id,
            title,
            content,
            attributes: DEFAULTS.finish(class, owned, &normalized.attributes)?,
        })
    }

    fn render_to(&self, out: &mut Markup) {
        out.open("div", &self.attributes);
        out.open_class("div", "govuk-notification-banner__header");
        out.open(
            self.heading,
            &Attributes::new()
                .with("class", "govuk-notification-banner__title")
                .with("id", self.title_id.as_str()),
        );
        out.content(&self.title);
        out.close(self.heading);
        out.close("div");
        out.open_class("div", "govuk-notification-banner__content");
        match &self.content {
            Content::Text(_) => {
                out.class_element("p", "govuk-notification-banner__heading", &self.content)
            }
            Content::Html(html) => out.raw(html),
        }
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
    fn test_notification_banner() {
        let banner = NotificationBanner::from_json(
            &RenderContext::default(),
            json!({"text": "You have 7 days left to send your application."}),
        )
        .unwrap();
        assert_eq!(
            banner.render(),
            concat!(
                r#"<div class="govuk-notification-banner" data-module="govuk-notification-banner" role="region" aria-labelledby="govuk-notification-banner-title">"#,
                r#"<div class="govuk-notification-banner__header">"#,
                r#"<h2 class="govuk-notification-banner__title" id="govuk-notification-banner-title">Important</h2>"#,
                r#"</div>"#,
                r#"<div class="govuk-notification-banner__content">"#,
                r#"<p class="govuk-notification-banner__heading">You have 7 days left to send your application.</p>"#,
                r#"</div></div>"#
            )
        );
    }

    #[test]
    fn test_success_banner_is_an_alert() {
        let banner = NotificationBanner::from_json(
            &RenderContext::default(),
            json!({
                "html": "<h3 class=\"govuk-notification-banner__heading\">Training outcome recorded</h3>",
                "success": true,
                "attributes": {"role": "status"}
            }),
        )
        .unwrap();
        let html = banner.render();
        assert!(html.contains(r#"class="govuk-notification-banner govuk-notification-banner--success""#));
        assert!(html.contains(r#"role="alert""#));
        assert!(html.contains(">Success</h2>"));
        assert!(html.contains("<h3 class=\"govuk-notification-banner__heading\">Training outcome recorded</h3>"));
    }

    #[test]
    fn test_role_option_overrides_owned_role() {
        let banner = NotificationBanner::from_json(
            &RenderContext::default(),
            json!({"text": "x", "role": "status", "title_id": "my-title"}),
        )
        .unwrap();
        let html = banner.render();
        assert!(html.contains(r#"role="status""#));
        assert!(html.contains(r#"aria-labelledby="my-title""#));
        assert!(html.contains(r#"id="my-title""#));
    }
}
