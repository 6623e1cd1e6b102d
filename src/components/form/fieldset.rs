use serde::Deserialize;

use crate::aria::join_ids;
use crate::attributes::Attributes;
use crate::classes::ClassList;
use crate::component::Component;
use crate::context::RenderContext;
use crate::error::Result;
use crate::markup::Markup;
use crate::options::{normalize, ComponentDefaults, Content, Options};

const DEFAULTS: ComponentDefaults = ComponentDefaults {
    name: "fieldset",
    base_classes: &["govuk-fieldset"],
    owned_attributes: &[],
};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct LegendOptions {
    pub text: Option<String>,
    pub html: Option<String>,
    /// Size modifiers such as `govuk-fieldset__legend--l`
    pub classes: Option<String>,
    /// Wrap the legend content in an `h1`
    pub is_page_heading: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct FieldsetOptions {
    pub legend: Option<LegendOptions>,
    /// Ids described by this fieldset, ahead of any hint or error
    pub described_by: Option<String>,
    pub role: Option<String>,
    /// Body for a standalone fieldset
    pub html: Option<String>,
    #[serde(flatten)]
    pub options: Options,
}

#[derive(Debug, Clone)]
struct Legend {
    content: Content,
    class: String,
    is_page_heading: bool,
}

#[derive(Debug, Clone)]
pub struct Fieldset {
    legend: Option<Legend>,
    body: Option<String>,
    attributes: Attributes,
}

impl Fieldset {
    /// Build the fieldset of a field
    ///
    /// `wired` holds the hint and error ids the parent field exposes; they are
    /// appended after the caller's `described_by`. `role` is forced when the
    /// parent needs one (`group` for date inputs) unless the caller set it.
    pub(crate) fn for_field(
        options: FieldsetOptions,
        wired: &[Option<&str>],
        role: Option<&'static str>,
    ) -> Result<Self> {
        let normalized = normalize(&options.options);
        let class = DEFAULTS.class_list().caller(&normalized.classes).compose();

        let described_by = join_ids(
            std::iter::once(options.described_by.as_deref()).chain(wired.iter().copied()),
        );
        tracing::trace!("Fieldset aria-describedby: {:?}", described_by);

        let mut owned = Attributes::new();
        if let Some(role) = options.role.as_deref().or(role) {
            owned.insert("role", role);
        }
        if let Some(described_by) = described_by {
            owned.insert_namespaced("aria", "describedby", described_by);
        }

        let legend = options.legend.and_then(|legend| {
            let content = Content::pick(legend.text.as_deref(), legend.html.as_deref())?;
            Some(Legend {
                content,
                class: ClassList::new(&["govuk-fieldset__legend"])
                    .caller(legend.classes.as_deref().unwrap_or_default())
                    .compose(),
                is_page_heading: legend.is_page_heading,
            })
        });

        Ok(Self {
            legend,
            body: options.html,
            attributes: DEFAULTS.finish(class, owned, &normalized.attributes)?,
        })
    }

    /// Render the fieldset with `body` as its content after the legend
    pub fn render_with<F>(&self, out: &mut Markup, body: F)
    where
        F: FnOnce(&mut Markup),
    {
        out.open("fieldset", &self.attributes);
        if let Some(legend) = &self.legend {
            out.open_class("legend", &legend.class);
            if legend.is_page_heading {
                out.class_element("h1", "govuk-fieldset__heading", &legend.content);
            } else {
                out.content(&legend.content);
            }
            out.close("legend");
        }
        body(out);
        out.close("fieldset");
    }
}

impl Component for Fieldset {
    type Options = FieldsetOptions;
    const NAME: &'static str = "fieldset";

    fn new(_context: &RenderContext, options: FieldsetOptions) -> Result<Self> {
        Self::for_field(options, &[], None)
    }

    fn render_to(&self, out: &mut Markup) {
        self.render_with(out, |out| {
            if let Some(body) = &self.body {
                out.raw(body);
            }
        });
    }
}
