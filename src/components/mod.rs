//! The component catalog
//!
//! Each component is a [`Component`] with a typed options record. [`render`]
//! is the loosely-typed entry point: it looks a component up by name and
//! builds it from JSON options.

pub mod accordion;
pub mod back_link;
pub mod breadcrumbs;
pub mod button;
pub mod details;
pub mod error_summary;
pub mod form;
pub mod inset_text;
pub mod notification_banner;
pub mod panel;
pub mod skip_link;
pub mod table;
pub mod tag;
pub mod warning_text;

pub use accordion::{Accordion, AccordionOptions, AccordionSectionOptions};
pub use back_link::{BackLink, BackLinkOptions};
pub use breadcrumbs::{BreadcrumbItemOptions, Breadcrumbs, BreadcrumbsOptions};
pub use button::{Button, ButtonElement, ButtonOptions, ButtonVariant};
pub use details::{Details, DetailsOptions};
pub use error_summary::{ErrorLinkOptions, ErrorSummary, ErrorSummaryOptions};
pub use form::*;
pub use inset_text::{InsetText, InsetTextOptions};
pub use notification_banner::{NotificationBanner, NotificationBannerOptions};
pub use panel::{Panel, PanelOptions};
pub use skip_link::{SkipLink, SkipLinkOptions};
pub use table::{Cell, CellFormat, CellOptions, Table, TableOptions};
pub use tag::{Tag, TagColour, TagOptions};
pub use warning_text::{WarningText, WarningTextOptions};

use crate::component::Component;
use crate::context::RenderContext;
use crate::error::{Error, Result};

/// Every name accepted by [`render`]
pub const COMPONENT_NAMES: &[&str] = &[
    Accordion::NAME,
    BackLink::NAME,
    Breadcrumbs::NAME,
    Button::NAME,
    CharacterCount::NAME,
    Checkboxes::NAME,
    DateInput::NAME,
    Details::NAME,
    ErrorMessage::NAME,
    ErrorSummary::NAME,
    Fieldset::NAME,
    FormGroup::NAME,
    Hint::NAME,
    Input::NAME,
    InsetText::NAME,
    Label::NAME,
    NotificationBanner::NAME,
    Panel::NAME,
    Radios::NAME,
    Select::NAME,
    SkipLink::NAME,
    Table::NAME,
    Tag::NAME,
    Textarea::NAME,
    WarningText::NAME,
];

fn build_and_render<C: Component>(context: &RenderContext, options: serde_json::Value) -> Result<String> {
    Ok(C::from_json(context, options)?.render())
}

/// Build the named component from JSON options and render it
pub fn render(name: &str, context: &RenderContext, options: serde_json::Value) -> Result<String> {
    tracing::trace!("Rendering {}", name);
    match name {
        "accordion" => build_and_render::<Accordion>(context, options),
        "back_link" => build_and_render::<BackLink>(context, options),
        "breadcrumbs" => build_and_render::<Breadcrumbs>(context, options),
        "button" => build_and_render::<Button>(context, options),
        "character_count" => build_and_render::<CharacterCount>(context, options),
        "checkboxes" => build_and_render::<Checkboxes>(context, options),
        "date_input" => build_and_render::<DateInput>(context, options),
        "details" => build_and_render::<Details>(context, options),
        "error_message" => build_and_render::<ErrorMessage>(context, options),
        "error_summary" => build_and_render::<ErrorSummary>(context, options),
        "fieldset" => build_and_render::<Fieldset>(context, options),
        "form_group" => build_and_render::<FormGroup>(context, options),
        "hint" => build_and_render::<Hint>(context, options),
        "input" => build_and_render::<Input>(context, options),
        "inset_text" => build_and_render::<InsetText>(context, options),
        "label" => build_and_render::<Label>(context, options),
        "notification_banner" => build_and_render::<NotificationBanner>(context, options),
        "panel" => build_and_render::<Panel>(context, options),
        "radios" => build_and_render::<Radios>(context, options),
        "select" => build_and_render::<Select>(context, options),
        "skip_link" => build_and_render::<SkipLink>(context, options),
        "table" => build_and_render::<Table>(context, options),
        "tag" => build_and_render::<Tag>(context, options),
        "textarea" => build_and_render::<Textarea>(context, options),
        "warning_text" => build_and_render::<WarningText>(context, options),
        _ => Err(Error::config_owned(format!("unknown component: {}", name))),
    }
}

/// Heading element for a configurable heading level
pub(crate) fn heading_tag(component: &'static str, level: u8) -> Result<&'static str> {
    match level {
        1 => Ok("h1"),
        2 => Ok("h2"),
        3 => Ok("h3"),
        4 => Ok("h4"),
        5 => Ok("h5"),
        6 => Ok("h6"),
        _ => Err(Error::config_owned(format!(
            "{}: heading_level must be between 1 and 6, got {}",
            component, level
        ))),
    }
}
