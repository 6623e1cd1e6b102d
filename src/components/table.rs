//! Data tables
//!
//! A [`Table`] holds an optional head row and body rows of [`Cell`] nodes.
//! Every cell decides its own element (`th` or `td`), scope and classes when
//! the table is constructed.

use serde::Deserialize;

use crate::attributes::Attributes;
use crate::classes::ClassList;
use crate::component::Component;
use crate::context::RenderContext;
use crate::error::{Error, Result};
use crate::markup::Markup;
use crate::options::{normalize, ComponentDefaults, Content, Options};

const DEFAULTS: ComponentDefaults = ComponentDefaults {
    name: "table",
    base_classes: &["govuk-table"],
    owned_attributes: &[],
};

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellFormat {
    Numeric,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct CellOptions {
    pub text: Option<String>,
    pub html: Option<String>,
    pub format: Option<CellFormat>,
    pub colspan: Option<u32>,
    pub rowspan: Option<u32>,
    #[serde(flatten)]
    pub options: Options,
}

impl CellOptions {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct TableOptions {
    pub caption: Option<String>,
    pub caption_classes: Option<String>,
    pub head: Vec<CellOptions>,
    pub rows: Vec<Vec<CellOptions>>,
    /// Render the first cell of each body row as a row header
    pub first_cell_is_header: bool,
    #[serde(flatten)]
    pub options: Options,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum CellKind {
    ColumnHeader,
    RowHeader,
    Data,
}

impl CellKind {
    fn tag(self) -> &'static str {
        match self {
            CellKind::Data => "td",
            CellKind::ColumnHeader | CellKind::RowHeader => "th",
        }
    }
}

/// One table cell
#[derive(Debug, Clone)]
pub struct Cell {
    kind: CellKind,
    content: Content,
    attributes: Attributes,
}

impl Cell {
    fn build(kind: CellKind, options: CellOptions, path: &str) -> Result<Self> {
        let normalized = normalize(&options.options);
        let content = Content::pick(options.text.as_deref(), options.html.as_deref())
            .unwrap_or_else(|| Content::Text(String::new()));

        let (base, numeric) = match kind {
            CellKind::Data => ("govuk-table__cell", "govuk-table__cell--numeric"),
            _ => ("govuk-table__header", "govuk-table__header--numeric"),
        };
        let class = ClassList::new(&[base])
            .modifier_if(options.format == Some(CellFormat::Numeric), numeric)
            .caller(&normalized.classes)
            .compose();

        let mut owned = Attributes::new();
        match kind {
            CellKind::ColumnHeader => {
                owned.insert("scope", "col");
            }
            CellKind::RowHeader => {
                owned.insert("scope", "row");
            }
            CellKind::Data => {}
        }
        for (name, span) in [("colspan", options.colspan), ("rowspan", options.rowspan)] {
            match span {
                Some(0) => {
                    return Err(Error::config_owned(format!(
                        "table: {}.{} must be at least 1",
                        path, name
                    )))
                }
                Some(span) => {
                    owned.insert(name, span);
                }
                None => {}
            }
        }

        let cell = ComponentDefaults {
            name: DEFAULTS.name,
            base_classes: &[],
            owned_attributes: &[],
        };
        Ok(Self {
            kind,
            content,
            attributes: cell.finish(class, owned, &normalized.attributes)?,
        })
    }

    fn render_to(&self, out: &mut Markup) {
        let tag = self.kind.tag();
        out.open(tag, &self.attributes);
        out.content(&self.content);
        out.close(tag);
    }
}

#[derive(Debug, Clone)]
pub struct Table {
    caption: Option<(String, String)>,
    head: Vec<Cell>,
    rows: Vec<Vec<Cell>>,
    attributes: Attributes,
}

impl Component for Table {
    type Options = TableOptions;
    const NAME: &'static str = "table";

    fn new(_context: &RenderContext, options: TableOptions) -> Result<Self> {
        let normalized = normalize(&options.options);
        let class = DEFAULTS.class_list().caller(&normalized.classes).compose();

        let caption = options.caption.map(|caption| {
            let class = ClassList::new(&["govuk-table__caption"])
                .caller(options.caption_classes.as_deref().unwrap_or_default())
                .compose();
            (class, caption)
        });

        let head = options
            .head
            .into_iter()
            .enumerate()
            .map(|(index, cell)| {
                Cell::build(CellKind::ColumnHeader, cell, &format!("head[{}]", index))
            })
            .collect::<Result<Vec<_>>>()?;

        let first_cell_is_header = options.first_cell_is_header;
        let rows = options
            .rows
            .into_iter()
            .enumerate()
            .map(|(row_index, row)| {
                row.into_iter()
                    .enumerate()
                    .map(|(index, cell)| {
                        let kind = if first_cell_is_header && index == 0 {
                            CellKind::RowHeader
                        } else {
                            CellKind::Data
                        };
                        Cell::build(kind, cell, &format!("rows[{}][{}]", row_index, index))
                    })
                    .collect::<Result<Vec<_>>>()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self {
            caption,
            head,
            rows,
            attributes: DEFAULTS.finish(class, Attributes::new(), &normalized.attributes)?,
        })
    }

    fn render_to(&self, out: &mut Markup) {
        out.open("table", &self.attributes);
        if let Some((class, caption)) = &self.caption {
            out.open_class("caption", class);
            out.text(caption);
            out.close("caption");
        }
        if !self.head.is_empty() {
            out.open_class("thead", "govuk-table__head");
            out.open_class("tr", "govuk-table__row");
            for cell in &self.head {
                cell.render_to(out);
            }
            out.close("tr");
            out.close("thead");
        }
        out.open_class("tbody", "govuk-table__body");
        for row in &self.rows {
            out.open_class("tr", "govuk-table__row");
            for cell in row {
                cell.render_to(out);
            }
            out.close("tr");
        }
        out.close("tbody");
        out.close("table");
    }
}
