//! HTML page rendering.
//!
//! Pages are askama templates under `templates/`. Askama escapes every
//! interpolated value, so field text can never inject markup; URLs are only
//! placed in `href` after passing [`link::as_link`].

pub mod link;
pub mod templates;

use askama::Template;
use chrono::{DateTime, Local};
use tracing::debug;

use crate::aggregate::CategoryGroups;
use crate::error::Result;
use crate::types::{Record, SheetTable};

use templates::{GroupView, LinksGroupedTemplate, LinksTableTemplate, RecordRow};

/// Page-level values shared by both layouts.
#[derive(Debug, Clone)]
pub struct PageMeta {
    pub title: String,
    pub generated_at: DateTime<Local>,
    /// Spreadsheet link shown in the footer.
    pub source_url: Option<String>,
}

impl PageMeta {
    /// Metadata stamped with the current local time.
    pub fn now(title: impl Into<String>, source_url: Option<String>) -> Self {
        Self {
            title: title.into(),
            generated_at: Local::now(),
            source_url: source_url.filter(|url| !url.trim().is_empty()),
        }
    }

    pub fn updated_at(&self) -> String {
        self.generated_at.format("%Y年%m月%d日 %H:%M:%S").to_string()
    }
}

/// A table cell: text plus an optional validated link target.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cell {
    pub text: String,
    pub href: Option<String>,
}

impl Cell {
    pub fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            href: link::as_link(text).map(str::to_string),
        }
    }

    fn optional(text: Option<&str>) -> Self {
        text.map(Cell::new).unwrap_or_default()
    }
}

/// Renders the flat layout: one table, header row plus every data row.
/// Rows shorter than the header are padded with empty cells.
pub fn render_table(table: &SheetTable, meta: &PageMeta) -> Result<String> {
    let width = table.headers.len();
    let rows = table
        .rows
        .iter()
        .map(|row| {
            let mut cells: Vec<Cell> = row.iter().map(String::as_str).map(Cell::new).collect();
            if cells.len() < width {
                cells.resize_with(width, Cell::default);
            }
            cells
        })
        .collect::<Vec<_>>();
    debug!(rows = rows.len(), columns = width, "Rendering table layout");

    let page = LinksTableTemplate {
        title: &meta.title,
        updated_at: meta.updated_at(),
        source_url: meta.source_url.as_deref(),
        headers: &table.headers,
        rows,
    };
    Ok(page.render()?)
}

/// Renders the grouped layout: one collapsible section per category, in
/// key order, with a filter button per category.
pub fn render_grouped(groups: &CategoryGroups, meta: &PageMeta) -> Result<String> {
    let views = groups
        .iter()
        .map(|(label, records)| GroupView {
            label: label.to_string(),
            count: records.len(),
            rows: records.iter().map(record_row).collect(),
        })
        .collect::<Vec<_>>();
    debug!(groups = views.len(), "Rendering grouped layout");

    let page = LinksGroupedTemplate {
        title: &meta.title,
        updated_at: meta.updated_at(),
        source_url: meta.source_url.as_deref(),
        total: groups.total_records(),
        groups: views,
    };
    Ok(page.render()?)
}

fn record_row(record: &Record) -> RecordRow {
    RecordRow {
        name: Cell::new(&record.name),
        url: Cell::optional(record.url.as_deref()),
        department: Cell::optional(record.department.as_deref()),
    }
}
