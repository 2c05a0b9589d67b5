use std::path::{Path, PathBuf};
use tracing::{info, info_span};

use crate::aggregate::group_by_category;
use crate::app::ports::HttpClientPort;
use crate::config::Settings;
use crate::error::Result;
use crate::parser;
use crate::render::{self, PageMeta};
use crate::types::Layout;
use crate::writer::write_document;

/// Outcome of one successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateReport {
    pub layout: Layout,
    pub output_path: PathBuf,
    /// Data rows (table) or extracted records (grouped).
    pub items: usize,
    /// Category sections; zero for the table layout.
    pub categories: usize,
    pub bytes: usize,
}

/// Fetch, parse, render and write one page.
///
/// Stages run once each, in order; the first error aborts the run and no
/// file is written unless rendering succeeded.
pub struct GenerateUseCase {
    http: Box<dyn HttpClientPort>,
    settings: Settings,
}

impl GenerateUseCase {
    pub fn new(http: Box<dyn HttpClientPort>, settings: Settings) -> Self {
        Self { http, settings }
    }

    pub fn output_path(&self, layout: Layout) -> &Path {
        match layout {
            Layout::Table => &self.settings.table_output,
            Layout::Grouped => &self.settings.grouped_output,
        }
    }

    pub fn run(&self, layout: Layout) -> Result<GenerateReport> {
        let span = info_span!("generate", layout = layout.as_str());
        let _enter = span.enter();

        info!(url = %self.settings.sheet_url, "Fetching sheet");
        let body = self.http.get_text(&self.settings.sheet_url)?;

        let (html, items, categories) = match layout {
            Layout::Table => {
                let table = parser::parse_table(&body)?;
                info!(rows = table.rows.len(), columns = table.headers.len(), "Parsed sheet");
                let html = render::render_table(&table, &self.page_meta())?;
                (html, table.rows.len(), 0)
            }
            Layout::Grouped => {
                let records = parser::parse_records(&body)?;
                let groups = group_by_category(records);
                info!(
                    records = groups.total_records(),
                    categories = groups.len(),
                    "Grouped records"
                );
                let html = render::render_grouped(&groups, &self.page_meta())?;
                (html, groups.total_records(), groups.len())
            }
        };

        let output_path = self.output_path(layout).to_path_buf();
        write_document(&output_path, &html)?;

        Ok(GenerateReport {
            layout,
            output_path,
            items,
            categories,
            bytes: html.len(),
        })
    }

    fn page_meta(&self) -> PageMeta {
        PageMeta::now(
            self.settings.title.clone(),
            Some(self.settings.sheet_edit_url.clone()),
        )
    }
}
