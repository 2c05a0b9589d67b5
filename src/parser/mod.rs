//! CSV parsing for the exported sheet.
//!
//! The export is standard RFC 4180 CSV: fields may be quoted and contain
//! commas, doubled quotes or newlines. Rows may be ragged.

use tracing::debug;

use crate::constants::{RECORD_WINDOW_STARTS, RECORD_WINDOW_WIDTH};
use crate::error::{LinksError, Result};
use crate::types::{Record, SheetTable};

/// Splits CSV text into rows of fields.
///
/// The first record is always kept as the header row, even when blank.
/// After it, rows whose cells are all blank are dropped; sheet exports pad
/// the data with lines like `,,,`.
pub fn parse_rows(text: &str) -> Result<Vec<Vec<String>>> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    let mut blank = 0usize;
    for result in reader.records() {
        let record = result?;
        if !rows.is_empty() && record.iter().all(|field| field.trim().is_empty()) {
            blank += 1;
            continue;
        }
        rows.push(record.iter().map(str::to_string).collect());
    }
    debug!(rows = rows.len(), blank_rows = blank, "Parsed CSV rows");
    Ok(rows)
}

/// Parses the sheet as a header row followed by data rows.
pub fn parse_table(text: &str) -> Result<SheetTable> {
    let mut rows = parse_rows(text)?.into_iter();
    let headers = rows
        .next()
        .ok_or_else(|| LinksError::EmptyContent("sheet has no rows".into()))?;
    Ok(SheetTable {
        headers,
        rows: rows.collect(),
    })
}

/// Extracts records from every data row (the first row is the header).
///
/// Each row holds up to four side-by-side entries, one per column window.
/// A window contributes a record only when its name cell is non-blank.
pub fn extract_records(rows: &[Vec<String>]) -> Vec<Record> {
    rows.iter()
        .skip(1)
        .flat_map(|row| {
            RECORD_WINDOW_STARTS
                .iter()
                .filter_map(move |&start| record_from_window(row, start))
        })
        .collect()
}

/// Parses the sheet straight into records. No records is an error.
pub fn parse_records(text: &str) -> Result<Vec<Record>> {
    let rows = parse_rows(text)?;
    let records = extract_records(&rows);
    if records.is_empty() {
        return Err(LinksError::EmptyContent(format!(
            "no records found in {} row(s)",
            rows.len()
        )));
    }
    debug!(records = records.len(), "Extracted records");
    Ok(records)
}

fn record_from_window(row: &[String], start: usize) -> Option<Record> {
    let end = (start + RECORD_WINDOW_WIDTH).min(row.len());
    let window = row.get(start..end)?;
    Some(Record {
        name: non_blank(window, 0)?,
        url: non_blank(window, 1),
        category: non_blank(window, 2),
        department: non_blank(window, 3),
    })
}

fn non_blank(window: &[String], index: usize) -> Option<String> {
    window
        .get(index)
        .map(|cell| cell.trim())
        .filter(|cell| !cell.is_empty())
        .map(str::to_string)
}
