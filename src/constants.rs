/// Built-in defaults. Every value here can be overridden through the
/// config file or the command line.

// Source spreadsheet (ID + GID of the link list sheet)
pub const SHEET_ID: &str = "1sId2LudYD-AwjE2BQdYMdMin4p2gV_sOIWv1rTFnAu0";
pub const SHEET_GID: &str = "1294449581";

pub const HTTP_TIMEOUT_SECONDS: u64 = 30;
pub const USER_AGENT: &str = concat!("sheet_links/", env!("CARGO_PKG_VERSION"));

pub const TABLE_OUTPUT_FILE: &str = "links.html";
pub const GROUPED_OUTPUT_FILE: &str = "links_grouped.html";

pub const PAGE_TITLE: &str = "スロ天重要まとめシート";

/// Category label for records whose category cell is blank.
pub const UNCATEGORIZED: &str = "その他";

/// Start column of each record window in the grouped layout.
pub const RECORD_WINDOW_STARTS: [usize; 4] = [0, 5, 10, 15];
/// Columns per window: name, url, category, department.
pub const RECORD_WINDOW_WIDTH: usize = 4;

/// CSV export URL for the default sheet.
pub fn default_sheet_url() -> String {
    format!("https://docs.google.com/spreadsheets/d/{SHEET_ID}/export?format=csv&gid={SHEET_GID}")
}

/// Human-facing edit URL, linked from the page footer.
pub fn default_sheet_edit_url() -> String {
    format!("https://docs.google.com/spreadsheets/d/{SHEET_ID}/edit")
}
