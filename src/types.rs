/// One link entry read from a column window of a sheet row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub name: String,
    pub url: Option<String>,
    pub category: Option<String>,
    pub department: Option<String>,
}

/// The sheet as a plain table: header row plus data rows in source order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SheetTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Which page to produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Table,
    Grouped,
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Layout::Table => "table",
            Layout::Grouped => "grouped",
        }
    }
}
