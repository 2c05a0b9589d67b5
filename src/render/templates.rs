use askama::Template;

use super::Cell;

#[derive(Template)]
#[template(path = "links_table.html")]
pub struct LinksTableTemplate<'a> {
    pub title: &'a str,
    pub updated_at: String,
    pub source_url: Option<&'a str>,
    pub headers: &'a [String],
    pub rows: Vec<Vec<Cell>>,
}

#[derive(Template)]
#[template(path = "links_grouped.html")]
pub struct LinksGroupedTemplate<'a> {
    pub title: &'a str,
    pub updated_at: String,
    pub source_url: Option<&'a str>,
    pub total: usize,
    pub groups: Vec<GroupView>,
}

/// One category section of the grouped page.
pub struct GroupView {
    pub label: String,
    pub count: usize,
    pub rows: Vec<RecordRow>,
}

pub struct RecordRow {
    pub name: Cell,
    pub url: Cell,
    pub department: Cell,
}
