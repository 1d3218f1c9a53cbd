use scraper::{ElementRef, Html, Selector};
use std::collections::HashMap;

/// One `<tr>` of a table, split into header and data cells.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableRow {
    /// Text of the `<th>` cells, in document order.
    pub header_cells: Vec<String>,
    /// Text of the `<td>` cells, in document order.
    pub data_cells: Vec<String>,
}

impl TableRow {
    pub fn new<H, D>(header_cells: H, data_cells: D) -> Self
    where
        H: IntoIterator,
        H::Item: Into<String>,
        D: IntoIterator,
        D::Item: Into<String>,
    {
        Self {
            header_cells: header_cells.into_iter().map(Into::into).collect(),
            data_cells: data_cells.into_iter().map(Into::into).collect(),
        }
    }
}

/// The lookups extraction needs from a parsed page.
///
/// Every lookup returns the first matching element in document order.
/// Returned text is the element's text content exactly as it appears in the
/// page, whitespace included.
pub trait Landmarks {
    /// Text of the first `<tag class="...">` whose class list contains `class`.
    fn text_by_class(&self, tag: &str, class: &str) -> Option<String>;

    /// Text of the first element of any tag with the given `id`.
    fn text_by_id(&self, id: &str) -> Option<String>;

    /// All `<tr>` rows under the first `<tag class="...">`, or `None` when
    /// that container does not exist.
    fn table_rows(&self, tag: &str, class: &str) -> Option<Vec<TableRow>>;
}

/// A page parsed with `scraper`.
pub struct HtmlDocument {
    html: Html,
}

impl HtmlDocument {
    pub fn parse(source: &str) -> Self {
        Self {
            html: Html::parse_document(source),
        }
    }

    fn first_with<'a>(
        &'a self,
        tag: &str,
        matches: impl Fn(&ElementRef<'a>) -> bool,
    ) -> Option<ElementRef<'a>> {
        let sel = Selector::parse(tag).ok()?;
        self.html.select(&sel).find(|el| matches(el))
    }

    fn first_with_class(&self, tag: &str, class: &str) -> Option<ElementRef<'_>> {
        self.first_with(tag, |el| el.value().classes().any(|c| c == class))
    }
}

impl Landmarks for HtmlDocument {
    fn text_by_class(&self, tag: &str, class: &str) -> Option<String> {
        self.first_with_class(tag, class).map(element_text)
    }

    fn text_by_id(&self, id: &str) -> Option<String> {
        self.first_with("*", |el| el.value().id() == Some(id))
            .map(element_text)
    }

    fn table_rows(&self, tag: &str, class: &str) -> Option<Vec<TableRow>> {
        let container = self.first_with_class(tag, class)?;

        let tr_sel = Selector::parse("tr").ok()?;
        let th_sel = Selector::parse("th").ok()?;
        let td_sel = Selector::parse("td").ok()?;

        let rows = container
            .select(&tr_sel)
            .map(|tr| TableRow {
                header_cells: tr.select(&th_sel).map(element_text).collect(),
                data_cells: tr.select(&td_sel).map(element_text).collect(),
            })
            .collect();
        Some(rows)
    }
}

/// All text under an element, verbatim.
fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect()
}

/// A hand-built page for exercising extraction without HTML.
///
/// ```
/// use tfw_acquire::{Landmarks, MemoryDocument};
///
/// let doc = MemoryDocument::new().with_class("p", "remark", "ITS FUCKING NICE");
/// assert_eq!(doc.text_by_class("p", "remark").as_deref(), Some("ITS FUCKING NICE"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    by_class: HashMap<(String, String), String>,
    by_id: HashMap<String, String>,
    tables: HashMap<(String, String), Vec<TableRow>>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_class(mut self, tag: &str, class: &str, text: &str) -> Self {
        self.by_class
            .insert((tag.to_string(), class.to_string()), text.to_string());
        self
    }

    pub fn with_id(mut self, id: &str, text: &str) -> Self {
        self.by_id.insert(id.to_string(), text.to_string());
        self
    }

    pub fn with_table(mut self, tag: &str, class: &str, rows: Vec<TableRow>) -> Self {
        self.tables.insert((tag.to_string(), class.to_string()), rows);
        self
    }

    pub fn without_class(mut self, tag: &str, class: &str) -> Self {
        self.by_class.remove(&(tag.to_string(), class.to_string()));
        self
    }

    pub fn without_id(mut self, id: &str) -> Self {
        self.by_id.remove(id);
        self
    }

    pub fn without_table(mut self, tag: &str, class: &str) -> Self {
        self.tables.remove(&(tag.to_string(), class.to_string()));
        self
    }
}

impl Landmarks for MemoryDocument {
    fn text_by_class(&self, tag: &str, class: &str) -> Option<String> {
        self.by_class
            .get(&(tag.to_string(), class.to_string()))
            .cloned()
    }

    fn text_by_id(&self, id: &str) -> Option<String> {
        self.by_id.get(id).cloned()
    }

    fn table_rows(&self, tag: &str, class: &str) -> Option<Vec<TableRow>> {
        self.tables
            .get(&(tag.to_string(), class.to_string()))
            .cloned()
    }
}
