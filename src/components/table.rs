//! Table components for maud templates.

use maud::{html, Markup, Render};

/// Table variant determines the CSS class applied.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum TableVariant {
    #[default]
    Default,
    /// Keyword search results (`.results-table`)
    Results,
    /// Side-by-side related comparison (`.comparison-table`)
    Comparison,
}

impl TableVariant {
    #[must_use]
    pub fn class(&self) -> Option<&'static str> {
        match self {
            TableVariant::Default => None,
            TableVariant::Results => Some("results-table"),
            TableVariant::Comparison => Some("comparison-table"),
        }
    }
}

/// A table element with headers and rows.
#[derive(Debug)]
pub struct Table<'a> {
    pub variant: TableVariant,
    pub headers: Vec<&'a str>,
    /// Pre-rendered row content
    pub rows: Vec<Markup>,
}

impl<'a> Table<'a> {
    #[must_use]
    pub fn new(headers: Vec<&'a str>) -> Self {
        Self {
            variant: TableVariant::Default,
            headers,
            rows: Vec::new(),
        }
    }

    #[must_use]
    pub fn variant(mut self, variant: TableVariant) -> Self {
        self.variant = variant;
        self
    }

    #[must_use]
    pub fn rows(mut self, rows: Vec<Markup>) -> Self {
        self.rows = rows;
        self
    }
}

impl Render for Table<'_> {
    fn render(&self) -> Markup {
        html! {
            table class=[self.variant.class()] {
                @if !self.headers.is_empty() {
                    thead {
                        tr {
                            @for header in &self.headers {
                                th { (header) }
                            }
                        }
                    }
                }
                tbody {
                    @for row in &self.rows {
                        (row)
                    }
                }
            }
        }
    }
}

/// A table row with cells.
#[derive(Debug, Default)]
pub struct TableRow {
    pub cells: Vec<Markup>,
}

impl TableRow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a cell with text content.
    #[must_use]
    pub fn cell(mut self, content: &str) -> Self {
        self.cells.push(html! { td { (content) } });
        self
    }

    /// Add a right-aligned numeric cell.
    #[must_use]
    pub fn num_cell(mut self, content: &str) -> Self {
        self.cells.push(html! { td class="num" { (content) } });
        self
    }

    /// Add a cell with pre-rendered markup.
    #[must_use]
    #[allow(clippy::needless_pass_by_value)] // Markup is idiomatically passed by value
    pub fn cell_markup(mut self, content: Markup) -> Self {
        self.cells.push(html! { td { (content) } });
        self
    }
}

impl Render for TableRow {
    fn render(&self) -> Markup {
        html! {
            tr {
                @for cell in &self.cells {
                    (cell)
                }
            }
        }
    }
}
