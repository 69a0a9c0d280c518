/// One fully rendered page.
///
/// Pages are returned in print order; the page number is the position in
/// that order, starting at 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageDocument {
    page_number: usize,
    markup: String,
}

impl PageDocument {
    pub(crate) fn new(page_number: usize, markup: String) -> Self {
        Self {
            page_number,
            markup,
        }
    }

    pub fn page_number(&self) -> usize {
        self.page_number
    }

    pub fn markup(&self) -> &str {
        &self.markup
    }

    pub fn into_markup(self) -> String {
        self.markup
    }

    /// `page-001.html`, `page-002.html`, ...
    pub fn file_name(&self) -> String {
        format!("page-{:03}.html", self.page_number)
    }
}
