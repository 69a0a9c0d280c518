use folio::{PageDocument, PageKind};

/// The page kinds of pages rendered from `minimal_template`, read from the
/// stem each page starts with.
pub fn minimal_kinds(pages: &[PageDocument]) -> Vec<Option<PageKind>> {
    pages
        .iter()
        .map(|page| {
            PageKind::ALL
                .into_iter()
                .find(|kind| page.markup().starts_with(kind.template_stem()))
        })
        .collect()
}

/// Number of table rows on a rendered page.
pub fn row_count(page: &PageDocument) -> usize {
    page.markup().matches("<tr><td").count()
}

/// Checks the generator's plan for a document and generates it, yielding the
/// pages. The caller must return a `Result`.
#[macro_export]
macro_rules! assert_page_kinds {
    ($generator:expr, $document:expr, [$($kind:ident),* $(,)?]) => {{
        let document = $document;
        let expected = vec![$(folio::PageKind::$kind),*];
        assert_eq!($generator.plan(document).kinds(), expected);
        let pages = $generator.generate(document)?;
        assert_eq!(pages.len(), expected.len());
        pages
    }};
}

#[macro_export]
macro_rules! assert_page_contains {
    ($page:expr, $needle:expr) => {
        assert!(
            $page.markup().contains($needle),
            "page {} does not contain {:?}:\n{}",
            $page.page_number(),
            $needle,
            $page.markup()
        )
    };
}
