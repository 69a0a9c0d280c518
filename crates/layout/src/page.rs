use serde::{Deserialize, Serialize};
use std::fmt;

/// The shape of a page template.
///
/// "First" shapes reserve header space for party and company details,
/// "Last" and "Footer" shapes reserve space for totals and the payment
/// breakdown, "Middle" pages carry rows only, and "Single" has both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PageKind {
    Single,
    First,
    Middle,
    Last,
    /// Totals, payments and notes with no rows at all.
    Footer,
}

impl PageKind {
    pub const ALL: [PageKind; 5] = [
        PageKind::Single,
        PageKind::First,
        PageKind::Middle,
        PageKind::Last,
        PageKind::Footer,
    ];

    /// The template resource stem for this kind (`first_page`, ...).
    pub fn template_stem(self) -> &'static str {
        match self {
            PageKind::Single => "single_page",
            PageKind::First => "first_page",
            PageKind::Middle => "middle_page",
            PageKind::Last => "last_page",
            PageKind::Footer => "footer_page",
        }
    }

    pub fn carries_totals(self) -> bool {
        matches!(self, PageKind::Single | PageKind::Last | PageKind::Footer)
    }
}

impl fmt::Display for PageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PageKind::Single => "Single",
            PageKind::First => "First",
            PageKind::Middle => "Middle",
            PageKind::Last => "Last",
            PageKind::Footer => "Footer",
        };
        f.write_str(name)
    }
}
