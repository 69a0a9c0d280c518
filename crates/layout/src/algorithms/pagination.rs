use crate::config::PaginationPolicy;
use crate::page::PageKind;
use std::ops::Range;

/// One entry of a page plan: the template shape and the rows it carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedPage {
    pub kind: PageKind,
    /// Row indices; empty for `Footer` pages.
    pub items: Range<usize>,
}

impl PlannedPage {
    fn new(kind: PageKind, items: Range<usize>) -> Self {
        Self { kind, items }
    }

    pub fn item_count(&self) -> usize {
        self.items.len()
    }
}

/// The ordered pages of one document, computed before anything is rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PagePlan {
    pages: Vec<PlannedPage>,
}

impl PagePlan {
    pub fn pages(&self) -> &[PlannedPage] {
        &self.pages
    }

    pub fn iter(&self) -> std::slice::Iter<'_, PlannedPage> {
        self.pages.iter()
    }

    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Always false: even an empty document gets a `Single` page.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn kinds(&self) -> Vec<PageKind> {
        self.pages.iter().map(|p| p.kind).collect()
    }

    pub fn item_count(&self) -> usize {
        self.pages.iter().map(PlannedPage::item_count).sum()
    }
}

impl<'a> IntoIterator for &'a PagePlan {
    type Item = &'a PlannedPage;
    type IntoIter = std::slice::Iter<'a, PlannedPage>;

    fn into_iter(self) -> Self::IntoIter {
        self.pages.iter()
    }
}

impl PaginationPolicy {
    /// Distributes `item_count` rows over page shapes.
    ///
    /// * up to `single_page_max`: one `Single` page
    /// * up to `short_first_page_max`: `First` with every row, then `Footer`
    /// * beyond: `First` takes `long_first_page_max` rows, `Middle` pages take
    ///   `continuation_page_max` each while more than that remain, and the rest
    ///   goes on a `Last` page. If the `First` page took everything, a `Footer`
    ///   page closes the document instead of an empty `Last`.
    pub fn plan(&self, item_count: usize) -> PagePlan {
        let mut pages = Vec::new();

        if item_count <= self.single_page_max {
            pages.push(PlannedPage::new(PageKind::Single, 0..item_count));
        } else if item_count <= self.short_first_page_max {
            pages.push(PlannedPage::new(PageKind::First, 0..item_count));
            pages.push(PlannedPage::new(PageKind::Footer, item_count..item_count));
        } else {
            let first_end = item_count.min(self.long_first_page_max);
            pages.push(PlannedPage::new(PageKind::First, 0..first_end));

            // A zero capacity would never terminate; validate() rejects it.
            let step = self.continuation_page_max.max(1);
            let mut start = first_end;
            while item_count - start > step {
                pages.push(PlannedPage::new(PageKind::Middle, start..start + step));
                start += step;
            }

            if start == item_count {
                pages.push(PlannedPage::new(PageKind::Footer, start..start));
            } else {
                pages.push(PlannedPage::new(PageKind::Last, start..item_count));
            }
        }

        let plan = PagePlan { pages };
        log::debug!(
            "Planned {} page(s) for {} item(s): {:?}",
            plan.len(),
            item_count,
            plan.kinds()
        );
        plan
    }
}

/// Plans with the default capacities.
pub fn plan(item_count: usize) -> PagePlan {
    PaginationPolicy::default().plan(item_count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use PageKind::*;

    fn shape(plan: &PagePlan) -> Vec<(PageKind, usize)> {
        plan.iter().map(|p| (p.kind, p.item_count())).collect()
    }

    #[test]
    fn test_up_to_eight_items_is_a_single_page() {
        for count in 0..=8 {
            let plan = plan(count);
            assert_eq!(plan.len(), 1, "count {count}");
            assert_eq!(plan.pages()[0], PlannedPage::new(Single, 0..count));
        }
    }

    #[test]
    fn test_nine_to_thirteen_items_is_first_plus_footer() {
        for count in 9..=13 {
            let plan = plan(count);
            assert_eq!(shape(&plan), vec![(First, count), (Footer, 0)], "count {count}");
            assert_eq!(plan.pages()[0].items, 0..count);
        }
    }

    #[test]
    fn test_fourteen_to_sixteen_items_fit_the_long_first_page() {
        for count in 14..=16 {
            assert_eq!(shape(&plan(count)), vec![(First, count), (Footer, 0)]);
        }
    }

    #[test]
    fn test_sixteen_items_end_with_footer_not_empty_last() {
        let plan = plan(16);
        assert_eq!(shape(&plan), vec![(First, 16), (Footer, 0)]);
        assert!(!plan.kinds().contains(&Last));
    }

    #[test]
    fn test_seventeen_items() {
        let plan = plan(17);
        assert_eq!(
            plan.pages(),
            &[PlannedPage::new(First, 0..16), PlannedPage::new(Last, 16..17)]
        );
    }

    #[test]
    fn test_thirty_four_items_fill_the_last_page() {
        assert_eq!(shape(&plan(34)), vec![(First, 16), (Last, 18)]);
    }

    #[test]
    fn test_thirty_five_items() {
        let plan = plan(35);
        assert_eq!(
            plan.pages(),
            &[
                PlannedPage::new(First, 0..16),
                PlannedPage::new(Middle, 16..34),
                PlannedPage::new(Last, 34..35),
            ]
        );
    }

    #[test]
    fn test_long_documents_are_contiguous_and_complete() {
        for count in 0..200 {
            let plan = plan(count);
            assert_eq!(plan.item_count(), count);

            let mut expected_start = 0;
            for page in &plan {
                assert_eq!(page.items.start, expected_start, "count {count}");
                expected_start = page.items.end;
                if page.kind == Middle {
                    assert_eq!(page.item_count(), 18);
                }
            }
            assert_eq!(expected_start, count);
            assert!(plan.pages().last().is_some_and(|p| p.kind.carries_totals()));
        }
    }

    #[test]
    fn test_custom_policy() {
        let policy = PaginationPolicy {
            single_page_max: 2,
            short_first_page_max: 3,
            long_first_page_max: 4,
            continuation_page_max: 5,
        };
        assert_eq!(shape(&policy.plan(3)), vec![(First, 3), (Footer, 0)]);
        assert_eq!(
            shape(&policy.plan(15)),
            vec![(First, 4), (Middle, 5), (Middle, 5), (Last, 1)]
        );
    }
}
