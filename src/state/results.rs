//! Incremental result accumulator.

use crate::model::{ResultPage, Scholarship};

/// How a resolved page is merged into the displayed results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FetchMode {
    /// New search: discard what is shown.
    Replace,
    /// "Load more": concatenate onto what is shown.
    Append,
}

/// The scholarships currently rendered in the catalog, in fetch order.
///
/// Ids are not de-duplicated; the backend's pages are assumed disjoint and whatever it
/// returns is passed through.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AccumulatedResults {
    items: Vec<Scholarship>,
    total_count: Option<u64>,
    total_pages: Option<u32>,
}

impl AccumulatedResults {
    /// Nothing loaded yet.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge a resolved page. `total_pages` is recomputed from the page's count on
    /// every resolution.
    pub fn apply(&mut self, page: ResultPage, mode: FetchMode, page_size: u32) {
        self.total_pages = Some(page.total_pages(page_size));
        self.total_count = Some(page.total_count);
        match mode {
            FetchMode::Replace => self.items = page.items,
            FetchMode::Append => self.items.extend(page.items),
        }
    }

    /// Records in display order.
    pub fn items(&self) -> &[Scholarship] {
        &self.items
    }

    /// Number of records shown.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when nothing is shown.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Record at `index`.
    pub fn get(&self, index: usize) -> Option<&Scholarship> {
        self.items.get(index)
    }

    /// Page count reported by the last resolution; `None` before the first one.
    pub fn total_pages(&self) -> Option<u32> {
        self.total_pages
    }

    /// Result count reported by the last resolution; `None` before the first one.
    pub fn total_count(&self) -> Option<u64> {
        self.total_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(ids: &[u64], count: u64) -> ResultPage {
        ResultPage {
            items: ids
                .iter()
                .map(|id| Scholarship::new(*id, format!("S{id}")))
                .collect(),
            total_count: count,
            next: None,
            previous: None,
        }
    }

    fn ids(results: &AccumulatedResults) -> Vec<u64> {
        results.items().iter().map(|s| s.id.get()).collect()
    }

    #[test]
    fn starts_empty_with_unknown_totals() {
        let results = AccumulatedResults::new();
        assert!(results.is_empty());
        assert_eq!(results.total_pages(), None);
        assert_eq!(results.total_count(), None);
    }

    #[test]
    fn replace_discards_previous_items() {
        let mut results = AccumulatedResults::new();
        results.apply(page(&[1, 2], 25), FetchMode::Replace, 10);
        results.apply(page(&[7], 1), FetchMode::Replace, 10);
        assert_eq!(ids(&results), vec![7]);
        assert_eq!(results.total_pages(), Some(1));
    }

    #[test]
    fn append_preserves_order() {
        let mut results = AccumulatedResults::new();
        results.apply(page(&[1, 2], 25), FetchMode::Replace, 10);
        results.apply(page(&[3, 4], 25), FetchMode::Append, 10);
        assert_eq!(ids(&results), vec![1, 2, 3, 4]);
        assert_eq!(results.total_pages(), Some(3));
        assert_eq!(results.total_count(), Some(25));
    }

    #[test]
    fn append_passes_duplicate_ids_through() {
        let mut results = AccumulatedResults::new();
        results.apply(page(&[1, 2], 20), FetchMode::Replace, 10);
        results.apply(page(&[2, 3], 20), FetchMode::Append, 10);
        assert_eq!(ids(&results), vec![1, 2, 2, 3]);
    }

    #[test]
    fn shrinking_count_updates_total_pages() {
        let mut results = AccumulatedResults::new();
        results.apply(page(&[1], 30), FetchMode::Replace, 10);
        results.apply(page(&[2], 11), FetchMode::Append, 10);
        assert_eq!(results.total_pages(), Some(2));
    }
}
