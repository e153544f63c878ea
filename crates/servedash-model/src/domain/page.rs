use serde::Serialize;

/// One display-ready page of a filtered collection.
///
/// Always derived, never stored: `max_page >= 1` and
/// `1 <= constrained_page <= max_page` hold for every value built by the slicer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page, at most one page size long.
    pub items: Vec<T>,
    /// Requested page number after clamping into `[1, max_page]`.
    pub constrained_page: usize,
    /// Number of pages, at least 1 even when nothing matched.
    pub max_page: usize,
    /// Size of the collection the page was cut from.
    pub total_items: usize,
}

impl<T> Page<T> {
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn has_prev(&self) -> bool {
        self.constrained_page > 1
    }

    pub fn has_next(&self) -> bool {
        self.constrained_page < self.max_page
    }

    /// Transform the items while keeping the page metadata.
    pub fn map<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            constrained_page: self.constrained_page,
            max_page: self.max_page,
            total_items: self.total_items,
        }
    }
}
