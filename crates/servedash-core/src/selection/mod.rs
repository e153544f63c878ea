mod replica;
pub use replica::{ReplicaSelection, replica_schema};

use std::sync::Arc;

use servedash_model::{Page, PageKey, PageQuery, SelectionConfig};
use tracing::{debug, instrument, trace, warn};

use crate::{FilterSchema, FilterSet, page::slice_to_page};

/// Filter and pagination state for one list, plus the collection it selects from.
///
/// Mutations apply in call order and every [`SelectionController::view`]
/// recomputes from scratch, so a read always reflects all earlier writes.
pub struct SelectionController<T> {
    schema: FilterSchema<T>,
    cfg: SelectionConfig,
    source: Arc<[T]>,
    filters: FilterSet,
    query: PageQuery,
}

impl<T: Clone> SelectionController<T> {
    /// Create a controller with no filters, page 1 and the default page size.
    pub fn new(schema: FilterSchema<T>, cfg: SelectionConfig) -> Self {
        let cfg = cfg.normalized();
        Self {
            schema,
            cfg,
            source: Arc::from(Vec::new()),
            filters: FilterSet::new(),
            query: PageQuery::with_config(&cfg),
        }
    }

    pub fn with_source(mut self, items: impl Into<Arc<[T]>>) -> Self {
        self.source = items.into();
        self
    }

    /// Swap in a refreshed collection; filters and pagination are kept.
    pub fn set_source(&mut self, items: impl Into<Arc<[T]>>) {
        self.source = items.into();
        trace!(len = self.source.len(), "selection source replaced");
    }

    pub fn source(&self) -> &[T] {
        &self.source
    }

    pub fn filters(&self) -> &FilterSet {
        &self.filters
    }

    pub fn query(&self) -> PageQuery {
        self.query
    }

    pub fn config(&self) -> &SelectionConfig {
        &self.cfg
    }

    /// Set the filter for `field`, trimming the input.
    ///
    /// A change to any filter sends the selection back to page 1. Fields the
    /// schema does not know are dropped and leave the page untouched.
    pub fn set_filter(&mut self, field: &str, value: &str) {
        let Some(matcher) = self.schema.get(field) else {
            warn!(field, "filter set on unregistered field; ignored");
            return;
        };
        let value = matcher.normalize(value);

        if self.filters.set(field, value.as_str()) {
            self.query.page_no = 1;
            debug!(field, value = value.as_str(), "filter changed; page reset");
        }
    }

    /// Drop every filter and go back to page 1.
    pub fn clear_filters(&mut self) {
        if !self.filters.is_empty() {
            self.filters.clear();
            self.query.page_no = 1;
            debug!("filters cleared; page reset");
        }
    }

    /// Apply raw user input to a pagination parameter.
    ///
    /// Page sizes are sanitized immediately; page numbers are stored as given
    /// and clamped when the view is computed.
    pub fn set_page(&mut self, key: PageKey, value: &str) {
        match key {
            PageKey::PageNo => self.set_page_no(PageQuery::parse_page_no(value)),
            PageKey::PageSize => {
                let page_size = PageQuery::sanitize_page_size(value, &self.cfg);
                if page_size.to_string() != value.trim() {
                    debug!(input = value, page_size, "page size input sanitized");
                }
                self.query.page_size = page_size;
                trace!(page_size, "page size set");
            }
        }
    }

    pub fn set_page_no(&mut self, page_no: i64) {
        self.query.page_no = page_no;
        trace!(page_no, "page number set");
    }

    pub fn set_page_size(&mut self, page_size: i64) {
        self.query = self.query.with_page_size(page_size, &self.cfg);
        trace!(page_size = self.query.page_size, "page size set");
    }

    /// Items of the backing collection that pass every filter, in source order.
    pub fn filtered(&self) -> Vec<&T> {
        self.source
            .iter()
            .filter(|item| self.filters.matches(&self.schema, *item))
            .collect()
    }

    /// Filter the current collection and cut the requested page.
    #[instrument(level = "trace", skip(self), fields(page_no = self.query.page_no, page_size = self.query.page_size))]
    pub fn view(&self) -> Page<T> {
        let filtered = self.filtered();
        let page = slice_to_page(&filtered, self.query.page_no, self.query.page_size);
        trace!(
            matched = page.total_items,
            constrained_page = page.constrained_page,
            max_page = page.max_page,
            "view computed"
        );
        page.map(|item| item.clone())
    }

    /// Distinct values of `field` across the whole collection, in first-seen order.
    ///
    /// Unknown fields have no options.
    pub fn filter_options(&self, field: &str) -> Vec<String> {
        let Some(matcher) = self.schema.get(field) else {
            return Vec::new();
        };

        let mut options: Vec<String> = Vec::new();
        for item in self.source.iter() {
            let value = matcher.value_of(item);
            if !options.iter().any(|seen| seen == value) {
                options.push(value.to_string());
            }
        }
        options
    }
}
