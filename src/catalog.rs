//! The catalog list component: loader + filter + pagination bookkeeping.
//!
//! Recomputation triggers are explicit. Filter setters never fetch; page
//! navigation fetches and keeps the current filter. [`Catalog::visible`] and
//! [`Catalog::view`] derive their output from the loaded page and the filter
//! on every call.

use crate::filter::{FilterState, compute_visible};
use crate::loader::{CatalogLoader, LoadState, PageTicket};
use crate::model::{Page, Record};
use crate::provider::{CatalogProvider, LoadError};

/// What the list view should show right now.
#[derive(Debug, PartialEq)]
pub enum CatalogView<'a> {
    Loading { page: u32 },
    Failed(&'a str),
    /// The provider returned a page without records.
    EmptyPage,
    /// The page has records but none pass the filter.
    NoMatches,
    Records(Vec<&'a Record>),
}

#[derive(Debug)]
pub struct Catalog {
    loader: CatalogLoader,
    filter: FilterState,
    page: u32,
    total_pages: u32,
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new()
    }
}

impl Catalog {
    pub fn new() -> Self {
        Self {
            loader: CatalogLoader::new(),
            filter: FilterState::new(),
            page: 1,
            total_pages: 0,
        }
    }

    pub fn state(&self) -> &LoadState {
        self.loader.state()
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    /// Total page count reported by the most recently loaded page.
    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn can_go_prev(&self) -> bool {
        self.page > 1
    }

    pub fn can_go_next(&self) -> bool {
        self.page < self.total_pages
    }

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.filter.set_text(text);
    }

    pub fn set_status(&mut self, value: impl Into<String>) {
        self.filter.set_status(value);
    }

    pub fn set_species(&mut self, value: impl Into<String>) {
        self.filter.set_species(value);
    }

    pub fn set_gender(&mut self, value: impl Into<String>) {
        self.filter.set_gender(value);
    }

    pub fn clear_filters(&mut self) {
        self.filter.clear();
    }

    pub fn loaded_page(&self) -> Option<&Page> {
        self.loader.page()
    }

    pub fn visible(&self) -> Vec<&Record> {
        self.loader
            .page()
            .map(|page| compute_visible(&page.records, &self.filter))
            .unwrap_or_default()
    }

    pub fn view(&self) -> CatalogView<'_> {
        match self.loader.state() {
            LoadState::Idle => CatalogView::Loading { page: self.page },
            LoadState::Loading { page } => CatalogView::Loading { page: *page },
            LoadState::Failed(reason) => CatalogView::Failed(reason),
            LoadState::Loaded(page) if page.records.is_empty() => CatalogView::EmptyPage,
            LoadState::Loaded(page) => {
                let visible = compute_visible(&page.records, &self.filter);
                if visible.is_empty() {
                    CatalogView::NoMatches
                } else {
                    CatalogView::Records(visible)
                }
            }
        }
    }

    /// Page 1 is always reachable; beyond it only pages the provider reported.
    pub fn is_navigable(&self, page: u32) -> bool {
        page == 1 || (page > 1 && page <= self.total_pages)
    }

    /// Starts a request for `page`, or returns `None` if it is out of range.
    pub fn request_page(&mut self, page: u32) -> Option<PageTicket> {
        if !self.is_navigable(page) {
            tracing::debug!(page, total_pages = self.total_pages, "page out of range");
            return None;
        }
        self.page = page;
        Some(self.loader.begin(page))
    }

    pub fn request_next(&mut self) -> Option<PageTicket> {
        if !self.can_go_next() {
            return None;
        }
        self.request_page(self.page + 1)
    }

    pub fn request_prev(&mut self) -> Option<PageTicket> {
        if !self.can_go_prev() {
            return None;
        }
        self.request_page(self.page - 1)
    }

    /// Re-requests the current page, e.g. after a failure.
    pub fn request_reload(&mut self) -> PageTicket {
        self.loader.begin(self.page)
    }

    /// Applies a fetch outcome. Returns `false` for a superseded request.
    pub fn apply(&mut self, ticket: PageTicket, outcome: Result<Page, LoadError>) -> bool {
        if !self.loader.complete(ticket, outcome) {
            return false;
        }
        if let Some(page) = self.loader.page() {
            self.total_pages = page.total_pages;
        }
        true
    }

    /// Initial load of page 1.
    pub async fn mount(&mut self, provider: &dyn CatalogProvider) {
        self.mount_at(provider, 1).await;
    }

    /// Initial load of an arbitrary page; the total is not known yet, so no
    /// range check applies. Page 0 is treated as page 1.
    pub async fn mount_at(&mut self, provider: &dyn CatalogProvider, page: u32) {
        self.page = page.max(1);
        let ticket = self.loader.begin(self.page);
        self.fetch(provider, ticket).await;
    }

    pub async fn go_to(&mut self, provider: &dyn CatalogProvider, page: u32) -> bool {
        let Some(ticket) = self.request_page(page) else {
            return false;
        };
        self.fetch(provider, ticket).await;
        true
    }

    pub async fn next_page(&mut self, provider: &dyn CatalogProvider) -> bool {
        let Some(ticket) = self.request_next() else {
            return false;
        };
        self.fetch(provider, ticket).await;
        true
    }

    pub async fn prev_page(&mut self, provider: &dyn CatalogProvider) -> bool {
        let Some(ticket) = self.request_prev() else {
            return false;
        };
        self.fetch(provider, ticket).await;
        true
    }

    pub async fn reload(&mut self, provider: &dyn CatalogProvider) {
        let ticket = self.request_reload();
        self.fetch(provider, ticket).await;
    }

    async fn fetch(&mut self, provider: &dyn CatalogProvider, ticket: PageTicket) {
        let outcome = provider.fetch_page(ticket.page).await;
        self.apply(ticket, outcome);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{StaticProvider, record};

    fn three_page_provider() -> StaticProvider {
        StaticProvider::new()
            .with_page(
                1,
                vec![
                    record(1, "Rick Sanchez", "Alive", "Human", "Male"),
                    record(2, "Morty Smith", "Alive", "Human", "Male"),
                    record(3, "Birdperson", "Dead", "Alien", "Male"),
                ],
            )
            .with_page(
                2,
                vec![
                    record(4, "Summer Smith", "Alive", "Human", "Female"),
                    record(5, "Squanchy", "Alive", "Alien", "Male"),
                ],
            )
            .with_page(3, vec![record(6, "Mr. Meeseeks", "unknown", "Humanoid", "Male")])
    }

    fn visible_ids(catalog: &Catalog) -> Vec<u64> {
        catalog.visible().iter().map(|r| r.id).collect()
    }

    #[test]
    fn unmounted_catalog_reports_loading_on_page_one() {
        let catalog = Catalog::new();
        assert_eq!(catalog.view(), CatalogView::Loading { page: 1 });
        assert!(catalog.visible().is_empty());
        assert!(!catalog.can_go_prev());
        assert!(!catalog.can_go_next());
    }

    #[tokio::test]
    async fn mount_loads_first_page() {
        let provider = three_page_provider();
        let mut catalog = Catalog::new();
        catalog.mount(&provider).await;

        assert_eq!(catalog.page(), 1);
        assert_eq!(catalog.total_pages(), 3);
        assert_eq!(visible_ids(&catalog), [1, 2, 3]);
        assert!(!catalog.can_go_prev());
        assert!(catalog.can_go_next());
    }

    #[tokio::test]
    async fn filter_changes_do_not_refetch() {
        let provider = three_page_provider();
        let mut catalog = Catalog::new();
        catalog.mount(&provider).await;

        catalog.set_status("Alive");
        assert_eq!(visible_ids(&catalog), [1, 2]);
        catalog.set_search("bird");
        assert_eq!(catalog.view(), CatalogView::NoMatches);
        catalog.clear_filters();
        assert_eq!(visible_ids(&catalog), [1, 2, 3]);

        assert_eq!(provider.requested_pages(), [1]);
    }

    #[tokio::test]
    async fn filters_survive_page_changes() {
        let provider = three_page_provider();
        let mut catalog = Catalog::new();
        catalog.mount(&provider).await;
        catalog.set_species("Alien");
        assert_eq!(visible_ids(&catalog), [3]);

        assert!(catalog.next_page(&provider).await);
        assert_eq!(catalog.page(), 2);
        assert_eq!(catalog.filter().species.as_deref(), Some("Alien"));
        assert_eq!(visible_ids(&catalog), [5]);
    }

    #[tokio::test]
    async fn navigation_stops_at_boundaries() {
        let provider = three_page_provider();
        let mut catalog = Catalog::new();
        catalog.mount(&provider).await;

        assert!(!catalog.prev_page(&provider).await);
        assert!(catalog.next_page(&provider).await);
        assert!(catalog.next_page(&provider).await);
        assert_eq!(catalog.page(), 3);
        assert!(!catalog.can_go_next());
        assert!(!catalog.next_page(&provider).await);
        assert!(catalog.prev_page(&provider).await);
        assert_eq!(catalog.page(), 2);

        assert_eq!(provider.requested_pages(), [1, 2, 3, 2]);
    }

    #[tokio::test]
    async fn out_of_range_pages_are_never_requested() {
        let provider = three_page_provider();
        let mut catalog = Catalog::new();
        catalog.mount(&provider).await;

        assert!(!catalog.go_to(&provider, 0).await);
        assert!(!catalog.go_to(&provider, 4).await);
        assert!(catalog.go_to(&provider, 3).await);
        assert_eq!(provider.requested_pages(), [1, 3]);
    }

    #[tokio::test]
    async fn mount_at_opens_a_later_page() {
        let provider = three_page_provider();
        let mut catalog = Catalog::new();
        catalog.mount_at(&provider, 3).await;

        assert_eq!(catalog.page(), 3);
        assert_eq!(visible_ids(&catalog), [6]);
        assert!(catalog.can_go_prev());
        assert!(!catalog.can_go_next());
    }

    #[tokio::test]
    async fn failed_page_drops_records_and_keeps_total() {
        let provider = three_page_provider().with_page(5, Vec::new());
        let mut catalog = Catalog::new();
        catalog.mount(&provider).await;
        assert_eq!(catalog.total_pages(), 5);

        // Page 4 is missing from the provider and answers 500.
        assert!(catalog.go_to(&provider, 4).await);
        let CatalogView::Failed(reason) = catalog.view() else {
            panic!("expected failed view, got {:?}", catalog.view());
        };
        assert!(reason.contains("500"));
        assert!(catalog.visible().is_empty());
        assert_eq!(catalog.total_pages(), 5);
        assert_eq!(catalog.page(), 4);
        assert!(catalog.can_go_prev());
    }

    #[tokio::test]
    async fn first_page_failure_then_reload() {
        let failing = StaticProvider::new();
        let mut catalog = Catalog::new();
        catalog.mount(&failing).await;
        assert!(matches!(catalog.view(), CatalogView::Failed(_)));
        assert_eq!(catalog.total_pages(), 0);

        let healthy = three_page_provider();
        catalog.reload(&healthy).await;
        assert_eq!(visible_ids(&catalog), [1, 2, 3]);
        assert_eq!(healthy.requested_pages(), [1]);
    }

    #[tokio::test]
    async fn empty_provider_page_is_not_a_filter_miss() {
        let provider = StaticProvider::new().with_page(1, Vec::new());
        let mut catalog = Catalog::new();
        catalog.mount(&provider).await;

        assert_eq!(catalog.view(), CatalogView::EmptyPage);
        catalog.set_search("rick");
        assert_eq!(catalog.view(), CatalogView::EmptyPage);
    }

    #[test]
    fn late_response_for_older_page_is_discarded() {
        let mut catalog = Catalog::new();
        let first = catalog.request_page(1).expect("page 1 is always navigable");
        let second = catalog.request_reload();

        let fresh = Page {
            records: vec![record(2, "Morty Smith", "Alive", "Human", "Male")],
            total_pages: 2,
        };
        let stale = Page {
            records: vec![record(1, "Rick Sanchez", "Alive", "Human", "Male")],
            total_pages: 9,
        };
        assert!(catalog.apply(second, Ok(fresh)));
        assert!(!catalog.apply(first, Ok(stale)));

        assert_eq!(visible_ids(&catalog), [2]);
        assert_eq!(catalog.total_pages(), 2);
    }

    #[test]
    fn request_enters_loading_before_response() {
        let mut catalog = Catalog::new();
        let ticket = catalog.request_page(1).expect("page 1 is always navigable");
        assert_eq!(catalog.view(), CatalogView::Loading { page: 1 });

        catalog.apply(ticket, Err(LoadError::Transport("offline".to_owned())));
        assert!(matches!(catalog.view(), CatalogView::Failed(_)));
    }
}
