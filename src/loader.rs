//! Page loading state machine.
//!
//! Every request is tagged with a [`PageTicket`]. Only the outcome of the most
//! recently issued ticket is applied; a late response for an older request is
//! dropped instead of overwriting newer state.

use crate::model::Page;
use crate::provider::{CatalogProvider, LoadError};

#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    #[default]
    Idle,
    Loading { page: u32 },
    Loaded(Page),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageTicket {
    pub page: u32,
    generation: u64,
}

#[derive(Debug, Default)]
pub struct CatalogLoader {
    state: LoadState,
    generation: u64,
}

impl CatalogLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, LoadState::Loading { .. })
    }

    pub fn page(&self) -> Option<&Page> {
        match &self.state {
            LoadState::Loaded(page) => Some(page),
            _ => None,
        }
    }

    /// Enters `Loading` right away, dropping any previous page or error.
    pub fn begin(&mut self, page: u32) -> PageTicket {
        self.generation = self.generation.wrapping_add(1);
        self.state = LoadState::Loading { page };
        PageTicket {
            page,
            generation: self.generation,
        }
    }

    /// Applies the outcome of `ticket`'s request. Returns `false` when a newer
    /// request has been issued since, in which case nothing changes.
    pub fn complete(&mut self, ticket: PageTicket, outcome: Result<Page, LoadError>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(
                page = ticket.page,
                generation = ticket.generation,
                latest = self.generation,
                "discarding stale page result"
            );
            return false;
        }

        self.state = match outcome {
            Ok(page) => {
                tracing::debug!(
                    page = ticket.page,
                    records = page.records.len(),
                    total_pages = page.total_pages,
                    "page loaded"
                );
                LoadState::Loaded(page)
            }
            Err(err) => {
                tracing::warn!(page = ticket.page, %err, "page load failed");
                LoadState::Failed(err.to_string())
            }
        };
        true
    }

    pub async fn load(&mut self, provider: &dyn CatalogProvider, page: u32) -> &LoadState {
        let ticket = self.begin(page);
        let outcome = provider.fetch_page(page).await;
        self.complete(ticket, outcome);
        &self.state
    }
}
