use std::collections::BTreeMap;
use std::sync::Mutex;

use async_trait::async_trait;
use reqwest::StatusCode;

use crate::model::{Page, PlaceRef, Record};
use crate::provider::{CatalogProvider, LoadError};

pub fn record(id: u64, name: &str, status: &str, species: &str, gender: &str) -> Record {
    Record {
        id,
        name: name.to_owned(),
        status: status.to_owned(),
        species: species.to_owned(),
        subtype: String::new(),
        gender: gender.to_owned(),
        origin: PlaceRef {
            name: "Earth (C-137)".to_owned(),
            url: None,
        },
        location: PlaceRef {
            name: "Citadel of Ricks".to_owned(),
            url: None,
        },
        image: format!("https://example.test/avatar/{id}.jpeg"),
        episode: vec!["https://example.test/episode/1".to_owned()],
        url: None,
        created: None,
    }
}

/// In-memory provider with a fixed set of pages; any other page answers 500.
#[derive(Default)]
pub struct StaticProvider {
    pages: BTreeMap<u32, Vec<Record>>,
    requested_pages: Mutex<Vec<u32>>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_page(mut self, page: u32, records: Vec<Record>) -> Self {
        self.pages.insert(page, records);
        self
    }

    pub fn requested_pages(&self) -> Vec<u32> {
        self.requested_pages
            .lock()
            .map(|pages| pages.clone())
            .unwrap_or_default()
    }

    fn total_pages(&self) -> u32 {
        self.pages.keys().copied().max().unwrap_or(0)
    }
}

#[async_trait]
impl CatalogProvider for StaticProvider {
    async fn fetch_page(&self, page: u32) -> Result<Page, LoadError> {
        if let Ok(mut requested) = self.requested_pages.lock() {
            requested.push(page);
        }
        match self.pages.get(&page) {
            Some(records) => Ok(Page {
                records: records.clone(),
                total_pages: self.total_pages(),
            }),
            None => Err(LoadError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                message: "boom".to_owned(),
            }),
        }
    }

    async fn fetch_record(&self, id: u64) -> Result<Record, LoadError> {
        self.pages
            .values()
            .flatten()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| LoadError::Status {
                status: StatusCode::NOT_FOUND,
                message: "Character not found".to_owned(),
            })
    }
}
