use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One catalog entry as returned by the provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: u64,
    pub name: String,
    pub status: String,
    pub species: String,
    #[serde(rename = "type", default)]
    pub subtype: String,
    pub gender: String,
    pub origin: PlaceRef,
    pub location: PlaceRef,
    pub image: String,
    #[serde(default)]
    pub episode: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
}

impl Record {
    pub fn episode_count(&self) -> usize {
        self.episode.len()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlaceRef {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

/// One fetched batch of records plus the collection's total page count.
#[derive(Debug, Clone, PartialEq)]
pub struct Page {
    pub records: Vec<Record>,
    pub total_pages: u32,
}

/// Wire shape of a page query body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageBody {
    pub info: PageInfo,
    pub results: Vec<Record>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageInfo {
    #[serde(default)]
    pub count: Option<u64>,
    pub pages: u32,
    #[serde(default)]
    pub next: Option<String>,
    #[serde(default)]
    pub prev: Option<String>,
}

impl From<PageBody> for Page {
    fn from(body: PageBody) -> Self {
        Self {
            records: body.results,
            total_pages: body.info.pages,
        }
    }
}
