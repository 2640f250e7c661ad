use crate::labels::{self, Lang, Text};
use crate::model::Record;
use crate::provider::CatalogProvider;

#[derive(Debug, Clone, PartialEq)]
pub enum DetailState {
    Loading,
    Loaded(Record),
    Failed(String),
}

/// Single-record view. An unknown id ends in `Failed` like any other error.
#[derive(Debug)]
pub struct DetailView {
    id: u64,
    state: DetailState,
}

impl DetailView {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            state: DetailState::Loading,
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn state(&self) -> &DetailState {
        &self.state
    }

    pub async fn load(&mut self, provider: &dyn CatalogProvider) -> &DetailState {
        self.state = DetailState::Loading;
        self.state = match provider.fetch_record(self.id).await {
            Ok(record) => DetailState::Loaded(record),
            Err(err) => {
                tracing::warn!(id = self.id, %err, "record load failed");
                DetailState::Failed(err.to_string())
            }
        };
        &self.state
    }

    pub fn detail(&self, lang: Lang) -> Option<RecordDetail<'_>> {
        match &self.state {
            DetailState::Loaded(record) => Some(RecordDetail::new(record, lang)),
            _ => None,
        }
    }
}

/// Display-ready fields of a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordDetail<'a> {
    pub name: &'a str,
    pub image: &'a str,
    pub status: &'a str,
    /// Lowercase status, used as a style hint.
    pub status_class: String,
    pub species: &'a str,
    pub subtype: &'a str,
    pub gender: &'a str,
    pub origin: &'a str,
    pub location: &'a str,
    pub episode_count: usize,
    pub created: Option<String>,
}

impl<'a> RecordDetail<'a> {
    pub fn new(record: &'a Record, lang: Lang) -> Self {
        let subtype = if record.subtype.is_empty() {
            labels::text(lang, Text::NotSpecified)
        } else {
            record.subtype.as_str()
        };
        Self {
            name: &record.name,
            image: &record.image,
            status: labels::label_for(labels::STATUS_OPTIONS, &record.status, lang),
            status_class: record.status.to_lowercase(),
            species: labels::label_for(labels::SPECIES_OPTIONS, &record.species, lang),
            subtype,
            gender: labels::label_for(labels::GENDER_OPTIONS, &record.gender, lang),
            origin: &record.origin.name,
            location: &record.location.name,
            episode_count: record.episode_count(),
            created: record.created.map(|c| c.format("%Y-%m-%d").to_string()),
        }
    }
}
