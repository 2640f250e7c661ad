//! Client-side record filtering.
//!
//! The visible subset is always derived from scratch: [`compute_visible`] takes
//! the raw records of the current page and a [`FilterState`] and returns the
//! matching records in provider order.

use crate::model::Record;

/// Four independent predicates applied conjunctively.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterState {
    /// Case-insensitive substring matched against the record name.
    pub text: String,
    pub status: Option<String>,
    pub species: Option<String>,
    pub gender: Option<String>,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    /// An empty value unsets the predicate.
    pub fn set_status(&mut self, value: impl Into<String>) {
        self.status = selection(value.into());
    }

    /// An empty value unsets the predicate.
    pub fn set_species(&mut self, value: impl Into<String>) {
        self.species = selection(value.into());
    }

    /// An empty value unsets the predicate.
    pub fn set_gender(&mut self, value: impl Into<String>) {
        self.gender = selection(value.into());
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_unset(&self) -> bool {
        self.text.is_empty()
            && self.status.is_none()
            && self.species.is_none()
            && self.gender.is_none()
    }

    pub fn matches(&self, record: &Record) -> bool {
        if !self.text.is_empty()
            && !record
                .name
                .to_lowercase()
                .contains(&self.text.to_lowercase())
        {
            return false;
        }
        if let Some(status) = &self.status
            && record.status != *status
        {
            return false;
        }
        if let Some(species) = &self.species
            && record.species != *species
        {
            return false;
        }
        if let Some(gender) = &self.gender
            && record.gender != *gender
        {
            return false;
        }
        true
    }
}

fn selection(value: String) -> Option<String> {
    if value.is_empty() { None } else { Some(value) }
}

/// Records of `records` that satisfy every active predicate, in input order.
pub fn compute_visible<'a>(records: &'a [Record], filter: &FilterState) -> Vec<&'a Record> {
    records.iter().filter(|r| filter.matches(r)).collect()
}
