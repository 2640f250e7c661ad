use std::fmt::Write as _;

use crate::catalog::{Catalog, CatalogView};
use crate::detail::{DetailState, DetailView, RecordDetail};
use crate::filter::FilterState;
use crate::labels::{self, Lang, Text};
use crate::model::Record;

pub fn catalog(catalog: &Catalog, lang: Lang) -> String {
    let mut out = String::new();
    match catalog.view() {
        CatalogView::Loading { .. } => {
            out.push_str(labels::text(lang, Text::LoadingList));
            out.push('\n');
            return out;
        }
        CatalogView::Failed(reason) => {
            let _ = writeln!(out, "Error: {} ({reason})", labels::text(lang, Text::ListError));
            return out;
        }
        CatalogView::EmptyPage => {
            header(&mut out, catalog.filter(), lang);
            out.push_str(labels::text(lang, Text::EmptyPage));
            out.push('\n');
        }
        CatalogView::NoMatches => {
            header(&mut out, catalog.filter(), lang);
            out.push_str(labels::text(lang, Text::NoResults));
            out.push('\n');
        }
        CatalogView::Records(records) => {
            header(&mut out, catalog.filter(), lang);
            for record in records {
                record_line(&mut out, record, lang);
            }
        }
    }
    pagination(&mut out, catalog, lang);
    out
}

fn header(out: &mut String, filter: &FilterState, lang: Lang) {
    let _ = writeln!(out, "{}", labels::text(lang, Text::Title));
    if let Some(summary) = filter_summary(filter, lang) {
        let _ = writeln!(out, "{summary}");
    }
    out.push('\n');
}

fn filter_summary(filter: &FilterState, lang: Lang) -> Option<String> {
    let mut parts = Vec::new();
    if !filter.text.is_empty() {
        parts.push(format!("{}: \"{}\"", labels::text(lang, Text::SearchFilter), filter.text));
    }
    if let Some(status) = &filter.status {
        parts.push(format!(
            "{}: {}",
            labels::text(lang, Text::Status),
            labels::label_for(labels::STATUS_OPTIONS, status, lang)
        ));
    }
    if let Some(species) = &filter.species {
        parts.push(format!(
            "{}: {}",
            labels::text(lang, Text::Species),
            labels::label_for(labels::SPECIES_OPTIONS, species, lang)
        ));
    }
    if let Some(gender) = &filter.gender {
        parts.push(format!(
            "{}: {}",
            labels::text(lang, Text::Gender),
            labels::label_for(labels::GENDER_OPTIONS, gender, lang)
        ));
    }
    if parts.is_empty() {
        None
    } else {
        Some(format!("[{}]", parts.join(", ")))
    }
}

fn record_line(out: &mut String, record: &Record, lang: Lang) {
    let _ = writeln!(
        out,
        "{:>4}  {} | {}: {} | {}: {}",
        record.id,
        record.name,
        labels::text(lang, Text::Status),
        record.status,
        labels::text(lang, Text::Species),
        record.species,
    );
}

fn pagination(out: &mut String, catalog: &Catalog, lang: Lang) {
    let mut parts = Vec::new();
    if catalog.can_go_prev() {
        parts.push(format!("[{}]", labels::text(lang, Text::Previous)));
    }
    parts.push(labels::page_of(lang, catalog.page(), catalog.total_pages()));
    if catalog.can_go_next() {
        parts.push(format!("[{}]", labels::text(lang, Text::Next)));
    }
    let _ = writeln!(out, "\n{}", parts.join("  "));
}

pub fn detail(view: &DetailView, lang: Lang) -> String {
    let mut out = String::new();
    match view.state() {
        DetailState::Loading => {
            out.push_str(labels::text(lang, Text::LoadingDetail));
            out.push('\n');
        }
        DetailState::Failed(reason) => {
            let _ = writeln!(out, "Error: {} ({reason})", labels::text(lang, Text::DetailError));
        }
        DetailState::Loaded(record) => {
            record_detail(&mut out, &RecordDetail::new(record, lang), lang);
        }
    }
    out
}

fn record_detail(out: &mut String, detail: &RecordDetail<'_>, lang: Lang) {
    let _ = writeln!(out, "{}", detail.name);
    let _ = writeln!(out, "{}", detail.image);
    out.push('\n');

    let rows = [
        (Text::Status, detail.status),
        (Text::Species, detail.species),
        (Text::Subtype, detail.subtype),
        (Text::Gender, detail.gender),
        (Text::Origin, detail.origin),
        (Text::Location, detail.location),
    ];
    for (key, value) in rows {
        let _ = writeln!(out, "{}: {value}", labels::text(lang, key));
    }
    if let Some(created) = &detail.created {
        let _ = writeln!(out, "{}: {created}", labels::text(lang, Text::Created));
    }
    out.push('\n');
    let _ = writeln!(out, "{}", labels::episode_count(lang, detail.episode_count));
}
