//! Static display labels for filter vocabularies and UI texts.

use clap::ValueEnum;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Lang {
    #[default]
    Es,
    En,
}

/// A selectable filter value: the literal provider string plus its labels.
#[derive(Debug, Clone, Copy)]
pub struct FilterOption {
    pub value: &'static str,
    pub es: &'static str,
    pub en: &'static str,
}

impl FilterOption {
    pub fn label(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::Es => self.es,
            Lang::En => self.en,
        }
    }
}

const fn option(value: &'static str, es: &'static str, en: &'static str) -> FilterOption {
    FilterOption { value, es, en }
}

pub const STATUS_OPTIONS: &[FilterOption] = &[
    option("Alive", "Vivo", "Alive"),
    option("Dead", "Muerto", "Dead"),
    option("unknown", "Desconocido", "Unknown"),
];

pub const SPECIES_OPTIONS: &[FilterOption] = &[
    option("Human", "Humano", "Human"),
    option("Alien", "Alien", "Alien"),
    option("Humanoid", "Humanoide", "Humanoid"),
    option("Robot", "Robot", "Robot"),
    option("Animal", "Animal", "Animal"),
    option("Mythological Creature", "Criatura Mitológica", "Mythological Creature"),
];

pub const GENDER_OPTIONS: &[FilterOption] = &[
    option("Male", "Masculino", "Male"),
    option("Female", "Femenino", "Female"),
    option("Genderless", "Sin género", "Genderless"),
    option("unknown", "Desconocido", "Unknown"),
];

/// Label for a provider value, or the value itself when it is not in `options`.
pub fn label_for<'a>(options: &[FilterOption], value: &'a str, lang: Lang) -> &'a str {
    options
        .iter()
        .find(|o| o.value == value)
        .map(|o| o.label(lang))
        .unwrap_or(value)
}

/// Resolves user input against a vocabulary by value or by label, ignoring
/// case. Returns the literal provider value.
pub fn resolve_option(options: &[FilterOption], input: &str) -> Option<&'static str> {
    let input = input.trim();
    options
        .iter()
        .find(|o| {
            o.value.eq_ignore_ascii_case(input)
                || o.es.to_lowercase() == input.to_lowercase()
                || o.en.eq_ignore_ascii_case(input)
        })
        .map(|o| o.value)
}

/// Literal filter value for user input: the vocabulary value when the input
/// names one, the trimmed input otherwise.
pub fn selection_value(options: &[FilterOption], input: &str) -> String {
    resolve_option(options, input)
        .map(str::to_owned)
        .unwrap_or_else(|| input.trim().to_owned())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Text {
    Title,
    LoadingList,
    LoadingDetail,
    ListError,
    DetailError,
    NoResults,
    EmptyPage,
    Status,
    Species,
    Subtype,
    Gender,
    Origin,
    Location,
    Created,
    NotSpecified,
    Previous,
    Next,
    BackToList,
    SearchFilter,
}

pub fn text(lang: Lang, key: Text) -> &'static str {
    match lang {
        Lang::Es => match key {
            Text::Title => "Personajes de Rick and Morty",
            Text::LoadingList => "Cargando personajes...",
            Text::LoadingDetail => "Cargando detalles del personaje...",
            Text::ListError => "Error al cargar los datos",
            Text::DetailError => "Error al cargar los datos del personaje",
            Text::NoResults => "No se encontraron personajes con los filtros aplicados",
            Text::EmptyPage => "Esta página no contiene personajes",
            Text::Status => "Estado",
            Text::Species => "Especie",
            Text::Subtype => "Tipo",
            Text::Gender => "Género",
            Text::Origin => "Origen",
            Text::Location => "Ubicación actual",
            Text::Created => "Creado",
            Text::NotSpecified => "No especificado",
            Text::Previous => "Anterior",
            Text::Next => "Siguiente",
            Text::BackToList => "Volver a la lista",
            Text::SearchFilter => "Nombre",
        },
        Lang::En => match key {
            Text::Title => "Rick and Morty characters",
            Text::LoadingList => "Loading characters...",
            Text::LoadingDetail => "Loading character details...",
            Text::ListError => "Failed to load data",
            Text::DetailError => "Failed to load character data",
            Text::NoResults => "No characters match the applied filters",
            Text::EmptyPage => "This page has no characters",
            Text::Status => "Status",
            Text::Species => "Species",
            Text::Subtype => "Type",
            Text::Gender => "Gender",
            Text::Origin => "Origin",
            Text::Location => "Current location",
            Text::Created => "Created",
            Text::NotSpecified => "Not specified",
            Text::Previous => "Previous",
            Text::Next => "Next",
            Text::BackToList => "Back to list",
            Text::SearchFilter => "Name",
        },
    }
}

pub fn page_of(lang: Lang, page: u32, total_pages: u32) -> String {
    match lang {
        Lang::Es => format!("Página {page} de {total_pages}"),
        Lang::En => format!("Page {page} of {total_pages}"),
    }
}

pub fn episode_count(lang: Lang, count: usize) -> String {
    match lang {
        Lang::Es => format!("Aparece en {count} episodios"),
        Lang::En => format!("Appears in {count} episodes"),
    }
}
