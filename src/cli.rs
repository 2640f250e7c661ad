use clap::{Args, Parser, Subcommand};

use crate::labels::Lang;

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// API base URL (default: $CATALOG_EXPLORER_BASE_URL or the public API).
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Label language.
    #[arg(long, value_enum, global = true, default_value_t = Lang::Es)]
    pub lang: Lang,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    List(ListArgs),
    Show(ShowArgs),
    Browse,
}

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Page number (1-based).
    #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pub page: u32,

    /// Case-insensitive substring of the character name.
    #[arg(long)]
    pub name: Option<String>,

    /// Status value or label (e.g. `Alive`, `Muerto`, `unknown`).
    #[arg(long)]
    pub status: Option<String>,

    /// Species value or label (e.g. `Human`, `Humanoide`).
    #[arg(long)]
    pub species: Option<String>,

    /// Gender value or label (e.g. `Female`, `Sin género`).
    #[arg(long)]
    pub gender: Option<String>,
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Character identifier.
    #[arg(long)]
    pub id: u64,
}
