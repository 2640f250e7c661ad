//! Interactive, line-driven catalog session.
//!
//! Each input line is one UI event. After every event the session re-renders
//! whatever the catalog (or the opened detail view) currently shows.

use anyhow::Context as _;
use tokio::io::{AsyncBufReadExt as _, AsyncWriteExt as _, BufReader};

use crate::catalog::Catalog;
use crate::config::ProviderConfig;
use crate::detail::DetailView;
use crate::labels::{self, Lang};
use crate::provider::{CatalogProvider, HttpProvider};

const HELP: &str = "\
commands:
  next | prev | page N     navigate
  search [TEXT]            name filter (no text clears)
  status [VALUE]           status filter (no value clears)
  species [VALUE]          species filter (no value clears)
  gender [VALUE]           gender filter (no value clears)
  clear                    clear all filters
  reload                   fetch the current page again
  show ID                  open a character
  list                     back to the list
  help | quit
";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Next,
    Prev,
    Page(u32),
    Search(String),
    Status(String),
    Species(String),
    Gender(String),
    Clear,
    Reload,
    Show(u64),
    List,
    Help,
    Quit,
}

impl BrowseCommand {
    pub fn parse(line: &str) -> anyhow::Result<Option<Self>> {
        let line = line.trim();
        if line.is_empty() {
            return Ok(None);
        }
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        let command = match word.to_ascii_lowercase().as_str() {
            "next" | "n" => Self::Next,
            "prev" | "p" => Self::Prev,
            "page" => Self::Page(
                rest.parse()
                    .with_context(|| format!("invalid page number: {rest:?}"))?,
            ),
            "search" => Self::Search(rest.to_owned()),
            "status" => Self::Status(labels::selection_value(labels::STATUS_OPTIONS, rest)),
            "species" => Self::Species(labels::selection_value(labels::SPECIES_OPTIONS, rest)),
            "gender" => Self::Gender(labels::selection_value(labels::GENDER_OPTIONS, rest)),
            "clear" => Self::Clear,
            "reload" | "r" => Self::Reload,
            "show" => Self::Show(
                rest.parse()
                    .with_context(|| format!("invalid character id: {rest:?}"))?,
            ),
            "list" | "back" => Self::List,
            "help" | "?" => Self::Help,
            "quit" | "exit" | "q" => Self::Quit,
            other => anyhow::bail!("unknown command: {other} (try `help`)"),
        };
        Ok(Some(command))
    }
}

pub struct Session {
    catalog: Catalog,
    detail: Option<DetailView>,
    lang: Lang,
}

impl Session {
    pub fn new(lang: Lang) -> Self {
        Self {
            catalog: Catalog::new(),
            detail: None,
            lang,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub async fn start(&mut self, provider: &dyn CatalogProvider) -> String {
        self.catalog.mount(provider).await;
        self.render()
    }

    /// Handles one event. Returns `None` when the session should end.
    pub async fn handle(
        &mut self,
        provider: &dyn CatalogProvider,
        command: BrowseCommand,
    ) -> Option<String> {
        let mut notice = None;
        match command {
            BrowseCommand::Quit => return None,
            BrowseCommand::Help => return Some(HELP.to_owned()),
            BrowseCommand::Next => {
                self.detail = None;
                if !self.catalog.next_page(provider).await {
                    notice = Some("already on the last page".to_owned());
                }
            }
            BrowseCommand::Prev => {
                self.detail = None;
                if !self.catalog.prev_page(provider).await {
                    notice = Some("already on the first page".to_owned());
                }
            }
            BrowseCommand::Page(page) => {
                self.detail = None;
                if !self.catalog.go_to(provider, page).await {
                    notice = Some(format!(
                        "page {page} is out of range (1..={})",
                        self.catalog.total_pages().max(1)
                    ));
                }
            }
            BrowseCommand::Search(text) => {
                self.detail = None;
                self.catalog.set_search(text);
            }
            BrowseCommand::Status(value) => {
                self.detail = None;
                self.catalog.set_status(value);
            }
            BrowseCommand::Species(value) => {
                self.detail = None;
                self.catalog.set_species(value);
            }
            BrowseCommand::Gender(value) => {
                self.detail = None;
                self.catalog.set_gender(value);
            }
            BrowseCommand::Clear => {
                self.detail = None;
                self.catalog.clear_filters();
            }
            BrowseCommand::Reload => {
                self.detail = None;
                self.catalog.reload(provider).await;
            }
            BrowseCommand::Show(id) => {
                let mut view = DetailView::new(id);
                view.load(provider).await;
                self.detail = Some(view);
            }
            BrowseCommand::List => {
                self.detail = None;
            }
        }

        let mut out = notice.map(|n| format!("{n}\n")).unwrap_or_default();
        out.push_str(&self.render());
        Some(out)
    }

    fn render(&self) -> String {
        match &self.detail {
            Some(view) => {
                let mut out = crate::render::detail(view, self.lang);
                out.push_str(&format!(
                    "\n[{}: list]\n",
                    labels::text(self.lang, labels::Text::BackToList)
                ));
                out
            }
            None => crate::render::catalog(&self.catalog, self.lang),
        }
    }
}

pub async fn run(config: ProviderConfig, lang: Lang) -> anyhow::Result<()> {
    let provider = HttpProvider::new(config).context("build catalog provider")?;
    let mut session = Session::new(lang);
    let mut stdout = tokio::io::stdout();

    let first = session.start(&provider).await;
    write_out(&mut stdout, &first).await?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("read stdin")? {
        let command = match BrowseCommand::parse(&line) {
            Ok(Some(command)) => command,
            Ok(None) => continue,
            Err(err) => {
                write_out(&mut stdout, &format!("{err:#}\n")).await?;
                continue;
            }
        };
        tracing::debug!(?command, "browse event");

        match session.handle(&provider, command).await {
            Some(out) => write_out(&mut stdout, &out).await?,
            None => break,
        }
    }

    Ok(())
}

async fn write_out(stdout: &mut tokio::io::Stdout, text: &str) -> anyhow::Result<()> {
    stdout
        .write_all(text.as_bytes())
        .await
        .context("write stdout")?;
    stdout.flush().await.context("flush stdout")?;
    Ok(())
}
