use std::io::Write as _;

use anyhow::Context as _;

use crate::catalog::Catalog;
use crate::cli::ListArgs;
use crate::config::ProviderConfig;
use crate::labels::{self, Lang};
use crate::loader::LoadState;
use crate::provider::HttpProvider;

pub async fn run(config: ProviderConfig, lang: Lang, args: ListArgs) -> anyhow::Result<()> {
    let provider = HttpProvider::new(config).context("build catalog provider")?;

    let mut catalog = Catalog::new();
    if let Some(name) = args.name.as_deref() {
        catalog.set_search(name);
    }
    if let Some(status) = args.status.as_deref() {
        catalog.set_status(labels::selection_value(labels::STATUS_OPTIONS, status));
    }
    if let Some(species) = args.species.as_deref() {
        catalog.set_species(labels::selection_value(labels::SPECIES_OPTIONS, species));
    }
    if let Some(gender) = args.gender.as_deref() {
        catalog.set_gender(labels::selection_value(labels::GENDER_OPTIONS, gender));
    }
    tracing::debug!(filter = ?catalog.filter(), page = args.page, "list");

    catalog.mount_at(&provider, args.page).await;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(crate::render::catalog(&catalog, lang).as_bytes())
        .context("write catalog")?;
    stdout.flush().context("flush stdout")?;

    if let LoadState::Failed(reason) = catalog.state() {
        anyhow::bail!("load page {}: {reason}", catalog.page());
    }
    Ok(())
}
