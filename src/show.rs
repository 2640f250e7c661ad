use std::io::Write as _;

use anyhow::Context as _;

use crate::cli::ShowArgs;
use crate::config::ProviderConfig;
use crate::detail::{DetailState, DetailView};
use crate::labels::Lang;
use crate::provider::HttpProvider;

pub async fn run(config: ProviderConfig, lang: Lang, args: ShowArgs) -> anyhow::Result<()> {
    let provider = HttpProvider::new(config).context("build catalog provider")?;

    let mut view = DetailView::new(args.id);
    view.load(&provider).await;

    let mut stdout = std::io::stdout().lock();
    stdout
        .write_all(crate::render::detail(&view, lang).as_bytes())
        .context("write detail")?;
    stdout.flush().context("flush stdout")?;

    if let DetailState::Failed(reason) = view.state() {
        anyhow::bail!("load character {}: {reason}", view.id());
    }
    Ok(())
}
