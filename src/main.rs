use std::process::ExitCode;

use anyhow::Context as _;
use clap::Parser as _;

#[tokio::main]
async fn main() -> ExitCode {
    if let Err(err) = try_main().await {
        eprintln!("{err:#}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

async fn try_main() -> anyhow::Result<()> {
    catalog_explorer::logging::init().context("init logging")?;

    let cli = catalog_explorer::cli::Cli::parse();
    tracing::debug!(?cli, "parsed cli");

    let config = catalog_explorer::config::ProviderConfig::resolve(cli.base_url.as_deref())
        .context("resolve provider config")?;

    match cli.command {
        catalog_explorer::cli::Command::List(args) => {
            catalog_explorer::list::run(config, cli.lang, args)
                .await
                .context("list")?;
        }
        catalog_explorer::cli::Command::Show(args) => {
            catalog_explorer::show::run(config, cli.lang, args)
                .await
                .context("show")?;
        }
        catalog_explorer::cli::Command::Browse => {
            catalog_explorer::browse::run(config, cli.lang)
                .await
                .context("browse")?;
        }
    }

    Ok(())
}
