use clap::Parser;
use std::io::Write;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod config;
mod output;

use config::{Command, Config};
use geocatalog::constants;

fn main() -> anyhow::Result<()> {
    // Initialize tracing; stdout is reserved for catalog output
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "geocatalog=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Parse configuration
    let config = Config::parse();
    tracing::debug!(?config, "{} starting", constants::APP_NAME);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    match config.command {
        Command::Filetypes => {
            output::write_filetypes(&mut out, config.format, geocatalog::filetype_options())?
        }
        Command::Crs => {
            output::write_crs_options(&mut out, config.format, geocatalog::crs_options())?
        }
        Command::Show { key } => {
            let option = geocatalog::filetype(key.0)?;
            output::write_filetype(&mut out, config.format, key.0, option)?
        }
        Command::ResolveCrs { value } => {
            let option = geocatalog::crs_by_code(value)?;
            output::write_crs(&mut out, config.format, option)?
        }
        Command::Check => {
            geocatalog::validate()?;
            writeln!(
                out,
                "Catalog OK: {} file types, {} CRS options",
                geocatalog::filetype_options().len(),
                geocatalog::crs_options().len()
            )?;
        }
    }

    out.flush()?;
    Ok(())
}
