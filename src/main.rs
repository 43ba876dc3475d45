use anyhow::Context;
use clap::Parser;
use indicatif::ProgressBar;
use puslespill_common::{search, LayoutMode, Table};
use puslespill_view::{browse, cli, config, error, export, render, server, sheets};
use cli::{Cli, Commands};
use config::{Config, SPREADSHEET_NAME};
use sheets::{load_table, CachedSource, SheetsSource};
use std::path::PathBuf;
use std::time::Duration;
use tracing_subscriber::{fmt, EnvFilter};

fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
}

fn open_source(config: &Config) -> error::Result<CachedSource<SheetsSource>> {
    let key = config.load_credentials()?;
    let source = SheetsSource::new(key, SPREADSHEET_NAME, Duration::from_secs(config.timeout_seconds))?;
    Ok(CachedSource::new(source))
}

async fn fetch_with_spinner(source: &CachedSource<SheetsSource>, sort: bool) -> error::Result<Table> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message(format!("Henter «{}» fra Google Sheets...", SPREADSHEET_NAME));
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = load_table(source, sort).await;
    spinner.finish_and_clear();
    result
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = match (&cli.command, cli.verbose) {
        (_, true) | (Commands::Serve { .. }, _) => "info",
        _ => "warn",
    };
    init_logging(default_level);

    let config = Config::load().context("loading config")?;

    match cli.command {
        Commands::Search { query, width, sort } => {
            let source = open_source(&config)?;
            let table = fetch_with_spinner(&source, sort || config.sort_on_load).await?;

            let layout = render::terminal_viewport(width)
                .layout()
                .unwrap_or(LayoutMode::Grid);
            let outcome = search(&table, &query);
            println!("{}", render::render_outcome(&outcome, layout));
        }

        Commands::Browse { width, sort } => {
            let source = open_source(&config)?;
            // Width is read once per session
            let layout = render::terminal_viewport(width)
                .layout()
                .unwrap_or(LayoutMode::Grid);
            browse::run_browse(&source, sort || config.sort_on_load, layout).await?;
        }

        Commands::Export { query, format, output, sort } => {
            println!("📄 puslespill - export\n");

            let source = open_source(&config)?;
            let table = fetch_with_spinner(&source, sort || config.sort_on_load).await?;
            let outcome = search(&table, &query);
            println!("{}", render::render_status(&outcome.status));

            let output = output.unwrap_or_else(|| PathBuf::from("."));
            let written = export::export_table(&outcome.table, &format, &output)
                .with_context(|| format!("exporting {} to {}", format, output.display()))?;
            for path in written {
                println!("✔ {}", path.display());
            }
        }

        Commands::Serve { bind, static_dir } => {
            let source = open_source(&config)?;
            let address = bind.unwrap_or_else(|| config.bind_address.clone());
            let static_dir = static_dir.or_else(|| config.static_dir.clone());

            let state = server::ServerState::new(source, config.sort_on_load);
            server::start_server(state, &address, static_dir.as_deref()).await?;
        }

        Commands::Config { set_credentials, sort_on_load, show } => {
            let mut config = config;

            if let Some(path) = set_credentials {
                config.set_credentials_path(&path)?;
                println!("✔ Credentials saved: {}", path.display());
            }

            if let Some(sort) = sort_on_load {
                config.set_sort_on_load(sort)?;
                println!("✔ sort_on_load = {}", sort);
            }

            if show {
                println!("Settings ({}):", Config::config_path()?.display());
                println!("  Spreadsheet: {}", SPREADSHEET_NAME);
                println!(
                    "  Credentials: {}",
                    match &config.credentials_path {
                        Some(path) => path.display().to_string(),
                        None => "not set".to_string(),
                    }
                );
                println!("  Sort on load: {}", config.sort_on_load);
                println!("  Bind address: {}", config.bind_address);
                println!(
                    "  Web bundle: {}",
                    config
                        .static_dir
                        .as_ref()
                        .map_or_else(|| "not set".to_string(), |d| d.display().to_string())
                );
                println!("  Timeout: {}s", config.timeout_seconds);
            }
        }
    }

    Ok(())
}
