mod commands;
mod output;

use std::path::PathBuf;

use anyhow::Result;
use catalog_lib::validation;
use catalog_lib::{CatalogConfig, Client};
use clap::{Parser, Subcommand};

use crate::output::OutputFormat;

#[derive(Parser)]
#[command(name = "catalog")]
#[command(about = "Browse and search a remote product catalog")]
struct Cli {
    /// Output format: table, json, csv or markdown
    #[arg(long, default_value = "table", global = true)]
    output: String,

    /// Product service base URL (overrides CATALOG_API_BASE_URL)
    #[arg(long, global = true)]
    base_url: Option<String>,

    /// TOML settings file (api_base_url, search_debounce_ms, page_size)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Check every image URL and show the placeholder for those that fail
    #[arg(long, global = true)]
    probe_images: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List products page by page
    List(commands::list::ListArgs),
    /// Search products by term
    Search(commands::search::SearchArgs),
    /// Show a single product
    Show(commands::show::ShowArgs),
    /// Open a route such as / or /products/<id>
    Open(commands::open::OpenArgs),
    /// Interactive session: type to search, :n / :p to page, :q to quit
    Browse,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("catalog=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();

    let format = match cli.output.as_str() {
        "json" => OutputFormat::Json,
        "csv" => OutputFormat::Csv,
        "markdown" | "md" => OutputFormat::Markdown,
        _ => OutputFormat::Table,
    };

    let config = load_config(&cli)?;
    let client = Client::with_base_url(&config.api_base_url);
    let probe = cli.probe_images;

    match &cli.command {
        Commands::List(args) => commands::list::run(args, &client, &config, &format, probe).await?,
        Commands::Search(args) => {
            commands::search::run(args, &client, &config, &format, probe).await?
        }
        Commands::Show(args) => commands::show::run(args, &client, &format, probe).await?,
        Commands::Open(args) => commands::open::run(args, &client, &config, &format, probe).await?,
        Commands::Browse => commands::browse::run(&client, &config, &format, probe).await?,
    }

    Ok(())
}

fn load_config(cli: &Cli) -> Result<CatalogConfig> {
    let mut config = CatalogConfig::default();
    if let Some(path) = &cli.config {
        config = config.with_file(path)?;
    }
    let mut config = config.with_env_lookup(|key| std::env::var(key).ok());
    if let Some(url) = &cli.base_url {
        config.api_base_url = validation::validate_base_url(url)?;
    }
    Ok(config)
}
