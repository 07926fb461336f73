use anyhow::Result;
use catalog_lib::search::{classify, SEARCH_HINT};
use catalog_lib::validation;
use catalog_lib::{CatalogConfig, Client, ListParams, SearchSignal};
use clap::Args;

use super::list::show_page;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct SearchArgs {
    /// Search term, at least 3 characters. An empty term lists everything.
    pub term: String,

    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Results per page (defaults to the configured page size)
    #[arg(long)]
    pub limit: Option<u32>,
}

pub async fn run(
    args: &SearchArgs,
    client: &Client,
    config: &CatalogConfig,
    format: &OutputFormat,
    probe: bool,
) -> Result<()> {
    let term = match classify(&args.term) {
        SearchSignal::Clear => None,
        SearchSignal::Hint => {
            eprintln!("{}", SEARCH_HINT);
            return Ok(());
        }
        SearchSignal::Search(term) => Some(term),
    };

    let params = ListParams {
        page: validation::validate_page(args.page)?,
        limit: validation::validate_limit(args.limit.unwrap_or(config.page_size))?,
        term,
    };
    show_page(client, params, format, probe).await
}
