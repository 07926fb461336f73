use anyhow::Result;
use catalog_lib::validation;
use catalog_lib::{CatalogConfig, Client, ListParams, ListView};
use clap::Args;

use super::{loading_spinner, probe_list_images};
use crate::output::{print_list, OutputFormat};

#[derive(Args)]
pub struct ListArgs {
    /// Page number
    #[arg(long, default_value = "1")]
    pub page: u32,

    /// Results per page (defaults to the configured page size)
    #[arg(long)]
    pub limit: Option<u32>,
}

pub async fn run(
    args: &ListArgs,
    client: &Client,
    config: &CatalogConfig,
    format: &OutputFormat,
    probe: bool,
) -> Result<()> {
    let params = ListParams {
        page: validation::validate_page(args.page)?,
        limit: validation::validate_limit(args.limit.unwrap_or(config.page_size))?,
        term: None,
    };
    show_page(client, params, format, probe).await
}

/// Fetches one page (listing or search, depending on `params.term`) and
/// prints whichever state it settles in.
pub async fn show_page(
    client: &Client,
    params: ListParams,
    format: &OutputFormat,
    probe: bool,
) -> Result<()> {
    let mut view = ListView::new();

    let pb = loading_spinner();
    view.load(client, params).await;
    pb.finish_and_clear();

    if probe {
        probe_list_images(client, &mut view).await;
    }
    print_list(view.state(), format)
}
