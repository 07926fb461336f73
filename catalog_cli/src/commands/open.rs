use anyhow::{bail, Result};
use catalog_lib::{CatalogConfig, Client, ListParams, Route};
use clap::Args;

use super::list::show_page;
use super::show::show_product;
use crate::output::OutputFormat;

#[derive(Args)]
pub struct OpenArgs {
    /// Route path: / for the catalog, /products/<id> for a product
    pub route: String,
}

pub async fn run(
    args: &OpenArgs,
    client: &Client,
    config: &CatalogConfig,
    format: &OutputFormat,
    probe: bool,
) -> Result<()> {
    let Some(route) = Route::parse(&args.route) else {
        bail!(
            "Unknown route {:?}: expected / or /products/<id>",
            args.route
        );
    };

    match route {
        Route::Catalog => {
            let params = ListParams {
                page: 1,
                limit: config.page_size,
                term: None,
            };
            show_page(client, params, format, probe).await
        }
        Route::ProductDetail { id } => show_product(client, &id, format, probe).await,
    }
}
