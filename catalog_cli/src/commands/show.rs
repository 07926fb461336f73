use anyhow::Result;
use catalog_lib::validation;
use catalog_lib::{Client, DetailState, DetailView};
use clap::Args;

use super::loading_spinner;
use crate::output::{print_detail, OutputFormat};

#[derive(Args)]
pub struct ShowArgs {
    /// Product identifier
    pub id: String,
}

pub async fn run(args: &ShowArgs, client: &Client, format: &OutputFormat, probe: bool) -> Result<()> {
    show_product(client, &args.id, format, probe).await
}

/// Mounts a fresh detail view on `id`, fetches it and prints the result.
pub async fn show_product(
    client: &Client,
    id: &str,
    format: &OutputFormat,
    probe: bool,
) -> Result<()> {
    let id = validation::validate_product_id(id)?;
    let mut view = DetailView::new();

    let pb = loading_spinner();
    view.load(client, &id).await;
    pb.finish_and_clear();

    if probe {
        let src = match view.state() {
            DetailState::Ready { .. } => view.image().map(|slot| slot.primary().to_string()),
            _ => None,
        };
        if let Some(src) = src {
            if client.probe_image(&src).await.is_err() {
                view.image_failed();
                eprintln!("Image failed to load, showing placeholder");
            }
        }
    }
    print_detail(&view, format)
}
