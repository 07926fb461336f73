//! CLI subcommand implementations.

pub mod browse;
pub mod list;
pub mod open;
pub mod search;
pub mod show;

use std::time::Duration;

use catalog_lib::list_view::LOADING_MESSAGE;
use catalog_lib::{Client, ListState, ListView};
use indicatif::{ProgressBar, ProgressStyle};
use tokio::task::JoinSet;

/// Spinner on stderr shown while a fetch is outstanding.
pub(crate) fn loading_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(LOADING_MESSAGE);
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// Probes every listed image and swaps failures for the placeholder.
pub(crate) async fn probe_list_images(client: &Client, view: &mut ListView) {
    let targets: Vec<(String, String)> = match view.state() {
        ListState::Populated { items, .. } => items
            .iter()
            .filter(|item| !item.image.is_placeholder())
            .map(|item| (item.product.id.clone(), item.image.primary().to_string()))
            .collect(),
        _ => return,
    };
    if targets.is_empty() {
        return;
    }

    let pb = ProgressBar::new(targets.len() as u64);
    pb.set_style(
        ProgressStyle::with_template("{bar:30.cyan/blue} {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar()),
    );
    pb.set_message("checking images...");

    let mut join_set = JoinSet::new();
    for (id, src) in targets {
        let client = client.clone();
        join_set.spawn(async move {
            let loaded = client.probe_image(&src).await.is_ok();
            (id, loaded)
        });
    }

    let mut failed = 0usize;
    while let Some(joined) = join_set.join_next().await {
        if let Ok((id, false)) = joined {
            if view.image_failed(&id) {
                failed += 1;
            }
        }
        pb.inc(1);
    }
    pb.finish_and_clear();
    if failed > 0 {
        eprintln!("{} image(s) failed to load, showing placeholder", failed);
    }
}
