#![allow(non_snake_case)]

mod app;
mod components;
mod theme;
mod utils;

use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use posterwall_core::FailureVisibility;

/// Default collections endpoint served by the poster backend
const DEFAULT_COLLECTIONS_URL: &str = "http://localhost:8000/plex/collections/movie/Movies";

/// Global endpoint URL, set from command line
static COLLECTIONS_URL: OnceLock<String> = OnceLock::new();

/// Global failure visibility policy, set from command line
static FAILURE_VISIBILITY: OnceLock<FailureVisibility> = OnceLock::new();

/// Get the collections endpoint (set from command line or default)
pub fn collections_url() -> String {
    COLLECTIONS_URL
        .get()
        .cloned()
        .unwrap_or_else(|| DEFAULT_COLLECTIONS_URL.to_string())
}

/// Get the failure visibility policy (set from command line or default)
pub fn failure_visibility() -> FailureVisibility {
    FAILURE_VISIBILITY.get().copied().unwrap_or_default()
}

/// Posterwall - movie collection poster wall
#[derive(Parser, Debug)]
#[command(name = "posterwall-desktop")]
#[command(about = "Poster wall for Plex movie collections")]
struct Args {
    /// Collections endpoint returning a JSON array of movie collections
    #[arg(short, long)]
    url: Option<String>,

    /// What a failed refresh shows: "silent" keeps the last result with no
    /// trace on screen, "banner" adds a one-line notice above the wall
    #[arg(long, default_value_t = FailureVisibility::Silent)]
    on_fetch_error: FailureVisibility,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let url = args.url.unwrap_or_else(|| DEFAULT_COLLECTIONS_URL.to_string());
    let _ = COLLECTIONS_URL.set(url.clone());
    let _ = FAILURE_VISIBILITY.set(args.on_fetch_error);

    tracing::info!("Starting Posterwall against {}", url);

    // Wide window: posters flow horizontally inside each collection row
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Posterwall")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
