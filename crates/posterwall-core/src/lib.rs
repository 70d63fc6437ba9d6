//! Posterwall Core Library
//!
//! Fetch-and-render contract for the Posterwall poster wall.
//!
//! ## Overview
//!
//! Posterwall displays movie collections served by a Plex poster backend as
//! stacked image galleries. This crate holds everything below the UI: the
//! typed data model for the collections payload, the HTTP client that turns
//! an endpoint URL into validated values, and the feed state that decides
//! which response is allowed to become the displayed state.
//!
//! ## Quick Start
//!
//! ```ignore
//! use posterwall_core::{CollectionsClient, CollectionsFeed};
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = CollectionsClient::new();
//!     let mut feed = CollectionsFeed::new();
//!
//!     let token = feed.begin_request();
//!     let result = client
//!         .fetch_collections("http://localhost:8000/plex/collections/movie/Movies")
//!         .await;
//!     feed.resolve(token, result);
//!
//!     for collection in feed.collections() {
//!         println!("{} ({} posters)", collection.title, collection.poster_count());
//!     }
//! }
//! ```

pub mod client;
pub mod error;
pub mod feed;
pub mod types;

// Re-exports
pub use client::CollectionsClient;
pub use error::{FetchError, FetchResult};
pub use feed::{CollectionsFeed, FailureVisibility, RequestToken, ResolveOutcome};
pub use types::{Movie, MovieCollection};
