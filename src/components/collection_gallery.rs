//! Collection Gallery Component
//!
//! Fetches the collections list once per source URL and renders it as
//! stacked poster rows.

use dioxus::prelude::*;

use posterwall_core::{CollectionsClient, CollectionsFeed, FailureVisibility};

use crate::utils::class_names;

/// Class list for a poster image.
///
/// The collection's own poster leads the row; an entry with no artwork URL
/// gets a placeholder treatment instead of a broken image.
fn poster_class(lead: bool, src: &str) -> String {
    class_names(&[
        "poster",
        if lead { "poster-lead" } else { "" },
        if src.is_empty() { "poster-missing" } else { "" },
    ])
}

/// Stacked gallery of movie collections fetched from an HTTP endpoint.
///
/// Issues exactly one GET per `source_url` value, first mount included. On
/// failure the previously shown collections stay on screen (empty on first
/// load); `failure_visibility` decides whether the failure itself renders.
///
/// # Examples
///
/// ```rust
/// rsx! {
///     CollectionGallery {
///         source_url: "http://localhost:8000/plex/collections/movie/Movies",
///     }
/// }
/// ```
#[component]
pub fn CollectionGallery(
    /// Endpoint returning a JSON array of movie collections
    source_url: ReadOnlySignal<String>,
    /// What a failed refresh shows
    #[props(default)]
    failure_visibility: FailureVisibility,
) -> Element {
    let client = use_hook(CollectionsClient::new);
    let mut feed = use_signal(CollectionsFeed::new);

    // Refetch whenever the source URL changes. The request token keeps a
    // slow, superseded response from overwriting a newer one.
    use_effect(move || {
        let url = source_url();
        let client = client.clone();
        let token = feed.write().begin_request();
        spawn(async move {
            let result = client.fetch_collections(&url).await;
            if let Err(ref err) = result {
                tracing::error!("Error fetching movie collections: {err}");
            }
            feed.write().resolve(token, result);
        });
    });

    let collections = feed.read().collections().to_vec();
    let fetch_notice = match failure_visibility {
        FailureVisibility::Banner => feed
            .read()
            .last_error()
            .map(|err| format!("Couldn't refresh collections: {err}")),
        FailureVisibility::Silent => None,
    };

    if collections.is_empty() && fetch_notice.is_none() {
        return VNode::empty();
    }

    rsx! {
        div { class: "collection-stack",
            if let Some(notice) = fetch_notice {
                div { class: "fetch-banner", "{notice}" }
            }

            for (index, collection) in collections.iter().enumerate() {
                section {
                    key: "{index}",
                    class: "collection",

                    h2 { class: "collection-title", "{collection.title}" }

                    div { class: "poster-row",
                        img {
                            class: poster_class(true, &collection.poster),
                            src: "{collection.poster}",
                            alt: "{collection.title}",
                        }
                        for (idx, movie) in collection.movies.iter().enumerate() {
                            img {
                                key: "{idx}",
                                class: poster_class(false, &movie.poster),
                                src: "{movie.poster}",
                                alt: "{movie.title}",
                            }
                        }
                    }
                }
            }
        }
    }
}
