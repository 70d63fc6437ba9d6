use dioxus::prelude::*;

use crate::components::CollectionGallery;
use crate::theme::GLOBAL_STYLES;

/// Root application component.
///
/// Pure composition root: provides global styles and page layout, and hands
/// the configured endpoint and failure policy to the gallery unchanged.
#[component]
pub fn App() -> Element {
    let source_url = use_memo(|| crate::collections_url());

    rsx! {
        style { {GLOBAL_STYLES} }
        main { class: "page",
            div { class: "page-content",
                CollectionGallery {
                    source_url,
                    failure_visibility: crate::failure_visibility(),
                }
            }
        }
    }
}
