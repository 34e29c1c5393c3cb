//! Character Gallery App
//!
//! Root component: builds config, store and toasts, then renders the page.

use leptos::prelude::*;
use reactive_stores::Store;
use tracing::info;

use crate::components::{GalleryPage, Toaster};
use crate::config::load_config;
use crate::context::ToastContext;
use crate::store::GalleryState;

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();
    info!(api_base = %config.api_base, max_pages = config.max_pages, layout = ?config.layout, "starting gallery");

    let layout = config.layout;

    // Provide context to all children
    provide_context(ToastContext::new(config.toast_duration_ms));
    provide_context(Store::new(GalleryState::new()));
    provide_context(config);

    view! {
        <main class="container">
            <GalleryPage layout=layout />
            <Toaster />
        </main>
    }
}
