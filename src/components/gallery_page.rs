//! Gallery Page Component
//!
//! Fetches the current page of characters and renders grid plus pagination.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_pagination::PageNavigator;
use tracing::debug;

use crate::api::{self, AbortHandle, RequestTracker};
use crate::components::{GalleryGrid, LoadingIndicator};
use crate::config::{use_gallery_config, GalleryLayout};
use crate::context::use_toasts;
use crate::store::{
    store_apply_result, store_begin_fetch, store_go_to_page, store_is_loading, use_gallery_store, FetchStatus, GalleryStateStoreFields,
};

#[component]
pub fn GalleryPage(layout: GalleryLayout) -> impl IntoView {
    let config = use_gallery_config();
    let store = use_gallery_store();
    let toasts = use_toasts();
    let tracker = StoredValue::new(RequestTracker::default());
    let max_pages = config.max_pages;
    let page_window = config.page_window;

    // Load characters whenever the current page changes
    Effect::new(move |_| {
        let page = store.current_page().get();
        tracker.update_value(RequestTracker::advance);
        let ticket = tracker.with_value(RequestTracker::current);
        store_begin_fetch(&store);

        // Rerunning the effect aborts the request it started last time
        let abort = AbortHandle::new();
        let signal = abort.signal();
        on_cleanup(move || abort.abort());

        let config = config.clone();
        spawn_local(async move {
            let result = api::fetch_character_page(&config, page, signal).await;
            if let Some(err) = store_apply_result(&store, tracker, ticket, page, result, max_pages) {
                toasts.error(err.user_message());
            }
        });
    });

    let on_select = Callback::new(move |page: u32| {
        if store_go_to_page(&store, page) {
            debug!(page, "page selected");
        }
    });

    let is_loading = move || store_is_loading(&store);
    let show_pagination = move || layout.shows_pagination_while_loading() || !is_loading();
    let show_empty = move || {
        store.status().get() == FetchStatus::Failed && store.characters().read().is_empty()
    };

    view! {
        <div class=layout.class_name()>
            <Show
                when=is_loading
                fallback=move || view! { <GalleryGrid layout=layout /> }
            >
                <LoadingIndicator layout=layout />
            </Show>
            <Show when=show_empty>
                <p class="gallery-empty">"No characters to show."</p>
            </Show>
            <Show when=show_pagination>
                <PageNavigator
                    current=Signal::derive(move || store.current_page().get())
                    total=Signal::derive(move || store.total_pages().get())
                    window=page_window
                    on_select=on_select
                />
            </Show>
        </div>
    }
}
