//! Gallery State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.
//! Helpers only write individual fields; writing the store root would
//! re-trigger every subscriber, including the fetch effect on `current_page`.

use std::collections::HashSet;

use leptos::prelude::*;
use reactive_stores::Store;
use tracing::{debug, error, info};

use crate::api::{FetchError, RequestTicket, RequestTracker};
use crate::models::{CharacterPage, CharacterRecord};

/// Lifecycle of the fetch for the current page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FetchStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed,
}

/// Transient state of the gallery page
#[derive(Clone, Debug, Store)]
pub struct GalleryState {
    /// 1-based page being shown or requested
    pub current_page: u32,
    /// Page count after capping, never below 1
    pub total_pages: u32,
    pub status: FetchStatus,
    /// Records of the last successfully loaded page
    pub characters: Vec<CharacterRecord>,
    /// Records whose image failed to load; their cards are hidden
    pub failed_image_ids: HashSet<u32>,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            current_page: 1,
            total_pages: 1,
            status: FetchStatus::Idle,
            characters: Vec::new(),
            failed_image_ids: HashSet::new(),
        }
    }
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Type alias for the store
pub type GalleryStore = Store<GalleryState>;

/// Get the gallery store from context
pub fn use_gallery_store() -> GalleryStore {
    expect_context::<GalleryStore>()
}

/// Page count shown to the user: the API's count, capped, and at least 1
pub fn clamp_total_pages(api_total: u32, max_pages: u32) -> u32 {
    api_total.min(max_pages).max(1)
}

// ========================
// Store Helper Functions
// ========================

pub fn store_is_loading(store: &GalleryStore) -> bool {
    store.status().get() == FetchStatus::Loading
}

/// Move to another page. Returns false (and changes nothing) when `page`
/// is the current page or outside `1..=total_pages`.
pub fn store_go_to_page(store: &GalleryStore, page: u32) -> bool {
    let total = store.total_pages().get_untracked();
    if page == 0 || page > total || page == store.current_page().get_untracked() {
        return false;
    }
    store.current_page().set(page);
    true
}

pub fn store_begin_fetch(store: &GalleryStore) {
    store.status().set(FetchStatus::Loading);
}

/// Replace the shown page with a freshly loaded one
pub fn store_apply_page(store: &GalleryStore, page: CharacterPage, max_pages: u32) {
    store.total_pages().set(clamp_total_pages(page.total_pages, max_pages));
    // Records without any image count as failed from the start
    let missing_cover: HashSet<u32> = page
        .characters
        .iter()
        .filter(|c| c.cover_image().is_none())
        .map(|c| c.id)
        .collect();
    *store.failed_image_ids().write() = missing_cover;
    store.characters().set(page.characters);
    store.status().set(FetchStatus::Loaded);
}

/// Record a failed fetch; previously shown characters stay as they are
pub fn store_apply_failure(store: &GalleryStore) {
    store.status().set(FetchStatus::Failed);
}

/// Apply the outcome of the fetch holding `ticket`.
///
/// A response whose ticket was superseded (or whose tracker is gone) changes
/// nothing. Otherwise the page or the failure is applied, and a failure is
/// handed back so the caller can notify the user.
pub fn store_apply_result(
    store: &GalleryStore,
    tracker: StoredValue<RequestTracker>,
    ticket: RequestTicket,
    page: u32,
    result: Result<CharacterPage, FetchError>,
    max_pages: u32,
) -> Option<FetchError> {
    let current = tracker.try_with_value(|t| t.is_current(ticket)).unwrap_or(false);
    if !current {
        debug!(page, "dropping response for superseded page request");
        return None;
    }

    match result {
        Ok(loaded) => {
            info!(page, count = loaded.characters.len(), api_total_pages = loaded.total_pages, "loaded characters");
            store_apply_page(store, loaded, max_pages);
            None
        }
        Err(err) => {
            error!(page, %err, "failed to fetch characters");
            store_apply_failure(store);
            Some(err)
        }
    }
}

/// Hide the card of a record whose image could not be loaded
pub fn store_mark_image_failed(store: &GalleryStore, id: u32) {
    if !store.failed_image_ids().read_untracked().contains(&id) {
        store.failed_image_ids().write().insert(id);
    }
}

pub fn store_is_card_hidden(store: &GalleryStore, id: u32) -> bool {
    store.failed_image_ids().read().contains(&id)
}
