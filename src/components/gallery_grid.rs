//! Gallery Grid Component
//!
//! Responsive grid of character cards for the current page.

use leptos::prelude::*;
use tracing::warn;

use crate::config::GalleryLayout;
use crate::models::CharacterRecord;
use crate::store::{store_is_card_hidden, store_mark_image_failed, use_gallery_store, GalleryStateStoreFields};

#[component]
pub fn GalleryGrid(layout: GalleryLayout) -> impl IntoView {
    let store = use_gallery_store();

    view! {
        <div class="gallery-grid">
            <For
                each=move || store.characters().get()
                key=|character| character.id
                children=move |character| view! { <CharacterCard character=character layout=layout /> }
            />
        </div>
    }
}

/// One character: first image plus name
///
/// A card whose image fails to load is hidden; records without any image are
/// marked failed when the page is applied. The record itself stays in the store.
#[component]
pub fn CharacterCard(character: CharacterRecord, layout: GalleryLayout) -> impl IntoView {
    let store = use_gallery_store();
    let id = character.id;
    let name = character.name.clone();
    let cover = character.cover_image().map(str::to_string);

    let hidden = move || store_is_card_hidden(&store, id);

    let image = cover.map(|src| {
        let alt = name.clone();
        view! {
            <img
                class="character-image"
                src=src
                alt=alt
                loading="eager"
                on:error=move |_| {
                    warn!(id, "character image failed to load");
                    store_mark_image_failed(&store, id);
                }
            />
        }
    });

    match layout {
        GalleryLayout::Showcase => view! {
            <div class="character-card" class:hidden=hidden>
                <div class="character-image-frame">{image}</div>
                <div class="character-caption">
                    <h2 class="character-name">{name}</h2>
                </div>
            </div>
        }.into_any(),
        GalleryLayout::Compact => view! {
            <div class="character-card character-card-compact" class:hidden=hidden>
                <p class="character-name">{name}</p>
                {image}
            </div>
        }.into_any(),
    }
}
