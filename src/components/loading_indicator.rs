//! Loading Indicator Component

use leptos::prelude::*;

use crate::config::GalleryLayout;

#[component]
pub fn LoadingIndicator(layout: GalleryLayout) -> impl IntoView {
    let class = match layout {
        GalleryLayout::Showcase => "loading loading-fullscreen",
        GalleryLayout::Compact => "loading loading-inline",
    };

    view! {
        <div class=class role="status">
            <p>"Loading..."</p>
        </div>
    }
}
