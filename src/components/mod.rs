//! UI Components
//!
//! Leptos components for the gallery page.

mod gallery_page;
mod gallery_grid;
mod loading_indicator;
mod toaster;

pub use gallery_page::GalleryPage;
pub use gallery_grid::GalleryGrid;
pub use loading_indicator::LoadingIndicator;
pub use toaster::Toaster;
