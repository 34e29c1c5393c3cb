//! Gallery Configuration
//!
//! Endpoint, paging limits and presentation options, provided via context.

use leptos::prelude::*;
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

pub const DEFAULT_API_BASE: &str = "https://narutodb.xyz";
pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const DEFAULT_MAX_PAGES: u32 = 10;
pub const DEFAULT_TOAST_DURATION_MS: u32 = 4_000;

/// Name of the `<meta>` tag whose `content` holds JSON overrides
pub const CONFIG_META_NAME: &str = "gallery-config";

/// Presentation variant of the gallery page
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GalleryLayout {
    /// Full-height loader, image-over-name cards, pagination hidden while loading
    #[default]
    Showcase,
    /// Inline loader, name-over-image cards, pagination always visible
    Compact,
}

impl GalleryLayout {
    pub fn shows_pagination_while_loading(self) -> bool {
        matches!(self, GalleryLayout::Compact)
    }

    pub fn class_name(self) -> &'static str {
        match self {
            GalleryLayout::Showcase => "gallery gallery-showcase",
            GalleryLayout::Compact => "gallery gallery-compact",
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid config JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("api base URL must not be empty")]
    EmptyApiBase,
    #[error("page size must be at least 1")]
    ZeroPageSize,
    #[error("max pages must be at least 1")]
    ZeroMaxPages,
}

/// Partial config read from the page; absent fields keep their defaults
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConfigOverrides {
    pub api_base: Option<String>,
    pub page_size: Option<u32>,
    pub max_pages: Option<u32>,
    pub page_window: Option<u32>,
    pub toast_duration_ms: Option<u32>,
    pub layout: Option<GalleryLayout>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GalleryConfig {
    /// Scheme and host of the character API, without a trailing path
    pub api_base: String,
    /// Records requested per page (`limit` query parameter)
    pub page_size: u32,
    /// Upper bound applied to the API's reported page count
    pub max_pages: u32,
    /// Page numbers shown around the current one; `None` lists every page
    pub page_window: Option<u32>,
    pub toast_duration_ms: u32,
    pub layout: GalleryLayout,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            api_base: DEFAULT_API_BASE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            max_pages: DEFAULT_MAX_PAGES,
            page_window: None,
            toast_duration_ms: DEFAULT_TOAST_DURATION_MS,
            layout: GalleryLayout::default(),
        }
    }
}

impl GalleryConfig {
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    pub fn with_max_pages(mut self, max_pages: u32) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    pub fn apply(mut self, overrides: ConfigOverrides) -> Self {
        if let Some(api_base) = overrides.api_base {
            self = self.with_api_base(api_base);
        }
        if let Some(page_size) = overrides.page_size {
            self = self.with_page_size(page_size);
        }
        if let Some(max_pages) = overrides.max_pages {
            self = self.with_max_pages(max_pages);
        }
        if overrides.page_window.is_some() {
            self.page_window = overrides.page_window;
        }
        if let Some(duration) = overrides.toast_duration_ms {
            self.toast_duration_ms = duration;
        }
        if let Some(layout) = overrides.layout {
            self.layout = layout;
        }
        self
    }

    /// Defaults with the given JSON overrides applied, then validated
    pub fn from_overrides_json(raw: &str) -> Result<Self, ConfigError> {
        let overrides: ConfigOverrides = serde_json::from_str(raw)?;
        Self::default().apply(overrides).validate()
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.api_base.trim().is_empty() {
            return Err(ConfigError::EmptyApiBase);
        }
        if self.page_size == 0 {
            return Err(ConfigError::ZeroPageSize);
        }
        if self.max_pages == 0 {
            return Err(ConfigError::ZeroMaxPages);
        }
        Ok(self)
    }
}

/// Read the config from the page's `<meta name="gallery-config">` tag.
/// Falls back to defaults when the tag is missing or invalid.
pub fn load_config() -> GalleryConfig {
    let selector = format!("meta[name='{}']", CONFIG_META_NAME);
    let raw = document()
        .query_selector(&selector)
        .ok()
        .flatten()
        .and_then(|meta| meta.get_attribute("content"));

    match raw {
        Some(raw) => GalleryConfig::from_overrides_json(&raw).unwrap_or_else(|err| {
            warn!(%err, "ignoring invalid gallery config");
            GalleryConfig::default()
        }),
        None => GalleryConfig::default(),
    }
}

/// Get the gallery config from context
pub fn use_gallery_config() -> GalleryConfig {
    expect_context::<GalleryConfig>()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GalleryConfig::default();
        assert_eq!(config.api_base, "https://narutodb.xyz");
        assert_eq!(config.page_size, 20);
        assert_eq!(config.max_pages, 10);
        assert_eq!(config.page_window, None);
        assert_eq!(config.layout, GalleryLayout::Showcase);
        assert_eq!(config.clone().validate().unwrap(), config);
    }

    #[test]
    fn test_validate_rejects_zero_limits() {
        assert!(matches!(
            GalleryConfig::default().with_max_pages(0).validate(),
            Err(ConfigError::ZeroMaxPages)
        ));
        assert!(matches!(
            GalleryConfig::default().with_page_size(0).validate(),
            Err(ConfigError::ZeroPageSize)
        ));
        assert!(matches!(
            GalleryConfig::default().with_api_base("  ").validate(),
            Err(ConfigError::EmptyApiBase)
        ));
    }

    #[test]
    fn test_overrides_keep_unset_defaults() {
        let config = GalleryConfig::from_overrides_json(r#"{"maxPages": 25, "layout": "compact"}"#).unwrap();
        assert_eq!(config.max_pages, 25);
        assert_eq!(config.layout, GalleryLayout::Compact);
        assert_eq!(config.page_size, 20);
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_empty_overrides_are_defaults() {
        assert_eq!(GalleryConfig::from_overrides_json("{}").unwrap(), GalleryConfig::default());
    }

    #[test]
    fn test_overrides_are_validated() {
        assert!(matches!(
            GalleryConfig::from_overrides_json(r#"{"pageSize": 0}"#),
            Err(ConfigError::ZeroPageSize)
        ));
        assert!(matches!(
            GalleryConfig::from_overrides_json(r#"{"maxPage": 5}"#),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_layout_behaviour() {
        assert!(!GalleryLayout::Showcase.shows_pagination_while_loading());
        assert!(GalleryLayout::Compact.shows_pagination_while_loading());
    }
}
