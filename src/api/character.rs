//! Character Endpoint
//!
//! Paged listing of characters.

use web_sys::AbortSignal;

use super::{get_json, FetchError};
use crate::config::GalleryConfig;
use crate::models::CharacterPage;

/// Query for one page of characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageQuery {
    pub limit: u32,
    pub page: u32,
}

impl PageQuery {
    pub fn new(config: &GalleryConfig, page: u32) -> Self {
        Self { limit: config.page_size, page }
    }

    pub fn url(&self, api_base: &str) -> String {
        format!(
            "{}/api/character?limit={}&page={}",
            api_base.trim_end_matches('/'),
            self.limit,
            self.page
        )
    }
}

pub fn character_page_url(config: &GalleryConfig, page: u32) -> String {
    PageQuery::new(config, page).url(&config.api_base)
}

/// Fetch one page of characters. Issues exactly one GET.
pub async fn fetch_character_page(
    config: &GalleryConfig,
    page: u32,
    signal: Option<AbortSignal>,
) -> Result<CharacterPage, FetchError> {
    let url = character_page_url(config, page);
    tracing::debug!(%url, "fetching character page");
    get_json(&url, signal.as_ref()).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_uses_fixed_limit_and_requested_page() {
        let config = GalleryConfig::default();
        for page in 1..=config.max_pages {
            assert_eq!(
                character_page_url(&config, page),
                format!("https://narutodb.xyz/api/character?limit=20&page={}", page)
            );
        }
    }

    #[test]
    fn test_url_strips_trailing_slash() {
        let config = GalleryConfig::default().with_api_base("http://localhost:8080/");
        assert_eq!(
            character_page_url(&config, 3),
            "http://localhost:8080/api/character?limit=20&page=3"
        );
    }

    #[test]
    fn test_query_follows_page_size() {
        let config = GalleryConfig::default().with_page_size(50);
        assert_eq!(PageQuery::new(&config, 2), PageQuery { limit: 50, page: 2 });
    }
}
