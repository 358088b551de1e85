use async_trait::async_trait;
use once_cell::sync::Lazy;

use crate::error::AppError;

/// Path of the vector map document under the asset base.
pub const DEFAULT_MAP_SVG_PATH: &str = "/wm.svg";

static ASSET_BASE: Lazy<String> = Lazy::new(|| {
    std::env::var("IAWD_ASSET_BASE").unwrap_or_else(|_| "https://iwebdev.org".to_string())
});

pub fn default_map_svg_url() -> String {
    format!("{}{}", *ASSET_BASE, DEFAULT_MAP_SVG_PATH)
}

/// Fetches static assets for the map panel. Behind a trait so tests can
/// substitute a double.
#[async_trait]
pub trait MapAssetService: 'static {
    async fn fetch_map_svg(&self, url: &str) -> Result<String, AppError>;
}

#[derive(Clone, Copy, Default)]
pub struct HttpMapAssets;

#[async_trait]
impl MapAssetService for HttpMapAssets {
    async fn fetch_map_svg(&self, url: &str) -> Result<String, AppError> {
        let client = reqwest::Client::new();
        let response = client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(AppError::Asset {
                status: response.status(),
            });
        }
        Ok(response.text().await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_url_points_at_the_map_document() {
        assert!(default_map_svg_url().ends_with("/wm.svg"));
    }
}
