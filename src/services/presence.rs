use std::time::{Duration, Instant};

use once_cell::sync::Lazy;
use tokio::sync::Mutex;

use crate::error::AppError;
use crate::models::CityPresence;

static API_BASE: Lazy<String> = Lazy::new(|| {
    std::env::var("IAWD_API_URL").unwrap_or_else(|_| "https://iwebdev.org/api/v1".to_string())
});

static PRESENCE_CACHE: Lazy<Mutex<(Vec<CityPresence>, Instant)>> =
    Lazy::new(|| Mutex::new((Vec::new(), Instant::now() - Duration::from_secs(3600))));

const CACHE_TTL: Duration = Duration::from_secs(45);

/// Per-city online counts from the community API. Callers fall back to
/// the bundled location data when this errors.
pub struct PresenceService;

impl PresenceService {
    pub async fn get_presence() -> Result<Vec<CityPresence>, AppError> {
        let mut cache = PRESENCE_CACHE.lock().await;
        if !cache.0.is_empty() && cache.1.elapsed() < CACHE_TTL {
            return Ok(cache.0.clone());
        }

        let client = reqwest::Client::new();
        let response = client
            .get(format!("{}/community/presence", *API_BASE))
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(AppError::Asset {
                status: response.status(),
            });
        }

        let presence: Vec<CityPresence> = response.json().await?;
        *cache = (presence.clone(), Instant::now());
        Ok(presence)
    }
}
