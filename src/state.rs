use std::time::Duration;

use dioxus::prelude::*;

use crate::models::{CommunityStats, Location, SettingsState};
use crate::services::PresenceService;
use crate::storage::{load_config, save_settings};

#[derive(Clone, Copy)]
pub struct AppState {
    pub locations: Signal<Vec<Location>>,
    pub stats: Signal<CommunityStats>,
    pub settings: Signal<SettingsState>,
}

#[component]
pub fn AppStateProvider(children: Element) -> Element {
    let config = use_hook(load_config);

    let mut locations = use_signal(crate::data::default_locations);
    let stats = use_signal(crate::data::community_stats);
    let settings = use_signal(|| config.get_settings());

    // Presence sync: merge per-city online counts into the bundled hub
    // table; the bundled values stand when the API is unreachable.
    use_future(move || async move {
        loop {
            match PresenceService::get_presence().await {
                Ok(presence) => {
                    locations.with_mut(|hubs| {
                        for sample in &presence {
                            if let Some(hub) = hubs
                                .iter_mut()
                                .find(|hub| hub.city.eq_ignore_ascii_case(&sample.city))
                            {
                                hub.online_now = sample.online;
                            }
                        }
                    });
                }
                Err(e) => tracing::error!("Failed to sync presence: {}", e),
            }
            tokio::time::sleep(Duration::from_secs(60)).await;
        }
    });

    use_effect(move || {
        let current = settings();
        spawn(async move {
            if let Ok(Err(e)) =
                tokio::task::spawn_blocking(move || save_settings(current)).await
            {
                tracing::error!("Failed to persist settings: {}", e);
            }
        });
    });

    use_context_provider(|| AppState {
        locations,
        stats,
        settings,
    });

    rsx! {
        {children}
    }
}
