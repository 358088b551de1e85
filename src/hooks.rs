use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Duration;

use dioxus::prelude::*;
use tracing::{error, info};

use crate::map::svg::parse_map_paths;
use crate::map::tooltip::{LIVE_STATS_INTERVAL_MS, PING_INTERVAL_MS};
use crate::map::{MapHotspot, MapPanelOptions, MapPanelState, Teardown};
use crate::services::{HttpMapAssets, MapAssetService};
use crate::state::AppState;

/// Animation clock granularity.
const CLOCK_TICK_MS: u64 = 16;

pub fn use_app_state() -> AppState {
    use_context::<AppState>()
}

#[derive(Clone, Default)]
pub struct MapPanelConfig {
    pub hotspots: Vec<MapHotspot>,
    pub is_active: Option<Arc<dyn Fn() -> bool>>,
    pub map_svg_url: Option<String>,
    pub surface: Option<(f64, f64)>,
}

/// Copyable handle components use to feed events into their panel.
#[derive(Clone, Copy)]
pub struct MapPanelHandle {
    panel: Signal<MapPanelState>,
}

impl MapPanelHandle {
    pub fn panel(&self) -> Signal<MapPanelState> {
        self.panel
    }

    pub fn pointer_moved(&self, x: f64, y: f64) {
        let mut panel = self.panel;
        panel.write().pointer_moved(x, y);
    }

    pub fn container_left(&self) {
        let mut panel = self.panel;
        panel.write().container_left();
    }

    pub fn hotspot_entered(&self, index: usize) {
        let mut panel = self.panel;
        panel.write().hotspot_entered(index);
    }

    pub fn hotspot_left(&self, index: usize) {
        let mut panel = self.panel;
        panel.write().hotspot_left(index);
    }

    pub fn country_entered(&self, index: usize) {
        let mut panel = self.panel;
        panel.write().country_entered(index);
    }

    pub fn country_left(&self, index: usize) {
        let mut panel = self.panel;
        panel.write().country_left(index);
    }

    pub fn set_visible(&self, visible: bool) {
        let mut panel = self.panel;
        panel.write().set_visible(visible);
    }
}

pub fn use_map_panel(config: MapPanelConfig) -> MapPanelHandle {
    use_map_panel_with_service(config, HttpMapAssets)
}

/// Initializes a panel runtime for the lifetime of the calling
/// component: spawns the map-document fetch plus the ping, counter and
/// animation-clock timers, registers their cancellation in the panel's
/// cleanup registry, and tears the panel down when the component drops.
pub fn use_map_panel_with_service<S>(config: MapPanelConfig, service: S) -> MapPanelHandle
where
    S: MapAssetService + Clone,
{
    let options = MapPanelOptions {
        map_svg_url: config.map_svg_url.clone(),
        is_active: config.is_active.clone(),
        surface: config.surface,
    };
    let mut panel = use_signal(move || MapPanelState::new(options));
    let ticket = use_hook(|| Rc::new(RefCell::new(None::<Teardown>)));

    let hotspots = config.hotspots.clone();
    let ticket_slot = ticket.clone();
    use_hook(move || {
        let issued = panel.write().initialize(&hotspots);

        // Fire-and-forget load; interactivity is already wired and does
        // not wait for this.
        let url = panel.peek().map_svg_url().to_string();
        let fetch_task = spawn(async move {
            match service.fetch_map_svg(&url).await {
                Ok(text) => match parse_map_paths(&text) {
                    Ok(seeds) => {
                        info!("Map document loaded with {} paths", seeds.len());
                        panel.write().install_map_document(seeds);
                    }
                    Err(e) => error!("Map loading error: {}", e),
                },
                Err(e) => error!("Map loading error: {}", e),
            }
        });

        let accent_task = spawn(async move {
            let script = r#"return getComputedStyle(document.documentElement).getPropertyValue("--cyan-400-rgb");"#;
            if let Ok(value) = document::eval(script).await {
                if let Some(rgb) = value.as_str() {
                    panel.write().set_accent_rgb(rgb);
                }
            }
        });

        let ping_task = spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_millis(PING_INTERVAL_MS)).await;
                panel.write().spawn_ping(&mut rand::thread_rng());
            }
        });

        let stats_task = spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_millis(LIVE_STATS_INTERVAL_MS)).await;
                panel.write().refresh_live_counters(&mut rand::thread_rng());
            }
        });

        let clock_task = spawn(async move {
            loop {
                tokio::time::sleep(Duration::from_millis(CLOCK_TICK_MS)).await;
                let idle = {
                    let state = panel.peek();
                    state.arcs().is_empty() && state.pings().is_empty()
                };
                if !idle {
                    panel.write().advance_clock(CLOCK_TICK_MS as f64);
                }
            }
        });

        {
            let mut state = panel.write();
            state.register_cleanup(move || fetch_task.cancel());
            state.register_cleanup(move || accent_task.cancel());
            state.register_cleanup(move || ping_task.cancel());
            state.register_cleanup(move || stats_task.cancel());
            state.register_cleanup(move || clock_task.cancel());
        }
        *ticket_slot.borrow_mut() = Some(issued);
    });

    use_drop(move || {
        if let Some(issued) = ticket.borrow_mut().take() {
            panel.write().teardown(issued);
        }
    });

    MapPanelHandle { panel }
}
