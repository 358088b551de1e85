use dioxus::prelude::*;

use crate::components::{StatBadge, WorldMapPanel};
use crate::hooks::use_app_state;
use crate::icons::Zap;
use crate::map::MapHotspot;

#[component]
pub fn Home() -> Element {
    let app = use_app_state();
    let stats = (app.stats)();
    let locations = app.locations.read();
    let hotspots: Vec<MapHotspot> = locations.iter().map(|hub| hub.hotspot()).collect();
    let total_online = crate::data::total_online(&locations);

    let active = use_signal(|| true);

    rsx! {
        div { class: "view home-view",
            section { class: "hero",
                div { class: "hero-badge",
                    Zap { size: 14 }
                    span { "2026 Global Dev Summit · Registration open" }
                }
                h1 { class: "hero-title", "The developer community you belong to." }
                p { class: "hero-subtitle",
                    "Webinars, certifications and mentorship, with members across {stats.countries}+ countries."
                }
                div { class: "hero-stats",
                    StatBadge { value: stats.members_display.clone(), label: "members" }
                    StatBadge { value: format!("{}+", stats.countries), label: "countries" }
                    StatBadge { value: format!("{}", total_online), label: "online right now" }
                }
            }
            section { class: "map-section",
                WorldMapPanel {
                    hotspots,
                    active,
                    show_counters: true,
                }
            }
        }
    }
}
