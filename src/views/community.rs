use dioxus::prelude::*;

use crate::components::WorldMapPanel;
use crate::hooks::use_app_state;
use crate::map::MapHotspot;
use crate::models::CommunityTab;

/// Two tabbed map panels sharing a page. Each panel owns its runtime;
/// only the selected tab's pointer and ambient effects run.
#[component]
pub fn Community() -> Element {
    let app = use_app_state();
    let locations = app.locations.read();
    let live_hotspots: Vec<MapHotspot> = locations.iter().map(|hub| hub.hotspot()).collect();
    let member_hotspots: Vec<MapHotspot> =
        locations.iter().map(|hub| hub.member_hotspot()).collect();

    let mut tab = use_signal(|| CommunityTab::LiveMap);
    let mut live_active = use_signal(|| true);
    let mut member_active = use_signal(|| false);

    use_effect(move || {
        let selected = tab();
        live_active.set(selected == CommunityTab::LiveMap);
        member_active.set(selected == CommunityTab::MemberMap);
    });

    rsx! {
        div { class: "view community-view",
            div { class: "tab-bar",
                button {
                    class: "tab",
                    class: if tab() == CommunityTab::LiveMap { "selected" },
                    onclick: move |_| tab.set(CommunityTab::LiveMap),
                    "Live activity"
                }
                button {
                    class: "tab",
                    class: if tab() == CommunityTab::MemberMap { "selected" },
                    onclick: move |_| tab.set(CommunityTab::MemberMap),
                    "Member distribution"
                }
            }

            div { class: "tab-panels",
                WorldMapPanel {
                    hotspots: live_hotspots,
                    active: live_active,
                    show_counters: true,
                }
                WorldMapPanel {
                    hotspots: member_hotspots,
                    active: member_active,
                }
            }

            div { class: "hub-list",
                for hub in locations.iter() {
                    div { key: "{hub.city}", class: "hub-row",
                        span { class: "hub-flag", "{hub.flag}" }
                        div { class: "hub-names",
                            span { class: "hub-city", "{hub.city}" }
                            span { class: "hub-country", "{hub.country}" }
                        }
                        div { class: "hub-counts",
                            span { class: "hub-members", "{hub.members} members" }
                            span { class: "hub-online", "{hub.online_now} online" }
                        }
                    }
                }
            }
        }
    }
}
