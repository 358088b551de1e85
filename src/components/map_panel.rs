use std::sync::Arc;

use dioxus::prelude::*;

use crate::hooks::{use_app_state, use_map_panel, MapPanelConfig};
use crate::map::arcs::{AMBIENT_ARC_DELAY_STEP_S, AMBIENT_ARC_PATHS};
use crate::map::MapHotspot;

/// Rendered size of the interactive surface, in logical pixels. The
/// runtime maps pointer positions from this box into viewport units.
pub const PANEL_SURFACE: (f64, f64) = (960.0, 486.0);

/// The live world map: country shapes loaded from the external map
/// document, member-hub hotspots, connection arcs with data particles,
/// a pointer spotlight, ambient pings and simulated live counters.
///
/// `active` gates pointer-driven effects; pages with several tabbed
/// panels pass the selected-tab predicate here.
#[component]
pub fn WorldMapPanel(
    hotspots: Vec<MapHotspot>,
    active: ReadOnlySignal<bool>,
    #[props(default)] show_counters: bool,
) -> Element {
    let app = use_app_state();
    let settings = (app.settings)();
    let reduce_motion = settings.reduce_motion;
    let (surface_w, surface_h) = PANEL_SURFACE;

    let gate: Arc<dyn Fn() -> bool> = Arc::new(move || *active.peek());
    let handle = use_map_panel(MapPanelConfig {
        hotspots,
        is_active: Some(gate),
        map_svg_url: settings.map_svg_url.clone(),
        surface: Some(PANEL_SURFACE),
    });

    let panel_sig = handle.panel();
    let panel = panel_sig.read();
    let accent = panel.accent_rgb().to_string();
    let tooltip = panel.tooltip().clone();
    let spotlight = panel.spotlight();

    rsx! {
        div {
            class: "map-state",
            class: if active() { "visible" },
            div {
                class: "world-map-wrap",
                style: "width: {surface_w}px; height: {surface_h}px;",
                onmousemove: move |evt| {
                    let point = evt.element_coordinates();
                    handle.pointer_moved(point.x, point.y);
                },
                onmouseleave: move |_| handle.container_left(),

                svg {
                    class: "world-map",
                    view_box: "0 0 1016.371 514.609",
                    defs {
                        linearGradient {
                            id: "arcGrad",
                            "x1": "0%",
                            "y1": "0%",
                            "x2": "100%",
                            "y2": "0%",
                            stop { "offset": "0%", "stop-color": "rgba({accent}, 0)" }
                            stop { "offset": "50%", "stop-color": "rgba({accent}, 0.9)" }
                            stop { "offset": "100%", "stop-color": "rgba({accent}, 0)" }
                        }
                        linearGradient {
                            id: "arcGradAlt",
                            "x1": "0%",
                            "y1": "0%",
                            "x2": "100%",
                            "y2": "0%",
                            stop { "offset": "0%", "stop-color": "rgba(167, 139, 250, 0)" }
                            stop { "offset": "50%", "stop-color": "rgba(167, 139, 250, 0.9)" }
                            stop { "offset": "100%", "stop-color": "rgba(167, 139, 250, 0)" }
                        }
                        radialGradient {
                            id: "spotlightGrad",
                            stop { "offset": "0%", "stop-color": "rgba({accent}, 0.25)" }
                            stop { "offset": "100%", "stop-color": "rgba({accent}, 0)" }
                        }
                    }

                    g { class: "map-paths",
                        for (i, country) in panel.country_paths().iter().enumerate() {
                            path {
                                key: "country-{i}",
                                d: "{country.data}",
                                class: "country-path",
                                class: if country.hovered { "hovered" },
                                style: "animation-delay: {country.reveal_delay_ms}ms;",
                                onmouseenter: move |_| handle.country_entered(i),
                                onmouseleave: move |_| handle.country_left(i),
                            }
                        }
                    }

                    g { class: "map-arcs-g",
                        if !reduce_motion {
                            for (i, ambient) in AMBIENT_ARC_PATHS.iter().enumerate() {
                                {
                                    let delay = i as f64 * AMBIENT_ARC_DELAY_STEP_S;
                                    rsx! {
                                        path {
                                            key: "ambient-{i}",
                                            d: "{ambient}",
                                            fill: "none",
                                            stroke: if i % 2 == 0 { "url(#arcGrad)" } else { "url(#arcGradAlt)" },
                                            stroke_width: "1.5",
                                            class: "arc-path",
                                            style: "animation-delay: {delay}s;",
                                        }
                                    }
                                }
                            }
                        }
                        for arc in panel.arcs() {
                            {
                                let d = arc.curve.to_path_data();
                                let offset = if arc.revealed { 0.0 } else { arc.length };
                                let gradient = arc.style.gradient_id();
                                rsx! {
                                    path {
                                        key: "arc-{arc.target}",
                                        d: "{d}",
                                        fill: "none",
                                        stroke: "url(#{gradient})",
                                        stroke_width: "2.5",
                                        class: "connection-arc",
                                        style: "stroke-dasharray: {arc.length}; stroke-dashoffset: {offset};",
                                    }
                                }
                            }
                        }
                    }

                    g { class: "map-data-flow",
                        for (i, dot) in panel.data_particles().into_iter().enumerate() {
                            circle {
                                key: "particle-{i}",
                                cx: "{dot.x}",
                                cy: "{dot.y}",
                                r: "{dot.radius}",
                                class: "data-particle",
                                fill: if dot.lead { "var(--accent)".to_string() } else { format!("rgba({}, 0.6)", accent) },
                            }
                        }
                    }

                    circle {
                        class: "map-spotlight",
                        cx: "{spotlight.cx}",
                        cy: "{spotlight.cy}",
                        r: "60",
                        fill: "url(#spotlightGrad)",
                        opacity: "{spotlight.opacity}",
                    }
                }

                div { class: "map-hotspots",
                    for (i, hotspot) in panel.hotspots().iter().enumerate() {
                        div {
                            key: "hotspot-{hotspot.city}",
                            class: "hotspot",
                            class: if panel.is_hotspot_active(i) { "active" },
                            class: if panel.is_hotspot_connected(i) { "connected" },
                            style: "left: {hotspot.x}%; top: {hotspot.y}%;",
                            onmouseenter: move |_| handle.hotspot_entered(i),
                            onmouseleave: move |_| handle.hotspot_left(i),
                            div { class: "hotspot-dot" }
                            div { class: "hotspot-pulse" }
                        }
                    }
                }

                if !reduce_motion {
                    div { class: "map-pings",
                        for ping in panel.pings() {
                            div {
                                key: "ping-{ping.id}",
                                class: "map-ping",
                                style: "left: {ping.x_pct}%; top: {ping.y_pct}%;",
                            }
                        }
                    }
                }

                div {
                    class: "map-tooltip",
                    class: if tooltip.visible { "visible" },
                    style: "left: {tooltip.x}px; top: {tooltip.y}px;",
                    div { class: "tooltip-header",
                        if let Some(flag) = &tooltip.flag {
                            img {
                                class: "tooltip-flag visible",
                                src: "{flag.src}",
                                alt: "{flag.alt}",
                            }
                        }
                        span { class: "tooltip-city", "{tooltip.city}" }
                    }
                    if tooltip.show_info {
                        div { class: "tooltip-body",
                            span { class: "tooltip-info", "{tooltip.info}" }
                        }
                    }
                }
            }

            if show_counters {
                if let Some(live) = panel.live_counters() {
                    div { class: "map-live-stats",
                        div { class: "live-stat",
                            span { class: "live-dot" }
                            span { class: "online-count", "{live.online}" }
                            span { class: "live-label", "online now" }
                        }
                        div { class: "live-stat",
                            span { class: "activity-count", "{live.activity}" }
                            span { class: "live-label", "active discussions" }
                        }
                    }
                }
            }
        }
    }
}
