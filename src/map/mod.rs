//! Live world-map panel runtime.
//!
//! The panel is modelled as an explicit state object ([`MapPanelState`])
//! holding hotspot positions, loaded country paths, live connection arcs
//! and the tooltip/spotlight presenter state. Components feed pointer
//! events and timer ticks into it and render whatever it exposes; nothing
//! in this module touches the UI layer.

pub mod arcs;
pub mod countries;
pub mod panel;
pub mod svg;
pub mod tooltip;

pub use panel::{
    initialize_panels, ActiveGate, CountryPath, MapHotspot, MapPanelOptions, MapPanelState,
    PanelDescriptor, Teardown,
};

/// Fixed coordinate space the map graphic is authored in. Hotspots use
/// percentages of this viewport; arcs and the spotlight work in these
/// units directly.
pub const MAP_VIEWBOX_WIDTH: f64 = 1016.371;
pub const MAP_VIEWBOX_HEIGHT: f64 = 514.609;

/// Particle accent fallback when the stylesheet does not define
/// `--cyan-400-rgb`.
pub const DEFAULT_ACCENT_RGB: &str = "34, 211, 238";

/// Reveal stagger applied to country paths as they are inserted.
pub const COUNTRY_REVEAL_STEP_MS: u32 = 4;

pub fn percent_to_viewport(x_pct: f64, y_pct: f64) -> (f64, f64) {
    (
        x_pct / 100.0 * MAP_VIEWBOX_WIDTH,
        y_pct / 100.0 * MAP_VIEWBOX_HEIGHT,
    )
}
