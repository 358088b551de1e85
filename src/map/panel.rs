//! Per-panel runtime state and lifecycle.

use std::sync::Arc;

use rand::Rng;

use crate::map::arcs::{self, ConnectionArc, ParticleDot, MAX_CONNECTIONS};
use crate::map::countries::resolve_country_name;
use crate::map::svg::MapPathSeed;
use crate::map::tooltip::{
    random_ping_position, LiveCounters, Ping, SpotlightState, TooltipState, PING_LIFETIME_MS,
};
use crate::map::{COUNTRY_REVEAL_STEP_MS, DEFAULT_ACCENT_RGB, MAP_VIEWBOX_HEIGHT, MAP_VIEWBOX_WIDTH};

/// A fixed point of interest with descriptive metadata. Positions are
/// percentages of the map viewport, scanned once at initialization and
/// never mutated afterwards.
#[derive(Clone, PartialEq, Debug)]
pub struct MapHotspot {
    pub city: String,
    pub info: String,
    pub country_code: Option<String>,
    pub x: f64,
    pub y: f64,
}

/// A country shape loaded from the external map document.
#[derive(Clone, PartialEq, Debug)]
pub struct CountryPath {
    pub data: String,
    pub name: Option<String>,
    pub reveal_delay_ms: u32,
    pub hovered: bool,
}

/// Gates pointer-driven effects (spotlight, ambient pings). The default
/// reads the panel's own visibility flag; a containing page can supply a
/// custom predicate instead, e.g. when several tabbed panels share a
/// page.
#[derive(Clone)]
pub enum ActiveGate {
    Visibility,
    Custom(Arc<dyn Fn() -> bool>),
}

#[derive(Clone, Default)]
pub struct MapPanelOptions {
    pub map_svg_url: Option<String>,
    pub is_active: Option<Arc<dyn Fn() -> bool>>,
    /// Rendered size of the pointer-tracking container, for the linear
    /// mapping to viewport units.
    pub surface: Option<(f64, f64)>,
}

/// Proof of a successful initialization. Consumed by
/// [`MapPanelState::teardown`]; tickets from a redundant initialization
/// are inert.
#[must_use]
pub struct Teardown(Option<u64>);

impl Teardown {
    pub fn is_noop(&self) -> bool {
        self.0.is_none()
    }
}

/// One panel's complete runtime state. One instance per initialized
/// container; panels never share state.
pub struct MapPanelState {
    initialized: bool,
    generation: u64,
    visible: bool,
    gate: ActiveGate,
    map_svg_url: String,
    accent_rgb: String,
    surface: (f64, f64),
    clock_ms: f64,
    last_pointer: Option<(f64, f64)>,
    hotspots: Vec<MapHotspot>,
    active_hotspot: Option<usize>,
    connected: Vec<usize>,
    country_paths: Vec<CountryPath>,
    arcs: Vec<ConnectionArc>,
    pings: Vec<Ping>,
    next_ping_id: u64,
    tooltip: TooltipState,
    spotlight: SpotlightState,
    live: Option<LiveCounters>,
    cleanup: Vec<Box<dyn FnOnce()>>,
}

impl MapPanelState {
    pub fn new(options: MapPanelOptions) -> Self {
        let gate = match options.is_active {
            Some(predicate) => ActiveGate::Custom(predicate),
            None => ActiveGate::Visibility,
        };
        Self {
            initialized: false,
            generation: 0,
            visible: true,
            gate,
            map_svg_url: options
                .map_svg_url
                .unwrap_or_else(crate::services::assets::default_map_svg_url),
            accent_rgb: DEFAULT_ACCENT_RGB.to_string(),
            surface: options
                .surface
                .unwrap_or((MAP_VIEWBOX_WIDTH, MAP_VIEWBOX_HEIGHT)),
            clock_ms: 0.0,
            last_pointer: None,
            hotspots: Vec::new(),
            active_hotspot: None,
            connected: Vec::new(),
            country_paths: Vec::new(),
            arcs: Vec::new(),
            pings: Vec::new(),
            next_ping_id: 0,
            tooltip: TooltipState::default(),
            spotlight: SpotlightState::default(),
            live: None,
            cleanup: Vec::new(),
        }
    }

    /// Marks the panel initialized and scans the hotspot seeds. A second
    /// call on a live panel changes nothing and returns an inert ticket.
    pub fn initialize(&mut self, seeds: &[MapHotspot]) -> Teardown {
        if self.initialized {
            return Teardown(None);
        }
        self.initialized = true;
        self.generation += 1;
        self.hotspots = seeds.to_vec();
        Teardown(Some(self.generation))
    }

    /// Appends a disposal action, released at teardown in insertion
    /// order. An action registered on a torn-down panel is released
    /// immediately.
    pub fn register_cleanup(&mut self, action: impl FnOnce() + 'static) {
        if self.initialized {
            self.cleanup.push(Box::new(action));
        } else {
            action();
        }
    }

    /// Runs every registered cleanup action exactly once, clears live
    /// arcs and presenter state, and resets the initialized flag so the
    /// panel can be reinitialized. Inert or stale tickets do nothing.
    pub fn teardown(&mut self, ticket: Teardown) {
        let Teardown(Some(generation)) = ticket else {
            return;
        };
        if !self.initialized || generation != self.generation {
            return;
        }
        for action in self.cleanup.drain(..) {
            action();
        }
        self.clear_connection_arcs();
        self.hotspots.clear();
        self.active_hotspot = None;
        self.pings.clear();
        self.tooltip = TooltipState::default();
        self.spotlight = SpotlightState::default();
        self.initialized = false;
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }

    /// Visibility flag backing the default activity gate.
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn is_active(&self) -> bool {
        match &self.gate {
            ActiveGate::Visibility => self.visible,
            ActiveGate::Custom(predicate) => predicate(),
        }
    }

    pub fn map_svg_url(&self) -> &str {
        &self.map_svg_url
    }

    pub fn accent_rgb(&self) -> &str {
        &self.accent_rgb
    }

    /// Accent override read from the document's custom properties; blank
    /// values keep the fallback.
    pub fn set_accent_rgb(&mut self, rgb: &str) {
        let trimmed = rgb.trim();
        if !trimmed.is_empty() {
            self.accent_rgb = trimmed.to_string();
        }
    }

    pub fn hotspots(&self) -> &[MapHotspot] {
        &self.hotspots
    }

    pub fn country_paths(&self) -> &[CountryPath] {
        &self.country_paths
    }

    pub fn arcs(&self) -> &[ConnectionArc] {
        &self.arcs
    }

    pub fn pings(&self) -> &[Ping] {
        &self.pings
    }

    pub fn tooltip(&self) -> &TooltipState {
        &self.tooltip
    }

    pub fn spotlight(&self) -> SpotlightState {
        self.spotlight
    }

    pub fn live_counters(&self) -> Option<LiveCounters> {
        self.live
    }

    pub fn is_hotspot_active(&self, index: usize) -> bool {
        self.active_hotspot == Some(index)
    }

    pub fn is_hotspot_connected(&self, index: usize) -> bool {
        self.connected.contains(&index)
    }

    /// Particles for all live arcs at the current clock.
    pub fn data_particles(&self) -> Vec<ParticleDot> {
        self.arcs
            .iter()
            .flat_map(|arc| arcs::particles_for_arc(arc, self.clock_ms))
            .collect()
    }

    /// Replaces the loaded country paths with freshly parsed seeds,
    /// assigning staggered reveal delays in document order. Discards the
    /// result when the panel was torn down while the fetch was in
    /// flight.
    pub fn install_map_document(&mut self, seeds: Vec<MapPathSeed>) {
        if !self.initialized {
            return;
        }
        self.country_paths = seeds
            .into_iter()
            .enumerate()
            .map(|(index, seed)| CountryPath {
                name: resolve_country_name(
                    seed.explicit_name.as_deref(),
                    seed.id.as_deref(),
                    seed.class.as_deref(),
                ),
                data: seed.data,
                reveal_delay_ms: index as u32 * COUNTRY_REVEAL_STEP_MS,
                hovered: false,
            })
            .collect();
    }

    /// Container-relative pointer movement: the tooltip tracks the
    /// pointer, and while the panel is active the spotlight follows in
    /// viewport units.
    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        if !self.initialized {
            return;
        }
        self.last_pointer = Some((x, y));
        self.tooltip.follow((x, y));
        if self.is_active() {
            self.spotlight.follow((x, y), self.surface);
        }
    }

    pub fn container_left(&mut self) {
        if !self.initialized {
            return;
        }
        self.spotlight.fade();
    }

    pub fn hotspot_entered(&mut self, index: usize) {
        if !self.initialized || index >= self.hotspots.len() {
            return;
        }
        self.active_hotspot = Some(index);
        let hotspot = self.hotspots[index].clone();
        let pointer = (
            hotspot.x / 100.0 * self.surface.0,
            hotspot.y / 100.0 * self.surface.1,
        );
        self.tooltip.show(
            Some(&hotspot.city),
            Some(&hotspot.info),
            hotspot.country_code.as_deref(),
            pointer,
        );
        self.draw_connection_arcs(hotspot.x, hotspot.y);
    }

    pub fn hotspot_left(&mut self, index: usize) {
        if !self.initialized {
            return;
        }
        if self.active_hotspot == Some(index) {
            self.active_hotspot = None;
        }
        self.tooltip.hide();
        self.clear_connection_arcs();
    }

    pub fn country_entered(&mut self, index: usize) {
        if !self.initialized || index >= self.country_paths.len() {
            return;
        }
        self.country_paths[index].hovered = true;
        if let Some(name) = self.country_paths[index].name.clone() {
            let pointer = self.last_pointer.unwrap_or_default();
            self.tooltip.show(Some(&name), None, None, pointer);
        }
    }

    pub fn country_left(&mut self, index: usize) {
        if !self.initialized || index >= self.country_paths.len() {
            return;
        }
        self.country_paths[index].hovered = false;
        self.tooltip.hide();
    }

    /// Clears any previous set, then synthesizes arcs to the up-to-four
    /// nearest other hotspots, in ascending distance order, marking each
    /// target connected for the duration of the hover.
    pub fn draw_connection_arcs(&mut self, from_x: f64, from_y: f64) {
        if !self.initialized {
            return;
        }
        self.clear_connection_arcs();
        let positions: Vec<(f64, f64)> = self.hotspots.iter().map(|h| (h.x, h.y)).collect();
        let targets = arcs::nearest_hotspots(&positions, (from_x, from_y), MAX_CONNECTIONS);
        for (index, &target) in targets.iter().enumerate() {
            self.arcs.push(arcs::connection_arc(
                (from_x, from_y),
                positions[target],
                target,
                index,
                self.clock_ms,
            ));
            self.connected.push(target);
        }
    }

    /// Removes every arc (and with them every particle) and unmarks all
    /// connected hotspots.
    pub fn clear_connection_arcs(&mut self) {
        self.arcs.clear();
        self.connected.clear();
    }

    /// Advances the animation clock: reveals arcs whose stagger delay
    /// elapsed and expires old pings.
    pub fn advance_clock(&mut self, dt_ms: f64) {
        if !self.initialized {
            return;
        }
        self.clock_ms += dt_ms;
        let clock = self.clock_ms;
        for arc in &mut self.arcs {
            if !arc.revealed && clock >= arc.reveal_at_ms {
                arc.revealed = true;
            }
        }
        self.pings.retain(|ping| clock - ping.born_ms < PING_LIFETIME_MS);
    }

    /// One ambient ping tick; does nothing while the panel is inactive.
    pub fn spawn_ping<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if !self.initialized || !self.is_active() {
            return;
        }
        let (x_pct, y_pct) = random_ping_position(rng);
        self.pings.push(Ping {
            id: self.next_ping_id,
            x_pct,
            y_pct,
            born_ms: self.clock_ms,
        });
        self.next_ping_id += 1;
    }

    /// One simulated live-counter tick.
    pub fn refresh_live_counters<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        if !self.initialized {
            return;
        }
        self.live = Some(LiveCounters::randomized(rng));
    }
}

/// Seed for the batch initializer.
pub struct PanelDescriptor {
    pub hotspots: Vec<MapHotspot>,
    pub options: MapPanelOptions,
}

/// Initializes one independent panel per descriptor.
pub fn initialize_panels(descriptors: Vec<PanelDescriptor>) -> Vec<(MapPanelState, Teardown)> {
    descriptors
        .into_iter()
        .map(|descriptor| {
            let mut panel = MapPanelState::new(descriptor.options);
            let ticket = panel.initialize(&descriptor.hotspots);
            (panel, ticket)
        })
        .collect()
}
