//! Tooltip, spotlight and ambient presenter state.

use rand::Rng;

use crate::map::{MAP_VIEWBOX_HEIGHT, MAP_VIEWBOX_WIDTH};

/// Flag artwork service; codes are interpolated lowercase.
pub const FLAG_CDN_BASE: &str = "https://flagcdn.com";

/// Pointer offsets for the floating tooltip, in container pixels.
pub const TOOLTIP_OFFSET_X: f64 = 15.0;
pub const TOOLTIP_OFFSET_Y: f64 = -10.0;

/// Ambient ping cadence and lifetime.
pub const PING_INTERVAL_MS: u64 = 1500;
pub const PING_LIFETIME_MS: f64 = 2500.0;

/// Simulated live-counter cadence.
pub const LIVE_STATS_INTERVAL_MS: u64 = 3000;

#[derive(Clone, PartialEq, Debug)]
pub struct FlagImage {
    pub src: String,
    pub alt: String,
}

/// Validates a country code for the flag image: exactly two ASCII
/// letters after trim and lowercasing. Anything else clears the flag
/// rather than requesting a malformed resource.
pub fn flag_image(country_code: Option<&str>) -> Option<FlagImage> {
    let normalized = country_code.unwrap_or("").trim().to_lowercase();
    if normalized.len() == 2 && normalized.bytes().all(|b| b.is_ascii_lowercase()) {
        Some(FlagImage {
            src: format!("{}/{}.svg", FLAG_CDN_BASE, normalized),
            alt: format!("{} Flag", normalized.to_uppercase()),
        })
    } else {
        None
    }
}

/// Floating tooltip. Hiding keeps the content; the next show overwrites
/// it.
#[derive(Clone, PartialEq, Debug, Default)]
pub struct TooltipState {
    pub visible: bool,
    pub city: String,
    pub info: String,
    pub show_info: bool,
    pub flag: Option<FlagImage>,
    pub x: f64,
    pub y: f64,
}

impl TooltipState {
    pub fn show(
        &mut self,
        city: Option<&str>,
        info: Option<&str>,
        country_code: Option<&str>,
        pointer: (f64, f64),
    ) {
        self.city = city.unwrap_or("").to_string();
        self.flag = flag_image(country_code);
        self.info = info.unwrap_or("").to_string();
        self.show_info = !self.info.is_empty();
        self.visible = true;
        self.follow(pointer);
    }

    pub fn follow(&mut self, pointer: (f64, f64)) {
        self.x = pointer.0 + TOOLTIP_OFFSET_X;
        self.y = pointer.1 + TOOLTIP_OFFSET_Y;
    }

    pub fn hide(&mut self) {
        self.visible = false;
    }
}

/// Radial spotlight following the pointer, in viewport units.
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub struct SpotlightState {
    pub cx: f64,
    pub cy: f64,
    pub opacity: f64,
}

impl SpotlightState {
    /// Linear mapping from the container's rendered box to the fixed
    /// viewport dimensions.
    pub fn follow(&mut self, pointer: (f64, f64), surface: (f64, f64)) {
        if surface.0 <= 0.0 || surface.1 <= 0.0 {
            return;
        }
        self.cx = pointer.0 / surface.0 * MAP_VIEWBOX_WIDTH;
        self.cy = pointer.1 / surface.1 * MAP_VIEWBOX_HEIGHT;
        self.opacity = 1.0;
    }

    pub fn fade(&mut self) {
        self.opacity = 0.0;
    }
}

/// A short-lived ambient marker at a random map position.
#[derive(Clone, PartialEq, Debug)]
pub struct Ping {
    pub id: u64,
    pub x_pct: f64,
    pub y_pct: f64,
    pub born_ms: f64,
}

/// Uniform-random ping position within the constrained sub-rectangle of
/// the viewport (10–90% horizontal, 15–85% vertical).
pub fn random_ping_position<R: Rng + ?Sized>(rng: &mut R) -> (f64, f64) {
    (
        10.0 + rng.gen::<f64>() * 80.0,
        15.0 + rng.gen::<f64>() * 70.0,
    )
}

/// Presentation-only simulated counters, not derived from any real
/// measurement.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct LiveCounters {
    pub online: u32,
    pub activity: u32,
}

impl LiveCounters {
    pub fn randomized<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self {
            online: 350 + rng.gen_range(0..40),
            activity: 20 + rng.gen_range(0..10),
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    #[test]
    fn two_letter_codes_produce_lowercase_urls() {
        let flag = flag_image(Some("US")).unwrap();
        assert_eq!(flag.src, "https://flagcdn.com/us.svg");
        assert_eq!(flag.alt, "US Flag");
    }

    #[test]
    fn padded_codes_are_trimmed() {
        let flag = flag_image(Some("  de ")).unwrap();
        assert_eq!(flag.src, "https://flagcdn.com/de.svg");
    }

    #[test]
    fn invalid_codes_clear_the_flag() {
        assert!(flag_image(Some("USA")).is_none());
        assert!(flag_image(Some("")).is_none());
        assert!(flag_image(None).is_none());
        assert!(flag_image(Some("u1")).is_none());
        assert!(flag_image(Some("日本")).is_none());
    }

    #[test]
    fn show_positions_tooltip_with_pointer_offset() {
        let mut tooltip = TooltipState::default();
        tooltip.show(Some("Lagos"), Some("19 online"), Some("ng"), (100.0, 60.0));
        assert!(tooltip.visible);
        assert_eq!(tooltip.x, 115.0);
        assert_eq!(tooltip.y, 50.0);
        assert!(tooltip.show_info);
    }

    #[test]
    fn empty_info_hides_the_info_row() {
        let mut tooltip = TooltipState::default();
        tooltip.show(Some("France"), None, None, (0.0, 0.0));
        assert!(!tooltip.show_info);
        assert!(tooltip.flag.is_none());
    }

    #[test]
    fn hide_keeps_content() {
        let mut tooltip = TooltipState::default();
        tooltip.show(Some("Tokyo"), Some("46 online"), Some("jp"), (0.0, 0.0));
        tooltip.hide();
        assert!(!tooltip.visible);
        assert_eq!(tooltip.city, "Tokyo");
        assert!(tooltip.flag.is_some());
    }

    #[test]
    fn spotlight_maps_container_pixels_to_viewport_units() {
        let mut spotlight = SpotlightState::default();
        spotlight.follow((480.0, 240.0), (960.0, 480.0));
        assert!((spotlight.cx - MAP_VIEWBOX_WIDTH / 2.0).abs() < 1e-9);
        assert!((spotlight.cy - MAP_VIEWBOX_HEIGHT / 2.0).abs() < 1e-9);
        assert_eq!(spotlight.opacity, 1.0);
        spotlight.fade();
        assert_eq!(spotlight.opacity, 0.0);
    }

    #[test]
    fn ping_positions_stay_inside_the_sub_rectangle() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let (x, y) = random_ping_position(&mut rng);
            assert!((10.0..90.0).contains(&x));
            assert!((15.0..85.0).contains(&y));
        }
    }

    #[test]
    fn simulated_counters_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let counters = LiveCounters::randomized(&mut rng);
            assert!((350..390).contains(&counters.online));
            assert!((20..30).contains(&counters.activity));
        }
    }
}
