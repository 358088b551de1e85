use serde::{Deserialize, Serialize};

use crate::map::MapHotspot;

/// One member hub. `map_x`/`map_y` are percentages of the map viewport,
/// matching the hotspot coordinate space the panel runtime works in.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct Location {
    pub city: String,
    pub country: String,
    pub country_code: String,
    pub flag: String,
    pub members: u32,
    pub online_now: u32,
    pub map_x: f64,
    pub map_y: f64,
    pub timezone: Option<String>,
}

impl Location {
    pub fn hotspot(&self) -> MapHotspot {
        MapHotspot {
            city: self.city.clone(),
            info: format!("{} online", self.online_now),
            country_code: Some(self.country_code.clone()),
            x: self.map_x,
            y: self.map_y,
        }
    }

    /// Variant used by the member-distribution panel: member totals
    /// instead of live presence.
    pub fn member_hotspot(&self) -> MapHotspot {
        MapHotspot {
            city: self.city.clone(),
            info: format!("{} members", self.members),
            country_code: Some(self.country_code.clone()),
            x: self.map_x,
            y: self.map_y,
        }
    }
}

/// Per-city presence sample returned by the community API.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CityPresence {
    pub city: String,
    pub online: u32,
}

/// Canonical community statistics shown in the stats strip.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct CommunityStats {
    pub members_total: u32,
    pub members_display: String,
    pub countries: u32,
    pub webinars_yearly: u32,
    pub mentors: u32,
    pub certifications: u32,
    pub satisfaction: u8,
}

#[derive(Clone, Copy, PartialEq, Debug)]
pub enum PriceModel {
    Free,
    Paid {
        monthly: u32,
        annual: u32,
        annual_original: u32,
    },
    Custom,
}

#[derive(Clone, PartialEq, Debug)]
pub struct TierFeature {
    pub text: &'static str,
    pub included: bool,
}

#[derive(Clone, PartialEq, Debug)]
pub struct PricingTier {
    pub id: &'static str,
    pub name: &'static str,
    pub tagline: &'static str,
    pub featured: bool,
    pub price: PriceModel,
    pub features: Vec<TierFeature>,
    pub cta: &'static str,
}

#[derive(Clone, PartialEq, Debug)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
    pub category: &'static str,
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct SettingsState {
    pub dark_mode: bool,
    pub reduce_motion: bool,
    pub map_svg_url: Option<String>,
}

impl Default for SettingsState {
    fn default() -> Self {
        Self {
            dark_mode: true,
            reduce_motion: false,
            map_svg_url: None,
        }
    }
}

/// Which community panel is currently presented. Only the selected
/// panel's pointer/ambient effects run.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum CommunityTab {
    LiveMap,
    MemberMap,
}
