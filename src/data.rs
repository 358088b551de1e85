use crate::models::{
    CommunityStats, FaqEntry, Location, PriceModel, PricingTier, TierFeature,
};

pub fn default_locations() -> Vec<Location> {
    fn location(
        city: &str,
        country: &str,
        code: &str,
        flag: &str,
        members: u32,
        online: u32,
        x: f64,
        y: f64,
        tz: &str,
    ) -> Location {
        Location {
            city: city.to_string(),
            country: country.to_string(),
            country_code: code.to_string(),
            flag: flag.to_string(),
            members,
            online_now: online,
            map_x: x,
            map_y: y,
            timezone: Some(tz.to_string()),
        }
    }

    vec![
        location("San Francisco", "United States", "us", "🇺🇸", 324, 42, 17.0, 35.0, "America/Los_Angeles"),
        location("New York", "United States", "us", "🇺🇸", 298, 42, 22.0, 34.0, "America/New_York"),
        location("Toronto", "Canada", "ca", "🇨🇦", 132, 18, 23.0, 33.0, "America/Toronto"),
        location("São Paulo", "Brazil", "br", "🇧🇷", 154, 28, 30.0, 64.0, "America/Sao_Paulo"),
        location("London", "United Kingdom", "gb", "🇬🇧", 289, 67, 47.0, 27.0, "Europe/London"),
        location("Berlin", "Germany", "de", "🇩🇪", 198, 35, 50.0, 26.0, "Europe/Berlin"),
        location("Lagos", "Nigeria", "ng", "🇳🇬", 98, 19, 48.0, 50.0, "Africa/Lagos"),
        location("Dubai", "United Arab Emirates", "ae", "🇦🇪", 87, 24, 58.0, 40.0, "Asia/Dubai"),
        location("Mumbai", "India", "in", "🇮🇳", 167, 53, 65.0, 43.0, "Asia/Kolkata"),
        location("Singapore", "Singapore", "sg", "🇸🇬", 89, 31, 73.0, 54.0, "Asia/Singapore"),
        location("Tokyo", "Japan", "jp", "🇯🇵", 176, 46, 82.0, 33.0, "Asia/Tokyo"),
        location("Sydney", "Australia", "au", "🇦🇺", 143, 22, 84.0, 70.0, "Australia/Sydney"),
    ]
}

pub fn location_by_city<'a>(locations: &'a [Location], city: &str) -> Option<&'a Location> {
    locations
        .iter()
        .find(|location| location.city.eq_ignore_ascii_case(city))
}

pub fn locations_by_country<'a>(locations: &'a [Location], code: &str) -> Vec<&'a Location> {
    locations
        .iter()
        .filter(|location| location.country_code.eq_ignore_ascii_case(code))
        .collect()
}

pub fn top_locations_by_members(locations: &[Location], limit: usize) -> Vec<Location> {
    let mut sorted = locations.to_vec();
    sorted.sort_by(|a, b| b.members.cmp(&a.members));
    sorted.truncate(limit);
    sorted
}

pub fn total_members(locations: &[Location]) -> u32 {
    locations.iter().map(|location| location.members).sum()
}

pub fn total_online(locations: &[Location]) -> u32 {
    locations.iter().map(|location| location.online_now).sum()
}

pub fn community_stats() -> CommunityStats {
    CommunityStats {
        members_total: 10_847,
        members_display: "10K+".to_string(),
        countries: 80,
        webinars_yearly: 50,
        mentors: 200,
        certifications: 12,
        satisfaction: 98,
    }
}

pub fn pricing_tiers() -> Vec<PricingTier> {
    vec![
        PricingTier {
            id: "community",
            name: "Community",
            tagline: "Start learning with the community",
            featured: false,
            price: PriceModel::Free,
            features: vec![
                TierFeature { text: "Community forums access", included: true },
                TierFeature { text: "Monthly newsletter", included: true },
                TierFeature { text: "Recorded webinars", included: true },
                TierFeature { text: "Basic job board", included: true },
                TierFeature { text: "Live workshops", included: false },
                TierFeature { text: "Certifications", included: false },
                TierFeature { text: "Mentorship", included: false },
            ],
            cta: "Join Free",
        },
        PricingTier {
            id: "professional",
            name: "Professional",
            tagline: "Full access to accelerate growth",
            featured: true,
            price: PriceModel::Paid {
                monthly: 18,
                annual: 99,
                annual_original: 199,
            },
            features: vec![
                TierFeature { text: "All Community features", included: true },
                TierFeature { text: "Live webinars & workshops", included: true },
                TierFeature { text: "Certificate programs", included: true },
                TierFeature { text: "1-on-1 mentorship", included: true },
                TierFeature { text: "Priority event registration", included: true },
                TierFeature { text: "Platform discounts", included: true },
                TierFeature { text: "Exclusive networking", included: true },
                TierFeature { text: "Member directory", included: true },
            ],
            cta: "Start Professional",
        },
        PricingTier {
            id: "enterprise",
            name: "Enterprise",
            tagline: "Solutions for teams & organizations",
            featured: false,
            price: PriceModel::Custom,
            features: vec![
                TierFeature { text: "All Professional features", included: true },
                TierFeature { text: "Team management", included: true },
                TierFeature { text: "Custom training programs", included: true },
                TierFeature { text: "Account manager", included: true },
                TierFeature { text: "Volume discounts", included: true },
                TierFeature { text: "Custom integrations", included: true },
                TierFeature { text: "SLA guarantees", included: true },
            ],
            cta: "Contact Sales",
        },
    ]
}

pub fn tier_by_id(tiers: &[PricingTier], id: &str) -> Option<PricingTier> {
    tiers.iter().find(|tier| tier.id == id).cloned()
}

pub fn faq_entries() -> Vec<FaqEntry> {
    vec![
        FaqEntry {
            question: "What is IAWD membership?",
            answer: "A global community of web developers with webinars, certifications, mentorship and a member directory spanning 80+ countries.",
            category: "Membership",
        },
        FaqEntry {
            question: "Can I cancel my membership?",
            answer: "Yes, anytime. Annual plans are refundable within the first 30 days.",
            category: "Billing",
        },
        FaqEntry {
            question: "Do you offer student discounts?",
            answer: "Students with a valid academic email get Professional at half price.",
            category: "Billing",
        },
        FaqEntry {
            question: "How does mentorship work?",
            answer: "Professional members book monthly 1-on-1 sessions with a mentor matched to their goals.",
            category: "Programs",
        },
        FaqEntry {
            question: "Are the certifications recognized?",
            answer: "Our 12 certification tracks are industry-reviewed and verifiable through a public registry.",
            category: "Programs",
        },
        FaqEntry {
            question: "Where are members located?",
            answer: "Everywhere. The live map on the home page shows our hubs; the largest are San Francisco, New York and London.",
            category: "Community",
        },
    ]
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn hub_positions_are_valid_percentages() {
        for location in default_locations() {
            assert!((0.0..=100.0).contains(&location.map_x), "{}", location.city);
            assert!((0.0..=100.0).contains(&location.map_y), "{}", location.city);
            assert_eq!(location.country_code.len(), 2);
        }
    }

    #[test]
    fn lookups_are_case_insensitive() {
        let locations = default_locations();
        assert!(location_by_city(&locations, "london").is_some());
        assert_eq!(locations_by_country(&locations, "US").len(), 2);
    }

    #[test]
    fn top_by_members_sorts_descending() {
        let top = top_locations_by_members(&default_locations(), 3);
        let cities: Vec<&str> = top.iter().map(|l| l.city.as_str()).collect();
        assert_eq!(cities, vec!["San Francisco", "New York", "London"]);
    }

    #[test]
    fn totals_add_up() {
        let locations = default_locations();
        assert_eq!(
            total_members(&locations),
            locations.iter().map(|l| l.members).sum::<u32>()
        );
        assert!(total_online(&locations) > 0);
    }

    #[test]
    fn hotspot_formatting_matches_the_panel_contract() {
        let locations = default_locations();
        let hotspot = locations[4].hotspot();
        assert_eq!(hotspot.city, "London");
        assert_eq!(hotspot.info, "67 online");
        assert_eq!(hotspot.country_code.as_deref(), Some("gb"));
        let members = locations[4].member_hotspot();
        assert_eq!(members.info, "289 members");
    }

    #[test]
    fn featured_tier_exists_once() {
        let tiers = pricing_tiers();
        assert_eq!(tiers.iter().filter(|t| t.featured).count(), 1);
        assert!(tier_by_id(&tiers, "professional").is_some());
        assert!(tier_by_id(&tiers, "platinum").is_none());
    }
}
