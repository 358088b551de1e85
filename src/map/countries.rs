//! Country classification for loaded map paths.

use std::collections::HashMap;

use once_cell::sync::Lazy;

/// Marker class the panel tags inserted paths with; stripped before a
/// class token is matched against the table.
pub const COUNTRY_PATH_CLASS: &str = "country-path";

static COUNTRY_NAMES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("AF", "Afghanistan"),
        ("AL", "Albania"),
        ("DZ", "Algeria"),
        ("AO", "Angola"),
        ("AR", "Argentina"),
        ("AM", "Armenia"),
        ("AU", "Australia"),
        ("AT", "Austria"),
        ("AZ", "Azerbaijan"),
        ("BD", "Bangladesh"),
        ("BY", "Belarus"),
        ("BE", "Belgium"),
        ("BO", "Bolivia"),
        ("BA", "Bosnia"),
        ("BR", "Brazil"),
        ("BG", "Bulgaria"),
        ("KH", "Cambodia"),
        ("CM", "Cameroon"),
        ("CA", "Canada"),
        ("CL", "Chile"),
        ("CN", "China"),
        ("CO", "Colombia"),
        ("CD", "DR Congo"),
        ("HR", "Croatia"),
        ("CU", "Cuba"),
        ("CZ", "Czechia"),
        ("DK", "Denmark"),
        ("DO", "Dominican Rep."),
        ("EC", "Ecuador"),
        ("EG", "Egypt"),
        ("EE", "Estonia"),
        ("ET", "Ethiopia"),
        ("FI", "Finland"),
        ("FR", "France"),
        ("GE", "Georgia"),
        ("DE", "Germany"),
        ("GH", "Ghana"),
        ("GR", "Greece"),
        ("GT", "Guatemala"),
        ("HN", "Honduras"),
        ("HU", "Hungary"),
        ("IS", "Iceland"),
        ("IN", "India"),
        ("ID", "Indonesia"),
        ("IR", "Iran"),
        ("IQ", "Iraq"),
        ("IE", "Ireland"),
        ("IL", "Israel"),
        ("IT", "Italy"),
        ("JP", "Japan"),
        ("JO", "Jordan"),
        ("KZ", "Kazakhstan"),
        ("KE", "Kenya"),
        ("KR", "South Korea"),
        ("KW", "Kuwait"),
        ("LV", "Latvia"),
        ("LB", "Lebanon"),
        ("LY", "Libya"),
        ("LT", "Lithuania"),
        ("MY", "Malaysia"),
        ("MX", "Mexico"),
        ("MA", "Morocco"),
        ("MZ", "Mozambique"),
        ("MM", "Myanmar"),
        ("NP", "Nepal"),
        ("NL", "Netherlands"),
        ("NZ", "New Zealand"),
        ("NG", "Nigeria"),
        ("NO", "Norway"),
        ("OM", "Oman"),
        ("PK", "Pakistan"),
        ("PA", "Panama"),
        ("PY", "Paraguay"),
        ("PE", "Peru"),
        ("PH", "Philippines"),
        ("PL", "Poland"),
        ("PT", "Portugal"),
        ("QA", "Qatar"),
        ("RO", "Romania"),
        ("RU", "Russia"),
        ("SA", "Saudi Arabia"),
        ("SN", "Senegal"),
        ("RS", "Serbia"),
        ("SG", "Singapore"),
        ("SK", "Slovakia"),
        ("SI", "Slovenia"),
        ("ZA", "South Africa"),
        ("ES", "Spain"),
        ("LK", "Sri Lanka"),
        ("SE", "Sweden"),
        ("CH", "Switzerland"),
        ("SY", "Syria"),
        ("TW", "Taiwan"),
        ("TZ", "Tanzania"),
        ("TH", "Thailand"),
        ("TN", "Tunisia"),
        ("TR", "Turkey"),
        ("UA", "Ukraine"),
        ("AE", "UAE"),
        ("GB", "United Kingdom"),
        ("US", "United States"),
        ("UY", "Uruguay"),
        ("UZ", "Uzbekistan"),
        ("VE", "Venezuela"),
        ("VN", "Vietnam"),
        ("YE", "Yemen"),
        ("ZM", "Zambia"),
        ("ZW", "Zimbabwe"),
        ("USA", "United States"),
        ("GBR", "United Kingdom"),
        ("FRA", "France"),
        ("DEU", "Germany"),
        ("BRA", "Brazil"),
        ("IND", "India"),
        ("CHN", "China"),
        ("JPN", "Japan"),
        ("AUS", "Australia"),
        ("CAN", "Canada"),
        ("RUS", "Russia"),
        ("KOR", "South Korea"),
        ("MEX", "Mexico"),
        ("IDN", "Indonesia"),
        ("TUR", "Turkey"),
        ("NGA", "Nigeria"),
        ("EGY", "Egypt"),
        ("ZAF", "South Africa"),
        ("ARG", "Argentina"),
        ("COL", "Colombia"),
        ("ESP", "Spain"),
        ("ITA", "Italy"),
        ("POL", "Poland"),
        ("UKR", "Ukraine"),
    ])
});

/// Resolves a display name for a map path.
///
/// Priority: explicit name attribute, then the `id` matched against the
/// code table, then the class attribute (marker class stripped) as a
/// whole, then its first token. A path with no match has no name; hover
/// still highlights it, but no tooltip content is produced.
pub fn resolve_country_name(
    explicit_name: Option<&str>,
    id: Option<&str>,
    class: Option<&str>,
) -> Option<String> {
    if let Some(name) = explicit_name {
        let name = name.trim();
        if !name.is_empty() {
            return Some(name.to_string());
        }
    }

    let id = id.unwrap_or("").trim().to_ascii_uppercase();
    if let Some(name) = COUNTRY_NAMES.get(id.as_str()) {
        return Some((*name).to_string());
    }

    let class = class
        .unwrap_or("")
        .replace(COUNTRY_PATH_CLASS, "")
        .trim()
        .to_ascii_uppercase();
    if let Some(name) = COUNTRY_NAMES.get(class.as_str()) {
        return Some((*name).to_string());
    }

    let first_token = class.split_whitespace().next().unwrap_or("");
    COUNTRY_NAMES.get(first_token).map(|name| (*name).to_string())
}
