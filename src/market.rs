//! Country name to market code lookup.
//!
//! Catalog endpoints restrict results to a market given as an ISO 3166-1
//! alpha-2 code, while callers pass free-text country names. Names are
//! resolved against the ISO 3166-1 short names shipped with `isocountry`,
//! plus a small set of everyday names the standard spells differently
//! ("United States", "Russia", "South Korea", ...). Matching ignores case,
//! including non-ASCII letters, and surrounding whitespace.

use std::fmt;

use isocountry::CountryCode;
use serde::Serialize;

use crate::error::CatalogError;

/// ISO 3166-1 alpha-2 country code, e.g. `BR`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Market(String);

impl Market {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Market {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Resolves a country name into its market code.
///
/// `None` means no market restriction and resolves to `Ok(None)`. An unknown
/// name is a validation error so it is rejected before any request is made.
pub fn market_from_country_name(country_name: Option<&str>) -> Result<Option<Market>, CatalogError> {
    let Some(name) = country_name else {
        return Ok(None);
    };

    find_country_code(name)
        .map(|code| Some(Market(code.to_string())))
        .ok_or_else(|| CatalogError::validation(format!("invalid country name '{}'", name.trim())))
}

pub fn find_country_code(name: &str) -> Option<&'static str> {
    let wanted = name.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }

    ALIASES
        .iter()
        .find(|(_, names)| names.iter().any(|n| n.to_lowercase() == wanted))
        .map(|(code, _)| *code)
        .or_else(|| {
            CountryCode::iter()
                .find(|country| country.name().to_lowercase() == wanted)
                .map(|country| country.alpha2())
        })
}

// Common names missing from the ISO short name list. Kosovo has no ISO code
// but is a Spotify market under the user-assigned `XK`.
const ALIASES: &[(&str, &[&str])] = &[
    ("AE", &["UAE"]),
    ("BO", &["Bolivia"]),
    ("BN", &["Brunei"]),
    ("CD", &["DR Congo", "Democratic Republic of the Congo"]),
    ("CG", &["Congo", "Republic of the Congo"]),
    ("CI", &["Ivory Coast", "Côte d'Ivoire", "Cote d'Ivoire"]),
    ("CV", &["Cape Verde", "Cabo Verde"]),
    ("CZ", &["Czech Republic", "Czechia"]),
    ("FM", &["Micronesia"]),
    ("GB", &["United Kingdom", "UK", "Great Britain"]),
    ("IR", &["Iran"]),
    ("KP", &["North Korea"]),
    ("KR", &["South Korea", "Korea"]),
    ("LA", &["Laos"]),
    ("MD", &["Moldova"]),
    ("MK", &["North Macedonia", "Macedonia"]),
    ("NL", &["Netherlands", "Holland"]),
    ("PS", &["Palestine"]),
    ("RU", &["Russia"]),
    ("SY", &["Syria"]),
    ("SZ", &["Eswatini", "Swaziland"]),
    ("TR", &["Türkiye", "Turkiye", "Turkey"]),
    ("TW", &["Taiwan"]),
    ("TZ", &["Tanzania"]),
    ("US", &["United States", "USA"]),
    ("VA", &["Vatican", "Vatican City", "Holy See"]),
    ("VE", &["Venezuela"]),
    ("VN", &["Vietnam", "Viet Nam"]),
    ("XK", &["Kosovo"]),
];
