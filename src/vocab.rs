//! Client-Side Vocabularies
//!
//! The fixed label sets offered by the UI selectors. Garment types are the
//! only categories the client will send to the server.

/// Closed set of garment-type labels, `unknown` included for unclassified uploads
pub const GARMENT_TYPES: &[&str] = &[
    "top", "shirt", "t-shirt", "blouse",
    "pants", "jeans", "trousers", "shorts",
    "skirt", "frock", "dress", "gown",
    "kurti", "chudidhar", "saree", "lehenga",
    "jacket", "sweater", "coat", "outer",
    "dupatta", "shawl",
    "shoes", "heels", "flats", "sandals",
    "unknown",
];

/// Event options for the recommendation form
pub const EVENTS: &[&str] = &["casual", "party", "date", "traditional"];

/// Weather options for the recommendation form
pub const WEATHER: &[&str] = &["clear", "cold", "rainy", "windy"];

/// Whether `value` is a member of the garment-type vocabulary
pub fn is_garment_type(value: &str) -> bool {
    GARMENT_TYPES.contains(&value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_garment_types_accepted() {
        assert!(is_garment_type("top"));
        assert!(is_garment_type("saree"));
        assert!(is_garment_type("unknown"));
    }

    #[test]
    fn test_unlisted_labels_rejected() {
        assert!(!is_garment_type("hat"));
        assert!(!is_garment_type("Top"));
        assert!(!is_garment_type(""));
    }

    #[test]
    fn test_no_duplicate_labels() {
        let unique: HashSet<_> = GARMENT_TYPES.iter().collect();
        assert_eq!(unique.len(), GARMENT_TYPES.len());
    }

    #[test]
    fn test_form_vocabularies() {
        assert_eq!(EVENTS.len(), 4);
        assert_eq!(WEATHER.len(), 4);
        assert!(EVENTS.contains(&"traditional"));
        assert!(WEATHER.contains(&"rainy"));
    }
}
