//! Frontend Models
//!
//! Data structures matching the wardrobe API payloads.

use serde::{Deserialize, Serialize};

/// Wardrobe item as returned by the `items` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub url: String,
    pub category: String,
    pub times_worn: u32,
    pub favorited: bool,
}

impl Item {
    /// Summary line shown under the item image
    pub fn meta_line(&self) -> String {
        format!("{} • worn: {}", self.category, self.times_worn)
    }
}

/// One proposed outfit from the `recommend` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutfitCandidate {
    pub items: Vec<Item>,
    pub justification: String,
}

/// Full `recommend` response body
///
/// The server sends `message` alongside the outfit list; it is only shown
/// when the list comes back empty.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct RecommendResponse {
    #[serde(default)]
    pub outfits: Vec<OutfitCandidate>,
    #[serde(default)]
    pub message: Option<String>,
}

impl RecommendResponse {
    /// Notice text to render instead of outfit cards, if any
    pub fn notice(&self) -> Option<String> {
        if self.outfits.is_empty() {
            Some(
                self.message
                    .clone()
                    .unwrap_or_else(|| "No suitable outfits found.".to_string()),
            )
        } else {
            None
        }
    }
}

/// Persisted past recommendation from the `history` endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoryEntry {
    pub id: u32,
    pub event: String,
    pub weather: String,
    /// Server-formatted timestamp, displayed verbatim
    pub created_at: String,
    pub items: Vec<Item>,
    pub justification: String,
}

impl HistoryEntry {
    /// Summary line shown at the top of a history card
    pub fn summary_line(&self) -> String {
        format!("{} • {} • {}", self.event, self.weather, self.created_at)
    }
}

/// Display title for the outfit at `index` (0-based) in the response order
pub fn outfit_title(index: usize) -> String {
    format!("Outfit {}", index + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_items_payload() {
        let json = r#"[
            {"id": 1, "url": "/image/1", "category": "top", "times_worn": 3, "favorited": true},
            {"id": 2, "url": "/image/2", "category": "unknown", "times_worn": 0, "favorited": false}
        ]"#;
        let items: Vec<Item> = serde_json::from_str(json).unwrap();
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].category, "top");
        assert!(items[0].favorited);
        assert_eq!(items[1].times_worn, 0);
    }

    #[test]
    fn test_meta_line() {
        let item = Item {
            id: 7,
            url: "/image/7".to_string(),
            category: "saree".to_string(),
            times_worn: 2,
            favorited: false,
        };
        assert_eq!(item.meta_line(), "saree • worn: 2");
    }

    #[test]
    fn test_recommend_notice_when_empty() {
        let json = r#"{"outfits": [], "message": "No suitable outfits found"}"#;
        let resp: RecommendResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.notice().as_deref(), Some("No suitable outfits found"));
    }

    #[test]
    fn test_recommend_notice_defaults_without_message() {
        let resp: RecommendResponse = serde_json::from_str("{}").unwrap();
        assert!(resp.outfits.is_empty());
        assert_eq!(resp.notice().as_deref(), Some("No suitable outfits found."));
    }

    #[test]
    fn test_recommend_no_notice_with_outfits() {
        let json = r#"{
            "outfits": [{
                "items": [{"id": 1, "url": "/image/1", "category": "dress", "times_worn": 0, "favorited": false}],
                "justification": "Chosen because it offers a clean one-piece look."
            }],
            "message": "ok"
        }"#;
        let resp: RecommendResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.outfits.len(), 1);
        assert!(resp.notice().is_none());
    }

    #[test]
    fn test_parse_history_entry() {
        let json = r#"{
            "id": 4,
            "event": "party",
            "weather": "cold",
            "created_at": "2025-11-02 18:30",
            "items": [
                {"id": 1, "url": "/image/1", "category": "top", "times_worn": 1, "favorited": false},
                {"id": 5, "url": "/image/5", "category": "skirt", "times_worn": 0, "favorited": true}
            ],
            "justification": "Chosen because it offers a stylish modern combination."
        }"#;
        let entry: HistoryEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.items.len(), 2);
        assert_eq!(entry.summary_line(), "party • cold • 2025-11-02 18:30");
    }

    #[test]
    fn test_outfit_title_is_one_based() {
        assert_eq!(outfit_title(0), "Outfit 1");
        assert_eq!(outfit_title(2), "Outfit 3");
    }
}
