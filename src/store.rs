//! View-State Store
//!
//! One field per server-backed container, each replaced wholesale by its
//! load effect. Uses Leptos reactive_stores for field-level reactivity.

use reactive_stores::Store;

use crate::models::{HistoryEntry, Item, OutfitCandidate};

/// Client view state, rebuilt from the latest fetch of each container
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Full wardrobe item list
    pub items: Vec<Item>,
    /// Outfit candidates from the most recent recommendation
    pub outfits: Vec<OutfitCandidate>,
    /// Notice shown instead of outfit cards when the last request came back empty
    pub recommend_notice: Option<String>,
    /// Past recommendation records
    pub history: Vec<HistoryEntry>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    leptos::prelude::expect_context::<AppStore>()
}
