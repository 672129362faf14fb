//! Wardrobe View Component
//!
//! Item list rebuilt wholesale from the store on every refresh.

use leptos::prelude::*;

use crate::components::ItemCard;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn WardrobeView() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="card-grid">
            {move || {
                store.items().get().into_iter().map(|item| {
                    view! { <ItemCard item=item /> }
                }).collect_view()
            }}
        </div>
        <p class="item-count">{move || format!("{} items", store.items().get().len())}</p>
    }
}
