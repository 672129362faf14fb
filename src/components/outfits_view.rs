//! Outfits View Component
//!
//! Renders the latest recommendation: either a single notice card with the
//! server message, or one ordinally titled card per outfit. Outfit images go
//! through the per-item image endpoint.

use leptos::prelude::*;

use crate::api;
use crate::models::outfit_title;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn OutfitsView() -> impl IntoView {
    let store = use_app_store();

    view! {
        <div class="card-list">
            {move || {
                if let Some(notice) = store.recommend_notice().get() {
                    view! { <div class="notice">{notice}</div> }.into_any()
                } else {
                    store.outfits().get().into_iter().enumerate().map(|(index, outfit)| {
                        view! {
                            <div class="card outfit">
                                <div class="meta">{outfit_title(index)}</div>
                                <div class="outfit-images">
                                    {outfit.items.iter().map(|item| view! {
                                        <img src=api::image_url(item.id) />
                                    }).collect_view()}
                                </div>
                                <div class="outfit-why">{outfit.justification.clone()}</div>
                            </div>
                        }
                    }).collect_view().into_any()
                }
            }}
        </div>
    }
}
