//! Category Select Component
//!
//! Garment-type selector for one item, pre-selected to its stored category.
//! Only vocabulary members are ever offered or sent.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{AppContext, Container};
use crate::vocab;

#[component]
pub fn CategorySelect(item_id: u32, current: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let on_change = move |ev: web_sys::Event| {
        let category = event_target_value(&ev);
        spawn_local(async move {
            match api::update_category(item_id, &category).await {
                Ok(()) => ctx.refresh(Container::Items),
                Err(e) => ctx.report_error(format!("Could not update category: {e}")),
            }
        });
    };

    view! {
        <select class="category-select" on:change=on_change>
            {vocab::GARMENT_TYPES.iter().map(|garment| {
                let selected = *garment == current;
                view! {
                    <option value={*garment} selected=selected>
                        {*garment}
                    </option>
                }
            }).collect_view()}
        </select>
    }
}
