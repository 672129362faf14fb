//! Recommend Form Component
//!
//! Event/weather selectors plus the generate action. A successful request
//! replaces the outfit results and switches to the outfits page; a failed
//! one reports through the banner and stays put.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{AppContext, Page};
use crate::store::{use_app_store, AppStateStoreFields};
use crate::vocab;

#[component]
pub fn RecommendForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (event, set_event) = signal(String::from(vocab::EVENTS[0]));
    let (weather, set_weather) = signal(String::from(vocab::WEATHER[0]));
    let (generating, set_generating) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let event = event.get();
        let weather = weather.get();

        // Results never survive a new request
        store.outfits().set(Vec::new());
        store.recommend_notice().set(None);

        set_generating.set(true);
        spawn_local(async move {
            match api::recommend(&event, &weather).await {
                Ok(resp) => {
                    store.recommend_notice().set(resp.notice());
                    store.outfits().set(resp.outfits);
                    ctx.show_page(Page::Outfits);
                }
                Err(e) => ctx.report_error(format!("Recommendation failed: {e}")),
            }
            set_generating.set(false);
        });
    };

    view! {
        <form class="recommend-form" on:submit=on_submit>
            <label>
                "Event"
                <select on:change=move |ev| set_event.set(event_target_value(&ev))>
                    {vocab::EVENTS.iter().map(|option| view! {
                        <option value={*option}>{*option}</option>
                    }).collect_view()}
                </select>
            </label>
            <label>
                "Weather"
                <select on:change=move |ev| set_weather.set(event_target_value(&ev))>
                    {vocab::WEATHER.iter().map(|option| view! {
                        <option value={*option}>{*option}</option>
                    }).collect_view()}
                </select>
            </label>
            <button type="submit" prop:disabled=move || generating.get()>
                {move || if generating.get() { "Generating..." } else { "Generate outfits" }}
            </button>
        </form>
    }
}
