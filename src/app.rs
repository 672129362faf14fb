//! Smart Outfit Frontend App
//!
//! Root component: four page sections toggled by the router, plus the load
//! effects that keep each container in sync with the server.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::components::{
    ErrorBanner, HistoryView, NavBar, OutfitsView, RecommendForm, UploadForm, WardrobeView,
};
use crate::context::{AppContext, Page};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let ctx = AppContext::new();
    provide_context(ctx);

    // Load the wardrobe at startup and after every item mutation
    Effect::new(move |_| {
        let trigger = ctx.items_trigger.get();
        spawn_local(async move {
            match api::list_items().await {
                Ok(items) => {
                    web_sys::console::log_1(
                        &format!("[APP] Loaded {} items, trigger={}", items.len(), trigger).into(),
                    );
                    store.items().set(items);
                }
                Err(e) => ctx.report_error(format!("Could not load wardrobe: {e}")),
            }
        });
    });

    // History loads on first visit, not at startup
    Effect::new(move |_| {
        if ctx.history_trigger.get() == 0 {
            return;
        }
        spawn_local(async move {
            match api::list_history().await {
                Ok(entries) => store.history().set(entries),
                Err(e) => ctx.report_error(format!("Could not load history: {e}")),
            }
        });
    });

    view! {
        <NavBar />
        <ErrorBanner />

        <section class="page" class:hidden=move || ctx.page.get() != Page::Home>
            <h1>"Smart Outfit"</h1>
            <p class="tagline">"Pick an occasion and let your wardrobe do the rest."</p>
            <RecommendForm />
        </section>

        <section class="page" class:hidden=move || ctx.page.get() != Page::Wardrobe>
            <h1>"Wardrobe"</h1>
            <UploadForm />
            <WardrobeView />
        </section>

        <section class="page" class:hidden=move || ctx.page.get() != Page::Outfits>
            <h1>"Outfits"</h1>
            <OutfitsView />
        </section>

        <section class="page" class:hidden=move || ctx.page.get() != Page::History>
            <h1>"History"</h1>
            <HistoryView />
        </section>
    }
}
