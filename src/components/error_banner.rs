//! Error Banner Component
//!
//! Non-blocking banner for failed server actions. The failing view keeps its
//! previous content; this is the only place failures surface.

use leptos::prelude::*;

use crate::context::AppContext;

#[component]
pub fn ErrorBanner() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        {move || ctx.error.get().map(|message| view! {
            <div class="error-banner">
                <span class="error-text">{message}</span>
                <button class="error-dismiss" on:click=move |_| ctx.dismiss_error()>
                    "×"
                </button>
            </div>
        })}
    }
}
