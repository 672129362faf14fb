//! Nav Bar Component
//!
//! Top-level page switcher.

use leptos::prelude::*;

use crate::context::{AppContext, Page};

const PAGES: &[(Page, &str)] = &[
    (Page::Home, "Home"),
    (Page::Wardrobe, "Wardrobe"),
    (Page::Outfits, "Outfits"),
    (Page::History, "History"),
];

#[component]
pub fn NavBar() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    view! {
        <nav class="nav-bar">
            {PAGES.iter().map(|(page, label)| {
                let page = *page;
                view! {
                    <button
                        class=move || if ctx.page.get() == page { "nav-btn active" } else { "nav-btn" }
                        on:click=move |_| ctx.show_page(page)
                    >
                        {*label}
                    </button>
                }
            }).collect_view()}
        </nav>
    }
}
