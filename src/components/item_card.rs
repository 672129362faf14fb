//! Item Card Component
//!
//! One wardrobe item with its image, summary, and per-item actions. Every
//! action posts to the server and then refreshes the item list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::{CategorySelect, DeleteConfirmButton};
use crate::context::{AppContext, Container};
use crate::models::Item;

#[component]
pub fn ItemCard(item: Item) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let id = item.id;
    let favorited = item.favorited;

    let on_worn = move |_: web_sys::MouseEvent| {
        spawn_local(async move {
            match api::mark_worn(id).await {
                Ok(()) => ctx.refresh(Container::Items),
                Err(e) => ctx.report_error(format!("Could not mark item worn: {e}")),
            }
        });
    };

    // The desired state is sent explicitly; the server sets it verbatim
    let on_favorite = move |_: web_sys::MouseEvent| {
        spawn_local(async move {
            match api::set_favorite(id, !favorited).await {
                Ok(()) => ctx.refresh(Container::Items),
                Err(e) => ctx.report_error(format!("Could not update favorite: {e}")),
            }
        });
    };

    let on_delete = Callback::new(move |_| {
        spawn_local(async move {
            match api::delete_item(id).await {
                Ok(()) => ctx.refresh(Container::Items),
                Err(e) => ctx.report_error(format!("Could not delete item: {e}")),
            }
        });
    });

    view! {
        <div class="card">
            <img src=item.url.clone() />
            <div class="meta">{item.meta_line()}</div>
            <CategorySelect item_id=id current=item.category.clone() />
            <button class="worn-btn" on:click=on_worn>"Worn +1"</button>
            <button class="favorite-btn" on:click=on_favorite>
                {if favorited { "★ Favorited" } else { "☆ Favorite" }}
            </button>
            <DeleteConfirmButton prompt="Delete this item?" on_confirm=on_delete />
        </div>
    }
}
