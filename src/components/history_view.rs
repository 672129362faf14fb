//! History View Component
//!
//! Past recommendations with their context line, item images (each item's own
//! stored URL), justification, and a delete control.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::components::DeleteConfirmButton;
use crate::context::{AppContext, Container};
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn HistoryView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    view! {
        <div class="card-list">
            {move || {
                let entries = store.history().get();
                if entries.is_empty() {
                    view! { <div class="notice">"No outfit history yet."</div> }.into_any()
                } else {
                    entries.into_iter().map(|entry| {
                        let id = entry.id;
                        let on_delete = Callback::new(move |_| {
                            spawn_local(async move {
                                match api::delete_history(id).await {
                                    Ok(()) => ctx.refresh(Container::History),
                                    Err(e) => {
                                        ctx.report_error(format!("Could not delete history entry: {e}"))
                                    }
                                }
                            });
                        });

                        view! {
                            <div class="card">
                                <div class="meta">{entry.summary_line()}</div>
                                <div class="outfit-images">
                                    {entry.items.iter().map(|item| view! {
                                        <img src=item.url.clone() />
                                    }).collect_view()}
                                </div>
                                <div class="outfit-why">{entry.justification.clone()}</div>
                                <DeleteConfirmButton
                                    prompt="Delete this history entry?"
                                    on_confirm=on_delete
                                />
                            </div>
                        }
                    }).collect_view().into_any()
                }
            }}
        </div>
    }
}
