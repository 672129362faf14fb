//! Upload Form Component
//!
//! File input plus submit. A missing file blocks the request with an alert;
//! a successful upload clears the input and refreshes the wardrobe.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::{AppContext, Container};

#[component]
pub fn UploadForm() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let input_ref = NodeRef::<leptos::html::Input>::new();
    let (uploading, set_uploading) = signal(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let Some(input) = input_ref.get_untracked() else {
            return;
        };
        let Some(file) = input.files().and_then(|files| files.get(0)) else {
            if let Some(window) = web_sys::window() {
                let _ = window.alert_with_message("Choose an image first");
            }
            return;
        };

        set_uploading.set(true);
        spawn_local(async move {
            match api::upload_image(&file).await {
                Ok(()) => {
                    if let Some(input) = input_ref.get_untracked() {
                        input.set_value("");
                    }
                    ctx.refresh(Container::Items);
                }
                Err(e) => ctx.report_error(format!("Upload failed: {e}")),
            }
            set_uploading.set(false);
        });
    };

    view! {
        <form class="upload-form" on:submit=on_submit>
            <input type="file" node_ref=input_ref />
            <button type="submit" prop:disabled=move || uploading.get()>
                {move || if uploading.get() { "Uploading..." } else { "Upload" }}
            </button>
        </form>
    }
}
