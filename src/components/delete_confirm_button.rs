//! Delete Confirm Button Component
//!
//! Inline two-step delete confirmation. Deletes only fire after an explicit
//! confirm; cancel returns to the idle button.

use leptos::prelude::*;

/// Shows a delete button; clicking it swaps in the prompt with yes/no actions.
///
/// # Arguments
/// * `prompt` - Question shown while waiting for confirmation
/// * `on_confirm` - Callback to execute when the user confirms
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] prompt: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let (confirming, set_confirming) = signal(false);
    let prompt = StoredValue::new(prompt);

    view! {
        <Show when=move || !confirming.get()>
            <button class="delete-btn" on:click=move |_| set_confirming.set(true)>
                "Delete"
            </button>
        </Show>
        <Show when=move || confirming.get()>
            <span class="delete-confirm">
                <span class="delete-confirm-text">{prompt.get_value()}</span>
                <button
                    class="confirm-btn"
                    on:click=move |_| {
                        set_confirming.set(false);
                        on_confirm.run(());
                    }
                >
                    "Yes"
                </button>
                <button class="cancel-btn" on:click=move |_| set_confirming.set(false)>
                    "No"
                </button>
            </span>
        </Show>
    }
}
