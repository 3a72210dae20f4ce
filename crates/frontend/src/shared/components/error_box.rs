use leptos::prelude::*;

use crate::shared::list_controller::ListError;

/// Inline error box for the last list fetch. Denied responses keep the view
/// mounted and show the server's message and reason.
#[component]
pub fn ListErrorBox(error: RwSignal<Option<ListError>>) -> impl IntoView {
    move || match error.get() {
        Some(ListError::Denied { message, reason }) => view! {
            <div class="warning-box warning-box--error">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">
                    {message}
                    {reason.map(|r| format!(" ({})", r))}
                </span>
            </div>
        }
        .into_any(),
        Some(ListError::Failed(message)) => view! {
            <div class="warning-box warning-box--error">
                <span class="warning-box__icon">"⚠"</span>
                <span class="warning-box__text">{message}</span>
            </div>
        }
        .into_any(),
        None => view! { <></> }.into_any(),
    }
}
