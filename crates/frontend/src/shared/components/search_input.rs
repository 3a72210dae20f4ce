use leptos::prelude::*;

use crate::shared::icons::icon;

/// Free-text search box with debounce and a clear button.
///
/// `on_change` fires after a 300 ms pause in typing, and only for an empty
/// value (reset) or at least 3 characters, so the committed query state never
/// churns on every keystroke.
#[component]
pub fn SearchInput(
    /// Committed search value (draft resyncs to it on external change)
    #[prop(into)]
    value: Signal<String>,
    /// Commit callback
    #[prop(into)]
    on_change: Callback<String>,
    /// Placeholder text
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search (min. 3 characters)...".to_string()
    } else {
        placeholder
    };

    let (input_value, set_input_value) = signal(value.get_untracked());

    // External reset (Clear, back/forward): drop whatever was being typed.
    Effect::new(move |_| {
        let committed = value.get();
        if committed != input_value.get_untracked() {
            set_input_value.set(committed);
        }
    });

    let generation = StoredValue::new(0u64);
    let handle_input = move |new_value: String| {
        set_input_value.set(new_value.clone());
        generation.update_value(|g| *g += 1);
        let my_generation = generation.get_value();

        if !(new_value.trim().is_empty() || new_value.trim().len() >= 3) {
            return;
        }

        leptos::task::spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(300).await;
            if generation.get_value() == my_generation {
                on_change.run(new_value.trim().to_string());
            }
        });
    };

    let clear = move |_| {
        generation.update_value(|g| *g += 1);
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                class="search-input__field"
                placeholder=placeholder
                prop:value=move || input_value.get()
                on:input=move |ev| {
                    handle_input(event_target_value(&ev));
                }
            />
            {move || {
                if !input_value.get().is_empty() {
                    view! {
                        <button class="search-input__clear" on:click=clear title="Clear">
                            {icon("x")}
                        </button>
                    }
                    .into_any()
                } else {
                    view! { <></> }.into_any()
                }
            }}
        </div>
    }
}
