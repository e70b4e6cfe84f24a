//! Password field with a show/hide toggle. The value never leaves the form
//! record; the toggle only switches the input type.

use crate::app_lib::theme::Theme;
use leptos::prelude::*;

#[component]
pub fn PasswordInput(
    id: &'static str,
    label: &'static str,
    #[prop(optional)] autocomplete: Option<&'static str>,
    #[prop(into)] value: Signal<String>,
    #[prop(into)] on_input: Callback<String>,
) -> impl IntoView {
    let (visible, set_visible) = signal(false);

    view! {
        <div>
            <label class=Theme::LABEL for=id>
                {label}
            </label>
            <div class="relative">
                <input
                    id=id
                    type=move || if visible.get() { "text" } else { "password" }
                    class=format!("{} pr-12", Theme::INPUT)
                    autocomplete=autocomplete.unwrap_or("current-password")
                    required
                    prop:value=move || value.get()
                    on:input=move |event| on_input.run(event_target_value(&event))
                />
                <button
                    type="button"
                    class="absolute inset-y-0 right-0 px-3 text-xs font-medium text-slate-500 hover:text-slate-700"
                    aria-label=move || if visible.get() { "Hide password" } else { "Show password" }
                    on:click=move |_| set_visible.update(|shown| *shown = !*shown)
                >
                    {move || if visible.get() { "Hide" } else { "Show" }}
                </button>
            </div>
        </div>
    }
}
