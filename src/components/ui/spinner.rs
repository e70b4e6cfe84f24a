use leptos::prelude::*;

#[component]
pub fn Spinner(#[prop(optional)] label: Option<&'static str>) -> impl IntoView {
    view! {
        <div class="flex flex-col items-center gap-3">
            <div
                class="inline-block h-7 w-7 animate-spin rounded-full border-4 border-blue-200 border-t-blue-600"
                role="status"
                aria-live="polite"
                aria-label=label.unwrap_or("Loading")
            ></div>
            {label.map(|text| view! { <p class="text-sm text-slate-500">{text}</p> })}
        </div>
    }
}
