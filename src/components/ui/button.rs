use leptos::prelude::*;

/// Primary action button. While `busy` is set the button is disabled and shows
/// `busy_label` instead of its children.
#[component]
pub fn Button(
    #[prop(optional)] button_type: Option<&'static str>,
    #[prop(optional, into, default = Signal::from(false))] disabled: Signal<bool>,
    #[prop(optional, into, default = Signal::from(false))] busy: Signal<bool>,
    #[prop(optional)] busy_label: Option<&'static str>,
    #[prop(optional, into)] on_click: Option<Callback<()>>,
    children: ChildrenFn,
) -> impl IntoView {
    let button_type = button_type.unwrap_or("button");
    let busy_label = busy_label.unwrap_or("Please wait...");
    let inactive = move || disabled.get() || busy.get();

    view! {
        <button
            type=button_type
            class="w-full text-white bg-blue-700 hover:bg-blue-800 focus:ring-4 focus:outline-none focus:ring-blue-300 font-medium rounded-lg text-sm px-5 py-2.5 text-center"
            class:cursor-not-allowed=inactive
            class:opacity-70=inactive
            disabled=inactive
            on:click=move |_| {
                if let Some(on_click) = on_click {
                    on_click.run(());
                }
            }
        >
            {move || {
                if busy.get() {
                    busy_label.into_any()
                } else {
                    children().into_any()
                }
            }}
        </button>
    }
}
