//! Split layout for the auth screens: a brand panel on wide viewports and the
//! form card next to it. The footer carries the build's commit hash so support
//! can tell which bundle a user is running.

use crate::{
    app_lib::{build_info, theme::Theme},
    routes::paths,
};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn AuthLayout(
    eyebrow: &'static str,
    title: &'static str,
    #[prop(optional)] subtitle: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="min-h-screen grid lg:grid-cols-2">
            <aside class="hidden lg:flex flex-col justify-between bg-slate-900 p-12 text-white">
                <A href=paths::LOGIN {..} class="text-xl font-semibold tracking-tight">
                    "JinVa"
                </A>
                <div class="space-y-3">
                    <h2 class="text-3xl font-semibold">"Book your next look in minutes."</h2>
                    <p class="text-sm text-slate-300">
                        "Customers find stylists nearby. Stylists fill their calendar."
                    </p>
                </div>
                <p class="text-xs text-slate-500">"JinVa"</p>
            </aside>
            <main class="flex flex-col items-center justify-center px-6 py-10">
                <div class=Theme::CARD>
                    <div class="space-y-2">
                        <p class=Theme::EYEBROW>{eyebrow}</p>
                        <h1 class=Theme::TITLE>{title}</h1>
                        {subtitle.map(|text| view! { <p class=Theme::SUBTITLE>{text}</p> })}
                    </div>
                    <div class="mt-6">{children()}</div>
                </div>
                <footer class="mt-6 text-[11px] text-slate-400">
                    {format!("build {}", build_info::short_commit_hash())}
                </footer>
            </main>
        </div>
    }
}
