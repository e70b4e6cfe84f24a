//! Landing page after sign-in. Session enforcement is the backend's job; this
//! page only confirms the login went through.

use crate::{app_lib::theme::Theme, components::AuthLayout, routes::paths};
use leptos::prelude::*;
use leptos_router::components::A;

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <AuthLayout eyebrow="Dashboard" title="Welcome to JinVa">
            <p class="text-sm text-slate-600">
                "You are now logged in! This is a protected page."
            </p>
            <p class="mt-6 text-sm">
                <A href=paths::LOGIN {..} class=Theme::LINK>
                    "Back to sign in"
                </A>
            </p>
        </AuthLayout>
    }
}
