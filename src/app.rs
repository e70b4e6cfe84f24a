use crate::components::{Toaster, provide_toaster};
use crate::routes::AppRoutes;
use leptos::prelude::*;
use leptos_router::components::Router;

#[component]
pub fn App() -> impl IntoView {
    provide_toaster();

    view! {
        <Router>
            <AppRoutes />
        </Router>
        <Toaster />
    }
}
