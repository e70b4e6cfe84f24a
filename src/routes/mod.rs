//! Route table for the auth screens. Only `paths` is compiled off the browser
//! target; flows use it to name their navigation follow-ups.

pub(crate) mod paths;

#[cfg(target_arch = "wasm32")]
mod dashboard;
#[cfg(target_arch = "wasm32")]
mod forgot_password;
#[cfg(target_arch = "wasm32")]
mod login;
#[cfg(target_arch = "wasm32")]
mod not_found;
#[cfg(target_arch = "wasm32")]
mod reset_password;
#[cfg(target_arch = "wasm32")]
mod signup;
#[cfg(target_arch = "wasm32")]
mod support;
#[cfg(target_arch = "wasm32")]
mod verify_email;

#[cfg(target_arch = "wasm32")]
pub(crate) use app_routes::AppRoutes;

#[cfg(target_arch = "wasm32")]
mod app_routes {
    use super::{
        dashboard::DashboardPage, forgot_password::ForgotPasswordPage, login::LoginPage,
        not_found::NotFoundPage, paths, reset_password::ResetPasswordPage, signup::SignUpPage,
        verify_email::VerifyEmailPage,
    };
    use leptos::prelude::*;
    use leptos_router::{
        components::{Redirect, Route, Routes},
        path,
    };

    #[component]
    pub fn AppRoutes() -> impl IntoView {
        view! {
            <Routes fallback=|| view! { <NotFoundPage /> }>
                <Route path=path!("/") view=|| view! { <Redirect path=paths::LOGIN /> } />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/signup") view=SignUpPage />
                <Route path=path!("/forgot-password") view=ForgotPasswordPage />
                <Route path=path!("/reset-password") view=ResetPasswordPage />
                <Route path=path!("/verify-email") view=VerifyEmailPage />
                <Route path=path!("/dashboard") view=DashboardPage />
                <Route path=path!("/*any") view=NotFoundPage />
            </Routes>
        }
    }
}
