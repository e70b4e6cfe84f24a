//! Inline alert banners for result screens. Messages must be safe to render
//! and should never include secrets or tokens.

use crate::app_lib::notify::ToastKind;
use leptos::prelude::*;

#[derive(Clone, Copy)]
/// Supported alert styles.
pub enum AlertKind {
    Error,
    Success,
    Info,
}

impl From<ToastKind> for AlertKind {
    fn from(kind: ToastKind) -> Self {
        match kind {
            ToastKind::Success => Self::Success,
            ToastKind::Error => Self::Error,
        }
    }
}

impl AlertKind {
    pub(crate) fn class(self) -> &'static str {
        match self {
            AlertKind::Error => {
                "rounded-lg border border-red-200 bg-red-50 px-4 py-3 text-sm text-red-700"
            }
            AlertKind::Success => {
                "rounded-lg border border-emerald-200 bg-emerald-50 px-4 py-3 text-sm text-emerald-700"
            }
            AlertKind::Info => {
                "rounded-lg border border-blue-200 bg-blue-50 px-4 py-3 text-sm text-blue-700"
            }
        }
    }
}

/// Renders a styled alert banner.
#[component]
pub fn Alert(kind: AlertKind, #[prop(into)] message: String) -> impl IntoView {
    view! { <div class=kind.class() role="alert">{message}</div> }
}
