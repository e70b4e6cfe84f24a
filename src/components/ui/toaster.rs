//! Toast stack rendered above every page. Flows report through the `Notifier`
//! implementation on `ToastContext`; each toast dismisses itself after a few
//! seconds or when clicked.

use crate::{
    app_lib::notify::{Notifier, Toast},
    components::ui::AlertKind,
};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const TOAST_LIFETIME_MS: u32 = 5_000;
const MAX_VISIBLE_TOASTS: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq)]
struct ToastEntry {
    id: u64,
    toast: Toast,
}

#[derive(Clone, Copy)]
pub struct ToastContext {
    entries: RwSignal<Vec<ToastEntry>>,
    next_id: StoredValue<u64>,
}

impl ToastContext {
    fn new() -> Self {
        Self {
            entries: RwSignal::new(Vec::new()),
            next_id: StoredValue::new(0),
        }
    }

    fn dismiss(&self, id: u64) {
        let _ = self
            .entries
            .try_update(|entries| entries.retain(|entry| entry.id != id));
    }
}

impl Notifier for ToastContext {
    fn notify(&self, toast: Toast) {
        let Some(id) = self.next_id.try_update_value(|next| {
            *next += 1;
            *next
        }) else {
            return;
        };

        let _ = self.entries.try_update(|entries| {
            entries.push(ToastEntry { id, toast });
            let overflow = entries.len().saturating_sub(MAX_VISIBLE_TOASTS);
            entries.drain(..overflow);
        });

        let context = *self;
        Timeout::new(TOAST_LIFETIME_MS, move || context.dismiss(id)).forget();
    }
}

pub fn provide_toaster() -> ToastContext {
    let context = ToastContext::new();
    provide_context(context);
    context
}

/// Returns the app-wide toast context, or a detached one when rendered outside
/// `App` so pages never fail on a missing provider.
pub fn use_toaster() -> ToastContext {
    use_context::<ToastContext>().unwrap_or_else(ToastContext::new)
}

#[component]
pub fn Toaster() -> impl IntoView {
    let context = use_toaster();

    view! {
        <div class="fixed right-4 top-4 z-50 flex w-80 flex-col gap-2" aria-live="polite">
            <For
                each=move || context.entries.get()
                key=|entry| entry.id
                children=move |entry| {
                    let kind = AlertKind::from(entry.toast.kind);
                    let id = entry.id;
                    view! {
                        <div
                            class=format!("{} cursor-pointer shadow-md", kind.class())
                            role="status"
                            on:click=move |_| context.dismiss(id)
                        >
                            {entry.toast.message}
                        </div>
                    }
                }
            />
        </div>
    }
}
