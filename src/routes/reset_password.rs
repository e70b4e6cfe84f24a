//! Reset-password route. The token comes from the link's `token` query
//! parameter; without one the page says so up front and submit stays disabled.

use crate::{
    app_lib::{notify::Notifier, theme::Theme},
    components::{Alert, AlertKind, AuthLayout, Button, PasswordInput, use_toaster},
    features::auth::{
        flows::{AuthFlows, FollowUp, messages},
        forms::ResetPasswordForm,
        submission::{Submission, SubmitOutcome},
    },
    routes::{
        paths,
        support::{edit_form, page_scope, query_token, scoped_client},
    },
};
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_router::components::A;

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let scope = page_scope();
    let toaster = use_toaster();
    let form = RwSignal::new(ResetPasswordForm::with_token(query_token()));
    let submission = RwSignal::new(Submission::idle());
    let completed = RwSignal::new(false);
    let has_token = form.with_untracked(ResetPasswordForm::has_token);
    let submitting = Signal::derive(move || submission.get().is_submitting());

    if !has_token {
        toaster.error(messages::RESET_TOKEN_MISSING);
    }

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let input = form.get_untracked();
        let client = scoped_client(&scope);
        spawn_local(async move {
            let flows = AuthFlows::new(&client, &toaster);
            if let SubmitOutcome::Succeeded(FollowUp::PasswordReset) =
                flows.reset_password(&submission, &input).await
            {
                let _ = completed.try_set(true);
            }
        });
    };

    view! {
        <AuthLayout eyebrow="Account recovery" title="Choose a new password">
            <Show
                when=move || completed.get()
                fallback=move || {
                    view! {
                        <form class="space-y-4" on:submit=on_submit.clone()>
                            {(!has_token)
                                .then(|| {
                                    view! {
                                        <Alert kind=AlertKind::Error message=messages::RESET_TOKEN_MISSING />
                                    }
                                })}
                            <PasswordInput
                                id="password"
                                label="New password"
                                autocomplete="new-password"
                                value=Signal::derive(move || form.with(|form| form.password.clone()))
                                on_input=move |value: String| {
                                    edit_form(form, |form| form.set_password(value));
                                }
                            />
                            <PasswordInput
                                id="confirm_password"
                                label="Confirm new password"
                                autocomplete="new-password"
                                value=Signal::derive(move || {
                                    form.with(|form| form.confirm_password.clone())
                                })
                                on_input=move |value: String| {
                                    edit_form(form, |form| form.set_confirm_password(value));
                                }
                            />
                            <Button
                                button_type="submit"
                                disabled=!has_token
                                busy=submitting
                                busy_label="Resetting..."
                            >
                                "Reset password"
                            </Button>
                        </form>
                    }
                }
            >
                <div class="space-y-4">
                    <Alert kind=AlertKind::Success message=messages::RESET_SUCCESS />
                    <A href=paths::LOGIN {..} class=Theme::LINK>
                        "Continue to sign in"
                    </A>
                </div>
            </Show>
        </AuthLayout>
    }
}
