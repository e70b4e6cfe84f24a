//! Forgot-password route. A successful request swaps the form for a
//! check-your-email screen; "Resend Email" returns to an empty form.

use crate::{
    app_lib::theme::Theme,
    components::{AuthLayout, Button, use_toaster},
    features::auth::{
        flows::{AuthFlows, FollowUp},
        forms::ForgotPasswordForm,
        submission::{Submission, SubmitOutcome},
    },
    routes::{
        paths,
        support::{edit_form, page_scope, scoped_client},
    },
};
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_router::components::A;

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let scope = page_scope();
    let toaster = use_toaster();
    let form = RwSignal::new(ForgotPasswordForm::default());
    let submission = RwSignal::new(Submission::idle());
    let sent_to = RwSignal::new(None::<String>);
    let submitting = Signal::derive(move || submission.get().is_submitting());

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let input = form.get_untracked();
        let client = scoped_client(&scope);
        spawn_local(async move {
            let flows = AuthFlows::new(&client, &toaster);
            if let SubmitOutcome::Succeeded(FollowUp::CheckEmail { email }) =
                flows.forgot_password(&submission, &input).await
            {
                let _ = sent_to.try_set(Some(email));
            }
        });
    };

    let start_over = move || {
        form.set(ForgotPasswordForm::default());
        submission.set(Submission::idle());
        sent_to.set(None);
    };

    view! {
        <AuthLayout
            eyebrow="Account recovery"
            title="Forgot your password?"
            subtitle="We will email you a link to choose a new one."
        >
            {move || match sent_to.get() {
                Some(email) => view! {
                    <div class="space-y-4">
                        <p class="text-sm text-slate-600">
                            "We sent a reset link to "
                            <span class="font-medium text-slate-900">{email}</span>
                            ". Check your inbox and spam folder."
                        </p>
                        <Button on_click=move |()| start_over()>"Resend Email"</Button>
                        <p class="text-center text-sm">
                            <A href=paths::LOGIN {..} class=Theme::LINK>
                                "Back to sign in"
                            </A>
                        </p>
                    </div>
                }
                .into_any(),
                None => view! {
                    <form class="space-y-4" on:submit=on_submit.clone()>
                        <div>
                            <label class=Theme::LABEL for="email">
                                "Email"
                            </label>
                            <input
                                id="email"
                                type="email"
                                autofocus
                                class=Theme::INPUT
                                autocomplete="email"
                                inputmode="email"
                                placeholder="name@example.com"
                                required
                                prop:value=move || form.with(|form| form.email.clone())
                                on:input=move |event| {
                                    edit_form(form, |form| form.set_email(event_target_value(&event)));
                                }
                            />
                        </div>
                        <Button button_type="submit" busy=submitting busy_label="Sending...">
                            "Send reset link"
                        </Button>
                        <p class="text-center text-sm">
                            <A href=paths::LOGIN {..} class=Theme::LINK>
                                "Back to sign in"
                            </A>
                        </p>
                    </form>
                }
                .into_any(),
            }}
        </AuthLayout>
    }
}
