use crate::{
    app_lib::theme::Theme,
    components::{Alert, AlertKind, AuthLayout, Spinner, use_toaster},
    features::auth::{
        flows::{AuthFlows, messages},
        submission::Submission,
        verification::VerificationState,
    },
    routes::{
        paths,
        support::{page_scope, query_token, scoped_client},
    },
};
use leptos::{prelude::*, task::spawn_local};
use leptos_router::components::A;

#[component]
pub fn VerifyEmailPage() -> impl IntoView {
    let scope = page_scope();
    let toaster = use_toaster();
    let token = query_token();
    let state = RwSignal::new(VerificationState::enter(token.as_deref()));
    let resend = RwSignal::new(Submission::idle());

    {
        let client = scoped_client(&scope);
        spawn_local(async move {
            let flows = AuthFlows::new(&client, &toaster);
            flows
                .run_verification(token, move |next| {
                    let _ = state.try_set(next);
                })
                .await;
        });
    }

    let on_resend = move |_| {
        let client = scoped_client(&scope);
        spawn_local(async move {
            let flows = AuthFlows::new(&client, &toaster);
            flows.resend_verification(&resend).await;
        });
    };

    view! {
        <AuthLayout eyebrow="Almost there" title="Verify your email">
            {move || match state.get() {
                VerificationState::Loading => view! {
                    <div class="py-6">
                        <Spinner label="Verifying your email..." />
                    </div>
                }
                .into_any(),
                VerificationState::Success => view! {
                    <div class="space-y-4">
                        <Alert kind=AlertKind::Success message=messages::VERIFY_SUCCESS />
                        <A href=paths::LOGIN {..} class=Theme::LINK>
                            "Continue to sign in"
                        </A>
                    </div>
                }
                .into_any(),
                VerificationState::NoToken => view! {
                    <Alert
                        kind=AlertKind::Info
                        message="We sent a verification link to your email. Open it to activate your account."
                    />
                }
                .into_any(),
                VerificationState::Error(message) => view! {
                    <Alert kind=AlertKind::Error message=message />
                }
                .into_any(),
            }}
            <Show when=move || state.with(VerificationState::offers_resend)>
                <div class="mt-6 rounded-lg border border-slate-200 p-4">
                    <p class="text-sm text-slate-600">"Didn't get the email?"</p>
                    <button
                        type="button"
                        class=format!("mt-3 {}", Theme::OUTLINE_BUTTON)
                        disabled=move || resend.get().is_submitting()
                        on:click=on_resend.clone()
                    >
                        {move || {
                            if resend.get().is_submitting() { "Sending..." } else { "Resend verification email" }
                        }}
                    </button>
                </div>
            </Show>
        </AuthLayout>
    }
}
