use crate::{
    app_lib::theme::Theme,
    components::{AuthLayout, Button, PasswordInput, use_toaster},
    features::auth::{
        flows::AuthFlows,
        forms::LoginForm,
        submission::{Submission, SubmitOutcome},
    },
    routes::{
        paths,
        support::{edit_form, follow, page_scope, scoped_client},
    },
};
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_router::{components::A, hooks::use_navigate};

#[component]
pub fn LoginPage() -> impl IntoView {
    let scope = page_scope();
    let toaster = use_toaster();
    let navigate = use_navigate();
    let form = RwSignal::new(LoginForm::default());
    let submission = RwSignal::new(Submission::idle());
    let submitting = Signal::derive(move || submission.get().is_submitting());

    let on_submit = move |event: SubmitEvent| {
        event.prevent_default();
        let input = form.get_untracked();
        let client = scoped_client(&scope);
        let navigate = navigate.clone();
        spawn_local(async move {
            let flows = AuthFlows::new(&client, &toaster);
            if let SubmitOutcome::Succeeded(follow_up) = flows.login(&submission, &input).await {
                follow(&navigate, &follow_up);
            }
        });
    };

    view! {
        <AuthLayout eyebrow="Welcome back" title="Sign in" subtitle="Use your JinVa account.">
            <form class="space-y-4" on:submit=on_submit>
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
                <PasswordInput
                    id="password"
                    label="Password"
                    value=Signal::derive(move || form.with(|form| form.password.clone()))
                    on_input=move |value: String| edit_form(form, |form| form.set_password(value))
                />
                <div class="flex justify-end">
                    <A href=paths::FORGOT_PASSWORD {..} class=Theme::LINK>
                        "Forgot password?"
                    </A>
                </div>
                <Button button_type="submit" busy=submitting busy_label="Signing in...">
                    "Sign in"
                </Button>
                <p class="text-center text-sm text-slate-500">
                    "No account yet? "
                    <A href=paths::SIGNUP {..} class=Theme::LINK>
                        "Create one"
                    </A>
                </p>
            </form>
        </AuthLayout>
    }
}
