//! Signup route. Collects the full profile, validates it locally and registers
//! the account; the backend then sends the verification email and the page
//! moves on to `/verify-email`. Google and Facebook signup hand off to the
//! provider's authorization page instead.

use crate::{
    app_lib::theme::Theme,
    components::{AuthLayout, Button, PasswordInput, PhoneInput, use_toaster},
    features::auth::{
        flows::AuthFlows,
        forms::SignupForm,
        submission::{Submission, SubmitOutcome},
        types::{Country, Gender, OAuthProvider, Role},
    },
    routes::{
        paths,
        support::{edit_form, follow, page_scope, scoped_client},
    },
};
use leptos::{ev::SubmitEvent, prelude::*, task::spawn_local};
use leptos_router::{components::A, hooks::use_navigate};

#[component]
pub fn SignUpPage() -> impl IntoView {
    let scope = page_scope();
    let toaster = use_toaster();
    let navigate = use_navigate();
    let form = RwSignal::new(SignupForm::default());
    let submission = RwSignal::new(Submission::idle());
    let oauth = RwSignal::new(Submission::idle());
    let submitting = Signal::derive(move || submission.get().is_submitting());
    let redirecting = Signal::derive(move || oauth.get().is_submitting());

    let on_submit = {
        let scope = scope.clone();
        let navigate = navigate.clone();
        move |event: SubmitEvent| {
            event.prevent_default();
            let input = form.get_untracked();
            let client = scoped_client(&scope);
            let navigate = navigate.clone();
            spawn_local(async move {
                let flows = AuthFlows::new(&client, &toaster);
                if let SubmitOutcome::Succeeded(follow_up) = flows.signup(&submission, &input).await
                {
                    follow(&navigate, &follow_up);
                }
            });
        }
    };

    let start_oauth = move |provider: OAuthProvider| {
        let client = scoped_client(&scope);
        let navigate = navigate.clone();
        spawn_local(async move {
            let flows = AuthFlows::new(&client, &toaster);
            if let SubmitOutcome::Succeeded(follow_up) = flows.oauth_signup(&oauth, provider).await {
                follow(&navigate, &follow_up);
            }
        });
    };

    let text_field = move |id: &'static str,
                           label: &'static str,
                           autocomplete: &'static str,
                           read: fn(&SignupForm) -> String,
                           write: fn(&mut SignupForm, String)| {
        view! {
            <div>
                <label class=Theme::LABEL for=id>
                    {label}
                </label>
                <input
                    id=id
                    type="text"
                    class=Theme::INPUT
                    autocomplete=autocomplete
                    required
                    prop:value=move || form.with(read)
                    on:input=move |event| {
                        let value = event_target_value(&event);
                        edit_form(form, |form| write(form, value));
                    }
                />
            </div>
        }
    };

    view! {
        <AuthLayout
            eyebrow="Create account"
            title="Join JinVa"
            subtitle="Book stylists or grow your client list."
        >
            <div class="grid gap-3 sm:grid-cols-2">
                {OAuthProvider::ALL
                    .iter()
                    .map(|provider| {
                        let provider = *provider;
                        let start_oauth = start_oauth.clone();
                        view! {
                            <button
                                type="button"
                                class=Theme::OUTLINE_BUTTON
                                disabled=move || redirecting.get()
                                on:click=move |_| start_oauth(provider)
                            >
                                {provider.label()}
                            </button>
                        }
                    })
                    .collect_view()}
            </div>
            <div class="my-6 flex items-center gap-3 text-xs uppercase tracking-wide text-slate-400">
                <span class="h-px flex-1 bg-slate-200"></span>
                "or"
                <span class="h-px flex-1 bg-slate-200"></span>
            </div>

            <form class="space-y-4" on:submit=on_submit>
                <div class="grid gap-4 sm:grid-cols-2">
                    {text_field(
                        "firstname",
                        "First name",
                        "given-name",
                        |form| form.firstname.clone(),
                        |form, value| form.set_firstname(value),
                    )}
                    {text_field(
                        "lastname",
                        "Last name",
                        "family-name",
                        |form| form.lastname.clone(),
                        |form, value| form.set_lastname(value),
                    )}
                </div>
                {text_field(
                    "username",
                    "Username",
                    "username",
                    |form| form.username.clone(),
                    |form, value| form.set_username(value),
                )}
                <div>
                    <label class=Theme::LABEL for="email">
                        "Email"
                    </label>
                    <input
                        id="email"
                        type="email"
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
                <PhoneInput
                    country=Signal::derive(move || form.with(|form| form.country))
                    phone=Signal::derive(move || form.with(|form| form.phone_number.clone()))
                    on_country=move |country: Country| edit_form(form, |form| form.set_country(country))
                    on_phone=move |raw: String| edit_form(form, |form| form.set_phone_number(&raw))
                />
                <div class="grid gap-4 sm:grid-cols-2">
                    <div>
                        <label class=Theme::LABEL for="gender">
                            "Gender"
                        </label>
                        <select
                            id="gender"
                            class=Theme::SELECT
                            required
                            on:change=move |event| {
                                let gender = event_target_value(&event).parse::<Gender>().ok();
                                edit_form(form, |form| form.set_gender(gender));
                            }
                        >
                            <option value="" selected=move || form.with(|form| form.gender.is_none())>
                                "Select gender"
                            </option>
                            {Gender::ALL
                                .iter()
                                .map(|gender| {
                                    let gender = *gender;
                                    view! {
                                        <option
                                            value=gender.as_str()
                                            selected=move || form.with(|form| form.gender == Some(gender))
                                        >
                                            {gender.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                    <div>
                        <label class=Theme::LABEL for="role">
                            "I am a"
                        </label>
                        <select
                            id="role"
                            class=Theme::SELECT
                            required
                            on:change=move |event| {
                                let role = event_target_value(&event).parse::<Role>().ok();
                                edit_form(form, |form| form.set_role(role));
                            }
                        >
                            <option value="" selected=move || form.with(|form| form.role.is_none())>
                                "Select role"
                            </option>
                            {Role::SELF_SERVICE
                                .iter()
                                .map(|role| {
                                    let role = *role;
                                    view! {
                                        <option
                                            value=role.as_str()
                                            selected=move || form.with(|form| form.role == Some(role))
                                        >
                                            {role.label()}
                                        </option>
                                    }
                                })
                                .collect_view()}
                        </select>
                    </div>
                </div>
                <PasswordInput
                    id="password"
                    label="Password"
                    autocomplete="new-password"
                    value=Signal::derive(move || form.with(|form| form.password.clone()))
                    on_input=move |value: String| edit_form(form, |form| form.set_password(value))
                />
                <PasswordInput
                    id="confirm_password"
                    label="Confirm password"
                    autocomplete="new-password"
                    value=Signal::derive(move || form.with(|form| form.confirm_password.clone()))
                    on_input=move |value: String| {
                        edit_form(form, |form| form.set_confirm_password(value));
                    }
                />
                <p class="text-xs text-slate-500">
                    "At least 8 characters with a letter, a number and a special character."
                </p>
                <Button button_type="submit" busy=submitting busy_label="Creating account...">
                    "Create account"
                </Button>
                <p class="text-center text-sm text-slate-500">
                    "Already have an account? "
                    <A href=paths::LOGIN {..} class=Theme::LINK>
                        "Sign in"
                    </A>
                </p>
            </form>
        </AuthLayout>
    }
}
