//! Phone number field with a country dial-code selector. Digits are formatted
//! as `XXX-XXX-XXXX` by the form record as the user types.

use crate::{app_lib::theme::Theme, features::auth::types::Country};
use leptos::prelude::*;

#[component]
pub fn PhoneInput(
    #[prop(into)] country: Signal<Country>,
    #[prop(into)] phone: Signal<String>,
    #[prop(into)] on_country: Callback<Country>,
    #[prop(into)] on_phone: Callback<String>,
) -> impl IntoView {
    view! {
        <div>
            <label class=Theme::LABEL for="phone_number">
                "Phone number"
            </label>
            <div class="flex gap-2">
                <select
                    id="country"
                    class="w-56 rounded-xl border border-slate-200 bg-slate-50 px-2 py-2.5 text-sm text-slate-900"
                    aria-label="Country"
                    on:change=move |event| {
                        if let Some(selected) = Country::from_iso(&event_target_value(&event)) {
                            on_country.run(selected);
                        }
                    }
                >
                    {Country::ALL
                        .iter()
                        .map(|option| {
                            let option = *option;
                            view! {
                                <option
                                    value=option.iso_code()
                                    selected=move || country.get() == option
                                >
                                    {format!("{} {} {}", option.flag(), option.name(), option.dial_code())}
                                </option>
                            }
                        })
                        .collect_view()}
                </select>
                <input
                    id="phone_number"
                    type="tel"
                    class=Theme::INPUT
                    autocomplete="tel-national"
                    inputmode="numeric"
                    placeholder="024-123-4567"
                    required
                    prop:value=move || phone.get()
                    on:input=move |event| on_phone.run(event_target_value(&event))
                />
            </div>
        </div>
    }
}
