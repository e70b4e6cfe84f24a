//! Glue every auth page shares: a page-lifetime request scope, whole-value form
//! updates, the URL token and applying a flow's `FollowUp`.

use crate::{
    app_lib::{api::FetchTransport, cancel::RequestScope},
    features::auth::{client::AuthClient, flows::FollowUp, forms::normalize_token},
};
use leptos::prelude::*;
use leptos_router::{NavigateOptions, hooks::use_query_map};
use tracing::warn;

/// Creates the page's request scope and cancels it when the page unmounts,
/// aborting whatever request is still in flight.
pub(crate) fn page_scope() -> RequestScope {
    let scope = RequestScope::new();
    let on_unmount = scope.clone();
    on_cleanup(move || on_unmount.cancel());
    scope
}

/// Auth client whose requests die with the given page scope.
pub(crate) fn scoped_client(scope: &RequestScope) -> AuthClient<FetchTransport> {
    AuthClient::new(FetchTransport::new(scope.clone()))
}

/// Applies one edit to a copy of the form and stores the copy.
pub(crate) fn edit_form<F>(form: RwSignal<F>, change: impl FnOnce(&mut F))
where
    F: Clone + Send + Sync + 'static,
{
    let Some(mut next) = form.try_get_untracked() else {
        return;
    };
    change(&mut next);
    form.set(next);
}

/// The `token` query parameter, trimmed; blank counts as absent.
pub(crate) fn query_token() -> Option<String> {
    let query = use_query_map();
    normalize_token(query.with_untracked(|map| map.get("token")))
}

/// Carries out navigation follow-ups. Screen-local follow-ups are left to the page.
pub(crate) fn follow(navigate: &impl Fn(&str, NavigateOptions), follow_up: &FollowUp) {
    match follow_up {
        FollowUp::Navigate(path) => navigate(path, NavigateOptions::default()),
        FollowUp::Redirect(url) => {
            let redirected = web_sys::window().map(|window| window.location().set_href(url));
            if !matches!(redirected, Some(Ok(()))) {
                warn!("unable to redirect to provider");
            }
        }
        FollowUp::CheckEmail { .. } | FollowUp::PasswordReset | FollowUp::Stay => {}
    }
}
