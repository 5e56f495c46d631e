//! Route gate for pages that need a signed-in user.

use dioxus::prelude::*;

use crate::components::suspend_boundary::LoadingIndicator;
use crate::data_definitions::auth_session::use_auth_session;
use crate::routes::Route;

#[component]
pub fn ProtectedRoute(children: Element) -> Element {
    let auth = use_auth_session();

    use_effect(move || {
        if *auth.restored.read() && !auth.is_authenticated() {
            dioxus::logger::tracing::info!("No session, redirecting to sign in");
            navigator().replace(Route::SignInPage {});
        }
    });

    if !*auth.restored.read() || !auth.is_authenticated() {
        return rsx! {
            div {
                style: "display: flex; justify-content: center; width: 100%;",
                LoadingIndicator {}
            }
        };
    }

    rsx! { {children} }
}
