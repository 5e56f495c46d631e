use dioxus::prelude::*;

use crate::api::auth_api::{auth_error_message, sign_in};
use crate::components::auth_form::{AuthField, AuthForm};
use crate::components::breadcrumb::Breadcrumb;
use crate::data_definitions::auth_session::use_auth_session;
use crate::routes::Route;

#[component]
pub fn SignInPage() -> Element {
    let auth = use_auth_session();
    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let on_submit = Callback::new(move |_: ()| {
        busy.set(true);
        error.set(None);
        spawn(async move {
            match sign_in(email.peek().clone(), password.peek().clone()).await {
                Ok(session) => {
                    dioxus::logger::tracing::info!("Signed in as {}", session.user_id);
                    auth.set_session.call(Some(session));
                    navigator().push(Route::auction_list_default());
                }
                Err(e) => error.set(Some(auth_error_message(&e))),
            }
            busy.set(false);
        });
    });

    rsx! {
        Title { "Play Leilões - Entrar" }
        Breadcrumb { current: "Entrar".to_string() }
        AuthForm {
            title: "Entrar na sua conta".to_string(),
            submit_label: "Entrar".to_string(),
            busy,
            error,
            on_submit,
            footer: rsx! {
                div {
                    style: "display: flex; justify-content: space-between;",
                    Link { to: Route::ForgotPasswordPage {}, style: "color: #1D4ED8;", "Esqueceu a senha?" }
                    Link { to: Route::SignUpPage {}, style: "color: #1D4ED8;", "Criar conta" }
                }
            },
            AuthField { label: "E-mail".to_string(), input_type: "email".to_string(), value: email, autocomplete: "email".to_string() }
            AuthField { label: "Senha".to_string(), input_type: "password".to_string(), value: password, autocomplete: "current-password".to_string() }
        }
    }
}
