use common::auth::SignUpForm;
use dioxus::prelude::*;

use crate::api::auth_api::{auth_error_message, sign_up};
use crate::components::auth_form::{AuthField, AuthForm};
use crate::components::breadcrumb::Breadcrumb;
use crate::data_definitions::auth_session::use_auth_session;
use crate::routes::Route;

#[component]
pub fn SignUpPage() -> Element {
    let auth = use_auth_session();
    let name = use_signal(String::new);
    let email = use_signal(String::new);
    let password = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);

    let on_submit = Callback::new(move |_: ()| {
        let form = SignUpForm {
            name: name.peek().clone(),
            email: email.peek().clone(),
            password: password.peek().clone(),
        };
        // same checks the server runs, without the round trip
        let form = match form.validate() {
            Ok(form) => form,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        spawn(async move {
            match sign_up(form).await {
                Ok(session) => {
                    dioxus::logger::tracing::info!("Account created for {}", session.user_id);
                    auth.set_session.call(Some(session));
                    navigator().push(Route::auction_list_default());
                }
                Err(e) => error.set(Some(auth_error_message(&e))),
            }
            busy.set(false);
        });
    });

    rsx! {
        Title { "Play Leilões - Criar conta" }
        Breadcrumb { current: "Criar conta".to_string() }
        AuthForm {
            title: "Criar conta".to_string(),
            submit_label: "Cadastrar".to_string(),
            busy,
            error,
            on_submit,
            footer: rsx! {
                "Já tem uma conta? "
                Link { to: Route::SignInPage {}, style: "color: #1D4ED8;", "Entrar" }
            },
            AuthField { label: "Nome".to_string(), input_type: "text".to_string(), value: name, autocomplete: "name".to_string() }
            AuthField { label: "E-mail".to_string(), input_type: "email".to_string(), value: email, autocomplete: "email".to_string() }
            AuthField { label: "Senha".to_string(), input_type: "password".to_string(), value: password, autocomplete: "new-password".to_string() }
        }
    }
}
