use common::auth::normalize_email;
use dioxus::prelude::*;

use crate::api::auth_api::{auth_error_message, request_password_reset};
use crate::components::auth_form::{AuthField, AuthForm};
use crate::components::breadcrumb::Breadcrumb;
use crate::routes::Route;

#[component]
pub fn ForgotPasswordPage() -> Element {
    let email = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut sent_to = use_signal(|| None::<String>);

    let on_submit = Callback::new(move |_: ()| {
        let address = match normalize_email(&email.peek()) {
            Ok(address) => address,
            Err(e) => {
                error.set(Some(e.to_string()));
                return;
            }
        };
        busy.set(true);
        error.set(None);
        spawn(async move {
            match request_password_reset(address.clone()).await {
                Ok(()) => sent_to.set(Some(address)),
                Err(e) => error.set(Some(auth_error_message(&e))),
            }
            busy.set(false);
        });
    });

    rsx! {
        Title { "Play Leilões - Recuperar senha" }
        Breadcrumb { current: "Recuperar senha".to_string() }
        if let Some(address) = sent_to() {
            div {
                style: "max-width: 400px; margin: 40px auto; padding: 28px; background: white; border: 1px solid #E5E7EB; border-radius: 16px;",
                h1 { style: "font-size: 24px; font-weight: 500; margin: 0 0 12px 0;", "Verifique seu e-mail" }
                p {
                    style: "font-size: 15px; color: #374151;",
                    "Se existir uma conta para {address}, você receberá as instruções para redefinir a senha."
                }
                Link { to: Route::SignInPage {}, style: "color: #1D4ED8;", "Voltar para o login" }
            }
        } else {
            AuthForm {
                title: "Recuperar senha".to_string(),
                submit_label: "Enviar instruções".to_string(),
                busy,
                error,
                on_submit,
                footer: rsx! {
                    Link { to: Route::SignInPage {}, style: "color: #1D4ED8;", "Voltar para o login" }
                },
                AuthField { label: "E-mail".to_string(), input_type: "email".to_string(), value: email, autocomplete: "email".to_string() }
            }
        }
    }
}
