//! Client API calls for the auth pages.

use common::auth::{SignUpForm, UserSession};
use dioxus::prelude::*;

// Auth failures are user input errors, so they travel as 400 with the message
// the form shows.
#[server]
pub async fn sign_up(form: SignUpForm) -> Result<UserSession, ServerFnError> {
    let x = backend::api::accounts::sign_up(form).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 400, details: None })
}

#[server]
pub async fn sign_in(email: String, password: String) -> Result<UserSession, ServerFnError> {
    let x = backend::api::accounts::sign_in(&email, &password).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 400, details: None })
}

#[server]
pub async fn request_password_reset(email: String) -> Result<(), ServerFnError> {
    let x = backend::api::accounts::request_password_reset(&email).await;
    x.map_err(|e| ServerFnError::ServerError { message: e.to_string(), code: 500, details: None })
}

/// Message to show under an auth form.
pub fn auth_error_message(error: &ServerFnError) -> String {
    match error {
        ServerFnError::ServerError { message, .. } => message.clone(),
        other => format!("Não foi possível concluir: {other}"),
    }
}
