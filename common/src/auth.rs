//! Route gating and account form rules shared by the auth pages and the API.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::listing_const::ANONYMOUS_USER_ID;

/// Path prefixes that need a signed-in user.
pub const PROTECTED_ROUTES: [&str; 1] = ["/auction-list"];

pub const MIN_PASSWORD_LEN: usize = 6;

pub fn is_protected_route(path: &str) -> bool {
    PROTECTED_ROUTES.iter().any(|route| path.starts_with(route))
}

pub fn default_redirect_path() -> &'static str {
    "/signin"
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub user_id: String,
    pub name: String,
    pub email: String,
}

/// Value of the `x-user-id` header.
pub fn user_id_header_value(session: Option<&UserSession>) -> &str {
    session.map(|session| session.user_id.as_str()).unwrap_or(ANONYMOUS_USER_ID)
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Informe seu nome")]
    MissingName,
    #[error("E-mail inválido")]
    InvalidEmail,
    #[error("A senha deve ter pelo menos 6 caracteres")]
    WeakPassword,
    #[error("Já existe uma conta com este e-mail")]
    EmailTaken,
    #[error("E-mail ou senha incorretos")]
    InvalidCredentials,
}

/// Lowercased, trimmed e-mail, or an error if it does not look like one.
pub fn normalize_email(email: &str) -> Result<String, AuthError> {
    let email = email.trim().to_lowercase();
    let valid = match email.split_once('@') {
        Some((user, domain)) => !user.is_empty() && domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.'),
        None => false,
    };
    if !valid || email.chars().any(char::is_whitespace) {
        return Err(AuthError::InvalidEmail);
    }
    Ok(email)
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SignUpForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignUpForm {
    /// Checks the form and returns it with the e-mail normalized.
    pub fn validate(&self) -> Result<SignUpForm, AuthError> {
        if self.name.trim().is_empty() {
            return Err(AuthError::MissingName);
        }
        let email = normalize_email(&self.email)?;
        if self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(AuthError::WeakPassword);
        }
        Ok(SignUpForm { name: self.name.trim().to_string(), email, password: self.password.clone() })
    }
}
