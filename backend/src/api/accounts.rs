//! Sign-up, sign-in and password reset against the in-memory accounts table.

use std::time::{SystemTime, UNIX_EPOCH};

use common::auth::{normalize_email, AuthError, SignUpForm, UserSession};
use tracing::info;

use crate::db_utils::memory_store::{get_accounts_store, AccountRecord};

fn password_digest(salt: &str, password: &str) -> String {
    sha256::digest(format!("{salt}:{password}"))
}

fn new_salt(email: &str) -> String {
    let nanos = SystemTime::now().duration_since(UNIX_EPOCH).map(|d| d.as_nanos()).unwrap_or(0);
    sha256::digest(format!("{email}:{nanos}"))
}

fn session_for(account: &AccountRecord) -> UserSession {
    UserSession {
        user_id: account.user_id.clone(),
        name: account.name.clone(),
        email: account.email.clone(),
    }
}

pub async fn sign_up(form: SignUpForm) -> anyhow::Result<UserSession> {
    let form = form.validate()?;
    let mut accounts = get_accounts_store().write().await;
    if accounts.contains_key(&form.email) {
        return Err(AuthError::EmailTaken.into());
    }
    let salt = new_salt(&form.email);
    let account = AccountRecord {
        user_id: format!("u-{}", &sha256::digest(form.email.as_str())[..16]),
        name: form.name,
        email: form.email.clone(),
        password_digest: password_digest(&salt, &form.password),
        salt,
    };
    info!("sign_up: created account {} for {}", account.user_id, account.email);
    let session = session_for(&account);
    accounts.insert(form.email, account);
    Ok(session)
}

pub async fn sign_in(email: &str, password: &str) -> anyhow::Result<UserSession> {
    let email = normalize_email(email).map_err(|_| AuthError::InvalidCredentials)?;
    let accounts = get_accounts_store().read().await;
    let Some(account) = accounts.get(&email) else {
        info!("sign_in: no account for {}", email);
        return Err(AuthError::InvalidCredentials.into());
    };
    if password_digest(&account.salt, password) != account.password_digest {
        info!("sign_in: wrong password for {}", email);
        return Err(AuthError::InvalidCredentials.into());
    }
    Ok(session_for(account))
}

/// Always succeeds so the form does not reveal which e-mails have accounts.
pub async fn request_password_reset(email: &str) -> anyhow::Result<()> {
    let known = match normalize_email(email) {
        Ok(email) => get_accounts_store().read().await.contains_key(&email),
        Err(_) => false,
    };
    info!("request_password_reset: {} (known account: {})", email.trim(), known);
    Ok(())
}
