//! Signed-in user, shared through context and kept in localStorage.

use common::auth::{user_id_header_value, UserSession};
use dioxus::prelude::*;

const SESSION_STORAGE_KEY: &str = "play-leiloes-session";

#[derive(Clone, Copy)]
pub struct AuthSession {
    pub session: ReadSignal<Option<UserSession>>,
    /// False until the stored session was read; the gate waits for it.
    pub restored: ReadSignal<bool>,
    pub set_session: Callback<Option<UserSession>>,
}

impl AuthSession {
    pub fn is_authenticated(&self) -> bool {
        self.session.read().is_some()
    }

    /// Value for `x-user-id`.
    pub fn user_id(&self) -> String {
        user_id_header_value(self.session.read().as_ref()).to_string()
    }
}

fn get_local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

fn load_stored_session() -> Option<UserSession> {
    let json = get_local_storage()?.get_item(SESSION_STORAGE_KEY).ok().flatten()?;
    match serde_json::from_str(&json) {
        Ok(session) => Some(session),
        Err(e) => {
            dioxus::logger::tracing::warn!("Discarding stored session: {e}");
            None
        }
    }
}

fn store_session(session: Option<&UserSession>) {
    let Some(storage) = get_local_storage() else {
        return;
    };
    let result = match session {
        Some(session) => match serde_json::to_string(session) {
            Ok(json) => storage.set_item(SESSION_STORAGE_KEY, &json),
            Err(e) => {
                dioxus::logger::tracing::error!("Failed to serialize session: {e}");
                return;
            }
        },
        None => storage.remove_item(SESSION_STORAGE_KEY),
    };
    if let Err(e) = result {
        dioxus::logger::tracing::error!("Failed to update stored session: {:#?}", e);
    }
}

pub fn use_auth_session_provider() -> AuthSession {
    let mut session = use_signal(|| None::<UserSession>);
    let mut restored = use_signal(|| false);
    // effects only run in the browser, where localStorage exists
    use_effect(move || {
        session.set(load_stored_session());
        restored.set(true);
    });
    let set_session = Callback::new(move |new_session: Option<UserSession>| {
        store_session(new_session.as_ref());
        session.set(new_session);
    });
    use_context_provider(move || AuthSession {
        session: session.into(),
        restored: restored.into(),
        set_session,
    })
}

pub fn use_auth_session() -> AuthSession {
    use_context::<AuthSession>()
}
