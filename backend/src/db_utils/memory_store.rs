//! In-memory favorites and accounts, shared by every request.

use std::collections::{HashMap, HashSet};
use std::sync::OnceLock;

use tokio::sync::RwLock;

/// user id → favorite property ids
pub type FavoritesTable = HashMap<String, HashSet<String>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    pub user_id: String,
    pub name: String,
    pub email: String,
    pub salt: String,
    pub password_digest: String,
}

/// normalized e-mail → account
pub type AccountsTable = HashMap<String, AccountRecord>;

pub fn get_favorites_store() -> &'static RwLock<FavoritesTable> {
    static FAVORITES: OnceLock<RwLock<FavoritesTable>> = OnceLock::new();
    FAVORITES.get_or_init(|| RwLock::new(HashMap::new()))
}

pub fn get_accounts_store() -> &'static RwLock<AccountsTable> {
    static ACCOUNTS: OnceLock<RwLock<AccountsTable>> = OnceLock::new();
    ACCOUNTS.get_or_init(|| RwLock::new(HashMap::new()))
}
