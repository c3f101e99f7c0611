//! Session scoping and favorites merging
//!
//! Preferences and favorites are namespaced by scope: `guest` when nobody is
//! logged in, `user_<name>` for an authenticated account. The merge of guest
//! favorites into an account on login is a pure function here; the
//! confirmation step and the storage writes belong to the caller.

use serde::{Deserialize, Serialize};

/// Fixed avatar color palette for new accounts
pub const AVATAR_COLORS: &[&str] = &[
    "bg-indigo-500",
    "bg-rose-500",
    "bg-emerald-500",
    "bg-amber-500",
    "bg-purple-500",
    "bg-sky-500",
];

/// Minimum username length accepted at registration
pub const MIN_USERNAME_LEN: usize = 3;
/// Minimum password length accepted at registration
pub const MIN_PASSWORD_LEN: usize = 6;

/// Public identity of an account (credential never leaves the accounts table)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserIdentity {
    pub username: String,
    pub avatar_color: String,
    pub created_at: String,
}

/// Namespace under which favorites and preferences are stored
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Scope {
    Guest,
    User(String),
}

impl Scope {
    /// Scope for an optional active identity
    pub fn for_user(user: Option<&UserIdentity>) -> Self {
        match user {
            Some(u) => Scope::User(u.username.clone()),
            None => Scope::Guest,
        }
    }

    /// Storage key prefix: `guest` or `user_<name>`
    pub fn key(&self) -> String {
        match self {
            Scope::Guest => "guest".to_string(),
            Scope::User(name) => format!("user_{}", name),
        }
    }

    /// Preference key namespaced by this scope, e.g. `user_alice_grid_cols`
    pub fn pref_key(&self, name: &str) -> String {
        format!("{}_{}", self.key(), name)
    }
}

/// Union of guest and account favorites: account entries first in their
/// stored order, then guest entries not already present. De-duplicated.
pub fn merge_favorites(guest: &[String], account: &[String]) -> Vec<String> {
    let mut merged: Vec<String> = account.to_vec();
    for family in guest {
        if !merged.contains(family) {
            merged.push(family.clone());
        }
    }
    merged
}

/// Validate registration input against the minimum lengths
pub fn validate_registration(username: &str, password: &str) -> crate::Result<()> {
    if username.chars().count() < MIN_USERNAME_LEN {
        return Err(crate::Error::Validation(format!(
            "Username must be at least {} characters",
            MIN_USERNAME_LEN
        )));
    }
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(crate::Error::Validation(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LEN
        )));
    }
    Ok(())
}

/// Deterministic avatar color for a username: byte-sum hash into the palette
pub fn avatar_color_for(username: &str) -> &'static str {
    let sum: usize = username.bytes().map(|b| b as usize).sum();
    AVATAR_COLORS[sum % AVATAR_COLORS.len()]
}
