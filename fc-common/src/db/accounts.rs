//! Account storage: registration and authentication
//!
//! Credentials are stored as SHA-256 digests of the password. The public
//! identity (username, avatar color, creation time) is what leaves this
//! module; the digest never does.

use crate::db::models::AccountRow;
use crate::session::{avatar_color_for, validate_registration, UserIdentity};
use crate::{Error, Result};
use sha2::{Digest, Sha256};
use sqlx::SqlitePool;
use uuid::Uuid;

fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    format!("{:x}", digest)
}

impl AccountRow {
    pub fn identity(&self) -> UserIdentity {
        UserIdentity {
            username: self.username.clone(),
            avatar_color: self.avatar_color.clone(),
            created_at: self.created_at.clone(),
        }
    }
}

async fn find_account(pool: &SqlitePool, username: &str) -> Result<Option<AccountRow>> {
    let row: Option<AccountRow> = sqlx::query_as(
        "SELECT guid, username, password_hash, avatar_color, created_at
         FROM accounts WHERE username = ?",
    )
    .bind(username)
    .fetch_optional(pool)
    .await?;
    Ok(row)
}

/// Create a new account.
///
/// Fails with `Error::Validation` when the username or password is too
/// short, and `Error::DuplicateUsername` when the name is taken. The avatar
/// color is picked deterministically from the fixed palette.
pub async fn register(pool: &SqlitePool, username: &str, password: &str) -> Result<UserIdentity> {
    validate_registration(username, password)?;

    if find_account(pool, username).await?.is_some() {
        return Err(Error::DuplicateUsername(username.to_string()));
    }

    let row = AccountRow {
        guid: Uuid::new_v4().to_string(),
        username: username.to_string(),
        password_hash: hash_password(password),
        avatar_color: avatar_color_for(username).to_string(),
        created_at: chrono::Utc::now().to_rfc3339(),
    };

    sqlx::query(
        "INSERT INTO accounts (guid, username, password_hash, avatar_color, created_at)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&row.guid)
    .bind(&row.username)
    .bind(&row.password_hash)
    .bind(&row.avatar_color)
    .bind(&row.created_at)
    .execute(pool)
    .await?;

    Ok(row.identity())
}

/// Verify a username/password pair, returning the stored identity.
///
/// A missing account and a wrong password both map to
/// `Error::InvalidCredentials`; callers cannot distinguish the two.
pub async fn authenticate(
    pool: &SqlitePool,
    username: &str,
    password: &str,
) -> Result<UserIdentity> {
    let row = find_account(pool, username)
        .await?
        .ok_or(Error::InvalidCredentials)?;

    if row.password_hash != hash_password(password) {
        return Err(Error::InvalidCredentials);
    }

    Ok(row.identity())
}

/// Look up the public identity of an existing account
pub async fn get_identity(pool: &SqlitePool, username: &str) -> Result<Option<UserIdentity>> {
    Ok(find_account(pool, username).await?.map(|r| r.identity()))
}
