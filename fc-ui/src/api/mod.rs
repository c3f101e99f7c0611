//! HTTP API handlers for fc-ui

pub mod auth;
pub mod compare;
pub mod error;
pub mod export;
pub mod favorites;
pub mod fonts;
pub mod health;
pub mod pairing;
pub mod prefs;

pub use error::ApiError;
