//! # FontCanvas Common Library
//!
//! Shared code for the FontCanvas modules including:
//! - The font data model and built-in catalog
//! - Database access (overlay catalog, display order, accounts, favorites)
//! - The pure query engine (filtering and sorting)
//! - The bounded comparison set
//! - Session scoping and favorites merging
//! - Configuration loading
//! - Common error types

pub mod catalog;
pub mod compare;
pub mod config;
pub mod db;
pub mod error;
pub mod query;
pub mod session;

pub use catalog::{Category, FontRecord};
pub use error::{Error, Result};
