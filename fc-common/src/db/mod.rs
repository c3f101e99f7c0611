//! Database access: overlay catalog, display order, accounts, favorites,
//! and key-value settings

pub mod accounts;
pub mod fonts;
pub mod init;
pub mod migrations;
pub mod models;
pub mod prefs;

pub use accounts::*;
pub use fonts::*;
pub use init::*;
pub use migrations::*;
pub use models::*;
pub use prefs::*;
