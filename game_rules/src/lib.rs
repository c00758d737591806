//! # Game Rules
//!
//! The estate record model - the single source of truth for what has happened
//! on the estate. Holds the character roster, the calendar, and the three log
//! stores (estate-wide, per-character, per-relationship).
//!
//! This crate contains no narrative or AI logic; it only records events and
//! hands out read-only snapshots to `narrative_core`.

pub mod entities;
pub mod error;
pub mod estate;
pub mod logs;

pub use entities::*;
pub use error::GameRulesError;
pub use estate::*;
pub use logs::*;
