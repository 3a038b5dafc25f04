//! Validated, chainable Discord message drafts
//!
//! [`draft`] accumulates outbound messages and enforces Discord's limits while
//! they are built. [`adapters`] hands finished drafts to serenity.

pub mod adapters;
pub mod draft;
pub mod params;
