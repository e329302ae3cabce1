//! Domain types and pure rules for the SponsorLink marketplace.
//!
//! Everything here is free of I/O so the store, the renderers and the HTTP
//! layer can share one definition of an event, an inquiry and the rules that
//! govern them.

pub mod error;
pub mod event;
pub mod format;
pub mod inquiry;
pub mod notification;
pub mod search;
pub mod seed;
pub mod stats;
pub mod types;
pub mod ui_state;
pub mod validation;
