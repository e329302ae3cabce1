//! SponsorLink web server library.
//!
//! Exposes config, state, error handling, routes and the interaction actions
//! so the binary and the integration tests share them.

pub mod actions;
pub mod config;
pub mod enhance;
pub mod error;
pub mod handlers;
pub mod response;
pub mod router;
pub mod routes;
pub mod state;
