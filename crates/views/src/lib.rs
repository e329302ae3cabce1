//! Server-side HTML rendering.
//!
//! Every renderer is a pure function of an event snapshot and a
//! [`UiState`](sponsorlink_core::ui_state::UiState). Region renderers return
//! the inner HTML of one stable element id so a page can be assembled on the
//! server or patched in place by the search script.

pub mod admin;
pub mod card;
pub mod club;
mod empty;
pub mod html;
pub mod icons;
pub mod ids;
pub mod layout;
pub mod modal;
pub mod pages;
pub mod sponsor;
pub mod stats;
pub mod toast;

pub use html::Region;
pub use pages::{admin_page, club_page, home_page, sponsor_page};
pub use sponsor::render_sponsor_events;
