//! Repositories over the stored collections.

pub mod event_repo;
pub mod inquiry_repo;

pub use event_repo::{EventRepo, EVENTS_KEY};
pub use inquiry_repo::{InquiryRepo, INQUIRIES_KEY};
