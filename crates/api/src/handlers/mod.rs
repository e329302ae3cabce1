pub mod enhance;
pub mod events;
pub mod inquiries;
pub mod pages;
pub mod stats;
