//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `recruit`, `admin`, etc.) so pages
//! and components depend on small focused models that test without a
//! browser.

pub mod admin;
pub mod auth;
pub mod catalog;
pub mod events;
pub mod fetch;
pub mod recruit;
pub mod session;
pub mod ui;
pub mod week;
