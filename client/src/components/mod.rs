//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render site chrome and the admin screens, reading the session
//! and flash banner from Leptos context providers.

pub mod crud_screen;
pub mod flash_banner;
pub mod footer;
pub mod header;
pub mod remote_view;
pub mod week_screen;
