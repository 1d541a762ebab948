//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (fetch on mount, local filters,
//! navigation) and delegates rendering details to `components`.

pub mod athletes;
pub mod dashboard;
pub mod events;
pub mod landing;
pub mod recruit_form;
pub mod recruitment;
pub mod shop;
pub mod sports;
pub mod teams;
pub mod tickets;
