//! Networking modules for the athletics REST API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues browser HTTP calls; the wire schema it decodes into lives in
//! the shared `wire` crate.

pub mod api;
