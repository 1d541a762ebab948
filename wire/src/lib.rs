//! Shared wire schema for the athletics REST API.
//!
//! This crate owns the representation of every record exchanged with the
//! upstream API, the table of endpoints the site calls, and the adapter that
//! folds the API's inconsistent response envelopes into one `Result` shape.
//! It has no I/O of its own: callers hand it a status code and a body.

pub mod endpoints;
pub mod entities;
pub mod envelope;
pub mod error;
pub mod payload;

pub use endpoints::{Endpoint, Method};
pub use entities::*;
pub use envelope::{Shape, decode, normalize};
pub use error::{ApiError, ErrorKind};
pub use payload::{Encoding, SaveRequest};
