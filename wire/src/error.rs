//! Error taxonomy for API calls.
//!
//! The site distinguishes only two failure families: the request never
//! produced a usable answer (`Network`), or the server answered and said no
//! (`Application`). Variants below refine the first family so log lines stay
//! specific while screens render one message.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

/// Error returned by any API call.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request could not be sent or the response could not be read.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered with a non-success HTTP status.
    #[error("request failed with status {0}")]
    Status(u16),
    /// The body was not the JSON shape the endpoint promises.
    #[error("invalid response body: {0}")]
    Decode(String),
    /// The server reported failure through its own envelope flag.
    #[error("{0}")]
    Application(String),
}

/// Coarse classification used by views.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    Network,
    Application,
}

impl ApiError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Network(_) | Self::Status(_) | Self::Decode(_) => ErrorKind::Network,
            Self::Application(_) => ErrorKind::Application,
        }
    }

    /// Message suitable for rendering inline on a screen.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            Self::Network(_) => "Unable to connect to the server".to_owned(),
            Self::Status(code) => format!("Request failed (HTTP {code})"),
            Self::Decode(_) => "Unexpected response from the server".to_owned(),
            Self::Application(message) => message.clone(),
        }
    }
}
