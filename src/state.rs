//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor. It
//! holds the parsed configuration and one pooled HTTP client for the
//! upstream athletics API.

use std::sync::Arc;

use crate::config::SiteConfig;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<SiteConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    /// # Errors
    ///
    /// Returns the client build error (TLS backend initialization).
    pub fn new(config: SiteConfig) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .timeout(config.request_timeout)
            .connect_timeout(config.connect_timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self { config: Arc::new(config), http })
    }
}
