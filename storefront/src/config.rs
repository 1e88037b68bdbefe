//! Storefront configuration loaded via OrthoConfig.

use ortho_config::OrthoConfig;
use serde::Deserialize;
use url::Url;

/// Configuration values wiring the query core to its product API.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "STOREFRONT")]
pub struct StorefrontSettings {
    /// Base URL of the product API deployment.
    #[ortho_config(default = "http://127.0.0.1:8000".to_owned())]
    pub api_base_url: String,
}

impl StorefrontSettings {
    /// Parse the configured base URL for adapter construction.
    ///
    /// # Errors
    /// Returns the parse failure when the configured value is not a valid
    /// URL, so misconfiguration surfaces at startup rather than on the
    /// first fetch.
    pub fn api_base(&self) -> Result<Url, url::ParseError> {
        Url::parse(&self.api_base_url)
    }
}
