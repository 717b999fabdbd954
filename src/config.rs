//! Server configuration loaded from environment variables.

use crate::error::AdminError;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 3000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdminConfig {
    /// Interface to bind (from STOREFRONT_ADMIN_HOST)
    pub host: String,
    /// Port to bind (from STOREFRONT_ADMIN_PORT)
    pub port: u16,
    /// Bearer token required on admin pages (from STOREFRONT_ADMIN_TOKEN).
    /// Pages are open when unset.
    pub admin_token: Option<String>,
}

impl AdminConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AdminError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through `lookup`, which maps a variable name to its
    /// value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AdminError> {
        let host = lookup("STOREFRONT_ADMIN_HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());

        let port = match lookup("STOREFRONT_ADMIN_PORT") {
            Some(raw) => raw.trim().parse::<u16>().map_err(|_| {
                AdminError::Config(format!("STOREFRONT_ADMIN_PORT is not a port: {}", raw))
            })?,
            None => DEFAULT_PORT,
        };

        let admin_token = lookup("STOREFRONT_ADMIN_TOKEN").filter(|t| !t.is_empty());

        Ok(Self {
            host,
            port,
            admin_token,
        })
    }

    /// Local configuration with no authentication (for development/testing).
    pub fn local() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            admin_token: None,
        }
    }

    /// Local configuration requiring `token` on admin pages.
    pub fn with_admin_token(token: impl Into<String>) -> Self {
        Self {
            admin_token: Some(token.into()),
            ..Self::local()
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self::local()
    }
}
