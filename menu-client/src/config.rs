//! Client configuration

/// Default production host, used when no override is supplied
pub const DEFAULT_HOST: &str = "https://gipech.pythonanywhere.com";

/// Local backend used during development (the address the dev proxy targets)
pub const DEV_HOST: &str = "http://127.0.0.1:8000";

/// Environment variable overriding the production host
pub const API_URL_ENV: &str = "MENU_API_URL";

/// Path prefix of the restaurant API on any host
const API_PREFIX: &str = "/api/restaurants";

/// Client configuration for the restaurant menu API
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Host base URL (e.g. "https://gipech.pythonanywhere.com")
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a configuration against an explicit host
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            timeout: 30,
        }
    }

    /// Point at the local development backend
    pub fn dev() -> Self {
        Self::new(DEV_HOST)
    }

    /// Resolve the host from the environment, falling back to the default
    ///
    /// Reads [`API_URL_ENV`]; a missing or blank value selects
    /// [`DEFAULT_HOST`]. Binaries wanting `.env` support load it themselves
    /// (dotenvy) before calling this.
    pub fn from_env() -> Self {
        match std::env::var(API_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::new(url.trim()),
            _ => Self::new(DEFAULT_HOST),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Full base of the restaurant API, without trailing slash
    pub fn api_base(&self) -> String {
        format!("{}{}", self.base_url, API_PREFIX)
    }

    /// Create an API client from this configuration
    pub fn build_api(&self) -> super::MenuApi {
        super::MenuApi::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_HOST)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_joins_prefix() {
        let config = ClientConfig::new("https://example.com/");
        assert_eq!(config.api_base(), "https://example.com/api/restaurants");
    }

    #[test]
    fn test_dev_targets_local_backend() {
        let config = ClientConfig::dev();
        assert_eq!(config.base_url, DEV_HOST);
        assert_eq!(config.timeout, 30);
    }

    #[test]
    fn test_from_env_override() {
        // Single test touching the variable to avoid env races
        unsafe { std::env::set_var(API_URL_ENV, "https://staging.example.com/") };
        let config = ClientConfig::from_env();
        assert_eq!(config.base_url, "https://staging.example.com");

        unsafe { std::env::set_var(API_URL_ENV, "   ") };
        assert_eq!(ClientConfig::from_env().base_url, DEFAULT_HOST);

        unsafe { std::env::remove_var(API_URL_ENV) };
        assert_eq!(ClientConfig::from_env().base_url, DEFAULT_HOST);
    }
}
