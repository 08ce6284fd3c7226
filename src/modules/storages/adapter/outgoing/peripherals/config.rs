use std::env;
use std::time::Duration;

pub const DEFAULT_GRAPH_BASE_URL: &str = "https://graph.microsoft.com";
pub const DEFAULT_LOGIN_BASE_URL: &str = "https://login.microsoftonline.com";

/// Settings shared by every outgoing storage request.
#[derive(Debug, Clone)]
pub struct StorageInteractionConfig {
    pub request_timeout: Duration,
    pub connect_timeout: Duration,
    pub graph_base_url: String,
    pub login_base_url: String,
}

impl Default for StorageInteractionConfig {
    fn default() -> Self {
        Self {
            request_timeout: Duration::from_secs(30),
            connect_timeout: Duration::from_secs(10),
            graph_base_url: DEFAULT_GRAPH_BASE_URL.to_string(),
            login_base_url: DEFAULT_LOGIN_BASE_URL.to_string(),
        }
    }
}

impl StorageInteractionConfig {
    /// Load storage interaction settings from environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();

        let request_timeout = env::var("STORAGE_REQUEST_TIMEOUT_SECS")
            .ok()
            .map(|v| {
                v.parse::<u64>()
                    .unwrap_or_else(|_| panic!("Invalid STORAGE_REQUEST_TIMEOUT_SECS value"))
            })
            .map(Duration::from_secs)
            .unwrap_or(defaults.request_timeout);

        let connect_timeout = env::var("STORAGE_CONNECT_TIMEOUT_SECS")
            .ok()
            .map(|v| {
                v.parse::<u64>()
                    .unwrap_or_else(|_| panic!("Invalid STORAGE_CONNECT_TIMEOUT_SECS value"))
            })
            .map(Duration::from_secs)
            .unwrap_or(defaults.connect_timeout);

        if request_timeout.is_zero() {
            panic!("STORAGE_REQUEST_TIMEOUT_SECS must be greater than zero");
        }

        let graph_base_url = env::var("ONE_DRIVE_GRAPH_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.graph_base_url);

        let login_base_url = env::var("ONE_DRIVE_LOGIN_BASE_URL")
            .ok()
            .filter(|s| !s.trim().is_empty())
            .unwrap_or(defaults.login_base_url);

        Self {
            request_timeout,
            connect_timeout,
            graph_base_url: graph_base_url.trim_end_matches('/').to_string(),
            login_base_url: login_base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_bound_every_request() {
        let config = StorageInteractionConfig::default();

        assert_eq!(config.request_timeout, Duration::from_secs(30));
        assert_eq!(config.connect_timeout, Duration::from_secs(10));
        assert_eq!(config.graph_base_url, "https://graph.microsoft.com");
        assert_eq!(config.login_base_url, "https://login.microsoftonline.com");
    }
}
