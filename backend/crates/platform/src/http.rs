//! Outbound HTTP
//!
//! Every call leaving the process goes through a client built here, so none
//! of them can hang past its timeout.

use std::time::Duration;

/// Outbound client settings
#[derive(Debug, Clone)]
pub struct OutboundConfig {
    pub user_agent: String,
    /// Upper bound for a whole request (connect + response body)
    pub timeout: Duration,
}

impl Default for OutboundConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("word-rush/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout: Duration::from_secs(5),
        }
    }
}

/// Build a `reqwest::Client` that always carries the timeout and User-Agent.
///
/// The connect phase gets the same budget, capped so a dead host fails fast.
pub fn outbound_client(config: &OutboundConfig) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(config.user_agent.clone())
        .timeout(config.timeout)
        .connect_timeout(config.timeout.min(Duration::from_secs(3)))
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = OutboundConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert!(config.user_agent.starts_with("word-rush/"));
    }

    #[test]
    fn test_client_builds() {
        let config = OutboundConfig {
            user_agent: "test-agent/1.0".to_string(),
            timeout: Duration::from_millis(200),
        };
        assert!(outbound_client(&config).is_ok());
    }

    #[tokio::test]
    async fn test_unreachable_host_fails_within_timeout() {
        let config = OutboundConfig {
            user_agent: "test-agent/1.0".to_string(),
            timeout: Duration::from_millis(300),
        };
        let client = outbound_client(&config).unwrap();

        // Port 9 (discard) is closed on loopback in practice.
        let started = std::time::Instant::now();
        let result = client.get("http://127.0.0.1:9/").send().await;
        assert!(result.is_err());
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
