use crate::{env_or_default, ConfigError, FromEnv};
use std::time::Duration;

/// Configuration for the external pricing service.
///
/// The pricing service performs the actual currency conversion; this service
/// only forwards conversion requests to it. The timeout bounds every outbound
/// call so a hung collaborator cannot stall request handling.
#[derive(Clone, Debug)]
pub struct PricingConfig {
    /// Base URL of the pricing service
    pub base_url: String,
    /// Upper bound for a single conversion call
    pub timeout: Duration,
}

impl PricingConfig {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        Self {
            base_url: base_url.into(),
            timeout,
        }
    }

    /// Full URL of the conversion endpoint
    pub fn convert_url(&self) -> String {
        format!("{}/convert", self.base_url.trim_end_matches('/'))
    }
}

impl FromEnv for PricingConfig {
    /// Environment variables:
    /// - `PRICING_SERVICE_URL`: defaults to `http://localhost:5001`
    /// - `PRICING_TIMEOUT_SECS`: defaults to 30
    fn from_env() -> Result<Self, ConfigError> {
        let base_url = env_or_default("PRICING_SERVICE_URL", "http://localhost:5001");
        let timeout_secs: u64 = env_or_default("PRICING_TIMEOUT_SECS", "30")
            .parse()
            .map_err(|e| ConfigError::ParseError {
                key: "PRICING_TIMEOUT_SECS".to_string(),
                details: format!("{}", e),
            })?;

        Ok(Self::new(base_url, Duration::from_secs(timeout_secs)))
    }
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5001".to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pricing_config_defaults() {
        temp_env::with_vars(
            [
                ("PRICING_SERVICE_URL", None::<&str>),
                ("PRICING_TIMEOUT_SECS", None::<&str>),
            ],
            || {
                let config = PricingConfig::from_env().unwrap();
                assert_eq!(config.base_url, "http://localhost:5001");
                assert_eq!(config.timeout, Duration::from_secs(30));
                assert_eq!(config.convert_url(), "http://localhost:5001/convert");
            },
        );
    }

    #[test]
    fn test_pricing_config_custom_url() {
        temp_env::with_var("PRICING_SERVICE_URL", Some("http://pricing:9000/"), || {
            let config = PricingConfig::from_env().unwrap();
            assert_eq!(config.convert_url(), "http://pricing:9000/convert");
        });
    }

    #[test]
    fn test_pricing_config_invalid_timeout() {
        temp_env::with_var("PRICING_TIMEOUT_SECS", Some("soon"), || {
            let result = PricingConfig::from_env();
            assert!(result.is_err());
            assert!(result
                .unwrap_err()
                .to_string()
                .contains("PRICING_TIMEOUT_SECS"));
        });
    }
}
