//! Client boundary to the external pricing service.

use async_trait::async_trait;
use core_config::pricing::PricingConfig;
use reqwest::Client;
use tracing::{debug, warn};

use crate::error::{PricingError, PricingResult};
use crate::models::ConversionRequest;

/// Boundary to the external pricing service.
///
/// The conversion result is opaque structured data; nothing on this side
/// interprets it beyond embedding it in the response.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PricingClient: Send + Sync {
    /// Submit a conversion request, returning the service's payload.
    async fn convert(&self, request: &ConversionRequest) -> PricingResult<serde_json::Value>;
}

/// reqwest-backed client for the pricing service.
pub struct HttpPricingClient {
    http: Client,
    config: PricingConfig,
}

impl HttpPricingClient {
    pub fn new(config: PricingConfig) -> Self {
        Self {
            http: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl PricingClient for HttpPricingClient {
    /// One attempt per request, bounded by the configured timeout. Retry and
    /// backoff, if wanted, belong to the caller.
    async fn convert(&self, request: &ConversionRequest) -> PricingResult<serde_json::Value> {
        let url = self.config.convert_url();
        debug!(%url, currency = %request.target_currency, "Requesting price conversion");

        let response = self
            .http
            .post(&url)
            .json(request)
            .timeout(self.config.timeout)
            .send()
            .await
            .map_err(|e| classify_send_error(e, &self.config.base_url))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!(
                status = status.as_u16(),
                "Pricing service rejected the conversion"
            );
            return Err(PricingError::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        response.json().await.map_err(|e| {
            warn!("Pricing service returned a non-JSON body: {}", e);
            PricingError::InvalidBody {
                message: e.to_string(),
            }
        })
    }
}

fn classify_send_error(err: reqwest::Error, base_url: &str) -> PricingError {
    if err.is_timeout() {
        warn!("Pricing service timed out at {}", base_url);
        PricingError::Timeout {
            url: base_url.to_string(),
        }
    } else {
        warn!("Pricing service is unreachable at {}: {}", base_url, err);
        PricingError::Unreachable {
            url: base_url.to_string(),
            message: err.to_string(),
        }
    }
}
