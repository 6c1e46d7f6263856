use domain_catalog::Product;
use serde::Serialize;
use std::collections::HashMap;
use utoipa::ToSchema;

/// Outbound conversion request sent to the pricing service.
///
/// Optional strategy overrides are serialized only when present, so the
/// pricing service applies its own defaults for anything omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversionRequest {
    pub base_price: f64,
    pub target_currency: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_fee: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volatility_threshold: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_panic_margin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_panic: Option<bool>,
}

impl ConversionRequest {
    /// Build the base payload. Currency codes are normalized to uppercase;
    /// their legality is the pricing service's call.
    pub fn new(base_price: f64, target_currency: &str) -> Self {
        Self {
            base_price,
            target_currency: target_currency.to_uppercase(),
            admin_fee: None,
            volatility_threshold: None,
            max_panic_margin: None,
            force_panic: None,
        }
    }

    /// Apply strategy overrides from raw query parameters.
    ///
    /// A value that fails to parse is dropped, letting the pricing service
    /// fall back to its own default; it never fails the request.
    /// `force_panic` is only ever sent when truthy.
    pub fn with_overrides(mut self, params: &HashMap<String, String>) -> Self {
        self.admin_fee = parse_float(params, "admin_fee");
        self.volatility_threshold = parse_float(params, "volatility_threshold");
        self.max_panic_margin = parse_float(params, "max_panic_margin");
        self.force_panic = params
            .get("force_panic")
            .filter(|raw| is_truthy(raw))
            .map(|_| true);
        self
    }
}

fn parse_float(params: &HashMap<String, String>, key: &str) -> Option<f64> {
    params.get(key).and_then(|raw| raw.trim().parse().ok())
}

/// Truthy query flag: "true", "1", "yes" or "on", case-insensitively.
fn is_truthy(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}

/// A product augmented with the pricing service's conversion result.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct PricedProduct {
    #[serde(flatten)]
    pub product: Product,
    /// Opaque conversion payload, passed through verbatim
    #[schema(value_type = Object)]
    pub price_in_currency: serde_json::Value,
}
