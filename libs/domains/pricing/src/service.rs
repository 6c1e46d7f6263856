//! Price Service - conversion orchestration

use std::collections::HashMap;
use std::sync::Arc;
use tracing::instrument;

use domain_catalog::{ProductError, ProductRepository};

use crate::client::PricingClient;
use crate::error::PricingResult;
use crate::models::{ConversionRequest, PricedProduct};

/// Orchestrates a price conversion: resolve the product, build the outbound
/// request, call the pricing service, merge the result.
///
/// Holds no request-scoped state; both collaborators are shared handles, so
/// concurrent conversions do not interfere.
pub struct PriceService<R: ProductRepository, C: PricingClient> {
    repository: Arc<R>,
    client: Arc<C>,
}

impl<R: ProductRepository, C: PricingClient> PriceService<R, C> {
    pub fn new(repository: R, client: C) -> Self {
        Self {
            repository: Arc::new(repository),
            client: Arc::new(client),
        }
    }

    /// Convert a product's base price into the target currency.
    ///
    /// The product is resolved before anything goes on the wire, so an
    /// unknown id costs no network round-trip.
    #[instrument(skip(self, params), fields(currency = %currency))]
    pub async fn price_in_currency(
        &self,
        id: i32,
        currency: &str,
        params: &HashMap<String, String>,
    ) -> PricingResult<PricedProduct> {
        let product = self
            .repository
            .get_by_id(id)
            .await?
            .ok_or(ProductError::NotFound(id))?;

        let request = ConversionRequest::new(product.base_price, currency).with_overrides(params);
        let price_in_currency = self.client.convert(&request).await?;

        Ok(PricedProduct {
            product,
            price_in_currency,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::MockPricingClient;
    use crate::error::PricingError;
    use async_trait::async_trait;
    use domain_catalog::{CreateProduct, Product, ProductResult, UpdateProduct};
    use serde_json::json;

    /// Fixed-content repository double; the orchestrator only reads.
    struct StubRepository {
        products: Vec<Product>,
    }

    impl StubRepository {
        fn with_product(product: Product) -> Self {
            Self {
                products: vec![product],
            }
        }

        fn empty() -> Self {
            Self { products: vec![] }
        }
    }

    #[async_trait]
    impl ProductRepository for StubRepository {
        async fn create(&self, _input: CreateProduct) -> ProductResult<Product> {
            unimplemented!("not used by the orchestrator")
        }

        async fn get_by_id(&self, id: i32) -> ProductResult<Option<Product>> {
            Ok(self.products.iter().find(|p| p.id == id).cloned())
        }

        async fn list(&self) -> ProductResult<Vec<Product>> {
            Ok(self.products.clone())
        }

        async fn update(&self, _id: i32, _input: UpdateProduct) -> ProductResult<Product> {
            unimplemented!("not used by the orchestrator")
        }

        async fn delete(&self, _id: i32) -> ProductResult<bool> {
            unimplemented!("not used by the orchestrator")
        }
    }

    fn sample_product() -> Product {
        Product {
            id: 1,
            name: "iPhone 15 Pro".to_string(),
            description: String::new(),
            base_price: 7000.0,
        }
    }

    #[tokio::test]
    async fn test_conversion_result_is_merged_into_product() {
        let mut client = MockPricingClient::new();
        client
            .expect_convert()
            .return_once(|_| Ok(json!({"converted_amount": 50.0, "currency": "USD"})));

        let service = PriceService::new(StubRepository::with_product(sample_product()), client);
        let priced = service
            .price_in_currency(1, "usd", &HashMap::new())
            .await
            .unwrap();

        assert_eq!(
            priced.price_in_currency,
            json!({"converted_amount": 50.0, "currency": "USD"})
        );

        // Flattened representation: product fields plus price_in_currency
        let value = serde_json::to_value(&priced).unwrap();
        assert_eq!(value["id"], 1);
        assert_eq!(value["name"], "iPhone 15 Pro");
        assert_eq!(value["base_price"], 7000.0);
        assert_eq!(value["price_in_currency"]["converted_amount"], 50.0);
    }

    #[tokio::test]
    async fn test_unknown_product_skips_the_outbound_call() {
        let mut client = MockPricingClient::new();
        client.expect_convert().never();

        let service = PriceService::new(StubRepository::empty(), client);
        let result = service.price_in_currency(999, "usd", &HashMap::new()).await;

        assert!(matches!(
            result,
            Err(PricingError::Product(ProductError::NotFound(999)))
        ));
    }

    #[tokio::test]
    async fn test_outbound_request_carries_price_currency_and_overrides() {
        let mut client = MockPricingClient::new();
        client
            .expect_convert()
            .withf(|request: &ConversionRequest| {
                request.base_price == 7000.0
                    && request.target_currency == "BTC"
                    && request.admin_fee == Some(0.005)
                    && request.volatility_threshold.is_none()
                    && request.force_panic == Some(true)
            })
            .return_once(|_| Ok(json!({})));

        let params: HashMap<String, String> = [
            ("admin_fee", "0.005"),
            ("volatility_threshold", "not_a_number"),
            ("force_panic", "YES"),
        ]
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect();

        let service = PriceService::new(StubRepository::with_product(sample_product()), client);
        service
            .price_in_currency(1, "btc", &params)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_client_errors_pass_through_untouched() {
        let mut client = MockPricingClient::new();
        client.expect_convert().return_once(|_| {
            Err(PricingError::Rejected {
                status: 500,
                body: "conversion exploded".to_string(),
            })
        });

        let service = PriceService::new(StubRepository::with_product(sample_product()), client);
        let result = service.price_in_currency(1, "usd", &HashMap::new()).await;

        assert!(matches!(
            result,
            Err(PricingError::Rejected { status: 500, .. })
        ));
    }
}
