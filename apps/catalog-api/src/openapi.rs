use utoipa::OpenApi;

/// Aggregated OpenAPI documentation, served by Swagger UI at `/apidocs`
#[derive(OpenApi)]
#[openapi(
    info(
        title = "GlobalPrice Product API",
        description = "Product catalog with price conversion via the external pricing service"
    ),
    nest(
        (path = "/products", api = domain_catalog::ApiDoc),
        (path = "/products", api = domain_pricing::ApiDoc)
    )
)]
pub struct ApiDoc;
