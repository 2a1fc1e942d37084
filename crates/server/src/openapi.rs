use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(ToSchema)]
pub struct ProductDoc {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i32,
}

#[derive(ToSchema)]
pub struct ProductInputDoc {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i32,
}

#[derive(ToSchema)]
pub struct ProductConfirmationDoc {
    pub message: String,
    pub product: ProductDoc,
}

#[derive(ToSchema)]
pub struct DeleteConfirmationDoc {
    pub message: String,
}

#[derive(ToSchema)]
pub struct ApiErrorDoc {
    pub error: String,
    pub detail: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::products::list,
        crate::routes::products::create,
        crate::routes::products::get,
        crate::routes::products::update,
        crate::routes::products::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ProductDoc,
            ProductInputDoc,
            ProductConfirmationDoc,
            DeleteConfirmationDoc,
            ApiErrorDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "products")
    )
)]
pub struct ApiDoc;
