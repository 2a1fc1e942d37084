use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use service::product_service;
use tracing::info;

use models::product;

use crate::errors::JsonApiError;
use crate::routes::ServerState;

/// Transport shape for create and update. Every field is required; on update
/// the path id wins and the body id is ignored.
#[derive(Debug, Deserialize, Serialize)]
pub struct ProductInput {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub quantity: i32,
}

#[derive(Debug, Serialize)]
pub struct ProductConfirmation {
    pub message: &'static str,
    pub product: product::Model,
}

#[derive(Debug, Serialize)]
pub struct DeleteConfirmation {
    pub message: &'static str,
}

#[utoipa::path(
    get, path = "/products", tag = "products",
    responses(
        (status = 200, description = "All stored products"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn list(
    State(state): State<ServerState>,
) -> Result<Json<Vec<product::Model>>, JsonApiError> {
    match product_service::list_products(&state.db).await {
        Ok(list) => {
            info!(count = list.len(), "list products");
            Ok(Json(list))
        }
        Err(e) => Err(e.into()),
    }
}

#[utoipa::path(
    post, path = "/products", tag = "products",
    request_body = crate::openapi::ProductInputDoc,
    responses(
        (status = 200, description = "Created"),
        (status = 400, description = "Validation Error"),
        (status = 409, description = "Duplicate id"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn create(
    State(state): State<ServerState>,
    Json(input): Json<ProductInput>,
) -> Result<Json<ProductConfirmation>, JsonApiError> {
    match product_service::create_product(
        &state.db,
        input.id,
        &input.name,
        &input.description,
        input.price,
        input.quantity,
    )
    .await
    {
        Ok(p) => {
            info!(id = p.id, name = %p.name, "created product");
            Ok(Json(ProductConfirmation {
                message: "Product created successfully",
                product: p,
            }))
        }
        Err(e) => Err(e.into()),
    }
}

#[utoipa::path(
    get, path = "/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Found"),
        (status = 404, description = "Product not found")
    )
)]
pub async fn get(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<product::Model>, JsonApiError> {
    match product_service::get_product(&state.db, id).await {
        Ok(Some(p)) => Ok(Json(p)),
        Ok(None) => Err(JsonApiError::product_not_found(id)),
        Err(e) => Err(e.into()),
    }
}

#[utoipa::path(
    put, path = "/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    request_body = crate::openapi::ProductInputDoc,
    responses(
        (status = 200, description = "Updated"),
        (status = 400, description = "Validation Error"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
    Json(input): Json<ProductInput>,
) -> Result<Json<ProductConfirmation>, JsonApiError> {
    match product_service::update_product(
        &state.db,
        id,
        &input.name,
        &input.description,
        input.price,
        input.quantity,
    )
    .await
    {
        Ok(Some(p)) => {
            info!(id = p.id, "updated product");
            Ok(Json(ProductConfirmation {
                message: "Product updated successfully",
                product: p,
            }))
        }
        Ok(None) => Err(JsonApiError::product_not_found(id)),
        Err(e) => Err(e.into()),
    }
}

#[utoipa::path(
    delete, path = "/products/{id}", tag = "products",
    params(("id" = i32, Path, description = "Product id")),
    responses(
        (status = 200, description = "Deleted"),
        (status = 404, description = "Product not found"),
        (status = 500, description = "Store failure")
    )
)]
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<i32>,
) -> Result<Json<DeleteConfirmation>, JsonApiError> {
    match product_service::delete_product(&state.db, id).await {
        Ok(true) => {
            info!(id = id, "deleted product");
            Ok(Json(DeleteConfirmation {
                message: "Product deleted successfully",
            }))
        }
        Ok(false) => Err(JsonApiError::product_not_found(id)),
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn input_requires_every_field() {
        let full = r#"{"id":9,"name":"Pen","description":"d","price":1.5,"quantity":2}"#;
        assert!(serde_json::from_str::<ProductInput>(full).is_ok());
        let partial = r#"{"id":9,"name":"Pen"}"#;
        assert!(serde_json::from_str::<ProductInput>(partial).is_err());
    }

    #[test]
    fn confirmation_bodies_carry_message_and_product() {
        let p = product::Model {
            id: 1,
            name: "Pen".into(),
            description: "Stylish Pen".into(),
            price: 35.0,
            quantity: 25,
        };
        let v = serde_json::to_value(ProductConfirmation {
            message: "Product created successfully",
            product: p,
        })
        .unwrap();
        assert_eq!(v["message"], "Product created successfully");
        assert_eq!(v["product"]["id"], 1);
        assert_eq!(v["product"]["name"], "Pen");

        let v = serde_json::to_value(DeleteConfirmation {
            message: "Product deleted successfully",
        })
        .unwrap();
        assert_eq!(v, serde_json::json!({"message": "Product deleted successfully"}));
    }
}
