use models::product;
use sea_orm::DatabaseConnection;
use tracing::info;

use crate::errors::ServiceError;
use crate::product_service;

/// Catalog inserted into a freshly created store.
pub fn initial_products() -> Vec<product::Model> {
    vec![
        product::Model {
            id: 1,
            name: "Pen".to_string(),
            description: "Stylish Pen".to_string(),
            price: 35.0,
            quantity: 25,
        },
        product::Model {
            id: 2,
            name: "Notebook".to_string(),
            description: "200-page ruled notebook".to_string(),
            price: 120.0,
            quantity: 40,
        },
        product::Model {
            id: 3,
            name: "Marker".to_string(),
            description: "Permanent black marker".to_string(),
            price: 50.0,
            quantity: 30,
        },
        product::Model {
            id: 4,
            name: "Pencil".to_string(),
            description: "HB graphite pencil".to_string(),
            price: 10.0,
            quantity: 100,
        },
        product::Model {
            id: 5,
            name: "Highlighter".to_string(),
            description: "Fluorescent yellow highlighter".to_string(),
            price: 45.0,
            quantity: 35,
        },
    ]
}

/// Seed the default catalog when the store is empty. Safe to call on every
/// boot; a populated store is left untouched.
pub async fn seed_initial_products(db: &DatabaseConnection) -> Result<u64, ServiceError> {
    let catalog = initial_products();
    let inserted = product_service::seed_if_empty(db, &catalog).await?;
    if inserted > 0 {
        info!(count = inserted, "seeded product catalog into empty store");
    } else {
        info!("store already populated; seed skipped");
    }
    Ok(inserted)
}
