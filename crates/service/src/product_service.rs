use models::product::{self, Entity as ProductEntity};
use sea_orm::{ActiveModelTrait, DatabaseConnection, EntityTrait, PaginatorTrait, Set};

use crate::errors::ServiceError;

/// List every stored product in store-native order (not guaranteed stable).
pub async fn list_products(db: &DatabaseConnection) -> Result<Vec<product::Model>, ServiceError> {
    let rows = ProductEntity::find().all(db).await.map_err(ServiceError::from_db)?;
    Ok(rows)
}

/// Get a product by id. Absence is `Ok(None)`, never an error.
pub async fn get_product(db: &DatabaseConnection, id: i32) -> Result<Option<product::Model>, ServiceError> {
    let found = ProductEntity::find_by_id(id).one(db).await.map_err(ServiceError::from_db)?;
    Ok(found)
}

/// Insert a product under a caller-supplied id after field validation.
/// Id collisions are not pre-checked; the primary key rejects the insert and
/// the violation surfaces as `ServiceError::Conflict`.
pub async fn create_product(
    db: &DatabaseConnection,
    id: i32,
    name: &str,
    description: &str,
    price: f64,
    quantity: i32,
) -> Result<product::Model, ServiceError> {
    product::validate_name(name)?;
    product::validate_price(price)?;
    let am = product::ActiveModel {
        id: Set(id),
        name: Set(name.to_string()),
        description: Set(description.to_string()),
        price: Set(price),
        quantity: Set(quantity),
    };
    let created = am.insert(db).await.map_err(ServiceError::from_db)?;
    Ok(created)
}

/// Overwrite the four mutable fields of an existing product; the id never
/// changes. Absence is `Ok(None)` and the store stays untouched.
pub async fn update_product(
    db: &DatabaseConnection,
    id: i32,
    name: &str,
    description: &str,
    price: f64,
    quantity: i32,
) -> Result<Option<product::Model>, ServiceError> {
    product::validate_name(name)?;
    product::validate_price(price)?;
    let Some(existing) = ProductEntity::find_by_id(id).one(db).await.map_err(ServiceError::from_db)? else {
        return Ok(None);
    };
    let mut am: product::ActiveModel = existing.into();
    am.name = Set(name.to_string());
    am.description = Set(description.to_string());
    am.price = Set(price);
    am.quantity = Set(quantity);
    let updated = am.update(db).await.map_err(ServiceError::from_db)?;
    Ok(Some(updated))
}

/// Delete by id; `Ok(false)` when nothing matched, so a repeat call is a
/// harmless no-op.
pub async fn delete_product(db: &DatabaseConnection, id: i32) -> Result<bool, ServiceError> {
    let res = ProductEntity::delete_by_id(id).exec(db).await.map_err(ServiceError::from_db)?;
    Ok(res.rows_affected > 0)
}

/// Number of stored products.
pub async fn count_products(db: &DatabaseConnection) -> Result<u64, ServiceError> {
    let n = ProductEntity::find().count(db).await.map_err(ServiceError::from_db)?;
    Ok(n)
}

/// Insert `items` as one batch iff the table is empty. Returns how many rows
/// went in (0 when the store was already populated). Concurrent seeding from
/// multiple processes is not coordinated here.
pub async fn seed_if_empty(db: &DatabaseConnection, items: &[product::Model]) -> Result<u64, ServiceError> {
    if count_products(db).await? > 0 {
        return Ok(0);
    }
    if items.is_empty() {
        return Ok(0);
    }
    let rows: Vec<product::ActiveModel> = items
        .iter()
        .map(|p| product::ActiveModel {
            id: Set(p.id),
            name: Set(p.name.clone()),
            description: Set(p.description.clone()),
            price: Set(p.price),
            quantity: Set(p.quantity),
        })
        .collect();
    ProductEntity::insert_many(rows).exec(db).await.map_err(ServiceError::from_db)?;
    Ok(items.len() as u64)
}
