//! Shared helper utilities for factory methods.
//!
//! This module provides common utilities used across all factory modules,
//! including counter-based naming and convenience methods for creating entities
//! with their dependencies.

use sea_orm::{DatabaseConnection, DbErr};

use crate::factory;

/// Counter for generating unique names in tests.
static COUNTER: std::sync::atomic::AtomicU64 = std::sync::atomic::AtomicU64::new(1);

/// Gets the next unique counter value for test data.
///
/// # Returns
/// - `u64` - Next unique counter value
pub fn next_id() -> u64 {
    COUNTER.fetch_add(1, std::sync::atomic::Ordering::SeqCst)
}

/// Creates a category and a ticket filed under it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((category, ticket))` - Both created entities
/// - `Err(DbErr)` - Database error during insert
pub async fn create_ticket_with_category(
    db: &DatabaseConnection,
) -> Result<(entity::category::Model, entity::ticket::Model), DbErr> {
    let category = factory::create_category(db).await?;
    let ticket = factory::ticket::TicketFactory::new(db)
        .category_id(Some(category.id))
        .build()
        .await?;

    Ok((category, ticket))
}

/// Creates an active zone and an address located in it.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok((zone, address))` - Both created entities
/// - `Err(DbErr)` - Database error during insert
pub async fn create_address_in_zone(
    db: &DatabaseConnection,
) -> Result<(entity::zone::Model, entity::address::Model), DbErr> {
    let zone = factory::create_zone(db).await?;
    let address = factory::address::AddressFactory::new(db)
        .zone_id(Some(zone.id))
        .build()
        .await?;

    Ok((zone, address))
}
