//! Category factory for creating test category entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test categories with customizable fields.
///
/// Default values are sourced from the category fixture, with a fresh random
/// canonical identifier and a unique name per factory.
///
/// # Example
///
/// ```rust,ignore
/// let category = CategoryFactory::new(&db)
///     .name("Plumbing")
///     .kind(3)
///     .build()
///     .await?;
/// ```
pub struct CategoryFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::category::Model,
}

impl<'a> CategoryFactory<'a> {
    /// Creates a new CategoryFactory with default values from fixture.
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::category::entity_builder()
            .id(Uuid::new_v4())
            .name(format!("Category {}", id))
            .created_at(Utc::now())
            .build();

        Self { db, entity }
    }

    /// Sets the canonical identifier.
    pub fn id(mut self, id: Uuid) -> Self {
        self.entity.id = id;
        self
    }

    /// Sets the category name.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.entity.name = name.into();
        self
    }

    /// Sets the category description.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.entity.description = description.into();
        self
    }

    /// Sets the numeric category type.
    pub fn kind(mut self, kind: i32) -> Self {
        self.entity.kind = kind;
        self
    }

    /// Sets the display position.
    pub fn position(mut self, position: i32) -> Self {
        self.entity.position = position;
        self
    }

    /// Sets the creation timestamp.
    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.entity.created_at = created_at;
        self
    }

    /// Builds and inserts the category entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::category::Model)` - Created category entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::category::Model, DbErr> {
        entity::category::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            name: ActiveValue::Set(self.entity.name),
            description: ActiveValue::Set(self.entity.description),
            kind: ActiveValue::Set(self.entity.kind),
            position: ActiveValue::Set(self.entity.position),
            created_at: ActiveValue::Set(self.entity.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a category with default values.
///
/// Shorthand for `CategoryFactory::new(db).build().await`.
pub async fn create_category(db: &DatabaseConnection) -> Result<entity::category::Model, DbErr> {
    CategoryFactory::new(db).build().await
}
