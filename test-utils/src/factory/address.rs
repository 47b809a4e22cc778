//! Address factory for creating test address entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test addresses with customizable fields.
pub struct AddressFactory<'a> {
    db: &'a DatabaseConnection,
    id: Uuid,
    zone_id: Option<Uuid>,
    street: String,
    city: String,
    postal_code: String,
}

impl<'a> AddressFactory<'a> {
    /// Creates a new AddressFactory with default values.
    ///
    /// Defaults:
    /// - zone_id: `None`
    /// - street: `"{n} Main Street"` where n is auto-incremented
    /// - city: `"Springfield"`
    /// - postal_code: `"12345"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: Uuid::new_v4(),
            zone_id: None,
            street: format!("{} Main Street", n),
            city: "Springfield".to_string(),
            postal_code: "12345".to_string(),
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn zone_id(mut self, zone_id: Option<Uuid>) -> Self {
        self.zone_id = zone_id;
        self
    }

    pub fn street(mut self, street: impl Into<String>) -> Self {
        self.street = street.into();
        self
    }

    pub fn city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    pub fn postal_code(mut self, postal_code: impl Into<String>) -> Self {
        self.postal_code = postal_code.into();
        self
    }

    /// Builds and inserts the address entity into the database.
    pub async fn build(self) -> Result<entity::address::Model, DbErr> {
        entity::address::ActiveModel {
            id: ActiveValue::Set(self.id),
            zone_id: ActiveValue::Set(self.zone_id),
            street: ActiveValue::Set(self.street),
            city: ActiveValue::Set(self.city),
            postal_code: ActiveValue::Set(self.postal_code),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an address with default values and no zone.
pub async fn create_address(db: &DatabaseConnection) -> Result<entity::address::Model, DbErr> {
    AddressFactory::new(db).build().await
}
