//! Zone factory for creating test zone entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test zones with customizable fields.
pub struct ZoneFactory<'a> {
    db: &'a DatabaseConnection,
    id: Uuid,
    name: String,
    code: String,
    is_active: bool,
}

impl<'a> ZoneFactory<'a> {
    /// Creates a new ZoneFactory with default values.
    ///
    /// Defaults:
    /// - name: `"Zone {n}"` where n is auto-incremented
    /// - code: `"Z{n}"`
    /// - is_active: `true`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: Uuid::new_v4(),
            name: format!("Zone {}", n),
            code: format!("Z{}", n),
            is_active: true,
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn code(mut self, code: impl Into<String>) -> Self {
        self.code = code.into();
        self
    }

    pub fn active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Builds and inserts the zone entity into the database.
    pub async fn build(self) -> Result<entity::zone::Model, DbErr> {
        entity::zone::ActiveModel {
            id: ActiveValue::Set(self.id),
            name: ActiveValue::Set(self.name),
            code: ActiveValue::Set(self.code),
            is_active: ActiveValue::Set(self.is_active),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an active zone with default values.
pub async fn create_zone(db: &DatabaseConnection) -> Result<entity::zone::Model, DbErr> {
    ZoneFactory::new(db).build().await
}
