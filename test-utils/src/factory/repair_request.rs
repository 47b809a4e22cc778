//! Repair request factory for creating test repair request entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test repair requests with customizable fields.
pub struct RepairRequestFactory<'a> {
    db: &'a DatabaseConnection,
    id: Uuid,
    ticket_id: Option<Uuid>,
    title: String,
    description: String,
    status: String,
}

impl<'a> RepairRequestFactory<'a> {
    /// Creates a new RepairRequestFactory with default values.
    ///
    /// Defaults:
    /// - ticket_id: `None`
    /// - title: `"Repair {n}"` where n is auto-incremented
    /// - description: `"Needs a technician"`
    /// - status: `"pending"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: Uuid::new_v4(),
            ticket_id: None,
            title: format!("Repair {}", n),
            description: "Needs a technician".to_string(),
            status: "pending".to_string(),
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn ticket_id(mut self, ticket_id: Option<Uuid>) -> Self {
        self.ticket_id = ticket_id;
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    /// Builds and inserts the repair request entity into the database.
    pub async fn build(self) -> Result<entity::repair_request::Model, DbErr> {
        entity::repair_request::ActiveModel {
            id: ActiveValue::Set(self.id),
            ticket_id: ActiveValue::Set(self.ticket_id),
            title: ActiveValue::Set(self.title),
            description: ActiveValue::Set(self.description),
            status: ActiveValue::Set(self.status),
            created_at: ActiveValue::Set(Utc::now()),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a repair request with default values and no ticket.
pub async fn create_repair_request(
    db: &DatabaseConnection,
) -> Result<entity::repair_request::Model, DbErr> {
    RepairRequestFactory::new(db).build().await
}
