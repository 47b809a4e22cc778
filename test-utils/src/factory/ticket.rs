//! Ticket factory for creating test ticket entities.

use crate::factory::helpers::next_id;
use crate::fixture;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test tickets with customizable fields.
///
/// Defaults come from the ticket fixture with a fresh canonical identifier, a unique
/// subject and no category.
pub struct TicketFactory<'a> {
    db: &'a DatabaseConnection,
    entity: entity::ticket::Model,
}

impl<'a> TicketFactory<'a> {
    /// Creates a new TicketFactory with default values from fixture.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        let entity = fixture::ticket::entity_builder()
            .id(Uuid::new_v4())
            .subject(format!("Ticket {}", id))
            .created_at(Utc::now())
            .build();

        Self { db, entity }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.entity.id = id;
        self
    }

    /// Files the ticket under a category.
    pub fn category_id(mut self, category_id: Option<Uuid>) -> Self {
        self.entity.category_id = category_id;
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.entity.subject = subject.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.entity.body = body.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.entity.status = status.into();
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.entity.priority = priority;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.entity.created_at = created_at;
        self
    }

    /// Builds and inserts the ticket entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::ticket::Model)` - Created ticket entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::ticket::Model, DbErr> {
        entity::ticket::ActiveModel {
            id: ActiveValue::Set(self.entity.id),
            category_id: ActiveValue::Set(self.entity.category_id),
            subject: ActiveValue::Set(self.entity.subject),
            body: ActiveValue::Set(self.entity.body),
            status: ActiveValue::Set(self.entity.status),
            priority: ActiveValue::Set(self.entity.priority),
            created_at: ActiveValue::Set(self.entity.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a ticket with default values and no category.
pub async fn create_ticket(db: &DatabaseConnection) -> Result<entity::ticket::Model, DbErr> {
    TicketFactory::new(db).build().await
}
