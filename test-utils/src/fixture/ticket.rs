//! Ticket fixtures for creating in-memory test data.

use chrono::{DateTime, Utc};
use entity::ticket;
use uuid::Uuid;

use super::category::default_created_at;

/// Default ticket subject.
pub const DEFAULT_SUBJECT: &str = "Test Ticket";

/// Default ticket body.
pub const DEFAULT_BODY: &str = "Something needs fixing";

/// Default ticket status.
pub const DEFAULT_STATUS: &str = "open";

/// Default ticket priority.
pub const DEFAULT_PRIORITY: i32 = 2;

/// Fixed canonical identifier used by `entity()`.
pub const DEFAULT_ID: Uuid = Uuid::from_u128(0x0b9e7d6c_5a4f_4e3d_8c2b_1a0f9e8d7c6b);

/// Creates a ticket entity model with default values and no category.
pub fn entity() -> ticket::Model {
    entity_builder().build()
}

/// Creates a ticket entity builder for customization.
pub fn entity_builder() -> TicketEntityBuilder {
    TicketEntityBuilder::default()
}

/// Builder for creating customized ticket entity models.
pub struct TicketEntityBuilder {
    id: Uuid,
    category_id: Option<Uuid>,
    subject: String,
    body: String,
    status: String,
    priority: i32,
    created_at: DateTime<Utc>,
}

impl Default for TicketEntityBuilder {
    fn default() -> Self {
        Self {
            id: DEFAULT_ID,
            category_id: None,
            subject: DEFAULT_SUBJECT.to_string(),
            body: DEFAULT_BODY.to_string(),
            status: DEFAULT_STATUS.to_string(),
            priority: DEFAULT_PRIORITY,
            created_at: default_created_at(),
        }
    }
}

impl TicketEntityBuilder {
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn category_id(mut self, category_id: Option<Uuid>) -> Self {
        self.category_id = category_id;
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }

    pub fn priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds the ticket entity model.
    pub fn build(self) -> ticket::Model {
        ticket::Model {
            id: self.id,
            category_id: self.category_id,
            subject: self.subject,
            body: self.body,
            status: self.status,
            priority: self.priority,
            created_at: self.created_at,
        }
    }
}
