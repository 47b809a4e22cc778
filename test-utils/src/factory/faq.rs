//! FAQ factory for creating test FAQ entities.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use uuid::Uuid;

/// Factory for creating test FAQ entries with customizable fields.
pub struct FaqFactory<'a> {
    db: &'a DatabaseConnection,
    id: Uuid,
    question: String,
    answer: String,
    position: i32,
    created_at: DateTime<Utc>,
}

impl<'a> FaqFactory<'a> {
    /// Creates a new FaqFactory with default values.
    ///
    /// Defaults:
    /// - question: `"Question {n}?"` where n is auto-incremented
    /// - answer: `"Answer {n}"`
    /// - position: `0`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let n = next_id();
        Self {
            db,
            id: Uuid::new_v4(),
            question: format!("Question {}?", n),
            answer: format!("Answer {}", n),
            position: 0,
            created_at: Utc::now(),
        }
    }

    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn question(mut self, question: impl Into<String>) -> Self {
        self.question = question.into();
        self
    }

    pub fn answer(mut self, answer: impl Into<String>) -> Self {
        self.answer = answer.into();
        self
    }

    pub fn position(mut self, position: i32) -> Self {
        self.position = position;
        self
    }

    pub fn created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds and inserts the FAQ entity into the database.
    pub async fn build(self) -> Result<entity::faq::Model, DbErr> {
        entity::faq::ActiveModel {
            id: ActiveValue::Set(self.id),
            question: ActiveValue::Set(self.question),
            answer: ActiveValue::Set(self.answer),
            position: ActiveValue::Set(self.position),
            created_at: ActiveValue::Set(self.created_at),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a FAQ entry with default values.
pub async fn create_faq(db: &DatabaseConnection) -> Result<entity::faq::Model, DbErr> {
    FaqFactory::new(db).build().await
}
