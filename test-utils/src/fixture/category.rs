//! Category fixtures for creating in-memory test data.

use chrono::{DateTime, TimeZone, Utc};
use entity::category;
use uuid::Uuid;

/// Default test category name.
pub const DEFAULT_NAME: &str = "Test Category";

/// Default test category description.
pub const DEFAULT_DESCRIPTION: &str = "Category used in tests";

/// Default numeric category type.
pub const DEFAULT_KIND: i32 = 1;

/// Default display position.
pub const DEFAULT_POSITION: i32 = 0;

/// Fixed canonical identifier used by `entity()`.
pub const DEFAULT_ID: Uuid = Uuid::from_u128(0x6f1c2a4e_8b3d_4f5a_9c7e_1d2b3a4c5e6f);

/// Fixed creation timestamp so fixtures compare equal across runs.
pub fn default_created_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0)
        .single()
        .unwrap_or_default()
}

/// Creates a category entity model with default values.
///
/// # Default Values
/// - id: `6f1c2a4e-8b3d-4f5a-9c7e-1d2b3a4c5e6f`
/// - name: `"Test Category"`
/// - description: `"Category used in tests"`
/// - kind: `1`
/// - position: `0`
/// - created_at: `2024-01-01T00:00:00Z`
pub fn entity() -> category::Model {
    entity_builder().build()
}

/// Creates a category entity builder for customization.
///
/// # Example
///
/// ```rust,ignore
/// let category = fixture::category::entity_builder()
///     .name("Plumbing")
///     .kind(3)
///     .build();
/// ```
pub fn entity_builder() -> CategoryEntityBuilder {
    CategoryEntityBuilder::default()
}

/// Builder for creating customized category entity models.
pub struct CategoryEntityBuilder {
    id: Uuid,
    name: String,
    description: String,
    kind: i32,
    position: i32,
    created_at: DateTime<Utc>,
}

impl Default for CategoryEntityBuilder {
    fn default() -> Self {
        Self {
            id: DEFAULT_ID,
            name: DEFAULT_NAME.to_string(),
            description: DEFAULT_DESCRIPTION.to_string(),
            kind: DEFAULT_KIND,
            position: DEFAULT_POSITION,
            created_at: default_created_at(),
        }
    }
}

impl CategoryEntityBuilder {
    pub fn id(mut self, id: Uuid) -> Self {
        self.id = id;
        self
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn kind(mut self, kind: i32) -> Self {
        self.kind = kind;
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

    /// Builds the category entity model.
    pub fn build(self) -> category::Model {
        category::Model {
            id: self.id,
            name: self.name,
            description: self.description,
            kind: self.kind,
            position: self.position,
            created_at: self.created_at,
        }
    }
}
