use sea_orm::{Condition, EntityTrait, FromQueryResult};
use serde::Serialize;
use std::fmt::Debug;
use uuid::Uuid;

use crate::{
    error::validation::ValidationError,
    model::{
        ordering::{OrderKey, OrderingMap, OrderingPolicy},
        page::{MessagesPolicy, PageSizePolicy},
        search::AdvancedField,
    },
    resource::ResourceKind,
};

/// Column type of an adapter's entity.
pub type ColumnOf<A> = <<A as ResourceAdapter>::Entity as EntityTrait>::Column;

/// Per-resource configuration plugged into the shared search and identifier machinery.
///
/// Adapters are unit structs holding no state. Everything resource-specific is
/// declared here; the query service contains no per-resource branching.
pub trait ResourceAdapter: Sized + Send + Sync + 'static {
    type Entity: EntityTrait<Model = Self::Model>;
    type Model: FromQueryResult + Serialize + Clone + Debug + Send + Sync + 'static;

    const KIND: ResourceKind;

    /// Primary key column holding the canonical identifier.
    fn id_column() -> ColumnOf<Self>;

    fn canonical_id(model: &Self::Model) -> Uuid;

    /// Text columns the keyword search runs over.
    fn searchable_columns() -> Vec<ColumnOf<Self>>;

    fn ordering_map() -> OrderingMap<ColumnOf<Self>>;

    /// Order applied when a request names no valid ordering field.
    fn default_order() -> Vec<OrderKey<ColumnOf<Self>>>;

    fn ordering_policy() -> OrderingPolicy;

    fn page_size_policy() -> PageSizePolicy;

    fn messages_policy() -> MessagesPolicy;

    /// Interprets advanced-search fields. Ignores them unless overridden.
    fn advanced_field_filter(_fields: &[AdvancedField]) -> Result<Condition, ValidationError> {
        Ok(Condition::all())
    }

    /// Filters referencing other resources by legacy or canonical identifier.
    fn reference_filters() -> Vec<ReferenceFilter<ColumnOf<Self>>> {
        Vec::new()
    }

    /// Restricts which records a reverse identifier scan visits.
    fn scan_filter() -> Condition {
        Condition::all()
    }
}

/// A request filter holding the identifier of a record of another resource.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReferenceFilter<C> {
    /// Filter name as sent by legacy clients, e.g. `categoryId`.
    pub name: &'static str,
    /// Foreign key column compared against the resolved canonical identifier.
    pub column: C,
    pub target: ResourceKind,
}
