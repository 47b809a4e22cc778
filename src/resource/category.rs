use entity::category::{Column, Entity, Model};
use sea_orm::{ColumnTrait, Condition};
use uuid::Uuid;

use crate::{
    error::validation::ValidationError,
    model::{
        ordering::{OrderKey, OrderingMap, OrderingPolicy},
        page::{MessagesPolicy, PageSizePolicy, DEFAULT_PAGE_SIZE},
        search::AdvancedField,
    },
    resource::{adapter::ResourceAdapter, ResourceKind},
    util::parse::parse_integer_field,
};

/// Advanced-search field filtering categories by their numeric type.
pub const TYPE_FIELD: &str = "type";

pub struct CategoryAdapter;

impl ResourceAdapter for CategoryAdapter {
    type Entity = Entity;
    type Model = Model;

    const KIND: ResourceKind = ResourceKind::Category;

    fn id_column() -> Column {
        Column::Id
    }

    fn canonical_id(model: &Model) -> Uuid {
        model.id
    }

    fn searchable_columns() -> Vec<Column> {
        vec![Column::Name, Column::Description]
    }

    fn ordering_map() -> OrderingMap<Column> {
        OrderingMap::new()
            .insert("name", Column::Name)
            .insert("type", Column::Kind)
            .insert("createdAt", Column::CreatedAt)
            .insert("sortOrder", Column::Position)
    }

    fn default_order() -> Vec<OrderKey<Column>> {
        vec![OrderKey::asc(Column::Position), OrderKey::asc(Column::Name)]
    }

    fn ordering_policy() -> OrderingPolicy {
        OrderingPolicy::Reject
    }

    fn page_size_policy() -> PageSizePolicy {
        PageSizePolicy::DefaultSize(DEFAULT_PAGE_SIZE)
    }

    fn messages_policy() -> MessagesPolicy {
        MessagesPolicy::Null
    }

    fn advanced_field_filter(fields: &[AdvancedField]) -> Result<Condition, ValidationError> {
        let mut condition = Condition::all();

        for field in fields.iter().filter(|field| field.name == TYPE_FIELD) {
            let kind = parse_integer_field(&field.name, &field.value)?;
            condition = condition.add(Column::Kind.eq(kind));
        }

        Ok(condition)
    }
}
