use entity::zone::{Column, Entity, Model};
use sea_orm::{ColumnTrait, Condition};
use uuid::Uuid;

use crate::{
    model::{
        ordering::{OrderKey, OrderingMap, OrderingPolicy},
        page::{MessagesPolicy, PageSizePolicy},
    },
    resource::{adapter::ResourceAdapter, ResourceKind},
};

pub struct ZoneAdapter;

impl ResourceAdapter for ZoneAdapter {
    type Entity = Entity;
    type Model = Model;

    const KIND: ResourceKind = ResourceKind::Zone;

    fn id_column() -> Column {
        Column::Id
    }

    fn canonical_id(model: &Model) -> Uuid {
        model.id
    }

    fn searchable_columns() -> Vec<Column> {
        vec![Column::Name, Column::Code]
    }

    fn ordering_map() -> OrderingMap<Column> {
        OrderingMap::new()
            .insert("name", Column::Name)
            .insert("code", Column::Code)
    }

    fn default_order() -> Vec<OrderKey<Column>> {
        vec![OrderKey::asc(Column::Name)]
    }

    fn ordering_policy() -> OrderingPolicy {
        OrderingPolicy::DropSilently
    }

    fn page_size_policy() -> PageSizePolicy {
        PageSizePolicy::Unpaged
    }

    fn messages_policy() -> MessagesPolicy {
        MessagesPolicy::Null
    }

    // Inactive zones are unreachable by legacy identifier.
    fn scan_filter() -> Condition {
        Condition::all().add(Column::IsActive.eq(true))
    }
}
