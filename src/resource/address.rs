use entity::address::{Column, Entity, Model};
use uuid::Uuid;

use crate::{
    model::{
        ordering::{OrderKey, OrderingMap, OrderingPolicy},
        page::{MessagesPolicy, PageSizePolicy, DEFAULT_PAGE_SIZE},
    },
    resource::{
        adapter::{ReferenceFilter, ResourceAdapter},
        ResourceKind,
    },
};

pub struct AddressAdapter;

impl ResourceAdapter for AddressAdapter {
    type Entity = Entity;
    type Model = Model;

    const KIND: ResourceKind = ResourceKind::Address;

    fn id_column() -> Column {
        Column::Id
    }

    fn canonical_id(model: &Model) -> Uuid {
        model.id
    }

    fn searchable_columns() -> Vec<Column> {
        vec![Column::Street, Column::City, Column::PostalCode]
    }

    fn ordering_map() -> OrderingMap<Column> {
        OrderingMap::new()
            .insert("city", Column::City)
            .insert("street", Column::Street)
            .insert("postalCode", Column::PostalCode)
            .insert("createdAt", Column::CreatedAt)
    }

    fn default_order() -> Vec<OrderKey<Column>> {
        vec![OrderKey::asc(Column::City), OrderKey::asc(Column::Street)]
    }

    fn ordering_policy() -> OrderingPolicy {
        OrderingPolicy::Reject
    }

    fn page_size_policy() -> PageSizePolicy {
        PageSizePolicy::DefaultSize(DEFAULT_PAGE_SIZE)
    }

    fn messages_policy() -> MessagesPolicy {
        MessagesPolicy::EmptyArray
    }

    fn reference_filters() -> Vec<ReferenceFilter<Column>> {
        vec![ReferenceFilter {
            name: "zoneId",
            column: Column::ZoneId,
            target: ResourceKind::Zone,
        }]
    }
}
