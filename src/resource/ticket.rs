use entity::ticket::{Column, Entity, Model};
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

pub struct TicketAdapter;

impl ResourceAdapter for TicketAdapter {
    type Entity = Entity;
    type Model = Model;

    const KIND: ResourceKind = ResourceKind::Ticket;

    fn id_column() -> Column {
        Column::Id
    }

    fn canonical_id(model: &Model) -> Uuid {
        model.id
    }

    fn searchable_columns() -> Vec<Column> {
        vec![Column::Subject, Column::Body, Column::Status]
    }

    fn ordering_map() -> OrderingMap<Column> {
        OrderingMap::new()
            .insert("subject", Column::Subject)
            .insert("status", Column::Status)
            .insert("priority", Column::Priority)
            .insert("createdAt", Column::CreatedAt)
    }

    fn default_order() -> Vec<OrderKey<Column>> {
        vec![OrderKey::desc(Column::CreatedAt)]
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

    fn reference_filters() -> Vec<ReferenceFilter<Column>> {
        vec![ReferenceFilter {
            name: "categoryId",
            column: Column::CategoryId,
            target: ResourceKind::Category,
        }]
    }
}
