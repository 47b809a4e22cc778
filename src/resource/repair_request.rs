use entity::repair_request::{Column, Entity, Model};
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

pub struct RepairRequestAdapter;

impl ResourceAdapter for RepairRequestAdapter {
    type Entity = Entity;
    type Model = Model;

    const KIND: ResourceKind = ResourceKind::RepairRequest;

    fn id_column() -> Column {
        Column::Id
    }

    fn canonical_id(model: &Model) -> Uuid {
        model.id
    }

    fn searchable_columns() -> Vec<Column> {
        vec![Column::Title, Column::Description]
    }

    fn ordering_map() -> OrderingMap<Column> {
        OrderingMap::new()
            .insert("title", Column::Title)
            .insert("status", Column::Status)
            .insert("createdAt", Column::CreatedAt)
    }

    fn default_order() -> Vec<OrderKey<Column>> {
        vec![OrderKey::desc(Column::CreatedAt)]
    }

    fn ordering_policy() -> OrderingPolicy {
        OrderingPolicy::DropSilently
    }

    fn page_size_policy() -> PageSizePolicy {
        PageSizePolicy::DefaultSize(DEFAULT_PAGE_SIZE)
    }

    fn messages_policy() -> MessagesPolicy {
        MessagesPolicy::Null
    }

    fn reference_filters() -> Vec<ReferenceFilter<Column>> {
        vec![ReferenceFilter {
            name: "ticketId",
            column: Column::TicketId,
            target: ResourceKind::Ticket,
        }]
    }
}
