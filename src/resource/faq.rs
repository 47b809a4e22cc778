use entity::faq::{Column, Entity, Model};
use uuid::Uuid;

use crate::{
    model::{
        ordering::{OrderKey, OrderingMap, OrderingPolicy},
        page::{MessagesPolicy, PageSizePolicy, DEFAULT_PAGE_SIZE},
    },
    resource::{adapter::ResourceAdapter, ResourceKind},
};

pub struct FaqAdapter;

impl ResourceAdapter for FaqAdapter {
    type Entity = Entity;
    type Model = Model;

    const KIND: ResourceKind = ResourceKind::Faq;

    fn id_column() -> Column {
        Column::Id
    }

    fn canonical_id(model: &Model) -> Uuid {
        model.id
    }

    fn searchable_columns() -> Vec<Column> {
        vec![Column::Question, Column::Answer]
    }

    fn ordering_map() -> OrderingMap<Column> {
        OrderingMap::new()
            .insert("question", Column::Question)
            .insert("sortOrder", Column::Position)
            .insert("createdAt", Column::CreatedAt)
    }

    fn default_order() -> Vec<OrderKey<Column>> {
        vec![OrderKey::asc(Column::Position)]
    }

    fn ordering_policy() -> OrderingPolicy {
        OrderingPolicy::DropSilently
    }

    fn page_size_policy() -> PageSizePolicy {
        PageSizePolicy::DefaultSize(DEFAULT_PAGE_SIZE)
    }

    fn messages_policy() -> MessagesPolicy {
        MessagesPolicy::EmptyArray
    }
}
