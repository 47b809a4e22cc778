use entity::wallet_transaction::{Column, Entity, Model};
use uuid::Uuid;

use crate::{
    model::{
        ordering::{OrderKey, OrderingMap, OrderingPolicy},
        page::{MessagesPolicy, PageSizePolicy},
    },
    resource::{adapter::ResourceAdapter, ResourceKind},
};

/// Wallet history is returned in full unless the client asks for a page size.
pub struct WalletTransactionAdapter;

impl ResourceAdapter for WalletTransactionAdapter {
    type Entity = Entity;
    type Model = Model;

    const KIND: ResourceKind = ResourceKind::WalletTransaction;

    fn id_column() -> Column {
        Column::Id
    }

    fn canonical_id(model: &Model) -> Uuid {
        model.id
    }

    fn searchable_columns() -> Vec<Column> {
        vec![Column::Reference, Column::Description]
    }

    fn ordering_map() -> OrderingMap<Column> {
        OrderingMap::new()
            .insert("amount", Column::Amount)
            .insert("createdAt", Column::CreatedAt)
    }

    fn default_order() -> Vec<OrderKey<Column>> {
        vec![OrderKey::desc(Column::CreatedAt)]
    }

    fn ordering_policy() -> OrderingPolicy {
        OrderingPolicy::DropSilently
    }

    fn page_size_policy() -> PageSizePolicy {
        PageSizePolicy::Unpaged
    }

    fn messages_policy() -> MessagesPolicy {
        MessagesPolicy::EmptyArray
    }
}
