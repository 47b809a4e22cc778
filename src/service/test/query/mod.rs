use crate::{
    error::{validation::ValidationError, AppError},
    model::search::SearchSpec,
    resource::{
        AddressAdapter, CategoryAdapter, FaqAdapter, RepairRequestAdapter, TicketAdapter,
        WalletTransactionAdapter, ZoneAdapter,
    },
    service::{
        identifier::{virtualize, CollisionPolicy, LegacyIdIndex, ScanOptions},
        query::LegacyQueryService,
    },
};
use test_utils::{
    builder::TestBuilder,
    factory::{
        self, category::CategoryFactory, faq::FaqFactory, repair_request::RepairRequestFactory,
        ticket::TicketFactory, zone::ZoneFactory,
    },
};
use uuid::Uuid;

mod references;
mod search;
