//! Resource adapters for every resource exposed through the legacy API.
//!
//! Each adapter is a thin declaration of searchable columns, ordering names and the
//! per-endpoint policies legacy clients depend on.

pub mod adapter;
pub mod address;
pub mod category;
pub mod faq;
pub mod repair_request;
pub mod ticket;
pub mod wallet_transaction;
pub mod zone;

use sea_orm::DatabaseConnection;
use std::fmt;

use crate::{data::candidates::AdapterCandidates, service::identifier::CandidateSource};

pub use adapter::{ColumnOf, ReferenceFilter, ResourceAdapter};
pub use address::AddressAdapter;
pub use category::CategoryAdapter;
pub use faq::FaqAdapter;
pub use repair_request::RepairRequestAdapter;
pub use ticket::TicketAdapter;
pub use wallet_transaction::WalletTransactionAdapter;
pub use zone::ZoneAdapter;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ResourceKind {
    Address,
    Category,
    Faq,
    RepairRequest,
    Ticket,
    WalletTransaction,
    Zone,
}

impl ResourceKind {
    pub fn name(self) -> &'static str {
        match self {
            ResourceKind::Address => "address",
            ResourceKind::Category => "category",
            ResourceKind::Faq => "faq",
            ResourceKind::RepairRequest => "repair_request",
            ResourceKind::Ticket => "ticket",
            ResourceKind::WalletTransaction => "wallet_transaction",
            ResourceKind::Zone => "zone",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Candidate source scanning every record of `kind`.
pub fn candidates_for<'a>(
    db: &'a DatabaseConnection,
    kind: ResourceKind,
    batch_size: u64,
) -> Box<dyn CandidateSource + 'a> {
    match kind {
        ResourceKind::Address => Box::new(AdapterCandidates::<AddressAdapter>::new(db, batch_size)),
        ResourceKind::Category => {
            Box::new(AdapterCandidates::<CategoryAdapter>::new(db, batch_size))
        }
        ResourceKind::Faq => Box::new(AdapterCandidates::<FaqAdapter>::new(db, batch_size)),
        ResourceKind::RepairRequest => {
            Box::new(AdapterCandidates::<RepairRequestAdapter>::new(db, batch_size))
        }
        ResourceKind::Ticket => Box::new(AdapterCandidates::<TicketAdapter>::new(db, batch_size)),
        ResourceKind::WalletTransaction => {
            Box::new(AdapterCandidates::<WalletTransactionAdapter>::new(db, batch_size))
        }
        ResourceKind::Zone => Box::new(AdapterCandidates::<ZoneAdapter>::new(db, batch_size)),
    }
}
