pub use super::address::Entity as Address;
pub use super::category::Entity as Category;
pub use super::faq::Entity as Faq;
pub use super::repair_request::Entity as RepairRequest;
pub use super::ticket::Entity as Ticket;
pub use super::wallet_transaction::Entity as WalletTransaction;
pub use super::zone::Entity as Zone;
