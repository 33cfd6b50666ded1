pub mod composer;
pub mod ledger;

pub use composer::{compose_line_item, LineItemDraft};
pub use ledger::CartLedger;
