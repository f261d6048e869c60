pub mod entities;
pub mod handle;
pub mod ledger;
