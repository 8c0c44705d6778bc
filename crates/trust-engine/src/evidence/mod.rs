//! Evidence ledger: the ordered, append-only evidence history of one subject.

mod ledger;

pub use ledger::EvidenceLedger;
