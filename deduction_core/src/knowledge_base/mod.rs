//! Knowledge Base module - the set of facts known about a case.
//!
//! The store consists of:
//! - **Facts**: typed triples `relation(subject, object)` with a polarity
//! - **Index**: facts grouped by `(subject, relation)` for rule matching and
//!   stable enumeration order

mod fact;
mod store;

pub use fact::*;
pub use store::*;
