//! # Deduction Core
//!
//! The reasoning half of Casebook. This crate reads a case from `case_rules`,
//! keeps the facts gathered during play, and derives which suspects look
//! guilty by forward chaining over the case's rules.
//!
//! ## Core Components
//!
//! - **knowledge_base**: The fact store - typed triples with a polarity
//! - **rules**: Implication rules with a single subject placeholder
//! - **inference**: Forward chaining plus alibi contradiction detection
//! - **query**: Read-only projections for the narrative layer
//! - **events**: Interrogation and scene outcomes that become facts
//! - **session**: One investigation, owning its facts, rules and suspects
//!
//! The core performs no I/O and never fails; errors only arise when a session
//! is built from a case file or handed an event about an unknown suspect.

pub mod error;
pub mod events;
pub mod inference;
pub mod knowledge_base;
pub mod query;
pub mod rules;
pub mod session;

pub use error::*;
pub use events::*;
pub use inference::*;
pub use knowledge_base::*;
pub use query::*;
pub use rules::*;
pub use session::*;
