//! # Case Rules
//!
//! The "case file" crate - the vocabulary of facts, the suspect roster, and the
//! configuration that describes a single mystery. It holds no inference logic;
//! `deduction_core` reasons over the data defined here.

pub mod case_file;
pub mod entities;
pub mod error;
pub mod vocabulary;

pub use case_file::*;
pub use entities::*;
pub use error::*;
pub use vocabulary::*;
