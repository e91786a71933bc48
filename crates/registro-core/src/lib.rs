//! Core types for the student registry: the record, its table rendering,
//! number formatting, and the repository contract with its in-memory store.

pub mod error;
pub mod format;
pub mod registry;
pub mod student;
pub mod table;
