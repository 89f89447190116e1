//! Solscope turns compiler-emitted Solidity AST documents into a
//! structured, queryable domain model: each contract's variables, mappings,
//! functions, constructor, events, modifiers, structs, enums, and
//! inheritance, with canonical type strings and reconstructed initializer
//! values.
//!
//! ```text
//! JSON document → SourceDocument → extract → Contract → ContractRegistry
//! ```
//!
//! The walk is total where the input format is loose: unknown node
//! kinds are skipped and unrenderable type or value expressions degrade to
//! empty strings, so only unreadable files, malformed JSON, and documents
//! without an AST are hard errors.

pub use crate::errors::ExplorerError;
pub use crate::model::Contract;
pub use crate::registry::{build_registry, ContractRegistry};

pub mod ast;
pub mod cli;
pub mod errors;
pub mod extract;
pub mod loader;
pub mod model;
pub mod registry;
pub mod types;
pub mod values;
