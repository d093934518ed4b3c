//! Lyra Compiler - Common Types and Utilities
//!
//! This crate contains shared types, error definitions, and the symbol
//! resolution table used across all components of the Lyra JS backend.

pub mod error;
pub mod symbols;

pub use error::{CompilerError, Diagnostic, ErrorReporter, Severity};
pub use symbols::{SymbolId, SymbolInfo, SymbolTable};
