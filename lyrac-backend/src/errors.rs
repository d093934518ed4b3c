//! Lowering error types

use lyrac_common::{CompilerError, SymbolId};
use thiserror::Error;

/// Errors raised while lowering IR expressions to JS.
///
/// All of these indicate a defect in an upstream phase (validation or
/// resolution) rather than bad user input; callers abort the current unit
/// instead of attempting recovery.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum LowerError {
    #[error("Conditional expression has no default branch and no provable coverage")]
    MissingDefaultBranch,

    #[error("Unresolved symbol id {id}")]
    UnknownSymbol { id: SymbolId },

    #[error("No lowering defined for {kind} constants")]
    UnsupportedConstant { kind: &'static str },

    #[error("Primary constructor symbol {id} has no owning type")]
    MissingOwnerType { id: SymbolId },
}

impl From<LowerError> for CompilerError {
    fn from(err: LowerError) -> Self {
        CompilerError::LowerError {
            message: err.to_string(),
        }
    }
}
