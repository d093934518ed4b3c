//! Lyra Compiler - Typed Intermediate Representation
//!
//! This crate defines the expression-level IR consumed by the JS backend.
//! IR trees are produced upstream by the frontend (parsing, type checking
//! and name resolution) and arrive here fully resolved: every symbol id is
//! valid and every call site is arity-checked against its callee. The
//! backend treats the tree as immutable input.

pub mod expr;
pub mod unit;

pub use expr::{Branch, ConstValue, Expr};
pub use unit::LoweringUnit;
