//! Lyra Compiler - JS Expression Lowering Backend
//!
//! This crate translates typed IR expressions into JS AST nodes:
//! - JS AST: output expression node definitions
//! - Lowering: the recursive expression visitor
//! - Conditional folding: nests (condition, result) branches into ternaries
//!
//! Rendering the JS AST to source text belongs to a separate printer and is
//! not part of this crate.

pub mod errors;
pub mod js_ast;
pub mod lower;

pub use errors::LowerError;
pub use js_ast::{JsBinaryOp, JsExpr, JsUnaryOp};
pub use lower::{fold_conditional, ConstFallback, ExpressionLowerer};
