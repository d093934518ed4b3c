//! IR expression nodes
//!
//! The expression tree is a closed tagged union matched exhaustively by the
//! backend, so an unhandled node kind is a compile-time error there rather
//! than a runtime one.

use lyrac_common::SymbolId;
use serde::{Deserialize, Serialize};

/// A typed IR expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// Expression body wrapper around a single inner expression
    Body(Box<Expr>),

    /// Compile-time constant
    Const(ConstValue),

    /// String concatenation over an ordered operand sequence
    StringConcat(Vec<Expr>),

    /// Read of a resolved value symbol
    GetValue(SymbolId),

    /// Assignment to a resolved variable symbol, usable as a value
    SetVariable { target: SymbolId, value: Box<Expr> },

    /// Call of a resolved callable symbol.
    ///
    /// `args` holds one slot per supplied argument position; a `None` slot
    /// marks a default argument elided at the call site. The slot count may
    /// be shorter than the callee's declared parameter count.
    Call {
        callee: SymbolId,
        dispatch_receiver: Option<Box<Expr>>,
        extension_receiver: Option<Box<Expr>>,
        args: Vec<Option<Expr>>,
    },

    /// Conditional expression over ordered (condition, result) branches
    /// with an optional default branch
    When {
        branches: Vec<Branch>,
        else_branch: Option<Box<Expr>>,
    },
}

/// One (condition, result) branch of a conditional expression
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub condition: Expr,
    pub result: Expr,
}

impl Branch {
    pub fn new(condition: Expr, result: Expr) -> Self {
        Self { condition, result }
    }
}

/// A constant's kind tag and raw value in one sum type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ConstValue {
    Str(String),
    Null,
    Bool(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Char(char),
    Float(f32),
    Double(f64),
}

impl ConstValue {
    /// Human-readable kind name, used in diagnostics
    pub fn kind_name(&self) -> &'static str {
        match self {
            ConstValue::Str(_) => "String",
            ConstValue::Null => "Null",
            ConstValue::Bool(_) => "Boolean",
            ConstValue::Byte(_) => "Byte",
            ConstValue::Short(_) => "Short",
            ConstValue::Int(_) => "Int",
            ConstValue::Long(_) => "Long",
            ConstValue::Char(_) => "Char",
            ConstValue::Float(_) => "Float",
            ConstValue::Double(_) => "Double",
        }
    }
}

impl Expr {
    /// Integer constant shorthand
    pub fn int(value: i32) -> Self {
        Expr::Const(ConstValue::Int(value))
    }

    /// String constant shorthand
    pub fn str(value: impl Into<String>) -> Self {
        Expr::Const(ConstValue::Str(value.into()))
    }

    /// Boolean constant shorthand
    pub fn bool(value: bool) -> Self {
        Expr::Const(ConstValue::Bool(value))
    }

    /// A call with positional arguments only, none elided
    pub fn simple_call(callee: SymbolId, args: Vec<Expr>) -> Self {
        Expr::Call {
            callee,
            dispatch_receiver: None,
            extension_receiver: None,
            args: args.into_iter().map(Some).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expr_shorthands() {
        assert_eq!(Expr::int(42), Expr::Const(ConstValue::Int(42)));
        assert_eq!(Expr::str("hi"), Expr::Const(ConstValue::Str("hi".to_string())));
        assert_eq!(Expr::bool(true), Expr::Const(ConstValue::Bool(true)));
    }

    #[test]
    fn test_simple_call_fills_slots() {
        let call = Expr::simple_call(3, vec![Expr::int(1), Expr::int(2)]);
        match call {
            Expr::Call {
                callee,
                dispatch_receiver,
                extension_receiver,
                args,
            } => {
                assert_eq!(callee, 3);
                assert!(dispatch_receiver.is_none());
                assert!(extension_receiver.is_none());
                assert_eq!(args, vec![Some(Expr::int(1)), Some(Expr::int(2))]);
            }
            _ => panic!("Expected Call"),
        }
    }

    #[test]
    fn test_const_kind_names() {
        assert_eq!(ConstValue::Long(1).kind_name(), "Long");
        assert_eq!(ConstValue::Char('a').kind_name(), "Char");
        assert_eq!(ConstValue::Null.kind_name(), "Null");
    }
}
