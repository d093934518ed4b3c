//! Expression lowering
//!
//! This module translates one typed IR expression into one JS expression,
//! recursing into children first. The visitor owns no state; everything it
//! needs comes from the symbol table it borrows, so independent lowering
//! calls may share one table.

mod conditional;

pub use conditional::fold_conditional;

use crate::errors::LowerError;
use crate::js_ast::{JsBinaryOp, JsExpr};
use log::trace;
use lyrac_common::{SymbolId, SymbolTable};
use lyrac_ir::{Branch, ConstValue, Expr};

/// Extension point for constant kinds this backend has no lowering for.
///
/// Long and Char constants need a target-side representation (boxed longs,
/// single-char strings, code points) that is a policy decision owned
/// elsewhere. The lowerer routes them here instead of guessing an encoding.
pub trait ConstFallback {
    fn lower_const(&self, value: &ConstValue) -> Result<JsExpr, LowerError>;
}

/// Lowers typed IR expressions to JS expressions.
///
/// Pure and stateless: the same input expression always yields a
/// structurally identical output tree.
pub struct ExpressionLowerer<'a> {
    symbols: &'a SymbolTable,
    const_fallback: Option<&'a dyn ConstFallback>,
}

impl<'a> ExpressionLowerer<'a> {
    pub fn new(symbols: &'a SymbolTable) -> Self {
        Self {
            symbols,
            const_fallback: None,
        }
    }

    /// Use `fallback` for constant kinds the lowerer itself rejects
    pub fn with_const_fallback(mut self, fallback: &'a dyn ConstFallback) -> Self {
        self.const_fallback = Some(fallback);
        self
    }

    /// Lower one IR expression to one JS expression
    pub fn lower(&self, expr: &Expr) -> Result<JsExpr, LowerError> {
        match expr {
            Expr::Body(inner) => self.lower(inner),

            Expr::Const(value) => self.lower_const(value),

            Expr::StringConcat(operands) => self.lower_string_concat(operands),

            Expr::GetValue(id) => Ok(JsExpr::name(self.resolve_name(*id)?)),

            Expr::SetVariable { target, value } => {
                let value = self.lower(value)?;
                let target = JsExpr::name(self.resolve_name(*target)?);
                Ok(JsExpr::assign(target, value))
            }

            Expr::Call {
                callee,
                dispatch_receiver,
                extension_receiver,
                args,
            } => self.lower_call(
                *callee,
                dispatch_receiver.as_deref(),
                extension_receiver.as_deref(),
                args,
            ),

            Expr::When {
                branches,
                else_branch,
            } => self.lower_when(branches, else_branch.as_deref()),
        }
    }

    fn resolve_name(&self, id: SymbolId) -> Result<&'a str, LowerError> {
        self.symbols
            .name(id)
            .ok_or(LowerError::UnknownSymbol { id })
    }

    fn lower_const(&self, value: &ConstValue) -> Result<JsExpr, LowerError> {
        match value {
            ConstValue::Str(s) => Ok(JsExpr::Str(s.clone())),
            ConstValue::Null => Ok(JsExpr::Null),
            ConstValue::Bool(b) => Ok(JsExpr::Bool(*b)),
            ConstValue::Byte(v) => Ok(JsExpr::Int(i32::from(*v))),
            ConstValue::Short(v) => Ok(JsExpr::Int(i32::from(*v))),
            ConstValue::Int(v) => Ok(JsExpr::Int(*v)),
            ConstValue::Float(v) => Ok(JsExpr::Double(f64::from(*v))),
            ConstValue::Double(v) => Ok(JsExpr::Double(*v)),
            ConstValue::Long(_) | ConstValue::Char(_) => match self.const_fallback {
                Some(fallback) => fallback.lower_const(value),
                None => Err(LowerError::UnsupportedConstant {
                    kind: value.kind_name(),
                }),
            },
        }
    }

    /// Fold operands left to right, seeded with an empty string literal.
    ///
    /// The seed forces string coercion even when no operand is textual, and
    /// the fold direction preserves left-to-right evaluation order.
    fn lower_string_concat(&self, operands: &[Expr]) -> Result<JsExpr, LowerError> {
        let mut acc = JsExpr::Str(String::new());
        for operand in operands {
            acc = JsExpr::binary(JsBinaryOp::Add, acc, self.lower(operand)?);
        }
        Ok(acc)
    }

    fn lower_call(
        &self,
        callee: SymbolId,
        dispatch_receiver: Option<&Expr>,
        extension_receiver: Option<&Expr>,
        args: &[Option<Expr>],
    ) -> Result<JsExpr, LowerError> {
        let info = self
            .symbols
            .get(callee)
            .ok_or(LowerError::UnknownSymbol { id: callee })?;

        trace!(
            "lowering call to '{}' ({} declared parameters, {} supplied slots)",
            info.name,
            info.param_count,
            args.len()
        );

        let dispatch_receiver = dispatch_receiver.map(|e| self.lower(e)).transpose()?;
        let extension_receiver = extension_receiver.map(|e| self.lower(e)).transpose()?;

        // One output argument per declared parameter, always. An elided
        // default argument becomes the undefined placeholder rather than a
        // shorter list, so callees detect omission by identity against
        // `undefined`. Slots past the declared count are never read.
        let mut arguments = Vec::with_capacity(info.param_count as usize);
        for position in 0..info.param_count as usize {
            match args.get(position).and_then(Option::as_ref) {
                Some(arg) => arguments.push(self.lower(arg)?),
                None => arguments.push(JsExpr::undefined()),
            }
        }

        if info.is_primary_constructor {
            // Construction has no receiver; a dispatch receiver reaching
            // this branch is dropped.
            let type_name = info
                .owner_type
                .clone()
                .ok_or(LowerError::MissingOwnerType { id: callee })?;
            return Ok(JsExpr::New {
                type_name,
                args: arguments,
            });
        }

        let callee_ref = match dispatch_receiver {
            Some(receiver) => JsExpr::qualified_name(&info.name, receiver),
            None => JsExpr::name(&info.name),
        };

        // An extension callable is an ordinary callable taking its receiver
        // as an implicit first argument.
        let args = match extension_receiver {
            Some(receiver) => {
                let mut with_receiver = Vec::with_capacity(arguments.len() + 1);
                with_receiver.push(receiver);
                with_receiver.extend(arguments);
                with_receiver
            }
            None => arguments,
        };

        Ok(JsExpr::Invocation {
            callee: Box::new(callee_ref),
            args,
        })
    }

    fn lower_when(
        &self,
        branches: &[Branch],
        else_branch: Option<&Expr>,
    ) -> Result<JsExpr, LowerError> {
        let mut lowered = Vec::with_capacity(branches.len());
        for branch in branches {
            lowered.push((self.lower(&branch.condition)?, self.lower(&branch.result)?));
        }
        let default = else_branch.map(|e| self.lower(e)).transpose()?;

        fold_conditional(lowered, default).ok_or(LowerError::MissingDefaultBranch)
    }
}
