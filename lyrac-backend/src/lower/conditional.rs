//! Conditional branch folding
//!
//! Turns a sequence of lowered (condition, result) branches plus an
//! optional default into a nested ternary expression.

use crate::js_ast::JsExpr;

/// Fold branches into a right-nested conditional with `default` as the
/// innermost fallback.
///
/// Returns `None` when there is no default: this routine makes no attempt
/// to prove that the conditions cover all cases, so without a fallback it
/// cannot produce a well-formed expression. Callers treat `None` as a
/// fatal contract violation that upstream validation should have rejected.
/// Whether that forced failure is the intended contract or a known
/// limitation is an open question inherited from the original design.
pub fn fold_conditional(
    branches: Vec<(JsExpr, JsExpr)>,
    default: Option<JsExpr>,
) -> Option<JsExpr> {
    let seed = default?;
    Some(
        branches
            .into_iter()
            .rev()
            .fold(seed, |else_expr, (test, then_expr)| {
                JsExpr::conditional(test, then_expr, else_expr)
            }),
    )
}
