//! End-to-end lowering over a serialized unit

use lyrac_backend::{ExpressionLowerer, JsBinaryOp, JsExpr};
use lyrac_common::SymbolInfo;
use lyrac_ir::{Expr, LoweringUnit};
use pretty_assertions::assert_eq;

#[test]
fn test_unit_survives_serialization_and_lowers() {
    let unit = LoweringUnit::new(
        vec![
            SymbolInfo::value("x"),
            SymbolInfo::function("greet", 2),
            SymbolInfo::primary_constructor("Greeting", 1),
        ],
        vec![
            Expr::StringConcat(vec![Expr::str("a"), Expr::GetValue(0)]),
            Expr::Call {
                callee: 1,
                dispatch_receiver: None,
                extension_receiver: None,
                args: vec![Some(Expr::int(1))],
            },
            Expr::simple_call(2, vec![Expr::str("hi")]),
        ],
    );

    // The driver's wire format: the unit must survive a JSON round trip
    // with the exact same lowering result.
    let json = serde_json::to_string(&unit).unwrap();
    let decoded: LoweringUnit = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, unit);

    let table = decoded.symbol_table();
    let lowerer = ExpressionLowerer::new(&table);
    let lowered: Vec<JsExpr> = decoded
        .roots
        .iter()
        .map(|root| lowerer.lower(root).unwrap())
        .collect();

    assert_eq!(
        lowered[0],
        JsExpr::binary(
            JsBinaryOp::Add,
            JsExpr::binary(
                JsBinaryOp::Add,
                JsExpr::Str(String::new()),
                JsExpr::Str("a".to_string()),
            ),
            JsExpr::name("x"),
        )
    );

    assert_eq!(
        lowered[1],
        JsExpr::Invocation {
            callee: Box::new(JsExpr::name("greet")),
            args: vec![JsExpr::Int(1), JsExpr::undefined()],
        }
    );

    assert_eq!(
        lowered[2],
        JsExpr::New {
            type_name: "Greeting".to_string(),
            args: vec![JsExpr::Str("hi".to_string())],
        }
    );
}

#[test]
fn test_js_ast_serializes_deterministically() {
    let expr = JsExpr::Invocation {
        callee: Box::new(JsExpr::qualified_name("foo", JsExpr::name("obj"))),
        args: vec![JsExpr::Int(5), JsExpr::undefined()],
    };

    let first = serde_json::to_string(&expr).unwrap();
    let second = serde_json::to_string(&expr).unwrap();
    assert_eq!(first, second);

    let decoded: JsExpr = serde_json::from_str(&first).unwrap();
    assert_eq!(decoded, expr);
}
