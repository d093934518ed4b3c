//! Serializable lowering unit
//!
//! A `LoweringUnit` is the wire form the driver consumes: the symbol
//! declarations of one compilation unit plus the root expressions to lower.
//! Symbol ids inside the expressions index into `symbols` in order.

use crate::Expr;
use lyrac_common::{SymbolInfo, SymbolTable};
use serde::{Deserialize, Serialize};

/// One compilation unit's worth of lowering input
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoweringUnit {
    pub symbols: Vec<SymbolInfo>,
    pub roots: Vec<Expr>,
}

impl LoweringUnit {
    pub fn new(symbols: Vec<SymbolInfo>, roots: Vec<Expr>) -> Self {
        Self { symbols, roots }
    }

    /// Build the symbol table the unit's expressions were resolved against
    pub fn symbol_table(&self) -> SymbolTable {
        let mut table = SymbolTable::new();
        for info in &self.symbols {
            table.insert(info.clone());
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_table_preserves_order() {
        let unit = LoweringUnit::new(
            vec![SymbolInfo::value("x"), SymbolInfo::function("f", 1)],
            vec![Expr::GetValue(0)],
        );

        let table = unit.symbol_table();
        assert_eq!(table.name(0), Some("x"));
        assert_eq!(table.name(1), Some("f"));
        assert_eq!(table.param_count(1), Some(1));
    }
}
