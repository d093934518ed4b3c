//! Symbol resolution for the JS backend
//!
//! This module defines the symbol table consumed by the lowering stage. By
//! the time expressions reach lowering, name resolution has already run;
//! the table is a read-only mapping from symbol ids to the declaration data
//! lowering needs: the output identifier, the declared parameter count and
//! the primary-constructor flag.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Symbol identifier
pub type SymbolId = u32;

/// Declaration data attached to a symbol.
///
/// `param_count` is meaningful for callables only; value symbols keep it at
/// zero. Constructors additionally carry the name of the owning type, which
/// is what a `new` expression names in the output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolInfo {
    pub name: String,
    pub param_count: u32,
    pub is_primary_constructor: bool,
    pub owner_type: Option<String>,
}

impl SymbolInfo {
    /// A plain value symbol (variable, parameter)
    pub fn value(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_count: 0,
            is_primary_constructor: false,
            owner_type: None,
        }
    }

    /// A callable symbol with a declared parameter count
    pub fn function(name: impl Into<String>, param_count: u32) -> Self {
        Self {
            name: name.into(),
            param_count,
            is_primary_constructor: false,
            owner_type: None,
        }
    }

    /// The primary constructor of `owner_type`
    pub fn primary_constructor(owner_type: impl Into<String>, param_count: u32) -> Self {
        let owner = owner_type.into();
        Self {
            name: format!("{}.<init>", owner),
            param_count,
            is_primary_constructor: true,
            owner_type: Some(owner),
        }
    }

    pub fn with_owner(mut self, owner_type: impl Into<String>) -> Self {
        self.owner_type = Some(owner_type.into());
        self
    }
}

impl fmt::Display for SymbolInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// Symbol table mapping ids to declaration data.
///
/// Ids are assigned sequentially on insertion and are stable for the
/// lifetime of the table. Lookups are pure; an id that misses here was
/// never registered, which downstream treats as an upstream contract
/// violation rather than a recoverable condition.
#[derive(Debug, Clone, Default)]
pub struct SymbolTable {
    symbols: Vec<SymbolInfo>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self {
            symbols: Vec::new(),
        }
    }

    /// Register a symbol, returning its id
    pub fn insert(&mut self, info: SymbolInfo) -> SymbolId {
        let id = self.symbols.len() as SymbolId;
        self.symbols.push(info);
        id
    }

    /// Look up a symbol by id
    pub fn get(&self, id: SymbolId) -> Option<&SymbolInfo> {
        self.symbols.get(id as usize)
    }

    /// Resolve a symbol to its output identifier
    pub fn name(&self, id: SymbolId) -> Option<&str> {
        self.get(id).map(|info| info.name.as_str())
    }

    /// Declared parameter count of a callable symbol
    pub fn param_count(&self, id: SymbolId) -> Option<u32> {
        self.get(id).map(|info| info.param_count)
    }

    /// Number of registered symbols
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_info_builders() {
        let value = SymbolInfo::value("x");
        assert_eq!(value.name, "x");
        assert_eq!(value.param_count, 0);
        assert!(!value.is_primary_constructor);

        let func = SymbolInfo::function("foo", 2);
        assert_eq!(func.name, "foo");
        assert_eq!(func.param_count, 2);
        assert!(!func.is_primary_constructor);

        let ctor = SymbolInfo::primary_constructor("Point", 2);
        assert!(ctor.is_primary_constructor);
        assert_eq!(ctor.owner_type.as_deref(), Some("Point"));
        assert_eq!(ctor.param_count, 2);
    }

    #[test]
    fn test_symbol_table_sequential_ids() {
        let mut table = SymbolTable::new();
        let a = table.insert(SymbolInfo::value("a"));
        let b = table.insert(SymbolInfo::value("b"));

        assert_eq!(a, 0);
        assert_eq!(b, 1);
        assert_eq!(table.len(), 2);
        assert_eq!(table.name(a), Some("a"));
        assert_eq!(table.name(b), Some("b"));
    }

    #[test]
    fn test_symbol_table_unknown_id() {
        let table = SymbolTable::new();
        assert!(table.is_empty());
        assert_eq!(table.get(7), None);
        assert_eq!(table.name(7), None);
        assert_eq!(table.param_count(7), None);
    }

    #[test]
    fn test_param_count_lookup() {
        let mut table = SymbolTable::new();
        let id = table.insert(SymbolInfo::function("take3", 3));
        assert_eq!(table.param_count(id), Some(3));
    }
}
