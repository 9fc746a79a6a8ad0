use snafu::{ensure, OptionExt, Snafu};
use std::collections::BTreeMap;
use std::fmt::{self, Display};
use strum_macros::Display as StrumDisplay;

#[derive(Debug, Snafu, PartialEq)]
pub enum ScopeError {
    #[snafu(display("redefinition of variable '{name}'"))]
    Redeclared { name: String },
    #[snafu(display("variable '{name}' not declared"))]
    Undeclared { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, StrumDisplay)]
#[strum(serialize_all = "lowercase")]
pub enum DeclaredType {
    Int,
    Float,
    Double,
    String,
    Bool,
    Char,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub declared_type: DeclaredType,
    pub scope_level: usize,
    pub initialized: bool,
}

/// Flat namespace for the whole program. Scopes are never popped, so a name
/// can only be declared once per compilation.
#[derive(Debug, Default)]
pub struct SymbolTable {
    symbols: BTreeMap<String, Symbol>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        Self::default()
    }

    pub fn insert(
        &mut self,
        name: &str,
        declared_type: DeclaredType,
        scope_level: usize,
    ) -> Result<(), ScopeError> {
        ensure!(!self.lookup(name), RedeclaredSnafu { name });
        self.symbols.insert(
            name.to_string(),
            Symbol {
                declared_type,
                scope_level,
                initialized: false,
            },
        );
        Ok(())
    }

    pub fn lookup(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Result<&Symbol, ScopeError> {
        self.symbols.get(name).context(UndeclaredSnafu { name })
    }

    /// Unknown names are ignored.
    pub fn mark_initialized(&mut self, name: &str) {
        if let Some(symbol) = self.symbols.get_mut(name) {
            symbol.initialized = true;
        }
    }

    /// Symbols in name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Symbol)> {
        self.symbols.iter()
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }
}

impl Display for SymbolTable {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Symbol Table:")?;
        writeln!(f, "Name\tType\t\tScope\tInitialized")?;
        writeln!(f, "--------------------------------------------")?;
        for (name, symbol) in self.iter() {
            let initialized = if symbol.initialized { "Yes" } else { "No" };
            writeln!(
                f,
                "{}\t{}\t\t{}\t{}",
                name, symbol.declared_type, symbol.scope_level, initialized
            )?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_and_get() {
        let mut table = SymbolTable::new();
        assert!(table.is_empty());
        assert!(table.insert("x", DeclaredType::Float, 0).is_ok());
        assert_eq!(table.len(), 1);
        assert!(table.lookup("x"));
        assert_eq!(
            table.get("x"),
            Ok(&Symbol {
                declared_type: DeclaredType::Float,
                scope_level: 0,
                initialized: false,
            })
        );
    }

    #[test]
    fn test_redeclaration() {
        let mut table = SymbolTable::new();
        table.insert("x", DeclaredType::Int, 0).unwrap();
        assert_eq!(
            table.insert("x", DeclaredType::Char, 1),
            Err(ScopeError::Redeclared { name: "x".into() })
        );
        assert_eq!(table.get("x").unwrap().declared_type, DeclaredType::Int);
    }

    #[test]
    fn test_get_undeclared() {
        let table = SymbolTable::new();
        assert!(!table.lookup("nope"));
        assert_eq!(
            table.get("nope"),
            Err(ScopeError::Undeclared {
                name: "nope".into()
            })
        );
    }

    #[test]
    fn test_mark_initialized() {
        let mut table = SymbolTable::new();
        table.insert("x", DeclaredType::Int, 0).unwrap();
        table.mark_initialized("x");
        table.mark_initialized("ghost");
        assert!(table.get("x").unwrap().initialized);
        assert!(!table.lookup("ghost"));
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_render() {
        let mut table = SymbolTable::new();
        table.insert("b", DeclaredType::String, 0).unwrap();
        table.insert("a", DeclaredType::Bool, 0).unwrap();
        table.mark_initialized("b");
        let rendered = table.to_string();
        let rows: Vec<&str> = rendered.lines().skip(3).collect();
        assert_eq!(rows, vec!["a\tbool\t\t0\tNo", "b\tstring\t\t0\tYes"]);
    }
}
