use std::collections::HashMap;

use super::tokens::{TokenKind, TokenValue, RESERVED_LOOKUP};

/// Canonical (kind, value) pair stored for one lexeme.
#[derive(Debug, Clone, PartialEq)]
pub struct SymbolEntry {
    pub kind: TokenKind,
    pub value: TokenValue,
}

/// Flat, case-sensitive mapping from lexeme to its canonical entry.
///
/// The table is seeded with the reserved words at construction and only ever
/// grows: `insert` never overwrites, so a keyword can never be shadowed by a
/// later identifier of the same spelling, and an identifier keeps the kind it
/// was first registered with. One scanning session owns exactly one table.
#[derive(Debug, Clone)]
pub struct SymbolTable {
    entries: HashMap<String, SymbolEntry>,
}

impl SymbolTable {
    pub fn new() -> SymbolTable {
        let mut entries = HashMap::new();

        for (lexeme, kind) in RESERVED_LOOKUP.iter() {
            entries.insert(
                (*lexeme).to_string(),
                SymbolEntry {
                    kind: *kind,
                    value: TokenValue::Lexeme((*lexeme).to_string()),
                },
            );
        }

        SymbolTable { entries }
    }

    pub fn lookup(&self, lexeme: &str) -> Option<&SymbolEntry> {
        self.entries.get(lexeme)
    }

    /// Registers `lexeme` unless it is already present.
    pub fn insert(&mut self, lexeme: &str, kind: TokenKind, value: TokenValue) {
        self.entries
            .entry(lexeme.to_string())
            .or_insert(SymbolEntry { kind, value });
    }

    /// Read-only enumeration of every (lexeme, kind) pair in the table.
    pub fn entries(&self) -> impl Iterator<Item = (&str, TokenKind)> {
        self.entries
            .iter()
            .map(|(lexeme, entry)| (lexeme.as_str(), entry.kind))
    }

    /// The identifiers discovered so far, sorted for stable reporting.
    pub fn identifiers(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .entries()
            .filter(|(_, kind)| *kind == TokenKind::Identifier)
            .map(|(lexeme, _)| lexeme)
            .collect();
        names.sort_unstable();

        names
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for SymbolTable {
    fn default() -> Self {
        SymbolTable::new()
    }
}
