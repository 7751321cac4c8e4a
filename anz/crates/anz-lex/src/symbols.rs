//! Identifier occurrence table.

use indexmap::IndexMap;

use anz_util::Position;

/// One identifier seen during a run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolEntry {
    pub name: String,
    /// Where the identifier first appears.
    pub first_seen: Position,
    /// How many times it appears.
    pub occurrences: usize,
}

/// Identifiers of one analysis run, in first-occurrence order.
///
/// # Example
///
/// ```
/// use anz_lex::SymbolTable;
/// use anz_util::Position;
///
/// let mut table = SymbolTable::new();
/// table.record("x", Position::new(1, 1, 0));
/// table.record("y", Position::new(1, 3, 2));
/// table.record("x", Position::new(1, 5, 4));
///
/// let x = table.get("x").unwrap();
/// assert_eq!(x.occurrences, 2);
/// assert_eq!(x.first_seen, Position::new(1, 1, 0));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolTable {
    entries: IndexMap<String, SymbolEntry>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one occurrence of `lexeme` at `position`.
    pub fn record(&mut self, lexeme: &str, position: Position) {
        match self.entries.get_mut(lexeme) {
            Some(entry) => entry.occurrences += 1,
            None => {
                self.entries.insert(
                    lexeme.to_string(),
                    SymbolEntry {
                        name: lexeme.to_string(),
                        first_seen: position,
                        occurrences: 1,
                    },
                );
            },
        }
    }

    pub fn get(&self, name: &str) -> Option<&SymbolEntry> {
        self.entries.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Entries in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = &SymbolEntry> {
        self.entries.values()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'t> IntoIterator for &'t SymbolTable {
    type Item = &'t SymbolEntry;
    type IntoIter = indexmap::map::Values<'t, String, SymbolEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.values()
    }
}
