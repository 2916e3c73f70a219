//! Arity table — single source of truth for the outer tool's keywords.

use std::collections::HashMap;

use thiserror::Error;

/// Whether a keyword takes a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    /// Takes no value (e.g. `--verbose`).
    Nullary,
    /// Requires exactly one value, fused (`--limit=5`) or following
    /// (`--limit 5`).
    Unary,
}

impl Arity {
    /// External label used by spec files and CLI flags.
    pub fn label(self) -> &'static str {
        match self {
            Arity::Nullary => "mono",
            Arity::Unary => "pair",
        }
    }
}

/// Errors raised while building an [`ArityTable`].
#[derive(Debug, Error)]
pub enum SpecError {
    #[error("empty keyword term in '{}' list", .arity.label())]
    EmptyTerm { arity: Arity },

    #[error("duplicate declaration of keyword '{keyword}'")]
    DuplicateTerm { keyword: String },
}

/// Immutable mapping from keyword text to arity.
///
/// Built once per keyword specification; lookups take `&self` and there is
/// no interior mutability, so a table can be shared across any number of
/// concurrent resolutions.
#[derive(Debug, Clone, Default)]
pub struct ArityTable {
    entries: HashMap<String, Arity>,
}

impl ArityTable {
    /// Build from explicit term slices. Every term must be non-empty and
    /// unique across the combined nullary + unary set.
    pub fn build(nullary: &[&str], unary: &[&str]) -> Result<Self, SpecError> {
        let mut entries = HashMap::new();
        for (terms, arity) in [(nullary, Arity::Nullary), (unary, Arity::Unary)] {
            for term in terms {
                if term.is_empty() {
                    return Err(SpecError::EmptyTerm { arity });
                }
                if entries.insert(term.to_string(), arity).is_some() {
                    return Err(SpecError::DuplicateTerm {
                        keyword: term.to_string(),
                    });
                }
            }
        }
        Ok(Self { entries })
    }

    /// Build from the conventional comma-separated list strings. Segments
    /// are trimmed and empty segments dropped, so `"-h,,--help"` is fine.
    pub fn from_lists(mono: &str, pair: &str) -> Result<Self, SpecError> {
        Self::build(&split_terms(mono), &split_terms(pair))
    }

    pub fn lookup(&self, keyword: &str) -> Option<Arity> {
        self.entries.get(keyword).copied()
    }
}

fn split_terms(list: &str) -> Vec<&str> {
    list.split(',')
        .map(str::trim)
        .filter(|term| !term.is_empty())
        .collect()
}
