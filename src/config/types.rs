use serde::{Deserialize, Serialize};

use crate::partition::{ArityTable, SpecError};

/// Declared keyword lists for one embedded-tool pairing.
///
/// Both fields are comma-separated lists. `mono` keywords take no value;
/// `pair` keywords require exactly one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeywordSpec {
    /// Nullary keywords (e.g. `"-h,--help"`).
    #[serde(default)]
    pub mono: String,
    /// Unary keywords (e.g. `"--limit,--depth"`).
    #[serde(default)]
    pub pair: String,
}

impl KeywordSpec {
    /// Build the arity table the resolver consumes.
    pub fn arity_table(&self) -> Result<ArityTable, SpecError> {
        ArityTable::from_lists(&self.mono, &self.pair)
    }
}
