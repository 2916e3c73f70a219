//! Keyword term parser — raw token → shape classification.

const MARKER: char = '-';

/// A keyword token split into its keyword and optional fused value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordTerm {
    /// Keyword text as it appeared, markers included (e.g. `--limit`).
    pub keyword: String,
    /// Fused value when the token carried `=value`. The empty string is a
    /// legitimate value (`--limit=`).
    pub value: Option<String>,
}

/// Classification of one raw token, derived from the token alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TermKind {
    /// Not keyword-shaped. Signals the start of the inner invocation, not
    /// an error.
    Positional,
    /// Keyword-shaped and well-formed.
    Keyword(KeywordTerm),
    /// Keyword-shaped but carrying more than one `=`.
    Malformed,
}

/// A token is keyword-shaped when one or more leading markers are followed
/// by at least one non-marker character. A token of only markers (`-`,
/// `--`) is not keyword-shaped.
pub fn is_keyword_shaped(token: &str) -> bool {
    match token.find(|c| c != MARKER) {
        Some(first_other) => first_other > 0,
        None => false,
    }
}

/// Classify a single token. No lookahead: the split-value form of a unary
/// keyword is the resolver's concern.
pub fn parse_term(token: &str) -> TermKind {
    if !is_keyword_shaped(token) {
        return TermKind::Positional;
    }
    match token.find('=') {
        None => TermKind::Keyword(KeywordTerm {
            keyword: token.to_string(),
            value: None,
        }),
        Some(at) => {
            let value = &token[at + 1..];
            if value.contains('=') {
                TermKind::Malformed
            } else {
                TermKind::Keyword(KeywordTerm {
                    keyword: token[..at].to_string(),
                    value: Some(value.to_string()),
                })
            }
        }
    }
}
