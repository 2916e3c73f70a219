//! Partition resolver — forward scan over the token sequence.

use tracing::{debug, trace};

use crate::partition::outcome::{FailureKind, PartitionFailure, PartitionOutcome};
use crate::partition::table::{Arity, ArityTable};
use crate::partition::term::{is_keyword_shaped, parse_term, TermKind};

/// Locate the boundary between the outer and inner invocations.
///
/// Greedy single forward scan with one token of lookahead; once a keyword
/// is consumed at its arity-determined width the scan never backtracks.
/// A bare token following a unary keyword is taken as that keyword's value
/// unless it is itself keyword-shaped, in which case the keyword is judged
/// to be missing its value. Pure: identical `(table, tokens)` always yield
/// an identical outcome.
///
/// ```
/// use argseam::partition::{resolve, ArityTable};
///
/// let table = ArityTable::from_lists("--verbose", "--delay").unwrap();
/// let tokens: Vec<String> = ["--verbose", "--delay", "5", "copy", "--infile=data.csv"]
///     .into_iter()
///     .map(String::from)
///     .collect();
///
/// let outcome = resolve(&table, &tokens);
/// assert_eq!(outcome.boundary(), Some(3));
/// assert_eq!(outcome.segment(1)[0], "copy");
/// ```
pub fn resolve(table: &ArityTable, tokens: &[String]) -> PartitionOutcome {
    let mut index = 0;
    while index < tokens.len() {
        let term = &tokens[index];
        let parsed = match parse_term(term) {
            TermKind::Positional => {
                trace!(index, term = %term, "positional token starts the inner segment");
                return success(tokens, index);
            }
            TermKind::Malformed => {
                return fail(
                    index,
                    FailureKind::MalformedTerm,
                    format!("malformed term '{term}' at position {index}"),
                );
            }
            TermKind::Keyword(parsed) => parsed,
        };
        let arity = match table.lookup(&parsed.keyword) {
            Some(arity) => arity,
            None => {
                return fail(
                    index,
                    FailureKind::UnrecognizedKeyword,
                    format!("unrecognized term '{term}' at position {index}"),
                );
            }
        };
        match arity {
            Arity::Nullary => {
                if parsed.value.is_some() {
                    return fail(
                        index,
                        FailureKind::UnexpectedValue,
                        format!("unexpected value for soliton keyword '{term}' at position {index}"),
                    );
                }
                trace!(index, keyword = %parsed.keyword, "consumed nullary keyword");
                index += 1;
            }
            Arity::Unary => {
                if parsed.value.is_some() {
                    trace!(index, keyword = %parsed.keyword, "consumed unary keyword, fused value");
                    index += 1;
                } else {
                    match tokens.get(index + 1) {
                        Some(next) if !is_keyword_shaped(next) => {
                            trace!(index, keyword = %parsed.keyword, value = %next, "consumed unary keyword, split value");
                            index += 2;
                        }
                        _ => {
                            return fail(
                                index,
                                FailureKind::MissingValue,
                                format!(
                                    "expected value for paired keyword '{term}' at position {index}"
                                ),
                            );
                        }
                    }
                }
            }
        }
    }
    success(tokens, index)
}

fn success(tokens: &[String], boundary: usize) -> PartitionOutcome {
    debug!(boundary, "sequence partitioned");
    PartitionOutcome::Success {
        tokens: tokens.to_vec(),
        boundary,
    }
}

fn fail(position: usize, kind: FailureKind, message: String) -> PartitionOutcome {
    debug!(position, kind = kind.as_str(), %message, "partition failed");
    PartitionOutcome::Failure(PartitionFailure {
        position,
        kind,
        message,
    })
}
