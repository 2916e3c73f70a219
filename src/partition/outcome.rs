//! Partition outcome — the result of one resolution.

/// Why a resolution failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Keyword-shaped token that does not parse (more than one `=`).
    MalformedTerm,
    /// Keyword not declared in the arity table.
    UnrecognizedKeyword,
    /// Fused value on a nullary keyword.
    UnexpectedValue,
    /// Unary keyword with no usable value token.
    MissingValue,
}

impl FailureKind {
    /// Stable identifier for machine-readable output. Automated callers
    /// branch on this (or on the enum itself), never on message text.
    pub fn as_str(&self) -> &'static str {
        match self {
            FailureKind::MalformedTerm => "malformed_term",
            FailureKind::UnrecognizedKeyword => "unrecognized_keyword",
            FailureKind::UnexpectedValue => "unexpected_value",
            FailureKind::MissingValue => "missing_value",
        }
    }
}

/// A failed resolution: where the scan stopped and why.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionFailure {
    /// Index of the token at which the problem was detected.
    pub position: usize,
    pub kind: FailureKind,
    /// Human-readable description. Not part of the contract.
    pub message: String,
}

/// Result of resolving a token sequence against an arity table.
///
/// The success variant owns a copy of the sequence so [`segment`] can hand
/// back the two halves without the caller re-supplying it.
///
/// [`segment`]: PartitionOutcome::segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PartitionOutcome {
    /// Boundary found: `[0, boundary)` is the outer invocation,
    /// `[boundary, len)` the inner one. `boundary` may equal the sequence
    /// length (the outer invocation consumed everything).
    Success {
        tokens: Vec<String>,
        boundary: usize,
    },
    /// The scan stopped at `failure.position`.
    Failure(PartitionFailure),
}

impl PartitionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, PartitionOutcome::Success { .. })
    }

    pub fn boundary(&self) -> Option<usize> {
        match self {
            PartitionOutcome::Success { boundary, .. } => Some(*boundary),
            PartitionOutcome::Failure(_) => None,
        }
    }

    pub fn failure(&self) -> Option<&PartitionFailure> {
        match self {
            PartitionOutcome::Success { .. } => None,
            PartitionOutcome::Failure(failure) => Some(failure),
        }
    }

    /// Outer (`0`) or inner (`1`) half of a resolved sequence.
    ///
    /// # Panics
    ///
    /// On a failure outcome, or when `which` is not 0 or 1. Both indicate
    /// misuse of the API rather than bad input data.
    pub fn segment(&self, which: usize) -> &[String] {
        match self {
            PartitionOutcome::Failure(_) => {
                panic!("invalid usage - no segments because the sequence did not resolve")
            }
            PartitionOutcome::Success { tokens, boundary } => match which {
                0 => &tokens[..*boundary],
                1 => &tokens[*boundary..],
                _ => panic!("invalid usage - segment index must be 0 or 1"),
            },
        }
    }
}
