//! argseam — locate the seam between two concatenated tool invocations.
//!
//! When one tool embeds another, their argument sequences end up catenated
//! on a single command line:
//!
//! ```text
//! outer --verbose --delay 5 inner --infile=data.csv --rowmax=1000
//! ```
//!
//! Given a declared table of which outer keywords take a value and which do
//! not, [`partition::resolve`] finds the index at which the outer
//! invocation ends, so the two argument vectors can be handed to their
//! respective parsers independently.

pub mod config;
pub mod partition;
