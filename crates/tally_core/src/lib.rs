//! League tally core
//!
//! Turns a text of `first;second;outcome` match records into a fixed-width
//! standings table. The pipeline has three stages, all synchronous and
//! in-memory:
//! - parse lines into [`MatchRecord`]s, skipping blanks and `#` comments
//! - fold each record into per-team [`TeamStanding`] counters
//! - render the sorted table
//!
//! The first malformed line aborts the whole run with a [`TallyError`]; no
//! partial table is ever produced.

pub mod error;
pub mod parser;
pub mod record;
pub mod report;
pub mod standings;

pub use error::*;
pub use parser::*;
pub use record::*;
pub use report::*;
pub use standings::*;

/// Run the whole pipeline: parse `input`, aggregate, render the table.
pub fn tally(input: &str) -> Result<String> {
    let standings = aggregate(input)?;
    Ok(report::render(&standings.table()))
}

/// Parse and aggregate without rendering.
///
/// Useful when the caller wants the standings themselves rather than the
/// formatted report.
pub fn aggregate(input: &str) -> Result<Standings> {
    let mut standings = Standings::new();
    let mut records = 0usize;

    for record in parser::records(input) {
        standings.apply(&record?)?;
        records += 1;
    }

    tracing::debug!(records, teams = standings.len(), "aggregated match records");
    Ok(standings)
}
