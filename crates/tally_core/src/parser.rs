//! Line-oriented parsing of match records
//!
//! Each meaningful line is `<first>;<second>;<outcome>`. Lines are trimmed
//! before inspection; blank lines and lines starting with `#` are skipped.

use crate::error::{Result, TallyError};
use crate::record::{MatchRecord, Outcome};

/// Number of `;`-separated fields in a record line.
const RECORD_FIELDS: usize = 3;

/// Lazily parse `input` into validated match records.
///
/// The iterator yields `Err` at the first structural problem; callers stop
/// there, so nothing after the offending line is inspected.
pub fn records(input: &str) -> impl Iterator<Item = Result<MatchRecord>> + '_ {
    input
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(parse_record)
}

/// Parse a single trimmed, non-comment line.
///
/// Fields are not trimmed individually, so `a; b;win` names the team ` b`
/// and `a;b; win` fails outcome validation.
fn parse_record(line: &str) -> Result<MatchRecord> {
    let fields: Vec<&str> = line.split(';').collect();
    if fields.len() != RECORD_FIELDS {
        return Err(TallyError::MalformedRecord {
            line: line.to_string(),
        });
    }

    Ok(MatchRecord {
        first: fields[0].to_string(),
        second: fields[1].to_string(),
        outcome: Outcome::from_token(fields[2])?,
    })
}
