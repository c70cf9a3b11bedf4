//! Fixed-width standings report

use crate::error::Result;
use crate::standings::TeamStanding;

/// Width of the team-name column, padding included.
pub const TEAM_COL_WIDTH: usize = 31;

/// Render the header plus one row per team, in the given order.
pub fn render(rows: &[TeamStanding]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{}| {} |  {} |  {} |  {} |  {}\n",
        pad_team("Team"),
        "MP",
        "W",
        "D",
        "L",
        "P"
    ));

    for row in rows {
        out.push_str(&format!(
            "{}|  {} |  {} |  {} |  {} |  {}\n",
            pad_team(&row.name),
            row.matches_played,
            row.wins,
            row.draws,
            row.losses,
            row.points
        ));
    }

    out
}

/// Serialize the table as pretty JSON, row order preserved.
pub fn render_json(rows: &[TeamStanding]) -> Result<String> {
    Ok(serde_json::to_string_pretty(rows)?)
}

/// Pad a name to the team column width.
///
/// Names at or past the width get no padding rather than a negative repeat;
/// the row simply runs wide.
fn pad_team(name: &str) -> String {
    let padding = TEAM_COL_WIDTH.saturating_sub(name.len());
    format!("{}{}", name, " ".repeat(padding))
}

#[cfg(test)]
#[path = "report_tests.rs"]
mod report_tests;
