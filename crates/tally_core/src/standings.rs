//! Running standings, keyed by team name

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::error::Result;
use crate::record::{GameResult, MatchRecord, Side};

/// Points awarded for a win.
pub const WIN_POINTS: u32 = 3;

/// Points awarded for a draw.
pub const DRAW_POINTS: u32 = 1;

/// Accumulated counters for one team.
///
/// `matches_played == wins + draws + losses` and
/// `points == 3 * wins + draws` hold after every update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub name: String,
    pub matches_played: u32,
    pub wins: u32,
    pub draws: u32,
    pub losses: u32,
    pub points: u32,
}

impl TeamStanding {
    fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            matches_played: 0,
            wins: 0,
            draws: 0,
            losses: 0,
            points: 0,
        }
    }

    /// Fold one more personal result into the counters.
    fn record(&mut self, result: GameResult) {
        self.matches_played += 1;

        match result {
            GameResult::Win => {
                self.wins += 1;
                self.points += WIN_POINTS;
            }
            GameResult::Draw => {
                self.draws += 1;
                self.points += DRAW_POINTS;
            }
            GameResult::Loss => self.losses += 1,
        }
    }
}

/// Standings for one tally run.
///
/// Entries are created lazily on a team's first appearance and never
/// removed. The map is owned by the run; renderers only see snapshots from
/// [`Standings::table`].
#[derive(Debug, Clone, Default)]
pub struct Standings {
    teams: HashMap<String, TeamStanding>,
}

impl Standings {
    pub fn new() -> Self {
        Self {
            teams: HashMap::new(),
        }
    }

    /// Apply one validated record: two symmetric updates, one per seat.
    pub fn apply(&mut self, record: &MatchRecord) -> Result<()> {
        self.record_result(&record.first, record.outcome.as_token(), Side::First)?;
        self.record_result(&record.second, record.outcome.as_token(), Side::Second)?;
        Ok(())
    }

    /// Update a single team from the raw outcome token and its seat.
    pub fn record_result(&mut self, team: &str, token: &str, side: Side) -> Result<()> {
        let result = GameResult::from_token(token, side)?;
        self.teams
            .entry(team.to_string())
            .or_insert_with(|| TeamStanding::new(team))
            .record(result);
        Ok(())
    }

    /// Number of teams seen so far.
    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Snapshot the table: descending points, ties by ascending name.
    pub fn table(&self) -> Vec<TeamStanding> {
        let mut rows: Vec<TeamStanding> = self.teams.values().cloned().collect();
        rows.sort_by(|a, b| b.points.cmp(&a.points).then_with(|| a.name.cmp(&b.name)));
        rows
    }
}
