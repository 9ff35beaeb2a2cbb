use chrono::NaiveDateTime;

use crate::domain;

#[derive(Debug, Clone)]
pub struct PlayerRow {
    pub id: i32,
    pub name: String,
    pub created_at: Option<NaiveDateTime>,
}

impl From<PlayerRow> for domain::Player {
    fn from(row: PlayerRow) -> Self {
        domain::Player {
            id: row.id,
            name: row.name,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MatchRow {
    pub id: i32,
    pub winner_id: i32,
    pub loser_id: i32,
    pub created_at: Option<NaiveDateTime>,
}

impl From<MatchRow> for domain::MatchRecord {
    fn from(row: MatchRow) -> Self {
        domain::MatchRecord {
            winner_id: row.winner_id,
            loser_id: row.loser_id,
        }
    }
}
