use anyhow::{Context, Result};
use rusqlite::params;

use super::connection::DbConn;
use super::models::MatchRow;

pub fn insert_match(conn: &mut DbConn, winner_id: i32, loser_id: i32) -> Result<MatchRow> {
    let sql = "INSERT INTO matches (winner_id, loser_id) VALUES (?1, ?2) RETURNING id, winner_id, loser_id, created_at";

    conn.query_row(sql, params![winner_id, loser_id], parse_match_row)
        .context("Failed to insert match")
}

fn parse_match_row(row: &rusqlite::Row) -> rusqlite::Result<MatchRow> {
    Ok(MatchRow {
        id: row.get(0)?,
        winner_id: row.get(1)?,
        loser_id: row.get(2)?,
        created_at: row.get(3)?,
    })
}

pub fn list_all(conn: &mut DbConn) -> Result<Vec<MatchRow>> {
    let sql = "SELECT id, winner_id, loser_id, created_at FROM matches ORDER BY id";

    let mut stmt = conn.prepare(sql)?;
    let rows = stmt
        .query_map([], parse_match_row)?
        .collect::<rusqlite::Result<Vec<_>>>()?;

    Ok(rows)
}

pub fn delete_all(conn: &mut DbConn) -> Result<()> {
    conn.execute("DELETE FROM matches", [])
        .context("Failed to delete matches")
        .map(|_| ())
}
