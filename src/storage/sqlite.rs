use anyhow::Result;
use log::debug;

use super::traits::{RosterStore, TournamentStore};
use crate::database::{self, matches, players, setup, DbConn, DbPool};
use crate::domain::{MatchRecord, Player, PlayerId};
use crate::errors::StorageError;

/// Store backed by an SQLite pool owned by the caller
pub struct SqliteStore {
    pool: DbPool,
}

impl SqliteStore {
    pub fn new(pool: DbPool) -> Result<Self> {
        let mut conn = database::get_connection(&pool)?;
        setup::ensure_schema(&mut conn)?;
        drop(conn);

        Ok(Self { pool })
    }

    pub fn open(database_path: &str) -> Result<Self> {
        Self::new(database::create_pool(database_path)?)
    }

    fn connection(&self) -> Result<DbConn> {
        database::get_connection(&self.pool)
    }
}

impl TournamentStore for SqliteStore {
    fn list_players(&self) -> Result<Vec<Player>, StorageError> {
        self.connection()
            .and_then(|mut conn| players::list_all(&mut conn))
            .map(|rows| rows.into_iter().map(Player::from).collect())
            .map_err(|e| StorageError::read("players", e))
    }

    fn list_matches(&self) -> Result<Vec<MatchRecord>, StorageError> {
        self.connection()
            .and_then(|mut conn| matches::list_all(&mut conn))
            .map(|rows| rows.into_iter().map(MatchRecord::from).collect())
            .map_err(|e| StorageError::read("matches", e))
    }

    fn record_match(&mut self, winner_id: PlayerId, loser_id: PlayerId) -> Result<(), StorageError> {
        let row = self
            .connection()
            .and_then(|mut conn| matches::insert_match(&mut conn, winner_id, loser_id))
            .map_err(|e| StorageError::record_match(winner_id, loser_id, e))?;

        debug!("Recorded match {} ({} beat {})", row.id, winner_id, loser_id);
        Ok(())
    }
}

impl RosterStore for SqliteStore {
    fn register_player(&mut self, name: &str) -> Result<Player, StorageError> {
        self.connection()
            .and_then(|mut conn| players::insert_player(&mut conn, name))
            .map(Player::from)
            .map_err(|e| StorageError::write("register player", e))
    }

    fn find_player(&self, id: PlayerId) -> Result<Option<Player>, StorageError> {
        self.connection()
            .and_then(|mut conn| players::find_by_id(&mut conn, id))
            .map(|row| row.map(Player::from))
            .map_err(|e| StorageError::read("player", e))
    }

    fn count_players(&self) -> Result<usize, StorageError> {
        self.connection()
            .and_then(|mut conn| players::count_all(&mut conn))
            .map_err(|e| StorageError::read("player count", e))
    }

    fn delete_matches(&mut self) -> Result<(), StorageError> {
        self.connection()
            .and_then(|mut conn| matches::delete_all(&mut conn))
            .map_err(|e| StorageError::write("delete matches", e))
    }

    fn delete_players(&mut self) -> Result<(), StorageError> {
        self.connection()
            .and_then(|mut conn| setup::reset_database(&mut conn))
            .map_err(|e| StorageError::write("delete players", e))
    }
}
