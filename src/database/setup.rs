use anyhow::{Context, Result};

use super::connection::DbConn;

const SCHEMA_SQL: &str = include_str!("schema.sql");
const DROP_SQL: &str = "DROP TABLE IF EXISTS matches; DROP TABLE IF EXISTS players;";

/// Creates the tables if they are missing; existing data is kept
pub fn ensure_schema(conn: &mut DbConn) -> Result<()> {
    conn.execute_batch(SCHEMA_SQL)
        .context("Failed to apply database schema")
}

/// Drops every table and recreates the schema, restarting player ids
pub fn reset_database(conn: &mut DbConn) -> Result<()> {
    conn.execute_batch(DROP_SQL)
        .context("Failed to drop tournament tables")?;
    ensure_schema(conn)?;

    log::info!("Database schema reset successfully");
    Ok(())
}
