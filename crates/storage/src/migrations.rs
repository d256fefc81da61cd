//! Database migrations

use rusqlite::Connection;

pub const SCHEMA_VERSION: i32 = 2;

fn table_exists(conn: &Connection, table: &str) -> bool {
    conn.query_row(
        "SELECT 1 FROM sqlite_master WHERE type = 'table' AND name = ?1",
        [table],
        |_| Ok(()),
    )
    .is_ok()
}

pub fn run_migrations(conn: &Connection) -> Result<(), rusqlite::Error> {
    let current_version: i32 = conn.pragma_query_value(None, "user_version", |row| row.get(0))?;

    tracing::info!(
        "Database schema version: {} (target: {})",
        current_version,
        SCHEMA_VERSION
    );

    if current_version < 1 {
        tracing::info!("Running migration v1: songs table");
        conn.execute_batch(
            r#"
            CREATE TABLE IF NOT EXISTS songs (
                id INTEGER PRIMARY KEY,
                title TEXT NOT NULL,
                artist TEXT NOT NULL,
                wins INTEGER NOT NULL DEFAULT 0,
                appearances INTEGER NOT NULL DEFAULT 0,
                CHECK (wins >= 0 AND wins <= appearances)
            );
            "#,
        )?;
    }

    // Databases written by the earlier single-file server kept counters in a
    // `song` table with nullable counters.
    if current_version < 2 {
        if table_exists(conn, "song") {
            tracing::info!("Running migration v2: importing legacy `song` table");
            let imported = conn.execute(
                r#"INSERT OR IGNORE INTO songs (id, title, artist, wins, appearances)
                   SELECT id, title, artist, COALESCE(wins, 0), COALESCE(appearances, 0)
                   FROM song
                   WHERE COALESCE(wins, 0) <= COALESCE(appearances, 0)"#,
                [],
            )?;
            tracing::info!(imported, "Legacy ratings imported");
        }
        conn.execute_batch(
            "CREATE INDEX IF NOT EXISTS idx_songs_appearances ON songs(appearances);",
        )?;
    }

    conn.pragma_update(None, "user_version", SCHEMA_VERSION)?;
    tracing::info!("Database schema up to date (version {})", SCHEMA_VERSION);

    Ok(())
}
