use rusqlite::{Connection, OptionalExtension, TransactionBehavior, params};
use songvote_core::{RatingRecord, Vote};

use super::{Storage, get_conn};
use crate::error::StorageError;

const SELECT_RATING: &str =
    "SELECT id, title, artist, wins, appearances FROM songs WHERE id = ?1";

fn row_to_rating(row: &rusqlite::Row<'_>) -> rusqlite::Result<RatingRecord> {
    Ok(RatingRecord {
        id: row.get(0)?,
        title: row.get(1)?,
        artist: row.get(2)?,
        wins: row.get(3)?,
        appearances: row.get(4)?,
    })
}

fn fetch(conn: &Connection, id: i64) -> rusqlite::Result<Option<RatingRecord>> {
    conn.query_row(SELECT_RATING, params![id], row_to_rating).optional()
}

fn upsert(conn: &Connection, record: &RatingRecord) -> rusqlite::Result<()> {
    conn.execute(
        "INSERT INTO songs (id, title, artist, wins, appearances)
           VALUES (?1, ?2, ?3, ?4, ?5)
           ON CONFLICT(id) DO UPDATE SET
             title = excluded.title,
             artist = excluded.artist,
             wins = excluded.wins,
             appearances = excluded.appearances",
        params![record.id, record.title, record.artist, record.wins, record.appearances],
    )?;
    Ok(())
}

impl Storage {
    /// Get the rating record for a track id.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn get_rating(&self, id: i64) -> Result<Option<RatingRecord>, StorageError> {
        let conn = get_conn(&self.pool)?;
        Ok(fetch(&conn, id)?)
    }

    /// Insert or fully replace a rating record.
    ///
    /// # Errors
    /// Returns error if the write fails or the record violates `wins <= appearances`.
    pub fn upsert_rating(&self, record: &RatingRecord) -> Result<(), StorageError> {
        let conn = get_conn(&self.pool)?;
        upsert(&conn, record)?;
        Ok(())
    }

    /// Apply one vote: fetch-or-create both records, bump the counters and
    /// persist both in a single `IMMEDIATE` transaction.
    ///
    /// Rows are touched in ascending id order. Either both records are written
    /// or neither is; the returned records reflect the committed state.
    ///
    /// # Errors
    /// Returns error if the transaction cannot be started, a statement fails,
    /// or the commit fails. Nothing is persisted in that case.
    pub fn record_vote(&self, vote: &Vote) -> Result<(RatingRecord, RatingRecord), StorageError> {
        let mut conn = get_conn(&self.pool)?;
        let tx = conn.transaction_with_behavior(TransactionBehavior::Immediate)?;

        let (first_id, second_id) = if vote.winner_id < vote.loser_id {
            (vote.winner_id, vote.loser_id)
        } else {
            (vote.loser_id, vote.winner_id)
        };
        let first = fetch(&tx, first_id)?;
        let second = fetch(&tx, second_id)?;
        let (winner, loser) =
            if first_id == vote.winner_id { (first, second) } else { (second, first) };

        let mut winner = winner.unwrap_or_else(|| vote.winner_seed());
        let mut loser = loser.unwrap_or_else(|| vote.loser_seed());
        winner.record_win();
        loser.record_loss();

        if winner.id < loser.id {
            upsert(&tx, &winner)?;
            upsert(&tx, &loser)?;
        } else {
            upsert(&tx, &loser)?;
            upsert(&tx, &winner)?;
        }
        tx.commit()?;

        tracing::debug!(
            winner_id = winner.id,
            winner_wins = winner.wins,
            winner_appearances = winner.appearances,
            loser_id = loser.id,
            loser_appearances = loser.appearances,
            "vote recorded"
        );
        Ok((winner, loser))
    }

    /// Records ordered by approval (desc), then appearances (desc), then id.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn top_ratings(&self, limit: usize) -> Result<Vec<RatingRecord>, StorageError> {
        let conn = get_conn(&self.pool)?;
        let mut stmt = conn.prepare(
            "SELECT id, title, artist, wins, appearances,
                    CASE WHEN appearances > 0 THEN wins * 100 / appearances ELSE 0 END AS approval
               FROM songs
               ORDER BY approval DESC, appearances DESC, id ASC
               LIMIT ?1",
        )?;
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let rows = stmt.query_map(params![limit], row_to_rating)?;
        let mut records = Vec::new();
        for row in rows {
            records.push(row?);
        }
        Ok(records)
    }

    /// Number of tracks that have received at least one vote.
    ///
    /// # Errors
    /// Returns error if database query fails.
    pub fn count_ratings(&self) -> Result<usize, StorageError> {
        let conn = get_conn(&self.pool)?;
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM songs", [], |row| row.get(0))?;
        Ok(usize::try_from(count).unwrap_or(0))
    }
}
