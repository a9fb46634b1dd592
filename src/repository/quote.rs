use crate::model::Quote;
use anyhow::{bail, Result};
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::params;
use std::time::{Duration, Instant};

// Deadline is checked on every VM instruction.
const PROGRESS_OPS: i32 = 1;

#[derive(Clone)]
pub struct QuoteRepository {
    pool: Pool<SqliteConnectionManager>,
}

impl QuoteRepository {
    pub fn new(pool: Pool<SqliteConnectionManager>) -> QuoteRepository {
        QuoteRepository { pool }
    }

    /// Inserts the quote unless `deadline` passes first.
    ///
    /// Pool checkout and lock waits are bounded by the time left. While the
    /// statement runs, SQLite interrupts it as soon as the deadline passes and
    /// rolls the insert back, so a failed insert never leaves a row behind.
    pub fn insert(&self, row: &Quote, deadline: Instant) -> Result<i64> {
        let conn = self.pool.get_timeout(remaining(deadline)?)?;
        conn.busy_timeout(remaining(deadline)?)?;
        conn.progress_handler(PROGRESS_OPS, Some(move || Instant::now() >= deadline));

        let query = "INSERT INTO cotacoes (bid, timestamp) VALUES (?, ?)";
        let res = conn.execute(query, params![&row.bid, &row.timestamp]);
        conn.progress_handler(0, None::<fn() -> bool>);

        res?;
        Ok(conn.last_insert_rowid())
    }
}

fn remaining(deadline: Instant) -> Result<Duration> {
    let left = deadline.saturating_duration_since(Instant::now());
    if left.is_zero() {
        bail!("Storage deadline elapsed");
    }
    Ok(left)
}
