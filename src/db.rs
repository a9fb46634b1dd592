use anyhow::Result;
use r2d2::Pool;
use r2d2_sqlite::SqliteConnectionManager;
use rusqlite::Connection;
use tracing::info;

static SCHEMA: &str = r#"
    CREATE TABLE IF NOT EXISTS cotacoes (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        bid TEXT,
        timestamp TEXT
    );
"#;

pub fn pool(db_url: &str) -> Result<Pool<SqliteConnectionManager>> {
    let manager = SqliteConnectionManager::file(db_url);
    Ok(Pool::new(manager)?)
}

/// Creates the quote table unless it already exists.
pub fn init(conn: &Connection) -> Result<()> {
    info!(sql = SCHEMA.trim(), "Ensuring schema");
    conn.execute_batch(SCHEMA)?;
    Ok(())
}

pub fn setup(db_url: &str) -> Result<Pool<SqliteConnectionManager>> {
    info!(%db_url, "Opening database");
    let pool = pool(db_url)?;
    let conn = pool.get()?;
    init(&conn)?;
    drop(conn);
    Ok(pool)
}
