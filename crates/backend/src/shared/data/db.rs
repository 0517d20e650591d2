use once_cell::sync::OnceCell;
use sea_orm::{ConnectionTrait, Database, DatabaseBackend, DatabaseConnection, Statement};
use std::path::Path;

static DB_CONN: OnceCell<DatabaseConnection> = OnceCell::new();

pub async fn initialize_database(db_file: &Path) -> anyhow::Result<()> {
    if let Some(parent) = db_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let absolute_path = if db_file.is_absolute() {
        db_file.to_path_buf()
    } else {
        std::env::current_dir()?.join(db_file)
    };
    // Normalize path separators and ensure proper URL form on Windows
    let normalized = absolute_path.to_string_lossy().replace('\\', "/");
    let needs_leading_slash = !normalized.starts_with('/') && normalized.contains(':');
    let prefix = if needs_leading_slash { "/" } else { "" };
    let db_url = format!("sqlite://{}{}?mode=rwc", prefix, normalized);
    tracing::info!("Opening database {}", normalized);
    let conn = Database::connect(&db_url).await?;

    bootstrap_schema(&conn).await?;

    DB_CONN
        .set(conn)
        .map_err(|_| anyhow::anyhow!("Failed to set DB_CONN"))?;
    Ok(())
}

/// Create the names table and its indexes if they do not exist yet.
pub async fn bootstrap_schema<C: ConnectionTrait>(conn: &C) -> anyhow::Result<()> {
    let check_names_table = r#"
        SELECT name FROM sqlite_master
        WHERE type='table' AND name='a001_name';
    "#;
    let existing = conn
        .query_all(Statement::from_string(
            DatabaseBackend::Sqlite,
            check_names_table.to_string(),
        ))
        .await?;

    if existing.is_empty() {
        tracing::info!("Creating a001_name table");
        let create_names_table_sql = r#"
            CREATE TABLE a001_name (
                id TEXT PRIMARY KEY NOT NULL,
                name TEXT NOT NULL,
                meaning TEXT,
                origin TEXT,
                gender TEXT,
                category TEXT NOT NULL DEFAULT '',
                subcategory TEXT NOT NULL DEFAULT '',
                popularity INTEGER,
                created_at TEXT,
                updated_at TEXT
            );
        "#;
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            create_names_table_sql.to_string(),
        ))
        .await?;
    }

    // lookups by category and gender
    for sql in [
        "CREATE INDEX IF NOT EXISTS idx_a001_name_category ON a001_name (category, subcategory);",
        "CREATE INDEX IF NOT EXISTS idx_a001_name_gender ON a001_name (gender);",
        "CREATE INDEX IF NOT EXISTS idx_a001_name_popularity ON a001_name (popularity DESC);",
    ] {
        conn.execute(Statement::from_string(
            DatabaseBackend::Sqlite,
            sql.to_string(),
        ))
        .await?;
    }

    Ok(())
}

/// Global connection, or an error when startup has not opened the database.
pub fn get_connection() -> anyhow::Result<&'static DatabaseConnection> {
    DB_CONN
        .get()
        .ok_or_else(|| anyhow::anyhow!("Database connection has not been initialized"))
}

/// Fresh in-memory database with the schema applied.
#[cfg(test)]
pub async fn connect_in_memory() -> anyhow::Result<DatabaseConnection> {
    let mut opts = sea_orm::ConnectOptions::new("sqlite::memory:");
    // every pooled connection would otherwise get its own empty database
    opts.max_connections(1).min_connections(1).sqlx_logging(false);
    let conn = Database::connect(opts).await?;
    bootstrap_schema(&conn).await?;
    Ok(conn)
}
