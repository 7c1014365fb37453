// src/common/migrations.rs
//! Database migration and schema management

use sqlx::SqlitePool;
use tracing::{info, warn};

use crate::entries::EntryKind;

/// Run all database migrations
///
/// Every statement is idempotent, so this runs on each startup. With
/// `reset` set, all tables are dropped first.
pub async fn run_migrations(pool: &SqlitePool, reset: bool) -> Result<(), sqlx::Error> {
    if reset {
        warn!("⚠️  RESET_DB=true - Dropping all tables and recreating schema...");
        drop_all_tables(pool).await?;
        info!("✅ Dropped old tables");
    }

    create_users_table(pool).await?;
    for kind in EntryKind::ALL {
        create_entry_table(pool, kind).await?;
    }
    create_indexes(pool).await?;

    info!("✅ Database migration completed successfully!");

    Ok(())
}

async fn drop_all_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    // Children before parents
    for kind in EntryKind::ALL {
        sqlx::query(&format!("DROP TABLE IF EXISTS {}", kind.table()))
            .execute(pool)
            .await?;
    }
    sqlx::query("DROP TABLE IF EXISTS users").execute(pool).await?;

    Ok(())
}

async fn create_users_table(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            nickname TEXT NOT NULL,
            email TEXT NOT NULL,
            birth TEXT NOT NULL,
            created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            session_id TEXT
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// `meals` and `diets` share one layout.
async fn create_entry_table(pool: &SqlitePool, kind: EntryKind) -> Result<(), sqlx::Error> {
    sqlx::query(&format!(
        r#"
        CREATE TABLE IF NOT EXISTS {table} (
            id TEXT PRIMARY KEY,
            name TEXT NOT NULL,
            description TEXT NOT NULL,
            dateTime TEXT NOT NULL,
            isInDiet INTEGER NOT NULL DEFAULT 0,
            created_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            updated_at TEXT NOT NULL DEFAULT (strftime('%Y-%m-%dT%H:%M:%fZ', 'now')),
            userId TEXT NOT NULL,
            FOREIGN KEY(userId) REFERENCES users(id) ON UPDATE CASCADE ON DELETE CASCADE
        )
        "#,
        table = kind.table()
    ))
    .execute(pool)
    .await?;

    Ok(())
}

async fn create_indexes(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_users_session_id ON users(session_id)")
        .execute(pool)
        .await?;

    for kind in EntryKind::ALL {
        let table = kind.table();
        sqlx::query(&format!(
            "CREATE INDEX IF NOT EXISTS idx_{table}_user_datetime ON {table}(userId, dateTime)"
        ))
        .execute(pool)
        .await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn memory_pool() -> SqlitePool {
        SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap()
    }

    async fn table_names(pool: &SqlitePool) -> Vec<String> {
        sqlx::query_scalar::<_, String>(
            "SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name",
        )
        .fetch_all(pool)
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_creates_all_tables() {
        let pool = memory_pool().await;
        run_migrations(&pool, false).await.unwrap();

        assert_eq!(table_names(&pool).await, vec!["diets", "meals", "users"]);
    }

    #[tokio::test]
    async fn test_migrations_are_idempotent() {
        let pool = memory_pool().await;
        run_migrations(&pool, false).await.unwrap();

        sqlx::query(
            "INSERT INTO users (id, name, nickname, email, birth) VALUES ('u1', 'A', 'abc', 'a@b.co', '1990-01-01')",
        )
        .execute(&pool)
        .await
        .unwrap();

        run_migrations(&pool, false).await.unwrap();
        let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(users, 1);

        run_migrations(&pool, true).await.unwrap();
        let users: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users")
            .fetch_one(&pool)
            .await
            .unwrap();
        assert_eq!(users, 0);
    }
}
