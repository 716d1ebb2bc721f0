//! # Record Store
//!
//! Persistent storage for email signups using SQLite.
//!
//! The store owns the `emails` table exclusively: records are created via
//! [`EmailStore::add`], never updated in place, and removed via
//! [`EmailStore::remove`]. All SQL text is compile-time constant.

pub mod errors;
pub mod stats;

pub use errors::{StoreError, StoreResult};
pub use stats::{DayCount, HourCount, SignupStats};

use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::{sqlite::SqlitePool, Row};

const CREATE_TABLE_SQL: &str = r#"
    CREATE TABLE IF NOT EXISTS emails (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        email TEXT UNIQUE NOT NULL,
        time DATETIME DEFAULT CURRENT_TIMESTAMP
    )
"#;

const INSERT_SQL: &str = "INSERT INTO emails (email, time) VALUES (?, ?)";
const SELECT_ONE_SQL: &str = "SELECT email, time FROM emails WHERE email = ?";
const SELECT_ALL_SQL: &str = "SELECT email, time FROM emails ORDER BY time DESC";
const SELECT_TIMES_SQL: &str = "SELECT time FROM emails";
const DELETE_SQL: &str = "DELETE FROM emails WHERE email = ?";

/// One persisted email signup
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailRecord {
    pub email: String,
    pub time: DateTime<Utc>,
}

impl EmailRecord {
    /// Render the timestamp the way it is surfaced externally:
    /// `DD/MM/YYYY HH:MM:SS`, 24-hour clock, zero-padded.
    pub fn formatted_time(&self) -> String {
        self.time.format("%d/%m/%Y %H:%M:%S").to_string()
    }
}

/// SQLite-backed store for email signups
#[derive(Clone)]
pub struct EmailStore {
    pool: SqlitePool,
}

impl EmailStore {
    /// Create a store over an existing connection pool
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Idempotently create the backing table
    pub async fn init(&self) -> StoreResult<()> {
        sqlx::query(CREATE_TABLE_SQL).execute(&self.pool).await?;
        Ok(())
    }

    /// Insert a new signup and return the canonical stored form.
    ///
    /// The row is re-read after the insert so the returned record reflects
    /// whatever the database actually stored for the timestamp.
    pub async fn add(&self, email: &str) -> StoreResult<EmailRecord> {
        if email.is_empty() {
            return Err(StoreError::EmptyEmail);
        }

        sqlx::query(INSERT_SQL)
            .bind(email)
            .bind(Utc::now().to_rfc3339())
            .execute(&self.pool)
            .await?;

        let row = sqlx::query(SELECT_ONE_SQL)
            .bind(email)
            .fetch_one(&self.pool)
            .await?;

        Ok(record_from_row(&row))
    }

    /// List all signups, most recent first
    pub async fn list(&self) -> StoreResult<Vec<EmailRecord>> {
        let rows = sqlx::query(SELECT_ALL_SQL).fetch_all(&self.pool).await?;
        Ok(rows.iter().map(record_from_row).collect())
    }

    /// Delete a signup by email. Returns true iff a row was deleted.
    pub async fn remove(&self, email: &str) -> StoreResult<bool> {
        let result = sqlx::query(DELETE_SQL)
            .bind(email)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Aggregate per-day and per-hour signup counts over every record
    pub async fn stats(&self) -> StoreResult<SignupStats> {
        let rows = sqlx::query(SELECT_TIMES_SQL).fetch_all(&self.pool).await?;

        let times: Vec<DateTime<Utc>> = rows
            .iter()
            .map(|row| parse_stored_time(&row.get::<String, _>("time")))
            .collect();

        Ok(stats::aggregate(&times))
    }
}

fn record_from_row(row: &sqlx::sqlite::SqliteRow) -> EmailRecord {
    EmailRecord {
        email: row.get("email"),
        time: parse_stored_time(&row.get::<String, _>("time")),
    }
}

/// Parse a stored timestamp. Rows written by [`EmailStore::add`] hold
/// RFC 3339 text; rows created through the column default hold SQLite's
/// `YYYY-MM-DD HH:MM:SS` form.
fn parse_stored_time(raw: &str) -> DateTime<Utc> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return dt.with_timezone(&Utc);
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S")
        .map(|naive| naive.and_utc())
        .unwrap_or_else(|_| Utc::now())
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;

    async fn setup_test_store() -> EmailStore {
        // One connection: every pooled connection to :memory: is its own db
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await
            .unwrap();

        let store = EmailStore::new(pool);
        store.init().await.unwrap();
        store
    }

    async fn insert_at(store: &EmailStore, email: &str, time: &str) {
        sqlx::query(INSERT_SQL)
            .bind(email)
            .bind(time)
            .execute(&store.pool)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_init_is_idempotent() {
        let store = setup_test_store().await;
        store.init().await.unwrap();
        store.init().await.unwrap();
    }

    #[tokio::test]
    async fn test_add_then_list() {
        let store = setup_test_store().await;

        let record = store.add("a@x.com").await.unwrap();
        assert_eq!(record.email, "a@x.com");

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].email, "a@x.com");

        // DD/MM/YYYY HH:MM:SS
        let rendered = listed[0].formatted_time();
        assert_eq!(rendered.len(), 19);
        assert_eq!(&rendered[2..3], "/");
        assert_eq!(&rendered[5..6], "/");
        assert_eq!(&rendered[10..11], " ");
        assert_eq!(&rendered[13..14], ":");
        assert_eq!(&rendered[16..17], ":");
    }

    #[tokio::test]
    async fn test_add_empty_email_rejected() {
        let store = setup_test_store().await;
        assert!(matches!(
            store.add("").await,
            Err(StoreError::EmptyEmail)
        ));
    }

    #[tokio::test]
    async fn test_duplicate_add_keeps_one_record() {
        let store = setup_test_store().await;

        store.add("a@x.com").await.unwrap();
        let second = store.add("a@x.com").await;
        assert!(matches!(second, Err(StoreError::Duplicate(_))));

        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_list_is_most_recent_first() {
        let store = setup_test_store().await;

        insert_at(&store, "old@x.com", "2024-01-01T08:00:00+00:00").await;
        insert_at(&store, "new@x.com", "2024-06-01T08:00:00+00:00").await;

        let listed = store.list().await.unwrap();
        assert_eq!(listed[0].email, "new@x.com");
        assert_eq!(listed[1].email, "old@x.com");
    }

    #[tokio::test]
    async fn test_remove() {
        let store = setup_test_store().await;

        store.add("a@x.com").await.unwrap();
        assert!(store.remove("a@x.com").await.unwrap());
        assert!(store.list().await.unwrap().is_empty());

        assert!(!store.remove("a@x.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_stats_empty_store() {
        let store = setup_test_store().await;

        let stats = store.stats().await.unwrap();
        assert_eq!(stats.total, 0);
        assert!(stats.by_day.is_empty());
        assert_eq!(stats.by_hour.len(), 24);
        assert!(stats.by_hour.iter().all(|h| h.count == 0));
    }

    #[tokio::test]
    async fn test_stats_two_dates() {
        let store = setup_test_store().await;

        insert_at(&store, "a@x.com", "2024-03-01T09:15:00+00:00").await;
        insert_at(&store, "b@x.com", "2024-03-02T09:45:00+00:00").await;
        insert_at(&store, "c@x.com", "2024-03-02T17:00:00+00:00").await;

        let stats = store.stats().await.unwrap();
        assert_eq!(stats.total, 3);
        assert_eq!(stats.by_day.len(), 2);
        assert_eq!(stats.by_day[0].date, "2024-03-01");
        assert_eq!(stats.by_day[1].date, "2024-03-02");
        let day_sum: u64 = stats.by_day.iter().map(|d| d.count).sum();
        assert_eq!(day_sum, stats.total);
        assert_eq!(stats.by_hour[9].count, 2);
        assert_eq!(stats.by_hour[17].count, 1);
    }

    #[tokio::test]
    async fn test_default_timestamp_rows_still_parse() {
        let store = setup_test_store().await;

        sqlx::query("INSERT INTO emails (email) VALUES (?)")
            .bind("default@x.com")
            .execute(&store.pool)
            .await
            .unwrap();

        let listed = store.list().await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].formatted_time().len(), 19);
    }
}
