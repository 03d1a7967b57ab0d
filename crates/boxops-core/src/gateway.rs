#![allow(async_fn_in_trait)]

//! Data access gateway: runs one parameterized statement, returns rows as
//! JSON objects. No retries, no transactions; each call autocommits.

use std::sync::Arc;
use std::time::Duration;

use sea_orm::{
    ConnectOptions, ConnectionTrait, Database, DatabaseConnection, DbErr, FromQueryResult,
    JsonValue, Statement, Value,
};
use serde::de::DeserializeOwned;

/// One result row: column name → value, as returned by the store.
pub type Row = serde_json::Map<String, JsonValue>;

/// Any failure originating from the data store layer.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("query failed: {0}")]
    Query(#[from] DbErr),
    #[error("store returned a non-object row: {0}")]
    UnexpectedRow(JsonValue),
    #[error("cannot decode row: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("statement returned no rows")]
    NoRows,
}

/// Executes parameterized statements against the relational store.
///
/// Statements use PostgreSQL positional placeholders (`$1`, `$2`, ...); the
/// store enforces that `values` matches the placeholder count.
pub trait Gateway: Send + Sync {
    async fn execute(&self, sql: &str, values: Vec<Value>) -> Result<Vec<Row>, StoreError>;

    /// Execute and decode every row into `T`.
    async fn fetch_all<T: DeserializeOwned>(
        &self,
        sql: &str,
        values: Vec<Value>,
    ) -> Result<Vec<T>, StoreError> {
        self.execute(sql, values)
            .await?
            .into_iter()
            .map(decode_row)
            .collect()
    }

    /// Execute and decode the first row; zero rows is [`StoreError::NoRows`].
    async fn fetch_one<T: DeserializeOwned>(
        &self,
        sql: &str,
        values: Vec<Value>,
    ) -> Result<T, StoreError> {
        self.fetch_optional(sql, values)
            .await?
            .ok_or(StoreError::NoRows)
    }

    /// Execute and decode the first row, if any.
    async fn fetch_optional<T: DeserializeOwned>(
        &self,
        sql: &str,
        values: Vec<Value>,
    ) -> Result<Option<T>, StoreError> {
        self.execute(sql, values)
            .await?
            .into_iter()
            .next()
            .map(decode_row)
            .transpose()
    }
}

pub fn decode_row<T: DeserializeOwned>(row: Row) -> Result<T, StoreError> {
    Ok(serde_json::from_value(JsonValue::Object(row))?)
}

/// [`Gateway`] backed by a sea-orm connection pool.
/// Clones share one pool.
#[derive(Clone)]
pub struct SeaGateway {
    db: Arc<DatabaseConnection>,
}

impl SeaGateway {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db: Arc::new(db) }
    }

    /// Open a pool to `url` with at most `max_connections` connections.
    pub async fn connect(url: &str, max_connections: u32) -> Result<Self, StoreError> {
        let mut options = ConnectOptions::new(url.to_owned());
        options
            .max_connections(max_connections)
            .connect_timeout(Duration::from_secs(10))
            .sqlx_logging(false);
        Ok(Self::new(Database::connect(options).await?))
    }

    pub fn connection(&self) -> &DatabaseConnection {
        self.db.as_ref()
    }

    pub async fn ping(&self) -> Result<(), StoreError> {
        Ok(self.db.ping().await?)
    }

    /// Release every pooled connection once this is the last handle.
    /// Returns `false` when other clones are still alive; the pool then
    /// closes when the last of them drops.
    pub async fn close(self) -> Result<bool, StoreError> {
        match Arc::try_unwrap(self.db) {
            Ok(db) => {
                db.close().await?;
                Ok(true)
            }
            Err(_) => Ok(false),
        }
    }
}

impl Gateway for SeaGateway {
    async fn execute(&self, sql: &str, values: Vec<Value>) -> Result<Vec<Row>, StoreError> {
        tracing::debug!(sql, params = values.len(), "execute statement");
        let stmt = Statement::from_sql_and_values(self.db.get_database_backend(), sql, values);
        JsonValue::find_by_statement(stmt)
            .all(self.db.as_ref())
            .await?
            .into_iter()
            .map(|row| match row {
                JsonValue::Object(map) => Ok(map),
                other => Err(StoreError::UnexpectedRow(other)),
            })
            .collect()
    }
}
