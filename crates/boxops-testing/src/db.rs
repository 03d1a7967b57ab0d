//! Builders for sea-orm mock connections.
//!
//! Lets HTTP tests run the real router and the real [`SeaGateway`] against
//! canned results, one queued result per statement.

use std::collections::BTreeMap;

use sea_orm::{DatabaseBackend, DatabaseConnection, DbErr, JsonValue, MockDatabase, Value};

use boxops_core::gateway::SeaGateway;

pub struct MockStore {
    db: MockDatabase,
}

impl Default for MockStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MockStore {
    pub fn new() -> Self {
        Self {
            db: MockDatabase::new(DatabaseBackend::Postgres),
        }
    }

    /// Queue the result of the next statement. Each row must be a JSON object.
    pub fn rows(self, rows: Vec<JsonValue>) -> Self {
        let converted: Vec<BTreeMap<&str, Value>> = rows
            .iter()
            .map(|row| {
                row.as_object()
                    .expect("mock rows must be JSON objects")
                    .iter()
                    .map(|(column, value)| (column.as_str(), json_to_value(value)))
                    .collect()
            })
            .collect();
        Self {
            db: self.db.append_query_results([converted]),
        }
    }

    /// Queue an empty result for the next statement.
    pub fn empty(self) -> Self {
        self.rows(vec![])
    }

    /// Queue a driver failure for the next statement.
    pub fn error(self, message: &str) -> Self {
        Self {
            db: self
                .db
                .append_query_errors([DbErr::Custom(message.to_owned())]),
        }
    }

    pub fn into_connection(self) -> DatabaseConnection {
        self.db.into_connection()
    }

    pub fn into_gateway(self) -> SeaGateway {
        SeaGateway::new(self.into_connection())
    }
}

/// Map a JSON scalar to the sea-orm value a Postgres driver would return.
pub fn json_to_value(value: &JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::from(None::<String>),
        JsonValue::Bool(b) => Value::from(*b),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => Value::from(i),
            None => Value::from(n.as_f64().unwrap_or_default()),
        },
        JsonValue::String(s) => Value::from(s.clone()),
        other => Value::from(other.clone()),
    }
}
