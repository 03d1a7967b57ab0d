//! Recording fake for [`Gateway`].
//!
//! Records every statement it receives and replays canned responses in FIFO
//! order. A statement with no canned response left fails with a store error.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use sea_orm::{DbErr, JsonValue, Value};

use boxops_core::gateway::{Gateway, Row, StoreError};

/// One statement as the gateway received it.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordedStatement {
    pub sql: String,
    pub values: Vec<Value>,
}

#[derive(Clone, Default)]
pub struct RecordingGateway {
    calls: Arc<Mutex<Vec<RecordedStatement>>>,
    responses: Arc<Mutex<VecDeque<Result<Vec<JsonValue>, String>>>>,
}

impl RecordingGateway {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue rows for the next statement. Each row must be a JSON object.
    pub fn with_rows(self, rows: Vec<JsonValue>) -> Self {
        self.responses.lock().unwrap().push_back(Ok(rows));
        self
    }

    /// Queue a store failure for the next statement.
    pub fn with_error(self, message: &str) -> Self {
        self.responses
            .lock()
            .unwrap()
            .push_back(Err(message.to_owned()));
        self
    }

    pub fn calls(&self) -> Vec<RecordedStatement> {
        self.calls.lock().unwrap().clone()
    }

    pub fn last_call(&self) -> Option<RecordedStatement> {
        self.calls.lock().unwrap().last().cloned()
    }
}

impl Gateway for RecordingGateway {
    async fn execute(&self, sql: &str, values: Vec<Value>) -> Result<Vec<Row>, StoreError> {
        self.calls.lock().unwrap().push(RecordedStatement {
            sql: sql.to_owned(),
            values,
        });
        let next = self.responses.lock().unwrap().pop_front();
        match next {
            Some(Ok(rows)) => rows
                .into_iter()
                .map(|row| match row {
                    JsonValue::Object(map) => Ok(map),
                    other => Err(StoreError::UnexpectedRow(other)),
                })
                .collect(),
            Some(Err(message)) => Err(StoreError::Query(DbErr::Custom(message))),
            None => Err(StoreError::Query(DbErr::Custom(format!(
                "no canned response for statement: {sql}"
            )))),
        }
    }
}
