use std::sync::Arc;

use async_trait::async_trait;
use serde_json::{Value, json};
use thiserror::Error;

use crate::core::contract::{Microservicio, ServiceRequest};
use crate::features::roble::dto::{COLUMN_NAME, ColumnStatsResponse, ReadTableArgs};
use crate::features::roble::helpers::{distinct_count, extract_column};

#[derive(Debug, Error)]
pub enum RobleError {
    #[error("Faltan parámetros: dbName, tableName o access_token")]
    MissingParameters,
    #[error("Timeout al consultar el servicio.")]
    Timeout,
    #[error("Error de red: {0}")]
    Network(String),
    #[error("Error del servicio ({status}): {body}")]
    Upstream { status: u16, body: String },
    #[error("Respuesta inesperada: se esperaba una lista de registros")]
    UnexpectedShape,
    #[error("Error inesperado: {0}")]
    Unexpected(String),
}

/// Source of table records. The production implementation is `RobleClient`;
/// tests inject mocks to count calls and script failures.
#[async_trait]
pub trait TableReader: Send + Sync {
    async fn read_table(&self, args: &ReadTableArgs) -> Result<Vec<Value>, RobleError>;
}

/// Fetches one table and summarizes its `nombre` column: every retained
/// value in order, plus total and distinct counts.
pub struct RobleService {
    reader: Arc<dyn TableReader>,
}

impl RobleService {
    pub fn new(reader: Arc<dyn TableReader>) -> Self {
        Self { reader }
    }

    async fn column_stats(&self, body: &Value) -> Result<ColumnStatsResponse, RobleError> {
        let args = parse_args(body)?;
        let records = self.reader.read_table(&args).await?;

        let names = extract_column(&records, COLUMN_NAME);
        let distinct = distinct_count(&names);

        Ok(ColumnStatsResponse::success(names, distinct))
    }
}

#[async_trait]
impl Microservicio for RobleService {
    async fn handle(&self, request: ServiceRequest) -> Value {
        let response = match self.column_stats(&request.body).await {
            Ok(response) => response,
            Err(err) => ColumnStatsResponse::failure(err.to_string()),
        };

        serde_json::to_value(&response).unwrap_or_else(|err| {
            json!({ "ok": false, "error": format!("Error inesperado: {err}") })
        })
    }
}

/// All three identifiers must be present and non-empty before any outbound
/// call is attempted.
fn parse_args(body: &Value) -> Result<ReadTableArgs, RobleError> {
    let db_name = required_field(body, "dbName");
    let table_name = required_field(body, "tableName");
    let access_token = required_field(body, "access_token");

    match (db_name, table_name, access_token) {
        (Some(db_name), Some(table_name), Some(access_token)) => Ok(ReadTableArgs {
            db_name,
            table_name,
            access_token,
        }),
        _ => Err(RobleError::MissingParameters),
    }
}

/// Truthiness mirrors the hosting platform: null, `false`, zero, and empty
/// strings, arrays and objects all count as missing.
fn required_field(body: &Value, key: &str) -> Option<String> {
    let value = body.get(key)?;

    let truthy = match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64() != Some(0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(fields) => !fields.is_empty(),
    };
    if !truthy {
        return None;
    }

    match value {
        Value::String(text) => Some(text.clone()),
        other => Some(other.to_string()),
    }
}
