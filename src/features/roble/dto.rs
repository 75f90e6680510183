use serde::Serialize;

/// The one column this microservice summarizes.
pub const COLUMN_NAME: &str = "nombre";

/// Validated parameters for one remote table read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReadTableArgs {
    pub db_name: String,
    pub table_name: String,
    pub access_token: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum ColumnStatsResponse {
    Success {
        ok: bool,
        column: String,
        names: Vec<String>,
        total: usize,
        distinct_count: usize,
    },
    Failure {
        ok: bool,
        error: String,
    },
}

impl ColumnStatsResponse {
    pub fn success(names: Vec<String>, distinct_count: usize) -> Self {
        Self::Success {
            ok: true,
            column: COLUMN_NAME.to_string(),
            total: names.len(),
            names,
            distinct_count,
        }
    }

    pub fn failure(error: String) -> Self {
        Self::Failure { ok: false, error }
    }
}
