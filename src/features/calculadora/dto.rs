use serde::Serialize;

/// Response of the calculator microservice. Exactly one branch is emitted per
/// request; the `ok` flag tells the caller which one they got.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum CalcResponse {
    Success {
        ok: bool,
        op: String,
        a: f64,
        b: f64,
        result: f64,
    },
    Failure {
        ok: bool,
        error: String,
    },
}

impl CalcResponse {
    pub fn success(op: String, a: f64, b: f64, result: f64) -> Self {
        Self::Success {
            ok: true,
            op,
            a,
            b,
            result,
        }
    }

    pub fn failure(error: String) -> Self {
        Self::Failure { ok: false, error }
    }
}
