use async_trait::async_trait;
use serde_json::{Value, json};
use thiserror::Error;

use crate::core::contract::{Microservicio, ServiceRequest};
use crate::features::calculadora::dto::CalcResponse;

const VALID_OPS: [&str; 4] = ["sum", "sub", "mul", "div"];

#[derive(Debug, Error, PartialEq)]
pub enum CalcError {
    #[error("Operación inválida. Usa: sum | sub | mul | div")]
    InvalidOperation,
    #[error("El parámetro '{0}' debe ser numérico.")]
    NonNumeric(&'static str),
    #[error("División por cero no permitida.")]
    DivisionByZero,
    #[error("Error inesperado: {0}")]
    Unexpected(String),
}

/// Four-operation arithmetic evaluator over an untrusted JSON body.
pub struct CalculadoraService;

impl Default for CalculadoraService {
    fn default() -> Self {
        Self::new()
    }
}

impl CalculadoraService {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Microservicio for CalculadoraService {
    async fn handle(&self, request: ServiceRequest) -> Value {
        let response = match evaluate(&request.body) {
            Ok((op, a, b, result)) => CalcResponse::success(op, a, b, result),
            Err(err) => CalcResponse::failure(err.to_string()),
        };

        serde_json::to_value(&response).unwrap_or_else(|err| {
            json!({ "ok": false, "error": format!("Error inesperado: {err}") })
        })
    }
}

/// Validates and evaluates `{op, a, b}`. Operands are coerced independently,
/// `a` before `b`, so the `a` error wins when both are invalid.
pub fn evaluate(body: &Value) -> Result<(String, f64, f64, f64), CalcError> {
    let op = normalise_op(body.get("op"));
    if !VALID_OPS.contains(&op.as_str()) {
        return Err(CalcError::InvalidOperation);
    }

    let a = coerce_numeric(body.get("a"), "a")?;
    let b = coerce_numeric(body.get("b"), "b")?;

    let result = match op.as_str() {
        "sum" => a + b,
        "sub" => a - b,
        "mul" => a * b,
        "div" => {
            // Exact comparison on purpose: only a literal zero divisor is rejected.
            if b == 0.0 {
                return Err(CalcError::DivisionByZero);
            }
            a / b
        }
        // Already validated against VALID_OPS; reaching here is a bug, so the
        // generic fallback fires rather than the validation message.
        other => return Err(CalcError::Unexpected(format!("operación no soportada: {other}"))),
    };

    Ok((op, a, b, result))
}

fn normalise_op(value: Option<&Value>) -> String {
    let raw = match value {
        Some(Value::String(text)) => text.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => other.to_string(),
    };

    raw.trim().to_lowercase()
}

fn coerce_numeric(value: Option<&Value>, name: &'static str) -> Result<f64, CalcError> {
    match value {
        Some(Value::Number(number)) => number.as_f64().ok_or(CalcError::NonNumeric(name)),
        Some(Value::String(text)) => text
            .trim()
            .parse::<f64>()
            .map_err(|_| CalcError::NonNumeric(name)),
        Some(Value::Bool(flag)) => Ok(if *flag { 1.0 } else { 0.0 }),
        _ => Err(CalcError::NonNumeric(name)),
    }
}
