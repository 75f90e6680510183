use std::collections::HashMap;

use serde_json::{Value, json};

use microservicio_host::core::contract::{Microservicio, ServiceRequest};
use microservicio_host::features::calculadora::{CalcError, CalculadoraService};

async fn call(body: Value) -> Value {
    let service = CalculadoraService::new();
    service
        .handle(ServiceRequest {
            headers: HashMap::new(),
            body,
        })
        .await
}

#[tokio::test]
async fn sums_two_numbers() {
    let response = call(json!({ "op": "sum", "a": 2, "b": 3 })).await;

    assert_eq!(response["ok"], json!(true));
    assert_eq!(response["op"], json!("sum"));
    assert_eq!(response["a"], json!(2.0));
    assert_eq!(response["b"], json!(3.0));
    assert_eq!(response["result"], json!(5.0));
    assert!(response.get("error").is_none(), "ok response carries no error");
}

#[tokio::test]
async fn divides_in_double_precision() {
    let response = call(json!({ "op": "div", "a": 10, "b": 4 })).await;

    assert_eq!(response["ok"], json!(true));
    assert_eq!(response["result"], json!(2.5));
}

#[tokio::test]
async fn subtracts_and_multiplies() {
    let sub = call(json!({ "op": "sub", "a": 1.5, "b": 4 })).await;
    assert_eq!(sub["result"], json!(-2.5));

    let mul = call(json!({ "op": "mul", "a": 1.5, "b": 4 })).await;
    assert_eq!(mul["result"], json!(6.0));
}

#[tokio::test]
async fn rejects_division_by_zero() {
    let response = call(json!({ "op": "div", "a": 123.4, "b": 0 })).await;

    assert_eq!(response["ok"], json!(false));
    assert_eq!(response["error"], json!("División por cero no permitida."));
    assert!(response.get("result").is_none());
}

#[tokio::test]
async fn rejects_unknown_operation_before_operand_checks() {
    // Operands are invalid too; the operation error still wins.
    let response = call(json!({ "op": "mod", "a": "abc", "b": {} })).await;

    assert_eq!(response["ok"], json!(false));
    assert_eq!(
        response["error"],
        json!("Operación inválida. Usa: sum | sub | mul | div")
    );
}

#[tokio::test]
async fn rejects_missing_operation() {
    let response = call(json!({ "a": 1, "b": 2 })).await;

    assert_eq!(response["ok"], json!(false));
    assert_eq!(
        response["error"],
        json!("Operación inválida. Usa: sum | sub | mul | div")
    );
}

#[tokio::test]
async fn normalises_operation_case_and_whitespace() {
    let response = call(json!({ "op": "  DIV ", "a": 9, "b": 3 })).await;

    assert_eq!(response["ok"], json!(true));
    assert_eq!(response["op"], json!("div"));
    assert_eq!(response["result"], json!(3.0));
}

#[tokio::test]
async fn coerces_numeric_strings() {
    let response = call(json!({ "op": "sum", "a": "2.5", "b": " 3 " })).await;

    assert_eq!(response["ok"], json!(true));
    assert_eq!(response["a"], json!(2.5));
    assert_eq!(response["b"], json!(3.0));
    assert_eq!(response["result"], json!(5.5));
}

#[tokio::test]
async fn reports_first_invalid_operand() {
    // Both operands are bad; 'a' is coerced first and named in the error.
    let response = call(json!({ "op": "sum", "a": "abc", "b": "xyz" })).await;

    assert_eq!(response["ok"], json!(false));
    assert_eq!(response["error"], json!("El parámetro 'a' debe ser numérico."));
}

#[tokio::test]
async fn reports_missing_second_operand() {
    let response = call(json!({ "op": "sum", "a": 2 })).await;

    assert_eq!(response["ok"], json!(false));
    assert_eq!(response["error"], json!("El parámetro 'b' debe ser numérico."));
}

#[tokio::test]
async fn rejects_null_and_object_operands() {
    let null_a = call(json!({ "op": "sum", "a": null, "b": 1 })).await;
    assert_eq!(null_a["error"], json!("El parámetro 'a' debe ser numérico."));

    let object_b = call(json!({ "op": "sum", "a": 1, "b": {"n": 2} })).await;
    assert_eq!(object_b["error"], json!("El parámetro 'b' debe ser numérico."));
}

#[test]
fn unexpected_fallback_carries_the_detail() {
    let error = CalcError::Unexpected("operación no soportada: mod".to_string());

    assert_eq!(
        error.to_string(),
        "Error inesperado: operación no soportada: mod"
    );
}

#[tokio::test]
async fn identical_inputs_produce_identical_outputs() {
    let body = json!({ "op": "mul", "a": "7", "b": 6 });

    let first = call(body.clone()).await;
    let second = call(body).await;

    assert_eq!(first, second);
}
