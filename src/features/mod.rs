pub mod calculadora;
pub mod roble;
