// errors.rs
use crate::ElementKind;
use thiserror::Error;

/// Errores al leer una descripción de proceso.
///
/// Los tres primeros afectan al documento completo; el resto se refieren a
/// un único elemento del flujo y no detienen la lectura de los demás.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
  #[error("JSON inválido: {0}")]
  InvalidJson(String),
  #[error("La descripción del proceso debe ser un objeto JSON")]
  NotAnObject,
  #[error("La clave `flow` debe contener una lista")]
  FlowNotAList,
  #[error("El elemento del flujo no es un objeto JSON")]
  ElementNotAnObject,
  #[error("Elemento sin campo `type`")]
  MissingType,
  #[error("Tipo de elemento no reconocido: {0}")]
  UnrecognizedKind(String),
  #[error("Falta el campo obligatorio `{field}` en {kind}")]
  MissingField { kind: ElementKind, field: &'static str },
  #[error("Elemento {kind} inválido: {message}")]
  InvalidElement { kind: ElementKind, message: String },
}

impl ModelError {
  /// Elemento sin tipo: no ocupa posición en la cadena del flujo, se omite
  /// y sus vecinos quedan unidos.
  pub fn is_untyped(&self) -> bool {
    matches!(self, ModelError::MissingType)
  }
}

impl From<serde_json::Error> for ModelError {
  fn from(e: serde_json::Error) -> Self {
    Self::InvalidJson(e.to_string())
  }
}
