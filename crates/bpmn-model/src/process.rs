// process.rs
use crate::{FlowElement, ModelError};
use serde_json::Value;

/// Resultado de decodificar un elemento del flujo.
pub type DecodedElement = Result<FlowElement, ModelError>;

/// Descripción de proceso ya leída.
///
/// Conserva el orden del arreglo `flow` y, por cada posición, el elemento
/// decodificado o el motivo por el que no pudo decodificarse. `flow` es
/// `None` cuando el documento no trae la clave.
#[derive(Debug, Clone, PartialEq)]
pub struct ProcessDescription {
  flow: Option<Vec<DecodedElement>>,
}

impl ProcessDescription {
  /// Construye una descripción a partir de elementos válidos.
  pub fn new<I, E>(elements: I) -> Self
    where I: IntoIterator<Item = E>,
          E: Into<FlowElement>
  {
    Self { flow: Some(elements.into_iter().map(|e| Ok(e.into())).collect()) }
  }

  /// Descripción sin clave `flow`.
  pub fn without_flow() -> Self {
    Self { flow: None }
  }

  pub fn from_json(text: &str) -> Result<Self, ModelError> {
    let value: Value = serde_json::from_str(text)?;
    Self::from_value(&value)
  }

  /// Lee el documento completo. Sólo falla si el valor raíz no es un
  /// objeto o si `flow` existe pero no es una lista; los errores de cada
  /// elemento quedan guardados en su posición.
  pub fn from_value(value: &Value) -> Result<Self, ModelError> {
    let obj = value.as_object().ok_or(ModelError::NotAnObject)?;
    let flow = match obj.get("flow") {
      None => None,
      Some(Value::Array(items)) => Some(items.iter().map(FlowElement::from_value).collect()),
      Some(_) => return Err(ModelError::FlowNotAList),
    };
    Ok(Self { flow })
  }

  pub fn has_flow(&self) -> bool {
    self.flow.is_some()
  }

  /// Elementos en orden; vacío si no hay `flow`.
  pub fn elements(&self) -> &[DecodedElement] {
    self.flow.as_deref().unwrap_or(&[])
  }

  pub fn len(&self) -> usize {
    self.elements().len()
  }

  pub fn is_empty(&self) -> bool {
    self.elements().is_empty()
  }

  /// Elementos decodificados correctamente, con su posición.
  pub fn valid_elements(&self) -> impl Iterator<Item = (usize, &FlowElement)> {
    self.elements().iter().enumerate().filter_map(|(i, e)| e.as_ref().ok().map(|e| (i, e)))
  }

  /// Errores de decodificación, con su posición.
  pub fn errors(&self) -> impl Iterator<Item = (usize, &ModelError)> {
    self.elements().iter().enumerate().filter_map(|(i, e)| e.as_ref().err().map(|e| (i, e)))
  }
}
