use thiserror::Error;

// Errores del compilador.
//
// Sólo las violaciones de precondición del documento (raíz que no es
// objeto, `flow` que no es lista, texto que no es JSON) llegan aquí; los
// fallos de un elemento concreto se registran en `CompileReport`.
#[derive(Error, Debug)]
pub enum CompileError {
  /// El documento no cumple la forma mínima esperada.
  #[error("Error de descripción: {0}")]
  Model(#[from] bpmn_model::ModelError),

  /// Fallo al exportar el grafo resultante.
  #[error("Error de grafo: {0}")]
  Graph(#[from] bpmn_graph::GraphError),
}

pub type Result<T> = std::result::Result<T, CompileError>;
