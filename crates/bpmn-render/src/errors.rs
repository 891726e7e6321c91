use crate::format::OutputFormat;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
  #[error("Error de E/S: {0}")]
  Io(#[from] std::io::Error),

  #[error("No se pudo ejecutar '{program}': {source}")]
  Spawn { program: String, source: std::io::Error },

  /// El ejecutable terminó con error.
  #[error("Graphviz falló generando {format} (código {status:?}): {stderr}")]
  Graphviz { format: OutputFormat, status: Option<i32>, stderr: String },

  #[error("Formato de salida desconocido: {0}")]
  UnknownFormat(String),

  #[error("Configuración inválida: {0}")]
  Config(String),
}

pub type Result<T> = std::result::Result<T, RenderError>;
