// Archivo: errors.rs
// Propósito: errores del crate y alias Result<T>.
use thiserror::Error;

/// Errores al exportar el grafo.
#[derive(Error, Debug)]
pub enum GraphError {
    /// Fallo al serializar el grafo a JSON.
    #[error("Error de serialización: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Alias de resultado usado por las APIs del crate.
pub type Result<T> = std::result::Result<T, GraphError>;
