//! Dibujo del grafo compilado.
//!
//! `RenderBackend` es la frontera con el motor de dibujo; `GraphvizBackend`
//! la implementa llamando al ejecutable `dot`. La configuración (rutas,
//! nombre de salida, formatos) se lee del entorno con `Settings::from_env`.

mod backend;
mod config;
mod errors;
mod format;
mod graphviz;

pub use backend::RenderBackend;
pub use config::{parse_formats, Settings};
pub use errors::{RenderError, Result};
pub use format::OutputFormat;
pub use graphviz::GraphvizBackend;
