use crate::errors::Result;
use crate::format::OutputFormat;
use bpmn_graph::Graph;
use std::path::{Path, PathBuf};

/// Motor de dibujo del grafo.
///
/// `stem` es la ruta de salida sin extensión; cada formato se escribe en
/// `{stem}.{ext}`. Devuelve las rutas escritas en el orden de `formats`.
/// Un único intento por formato: los reintentos, si hacen falta, son cosa
/// de quien llama.
pub trait RenderBackend {
  fn render(&self, graph: &Graph, stem: &Path, formats: &[OutputFormat]) -> Result<Vec<PathBuf>>;
}

/// `{stem}.{ext}` sin tocar puntos que ya tenga el nombre.
pub(crate) fn output_path(stem: &Path, format: OutputFormat) -> PathBuf {
  let mut name = stem.as_os_str().to_owned();
  name.push(".");
  name.push(format.extension());
  PathBuf::from(name)
}
