use crate::errors::{RenderError, Result};
use crate::format::OutputFormat;
use std::path::PathBuf;

pub const DEFAULT_PROCESS_JSON: &str = "process.json";
pub const DEFAULT_OUTPUT_NAME: &str = "diagrama_bpmn";
pub const DEFAULT_FORMATS: &str = "png,pdf,svg";
pub const DEFAULT_DOT: &str = "dot";

/// Configuración del dibujo: de dónde leer el proceso y dónde dejar los
/// ficheros generados.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
  pub process_json: PathBuf,
  pub output_dir: PathBuf,
  pub output_name: String,
  pub formats: Vec<OutputFormat>,
  pub dot_executable: String,
}

impl Default for Settings {
  fn default() -> Self {
    Self { process_json: PathBuf::from(DEFAULT_PROCESS_JSON),
           output_dir: PathBuf::from("."),
           output_name: DEFAULT_OUTPUT_NAME.to_string(),
           formats: vec![OutputFormat::Png, OutputFormat::Pdf, OutputFormat::Svg],
           dot_executable: DEFAULT_DOT.to_string() }
  }
}

impl Settings {
  /// Lee la configuración del entorno (cargando `.env` si existe).
  pub fn from_env() -> Result<Self> {
    dotenvy::dotenv().ok();
    Self::from_lookup(|key| std::env::var(key).ok())
  }

  /// Igual que `from_env` pero con una función de consulta arbitraria.
  pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where F: Fn(&str) -> Option<String>
  {
    let get = |key: &str, default: &str| lookup(key).filter(|v| !v.trim().is_empty()).unwrap_or_else(|| default.to_string());
    Ok(Self { process_json: PathBuf::from(get("BPMN_PROCESS_JSON", DEFAULT_PROCESS_JSON)),
              output_dir: PathBuf::from(get("BPMN_OUTPUT_DIR", ".")),
              output_name: get("BPMN_OUTPUT_NAME", DEFAULT_OUTPUT_NAME),
              formats: parse_formats(&get("BPMN_FORMATS", DEFAULT_FORMATS))?,
              dot_executable: get("GRAPHVIZ_DOT", DEFAULT_DOT) })
  }

  /// Ruta de salida sin extensión.
  pub fn output_stem(&self) -> PathBuf {
    self.output_dir.join(&self.output_name)
  }
}

/// Lista de formatos separada por comas. Ignora entradas vacías y
/// repetidas; falla si no queda ninguno.
pub fn parse_formats(list: &str) -> Result<Vec<OutputFormat>> {
  let mut formats = Vec::new();
  for item in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
    let format: OutputFormat = item.parse()?;
    if !formats.contains(&format) {
      formats.push(format);
    }
  }
  if formats.is_empty() {
    return Err(RenderError::Config(format!("sin formatos de salida en '{}'", list)));
  }
  Ok(formats)
}

#[cfg(test)]
mod tests {
  use super::*;
  use std::collections::HashMap;

  #[test]
  fn test_defaults_when_nothing_is_set() -> Result<()> {
    let settings = Settings::from_lookup(|_| None)?;
    assert_eq!(settings, Settings::default());
    assert_eq!(settings.output_stem(), PathBuf::from("./diagrama_bpmn"));
    Ok(())
  }

  #[test]
  fn test_values_from_lookup() -> Result<()> {
    let env: HashMap<&str, &str> = [("BPMN_OUTPUT_DIR", "/tmp/salida"),
                                    ("BPMN_OUTPUT_NAME", "proceso"),
                                    ("BPMN_FORMATS", "SVG, dot,svg"),
                                    ("GRAPHVIZ_DOT", "/usr/local/bin/dot")].into_iter()
                                                                           .collect();
    let settings = Settings::from_lookup(|k| env.get(k).map(|v| v.to_string()))?;
    assert_eq!(settings.formats, vec![OutputFormat::Svg, OutputFormat::Dot]);
    assert_eq!(settings.output_stem(), PathBuf::from("/tmp/salida/proceso"));
    assert_eq!(settings.dot_executable, "/usr/local/bin/dot");
    assert_eq!(settings.process_json, PathBuf::from(DEFAULT_PROCESS_JSON));
    Ok(())
  }

  #[test]
  fn test_bad_format_list() {
    assert!(matches!(parse_formats("png,bmp"), Err(RenderError::UnknownFormat(_))));
    assert!(matches!(parse_formats(" , "), Err(RenderError::Config(_))));
  }
}
