// Archivo: graphviz.rs
// Propósito: backend que delega el layout y la exportación en el ejecutable
// `dot` de Graphviz. El DOT se pasa por stdin, una invocación por formato.
use crate::backend::{output_path, RenderBackend};
use crate::config::Settings;
use crate::errors::{RenderError, Result};
use crate::format::OutputFormat;
use bpmn_graph::Graph;
use log::{debug, info};
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

#[derive(Debug, Clone)]
pub struct GraphvizBackend {
  executable: String,
}

impl Default for GraphvizBackend {
  fn default() -> Self {
    Self::new(crate::config::DEFAULT_DOT)
  }
}

impl GraphvizBackend {
  pub fn new(executable: impl Into<String>) -> Self {
    Self { executable: executable.into() }
  }

  pub fn from_settings(settings: &Settings) -> Self {
    Self::new(settings.dot_executable.as_str())
  }

  fn run_dot(&self, dot: &str, format: OutputFormat, path: &Path) -> Result<()> {
    let spawn_err = |source| RenderError::Spawn { program: self.executable.clone(), source };
    let mut child = Command::new(&self.executable).arg(format!("-T{}", format.extension()))
                                                  .arg("-o")
                                                  .arg(path)
                                                  .stdin(Stdio::piped())
                                                  .stdout(Stdio::null())
                                                  .stderr(Stdio::piped())
                                                  .spawn()
                                                  .map_err(spawn_err)?;
    if let Some(mut stdin) = child.stdin.take() {
      stdin.write_all(dot.as_bytes())?;
    }
    let output = child.wait_with_output()?;
    if !output.status.success() {
      return Err(RenderError::Graphviz { format,
                                         status: output.status.code(),
                                         stderr: String::from_utf8_lossy(&output.stderr).trim().to_string() });
    }
    Ok(())
  }
}

impl RenderBackend for GraphvizBackend {
  fn render(&self, graph: &Graph, stem: &Path, formats: &[OutputFormat]) -> Result<Vec<PathBuf>> {
    if let Some(dir) = stem.parent().filter(|d| !d.as_os_str().is_empty()) {
      fs::create_dir_all(dir)?;
    }
    let dot = graph.to_dot();
    let mut written = Vec::with_capacity(formats.len());
    for &format in formats {
      let path = output_path(stem, format);
      debug!("generando {} en {}", format, path.display());
      match format {
        OutputFormat::Dot => fs::write(&path, &dot)?,
        _ => self.run_dot(&dot, format, &path)?,
      }
      info!("diagrama guardado en {}", path.display());
      written.push(path);
    }
    Ok(written)
  }
}
