use bpmn_model::ModelError;
use serde::Serialize;
use std::fmt;

/// Problema con un elemento concreto del flujo. El elemento quedó como
/// hueco en la cadena y no se dibujó.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ElementIssue {
  pub index: usize,
  #[serde(serialize_with = "as_text")]
  pub error: ModelError,
}

fn as_text<S: serde::Serializer>(error: &ModelError, s: S) -> Result<S::Ok, S::Error> {
  s.serialize_str(&error.to_string())
}

impl fmt::Display for ElementIssue {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "elemento {}: {}", self.index, self.error)
  }
}

/// Resumen de una compilación.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CompileReport {
  /// El documento no traía la clave `flow`; el diagrama sólo tiene leyenda.
  pub flow_missing: bool,
  /// Elementos del flujo (incluidos los que fallaron).
  pub total: usize,
  pub compiled: usize,
  /// Aristas de secuencia añadidas entre elementos consecutivos.
  pub links: usize,
  /// Tareas distintas dibujadas tras reutilizar las repetidas.
  pub tasks: usize,
  /// Ids ocupados en el registro y cuántos necesitaron sufijo.
  pub ids: usize,
  pub collisions: usize,
  pub issues: Vec<ElementIssue>,
}

impl CompileReport {
  pub fn has_issues(&self) -> bool {
    !self.issues.is_empty()
  }

  /// Sin flujo principal: falta `flow`, está vacío o no compiló nada.
  pub fn is_empty(&self) -> bool {
    self.compiled == 0
  }
}

impl fmt::Display for CompileReport {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    if self.flow_missing {
      writeln!(f, "sin clave 'flow': diagrama sólo con leyenda")?;
    }
    writeln!(f, "elementos compilados: {}/{}", self.compiled, self.total)?;
    writeln!(f, "enlaces de secuencia: {}", self.links)?;
    writeln!(f, "tareas: {}, ids: {} ({} con sufijo)", self.tasks, self.ids, self.collisions)?;
    for issue in &self.issues {
      writeln!(f, "  - {}", issue)?;
    }
    Ok(())
  }
}
