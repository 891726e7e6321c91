use crate::ledger::TaskLedger;
use crate::registry::IdentityRegistry;

/// Id fijo del nodo separador que cierra el flujo principal.
pub const SPACER_ID: &str = "spacer";

/// Estado de una compilación: registro de ids y libro de tareas.
///
/// Se crea uno por diagrama y se descarta al terminar; no debe compartirse
/// entre dos compilaciones.
#[derive(Debug)]
pub struct CompileContext {
  pub registry: IdentityRegistry,
  pub ledger: TaskLedger,
}

impl Default for CompileContext {
  fn default() -> Self {
    Self::new()
  }
}

impl CompileContext {
  /// Crea un contexto con el id del separador ya reservado.
  pub fn new() -> Self {
    let mut registry = IdentityRegistry::new();
    registry.reserve(SPACER_ID);
    Self { registry, ledger: TaskLedger::new() }
  }
}
