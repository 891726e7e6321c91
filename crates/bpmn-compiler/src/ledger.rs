use indexmap::IndexMap;

/// Libro de tareas ya compiladas: nombre de tarea -> id de su nodo.
///
/// Una tarea referenciada varias veces (flujo principal, ramas, cuerpos de
/// bucle) se resuelve siempre al nodo de la primera aparición.
#[derive(Debug, Default)]
pub struct TaskLedger {
  tasks: IndexMap<String, String>,
}

impl TaskLedger {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn get(&self, name: &str) -> Option<&str> {
    self.tasks.get(name).map(String::as_str)
  }

  /// Registra la tarea si no estaba; la primera aparición gana.
  pub fn record(&mut self, name: &str, id: &str) {
    self.tasks.entry(name.to_string()).or_insert_with(|| id.to_string());
  }

  /// Tareas distintas dibujadas.
  pub fn count(&self) -> usize {
    self.tasks.len()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_first_record_wins() {
    let mut ledger = TaskLedger::new();
    assert_eq!(ledger.count(), 0);
    ledger.record("A", "A");
    ledger.record("A", "A_7");
    ledger.record("B", "B");
    assert_eq!(ledger.get("A"), Some("A"));
    assert_eq!(ledger.get("B"), Some("B"));
    assert_eq!(ledger.get("C"), None);
    assert_eq!(ledger.count(), 2);
  }
}
