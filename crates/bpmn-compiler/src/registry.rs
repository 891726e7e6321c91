use std::collections::HashSet;

/// Registro de identificadores de un diagrama.
///
/// El id base de un nombre son sus caracteres alfanuméricos. La primera vez
/// que aparece un id base se entrega tal cual; si ya estaba emitido se le
/// añade `_{n}`, donde `n` es un contador de colisiones único para todo el
/// registro (no por nombre). Por eso el resultado depende del orden global
/// de llamadas. La búsqueda de una tarea ya compilada por nombre la hace
/// `TaskLedger`.
#[derive(Debug, Default)]
pub struct IdentityRegistry {
  issued: HashSet<String>,
  collisions: usize,
}

impl IdentityRegistry {
  pub fn new() -> Self {
    Self::default()
  }

  /// Filtra los caracteres no alfanuméricos del nombre.
  pub fn base_id(name: &str) -> String {
    name.chars().filter(|c| c.is_alphanumeric()).collect()
  }

  /// Entrega un id nuevo y único para `name`.
  pub fn allocate(&mut self, name: &str) -> String {
    let base = Self::base_id(name);
    let id = if self.issued.contains(&base) {
      loop {
        self.collisions += 1;
        let candidate = format!("{}_{}", base, self.collisions);
        if !self.issued.contains(&candidate) {
          break candidate;
        }
      }
    } else {
      base
    };
    self.issued.insert(id.clone());
    id
  }

  /// Marca un id como ocupado sin asociarlo a ningún nombre. Devuelve
  /// `false` si ya estaba emitido.
  pub fn reserve(&mut self, id: &str) -> bool {
    self.issued.insert(id.to_string())
  }

  /// Número de ids ocupados (incluye los reservados).
  pub fn issued_count(&self) -> usize {
    self.issued.len()
  }

  pub fn collisions(&self) -> usize {
    self.collisions
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_base_id_strips_non_alphanumeric() {
    assert_eq!(IdentityRegistry::base_id("evento_inicio"), "eventoinicio");
    assert_eq!(IdentityRegistry::base_id("Revisar  documentos (v2)"), "Revisardocumentosv2");
    assert_eq!(IdentityRegistry::base_id("Aprobación"), "Aprobación");
    assert_eq!(IdentityRegistry::base_id("¿?"), "");
  }

  #[test]
  fn test_first_allocation_returns_base_id() {
    let mut reg = IdentityRegistry::new();
    assert_eq!(reg.allocate("Tarea A"), "TareaA");
    assert_eq!(reg.issued_count(), 1);
    assert_eq!(reg.collisions(), 0);
  }

  #[test]
  fn test_collision_counter_is_global() {
    let mut reg = IdentityRegistry::new();
    assert_eq!(reg.allocate("a"), "a");
    assert_eq!(reg.allocate("b"), "b");
    assert_eq!(reg.allocate("a!"), "a_1");
    assert_eq!(reg.allocate("b!"), "b_2");
    assert_eq!(reg.allocate("a?"), "a_3");
    assert_eq!(reg.collisions(), 3);
  }

  #[test]
  fn test_call_order_changes_suffixes() {
    let mut first = IdentityRegistry::new();
    first.allocate("x");
    first.allocate("y");
    let x1 = first.allocate("x-");
    let mut second = IdentityRegistry::new();
    second.allocate("y");
    second.allocate("y-");
    second.allocate("x");
    let x2 = second.allocate("x-");
    assert_eq!(x1, "x_1");
    assert_eq!(x2, "x_2");
  }

  #[test]
  fn test_same_name_twice_gets_two_ids() {
    let mut reg = IdentityRegistry::new();
    let first = reg.allocate("evento_fin");
    let second = reg.allocate("evento_fin");
    assert_eq!(first, "eventofin");
    assert_eq!(second, "eventofin_1");
  }

  #[test]
  fn test_reserved_ids_force_suffix() {
    let mut reg = IdentityRegistry::new();
    assert!(reg.reserve("spacer"));
    assert!(!reg.reserve("spacer"));
    assert_eq!(reg.allocate("spacer"), "spacer_1");
    assert_eq!(reg.issued_count(), 2);
  }
}
