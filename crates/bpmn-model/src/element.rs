// element.rs
use crate::ModelError;
use serde::{de, Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Tipos de elemento que puede contener el arreglo `flow`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
  #[serde(rename = "evento")]
  Event,
  #[serde(rename = "tarea")]
  Task,
  #[serde(rename = "pasarela")]
  Gateway,
  #[serde(rename = "bucle")]
  Loop,
}

impl ElementKind {
  /// Campos sin los cuales el elemento no puede compilarse.
  pub fn required_fields(self) -> &'static [&'static str] {
    &["name"]
  }
}

impl fmt::Display for ElementKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let s = match self {
      ElementKind::Event => "evento",
      ElementKind::Task => "tarea",
      ElementKind::Gateway => "pasarela",
      ElementKind::Loop => "bucle",
    };
    write!(f, "{}", s)
  }
}

impl FromStr for ElementKind {
  type Err = ModelError;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_lowercase().as_str() {
      "evento" | "event" => Ok(ElementKind::Event),
      "tarea" | "task" => Ok(ElementKind::Task),
      "pasarela" | "gateway" => Ok(ElementKind::Gateway),
      "bucle" | "loop" => Ok(ElementKind::Loop),
      _ => Err(ModelError::UnrecognizedKind(s.to_string())),
    }
  }
}

/// Clase de un evento según su nombre.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
  Start,
  End,
  Generic,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
  #[serde(deserialize_with = "scalar_name")]
  pub name: String,
  /// Motivo de fin; sólo se dibuja en eventos de fin.
  #[serde(default, rename = "condicion", alias = "condición", alias = "condition", skip_serializing_if = "Option::is_none")]
  pub condition: Option<String>,
}

impl Event {
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into(), condition: None }
  }

  pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
    self.condition = Some(condition.into());
    self
  }

  pub fn kind(&self) -> EventKind {
    match self.name.to_lowercase().as_str() {
      "inicio" | "start" => EventKind::Start,
      "fin" | "end" => EventKind::End,
      _ => EventKind::Generic,
    }
  }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
  #[serde(deserialize_with = "scalar_name")]
  pub name: String,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub description: Option<String>,
}

impl Task {
  pub fn new(name: impl Into<String>) -> Self {
    Self { name: name.into(), description: None }
  }

  pub fn with_description(mut self, description: impl Into<String>) -> Self {
    self.description = Some(description.into());
    self
  }

  /// Texto a mostrar: la descripción o, en su defecto, el nombre.
  pub fn label(&self) -> &str {
    self.description.as_deref().unwrap_or(&self.name)
  }
}

/// Referencia a una tarea dentro de una rama o del cuerpo de un bucle.
///
/// Lo habitual es el nombre como texto; también se aceptan objetos tarea
/// completos y, como último recurso, cualquier otro valor JSON, cuyo texto
/// se usa como nombre.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TaskRef {
  Name(String),
  Detailed(Task),
  Other(Value),
}

impl TaskRef {
  pub fn name(&self) -> Cow<'_, str> {
    match self {
      TaskRef::Name(name) => Cow::Borrowed(name),
      TaskRef::Detailed(task) => Cow::Borrowed(&task.name),
      TaskRef::Other(value) => Cow::Owned(value.to_string()),
    }
  }

  pub fn label(&self) -> Cow<'_, str> {
    match self {
      TaskRef::Detailed(task) => Cow::Borrowed(task.label()),
      _ => self.name(),
    }
  }
}

impl From<&str> for TaskRef {
  fn from(name: &str) -> Self {
    TaskRef::Name(name.to_string())
  }
}

/// Tipo de pasarela.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum GatewayKind {
  Xor,
  And,
}

impl fmt::Display for GatewayKind {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      GatewayKind::Xor => write!(f, "XOR"),
      GatewayKind::And => write!(f, "AND"),
    }
  }
}

impl FromStr for GatewayKind {
  type Err = ();

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    match s.to_uppercase().as_str() {
      "XOR" => Ok(GatewayKind::Xor),
      "AND" => Ok(GatewayKind::And),
      _ => Err(()),
    }
  }
}

fn default_gateway_type() -> String {
  "XOR".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Branch {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub name: Option<String>,
  #[serde(default, rename = "condición", alias = "condicion", alias = "condition", skip_serializing_if = "Option::is_none")]
  pub condition: Option<String>,
  #[serde(default, rename = "tareas", alias = "tasks")]
  pub tasks: Vec<TaskRef>,
}

impl Branch {
  pub fn new<I, T>(tasks: I) -> Self
    where I: IntoIterator<Item = T>,
          T: Into<TaskRef>
  {
    Self { name: None, condition: None, tasks: tasks.into_iter().map(Into::into).collect() }
  }

  pub fn with_condition(mut self, condition: impl Into<String>) -> Self {
    self.condition = Some(condition.into());
    self
  }

  /// Condición de la rama si existe y no está vacía.
  pub fn condition_text(&self) -> Option<&str> {
    self.condition.as_deref().filter(|c| !c.is_empty())
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Gateway {
  #[serde(deserialize_with = "scalar_name")]
  pub name: String,
  /// Texto original del tipo (`XOR` / `AND`); ver [`Gateway::kind`].
  #[serde(default = "default_gateway_type", rename = "type_pasarela", alias = "gateway_type")]
  pub gateway_type: String,
  #[serde(default, rename = "ramas", alias = "branches")]
  pub branches: Vec<Branch>,
}

impl Gateway {
  pub fn new(name: impl Into<String>, kind: GatewayKind) -> Self {
    Self { name: name.into(), gateway_type: kind.to_string(), branches: Vec::new() }
  }

  pub fn with_branch(mut self, branch: Branch) -> Self {
    self.branches.push(branch);
    self
  }

  /// `None` cuando el tipo no es ni XOR ni AND.
  pub fn declared_kind(&self) -> Option<GatewayKind> {
    self.gateway_type.parse().ok()
  }

  /// Tipo efectivo: todo lo que no sea XOR se trata como AND.
  pub fn kind(&self) -> GatewayKind {
    self.declared_kind().unwrap_or(GatewayKind::And)
  }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loop {
  #[serde(deserialize_with = "scalar_name")]
  pub name: String,
  #[serde(default, rename = "condición", alias = "condicion", alias = "condition", skip_serializing_if = "Option::is_none")]
  pub condition: Option<String>,
  #[serde(default, rename = "tareas", alias = "tasks")]
  pub tasks: Vec<TaskRef>,
}

impl Loop {
  pub fn new<I, T>(name: impl Into<String>, condition: impl Into<String>, tasks: I) -> Self
    where I: IntoIterator<Item = T>,
          T: Into<TaskRef>
  {
    Self { name: name.into(),
           condition: Some(condition.into()),
           tasks: tasks.into_iter().map(Into::into).collect() }
  }

  pub fn condition_text(&self) -> &str {
    self.condition.as_deref().unwrap_or("")
  }
}

/// Un elemento del arreglo `flow`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum FlowElement {
  #[serde(rename = "evento", alias = "event")]
  Event(Event),
  #[serde(rename = "tarea", alias = "task")]
  Task(Task),
  #[serde(rename = "pasarela", alias = "gateway")]
  Gateway(Gateway),
  #[serde(rename = "bucle", alias = "loop")]
  Loop(Loop),
}

/// Valores que cuentan como tipo ausente: nulo, falso, cero y texto o
/// colecciones vacías.
fn is_blank(value: &Value) -> bool {
  match value {
    Value::Null => true,
    Value::Bool(b) => !b,
    Value::Number(n) => n.as_f64() == Some(0.0),
    Value::String(s) => s.is_empty(),
    Value::Array(items) => items.is_empty(),
    Value::Object(map) => map.is_empty(),
  }
}

/// Acepta como nombre cualquier escalar JSON; números y booleanos se
/// guardan con su texto JSON.
fn scalar_name<'de, D>(deserializer: D) -> Result<String, D::Error>
  where D: Deserializer<'de>
{
  match Value::deserialize(deserializer)? {
    Value::String(name) => Ok(name),
    scalar @ (Value::Number(_) | Value::Bool(_)) => Ok(scalar.to_string()),
    other => Err(<D::Error as de::Error>::custom(format!("nombre no escalar: {}", other))),
  }
}

impl FlowElement {
  /// Decodifica un único elemento del flujo.
  ///
  /// Distingue entre tipo ausente o desconocido, campo obligatorio ausente
  /// y campos con valores de tipo incorrecto.
  pub fn from_value(value: &Value) -> Result<Self, ModelError> {
    let obj = value.as_object().ok_or(ModelError::ElementNotAnObject)?;
    let kind: ElementKind = match obj.get("type") {
      None => return Err(ModelError::MissingType),
      Some(tag) if is_blank(tag) => return Err(ModelError::MissingType),
      Some(Value::String(tag)) => tag.parse()?,
      Some(other) => return Err(ModelError::UnrecognizedKind(other.to_string())),
    };
    for &field in kind.required_fields() {
      if !obj.contains_key(field) {
        return Err(ModelError::MissingField { kind, field });
      }
    }
    let invalid = |e: serde_json::Error| ModelError::InvalidElement { kind, message: e.to_string() };
    let element = match kind {
      ElementKind::Event => FlowElement::Event(Event::deserialize(value).map_err(invalid)?),
      ElementKind::Task => FlowElement::Task(Task::deserialize(value).map_err(invalid)?),
      ElementKind::Gateway => FlowElement::Gateway(Gateway::deserialize(value).map_err(invalid)?),
      ElementKind::Loop => FlowElement::Loop(Loop::deserialize(value).map_err(invalid)?),
    };
    Ok(element)
  }

  pub fn kind(&self) -> ElementKind {
    match self {
      FlowElement::Event(_) => ElementKind::Event,
      FlowElement::Task(_) => ElementKind::Task,
      FlowElement::Gateway(_) => ElementKind::Gateway,
      FlowElement::Loop(_) => ElementKind::Loop,
    }
  }

  pub fn name(&self) -> &str {
    match self {
      FlowElement::Event(e) => &e.name,
      FlowElement::Task(t) => &t.name,
      FlowElement::Gateway(g) => &g.name,
      FlowElement::Loop(l) => &l.name,
    }
  }
}

impl From<Event> for FlowElement {
  fn from(e: Event) -> Self {
    FlowElement::Event(e)
  }
}

impl From<Task> for FlowElement {
  fn from(t: Task) -> Self {
    FlowElement::Task(t)
  }
}

impl From<Gateway> for FlowElement {
  fn from(g: Gateway) -> Self {
    FlowElement::Gateway(g)
  }
}

impl From<Loop> for FlowElement {
  fn from(l: Loop) -> Self {
    FlowElement::Loop(l)
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serde_json::json;

  #[test]
  fn test_element_kind_accepts_spanish_and_english() -> Result<(), ModelError> {
    assert_eq!("evento".parse::<ElementKind>()?, ElementKind::Event);
    assert_eq!("Task".parse::<ElementKind>()?, ElementKind::Task);
    assert_eq!("PASARELA".parse::<ElementKind>()?, ElementKind::Gateway);
    assert_eq!("loop".parse::<ElementKind>()?, ElementKind::Loop);
    assert!("subproceso".parse::<ElementKind>().is_err());
    Ok(())
  }

  #[test]
  fn test_event_kind_is_case_insensitive() {
    assert_eq!(Event::new("Inicio").kind(), EventKind::Start);
    assert_eq!(Event::new("FIN").kind(), EventKind::End);
    assert_eq!(Event::new("end").kind(), EventKind::End);
    assert_eq!(Event::new("Temporizador").kind(), EventKind::Generic);
  }

  #[test]
  fn test_task_label_falls_back_to_name() {
    assert_eq!(Task::new("A").label(), "A");
    assert_eq!(Task::new("A").with_description("Hacer A").label(), "Hacer A");
  }

  #[test]
  fn test_task_ref_variants() -> Result<(), ModelError> {
    let refs: Vec<TaskRef> = serde_json::from_value(json!(["A", {"name": "B", "description": "Tarea B"}, 7]))?;
    assert_eq!(refs[0].name(), "A");
    assert_eq!(refs[1].name(), "B");
    assert_eq!(refs[1].label(), "Tarea B");
    assert_eq!(refs[2].name(), "7");
    Ok(())
  }

  #[test]
  fn test_gateway_defaults_and_kind() -> Result<(), ModelError> {
    let g = FlowElement::from_value(&json!({"type": "pasarela", "name": "G"}))?;
    match g {
      FlowElement::Gateway(g) => {
        assert_eq!(g.kind(), GatewayKind::Xor);
        assert!(g.branches.is_empty());
      }
      other => panic!("se esperaba pasarela, llegó {:?}", other),
    }
    let g = Gateway { name: "G".into(), gateway_type: "OR".into(), branches: vec![] };
    assert_eq!(g.declared_kind(), None);
    assert_eq!(g.kind(), GatewayKind::And);
    Ok(())
  }

  #[test]
  fn test_branch_condition_keys() -> Result<(), ModelError> {
    let b: Branch = serde_json::from_value(json!({"name": "r", "condición": "ok", "tareas": ["A"]}))?;
    assert_eq!(b.condition_text(), Some("ok"));
    let b: Branch = serde_json::from_value(json!({"condition": "", "tasks": ["A"]}))?;
    assert_eq!(b.condition_text(), None);
    assert_eq!(b.name, None);
    Ok(())
  }

  #[test]
  fn test_from_value_errors() {
    assert_eq!(FlowElement::from_value(&json!("tarea")), Err(ModelError::ElementNotAnObject));
    assert_eq!(FlowElement::from_value(&json!({"name": "A"})), Err(ModelError::MissingType));
    assert_eq!(FlowElement::from_value(&json!({"type": "", "name": "A"})), Err(ModelError::MissingType));
    assert_eq!(FlowElement::from_value(&json!({"type": null, "name": "A"})), Err(ModelError::MissingType));
    assert_eq!(FlowElement::from_value(&json!({"type": 3, "name": "A"})), Err(ModelError::UnrecognizedKind("3".into())));
    assert_eq!(FlowElement::from_value(&json!({"type": "subproceso", "name": "A"})),
               Err(ModelError::UnrecognizedKind("subproceso".into())));
    assert_eq!(FlowElement::from_value(&json!({"type": "pasarela", "ramas": []})),
               Err(ModelError::MissingField { kind: ElementKind::Gateway, field: "name" }));
    assert!(matches!(FlowElement::from_value(&json!({"type": "bucle", "name": "L", "tareas": "A"})),
                     Err(ModelError::InvalidElement { kind: ElementKind::Loop, .. })));
  }

  #[test]
  fn test_scalar_names_are_stringified() -> Result<(), ModelError> {
    let t = FlowElement::from_value(&json!({"type": "tarea", "name": 7}))?;
    assert_eq!(t, FlowElement::Task(Task::new("7")));
    let g = FlowElement::from_value(&json!({"type": "pasarela", "name": true}))?;
    assert_eq!(g.name(), "true");
    assert!(matches!(FlowElement::from_value(&json!({"type": "tarea", "name": null})),
                     Err(ModelError::InvalidElement { kind: ElementKind::Task, .. })));
    assert!(matches!(FlowElement::from_value(&json!({"type": "evento", "name": ["a"]})),
                     Err(ModelError::InvalidElement { kind: ElementKind::Event, .. })));
    Ok(())
  }

  #[test]
  fn test_end_event_condition_alias() -> Result<(), ModelError> {
    let e = FlowElement::from_value(&json!({"type": "evento", "name": "fin", "condicion": "done"}))?;
    assert_eq!(e, FlowElement::Event(Event::new("fin").with_condition("done")));
    let e = FlowElement::from_value(&json!({"type": "event", "name": "end", "condition": "ok"}))?;
    assert_eq!(e, FlowElement::Event(Event::new("end").with_condition("ok")));
    Ok(())
  }
}
