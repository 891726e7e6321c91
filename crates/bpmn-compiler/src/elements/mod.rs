//! Compiladores por clase de elemento.
//!
//! Cada compilador recibe el elemento, el contexto de la compilación y el
//! subgrafo donde escribir, y devuelve los ids de entrada y salida con los
//! que el secuenciador lo encadena.
mod condition;
mod event;
mod gateway;
mod loops;
mod task;

pub use condition::compile_condition;
pub use event::compile_event;
pub use gateway::compile_gateway;
pub use loops::compile_loop;
pub use task::{compile_task, resolve_task};

use crate::context::CompileContext;
use bpmn_graph::Subgraph;
use bpmn_model::FlowElement;

/// Puntos de entrada y salida de un elemento compilado.
///
/// En eventos y tareas ambos coinciden.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoints {
  pub entry: String,
  pub exit: String,
}

impl Endpoints {
  pub fn single(id: impl Into<String>) -> Self {
    let id = id.into();
    Self { entry: id.clone(), exit: id }
  }

  pub fn pair(entry: impl Into<String>, exit: impl Into<String>) -> Self {
    Self { entry: entry.into(), exit: exit.into() }
  }
}

/// Despacha el elemento a su compilador.
pub fn compile_element(element: &FlowElement, ctx: &mut CompileContext, graph: &mut Subgraph) -> Endpoints {
  match element {
    FlowElement::Event(event) => compile_event(event, ctx, graph),
    FlowElement::Task(task) => compile_task(task, ctx, graph),
    FlowElement::Gateway(gateway) => compile_gateway(gateway, ctx, graph),
    FlowElement::Loop(block) => compile_loop(block, ctx, graph),
  }
}
