use super::Endpoints;
use crate::context::CompileContext;
use bpmn_graph::{Node, NodeKind, Subgraph};
use bpmn_model::Task;
use log::debug;

pub fn compile_task(task: &Task, ctx: &mut CompileContext, graph: &mut Subgraph) -> Endpoints {
  Endpoints::single(resolve_task(&task.name, task.label(), ctx, graph))
}

/// Resuelve una tarea por nombre: si ya está en el libro devuelve su id
/// sin tocar el grafo; si no, crea el nodo con `label` y la anota.
pub fn resolve_task(name: &str, label: &str, ctx: &mut CompileContext, graph: &mut Subgraph) -> String {
  if let Some(id) = ctx.ledger.get(name) {
    debug!("tarea '{}' reutilizada ({})", name, id);
    return id.to_string();
  }
  let id = ctx.registry.allocate(name);
  graph.add_node(Node::new(&id, label, NodeKind::Task));
  ctx.ledger.record(name, &id);
  id
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_task_is_compiled_once() {
    let mut ctx = CompileContext::new();
    let mut graph = Subgraph::new();
    let first = compile_task(&Task::new("Revisar").with_description("Revisar solicitud"), &mut ctx, &mut graph);
    let again = compile_task(&Task::new("Revisar").with_description("Otra descripción"), &mut ctx, &mut graph);
    assert_eq!(first.entry, first.exit);
    assert_eq!(first, again);
    assert_eq!(graph.nodes.len(), 1);
    assert_eq!(graph.nodes[0].label, "Revisar solicitud");
  }
}
