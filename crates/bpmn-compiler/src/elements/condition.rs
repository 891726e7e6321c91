use crate::context::CompileContext;
use bpmn_graph::{Node, NodeKind, Subgraph};

/// Crea siempre un nodo de condición nuevo: dos condiciones con el mismo
/// texto son nodos distintos.
pub fn compile_condition(text: &str, key: &str, ctx: &mut CompileContext, graph: &mut Subgraph) -> String {
  let id = ctx.registry.allocate(&format!("condition_{}", key));
  graph.add_node(Node::new(&id, text, NodeKind::Condition));
  id
}
