use super::{compile_condition, resolve_task, Endpoints};
use crate::context::CompileContext;
use bpmn_graph::{Edge, Node, NodeKind, Subgraph};
use bpmn_model::{Gateway, GatewayKind};
use log::warn;

/// Compila una pasarela como par decisión/unión.
///
/// Cada rama parte de la decisión, pasa opcionalmente por su condición
/// (sólo en XOR), recorre sus tareas y termina en la unión. Una rama sin
/// tareas ni condición es una arista directa decisión -> unión.
/// La arista de cierre hacia la unión no se repite.
pub fn compile_gateway(gateway: &Gateway, ctx: &mut CompileContext, graph: &mut Subgraph) -> Endpoints {
  if gateway.declared_kind().is_none() {
    warn!("pasarela '{}': tipo '{}' desconocido, se trata como AND", gateway.name, gateway.gateway_type);
  }
  let kind = match gateway.kind() {
    GatewayKind::Xor => NodeKind::XorGateway,
    GatewayKind::And => NodeKind::AndGateway,
  };

  let decision = ctx.registry.allocate(&format!("gateway_{}", gateway.name));
  let merge = ctx.registry.allocate(&format!("merge_{}", gateway.name));
  graph.add_node(Node::new(&decision, kind.glyph(), kind));
  graph.add_node(Node::new(&merge, kind.glyph(), kind));

  for (i, branch) in gateway.branches.iter().enumerate() {
    let mut cursor = decision.clone();

    if kind == NodeKind::XorGateway {
      if let Some(text) = branch.condition_text() {
        let cond = compile_condition(text, &format!("branch_{}_{}", gateway.name, i), ctx, graph);
        graph.add_edge(Edge::flow(&cursor, &cond));
        cursor = cond;
      }
    }

    for task in &branch.tasks {
      let id = resolve_task(&task.name(), &task.label(), ctx, graph);
      graph.add_edge(Edge::flow(&cursor, &id));
      cursor = id;
    }
    // dos ramas que terminan en la misma tarea comparten la arista de cierre
    if !graph.edges.iter().any(|e| e.from == cursor && e.to == merge) {
      graph.add_edge(Edge::flow(&cursor, &merge));
    }
  }

  Endpoints::pair(decision, merge)
}
