use super::Endpoints;
use crate::context::CompileContext;
use bpmn_graph::{Edge, Node, NodeKind, NodeStyle, Subgraph};
use bpmn_model::{Event, EventKind};

/// Compila un evento. Los eventos de fin con motivo llevan además una
/// anotación unida por una arista discontinua que no forma parte de la
/// cadena principal.
pub fn compile_event(event: &Event, ctx: &mut CompileContext, graph: &mut Subgraph) -> Endpoints {
  let id = ctx.registry.allocate(&format!("evento_{}", event.name));
  let kind = match event.kind() {
    EventKind::Start => NodeKind::StartEvent,
    EventKind::End => NodeKind::EndEvent,
    EventKind::Generic => NodeKind::GenericEvent,
  };
  graph.add_node(Node::new(&id, event.name.as_str(), kind));

  if let (EventKind::End, Some(reason)) = (event.kind(), event.condition.as_deref()) {
    let label_id = ctx.registry.allocate(&format!("fin_label_{}", event.name));
    graph.add_node(Node::new(&label_id, reason, NodeKind::Condition).with_style(NodeStyle::CONDITION.with_font_size(10)));
    graph.add_edge(Edge::annotation(&id, &label_id));
  }
  Endpoints::single(id)
}
