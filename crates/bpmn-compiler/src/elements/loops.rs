use super::{compile_condition, resolve_task, Endpoints};
use crate::context::CompileContext;
use bpmn_graph::{Edge, Node, NodeKind, Subgraph};
use bpmn_model::Loop;

/// Compila un bucle: inicio -> cuerpo -> condición, con la vuelta
/// condición -> inicio marcada sin restricción de rango y la salida
/// condición -> fin.
pub fn compile_loop(block: &Loop, ctx: &mut CompileContext, graph: &mut Subgraph) -> Endpoints {
  let start = ctx.registry.allocate(&format!("loop_start_{}", block.name));
  let end = ctx.registry.allocate(&format!("loop_end_{}", block.name));
  graph.add_node(Node::new(&start, "", NodeKind::LoopMarker));
  graph.add_node(Node::new(&end, "", NodeKind::LoopMarker));

  let mut cursor = start.clone();
  for task in &block.tasks {
    let id = resolve_task(&task.name(), &task.label(), ctx, graph);
    graph.add_edge(Edge::flow(&cursor, &id));
    cursor = id;
  }

  let cond = compile_condition(block.condition_text(), &format!("loop_cond_{}", block.name), ctx, graph);
  graph.add_edge(Edge::flow(&cursor, &cond));
  graph.add_edge(Edge::flow(&cond, &start).non_constraining());
  graph.add_edge(Edge::flow(&cond, &end));

  Endpoints::pair(start, end)
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_loop_condition_has_back_edge_and_exit() {
    let mut ctx = CompileContext::new();
    let mut graph = Subgraph::new();
    let ep = compile_loop(&Loop::new("Reintento", "¿Falla?", ["Enviar", "Esperar"]), &mut ctx, &mut graph);
    assert_eq!(ep, Endpoints::pair("loopstartReintento", "loopendReintento"));

    let cond = "conditionloopcondReintento";
    let out: Vec<&Edge> = graph.edges.iter().filter(|e| e.from == cond).collect();
    assert_eq!(out.len(), 2);
    assert!(out.iter().any(|e| e.to == ep.entry && !e.constraint));
    assert!(out.iter().any(|e| e.to == ep.exit && e.constraint));
    assert!(graph.edges.iter().any(|e| e.from == "Esperar" && e.to == cond));
  }

  #[test]
  fn test_empty_body_goes_straight_to_condition() {
    let mut ctx = CompileContext::new();
    let mut graph = Subgraph::new();
    let block = Loop { name: "L".to_string(), condition: None, tasks: Vec::new() };
    let ep = compile_loop(&block, &mut ctx, &mut graph);
    assert_eq!(graph.edges[0].from, ep.entry);
    assert_eq!(graph.edges[0].to, "conditionloopcondL");
    let cond = graph.nodes.iter().find(|n| n.kind == NodeKind::Condition);
    assert_eq!(cond.map(|n| n.label.as_str()), Some(""));
  }
}
