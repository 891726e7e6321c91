// Archivo: assembler.rs
// Propósito: punto de entrada del compilador. Monta el grafo final: flujo
// principal dentro de `cluster_main`, separador tras el último evento y
// leyenda fija.
use crate::context::{CompileContext, SPACER_ID};
use crate::errors::Result;
use crate::legend::legend;
use crate::report::CompileReport;
use crate::sequencer::{compile_flow, trailing_event};
use bpmn_graph::{Edge, Graph, Node, NodeKind, Subgraph};
use bpmn_model::ProcessDescription;
use log::{info, warn};
use serde::Serialize;
use serde_json::Value;

pub const MAIN_CLUSTER: &str = "cluster_main";
pub const DIAGRAM_COMMENT: &str = "BPMN Diagram";

/// Grafo compilado junto con el resumen de la compilación.
#[derive(Debug, Clone, Serialize)]
pub struct Diagram {
  pub graph: Graph,
  pub report: CompileReport,
}

impl Diagram {
  pub fn to_dot(&self) -> String {
    self.graph.to_dot()
  }

  /// Grafo y reporte serializados en un único documento JSON.
  pub fn to_json(&self) -> Result<String> {
    Ok(serde_json::to_string_pretty(self).map_err(bpmn_graph::GraphError::from)?)
  }
}

/// Compilador de un único diagrama.
///
/// `compile` consume la instancia: el registro de ids y el libro de tareas
/// no sobreviven a la compilación.
#[derive(Debug)]
pub struct DiagramCompiler {
  ctx: CompileContext,
}

impl Default for DiagramCompiler {
  fn default() -> Self {
    Self::new()
  }
}

impl DiagramCompiler {
  pub fn new() -> Self {
    Self { ctx: CompileContext::new() }
  }

  pub fn compile(mut self, process: &ProcessDescription) -> Diagram {
    let mut graph = Graph::new(DIAGRAM_COMMENT);
    for (key, value) in [("rankdir", "TB"), ("nodesep", "0.8"), ("ranksep", "1.0"), ("splines", "ortho")] {
      graph.attrs.insert(key.to_string(), value.to_string());
    }
    graph.node_defaults.insert("fontname".to_string(), "Helvetica".to_string());
    graph.edge_defaults.insert("fontname".to_string(), "Helvetica".to_string());

    let mut report = CompileReport { flow_missing: !process.has_flow(), ..CompileReport::default() };
    if report.flow_missing {
      warn!("la descripción no tiene clave 'flow'; sólo se dibuja la leyenda");
    }

    let mut main = Subgraph::named(MAIN_CLUSTER).with_attr("style", "invis");
    let slots = compile_flow(process.elements(), &mut self.ctx, &mut main, &mut report);
    let last_event = trailing_event(process.elements(), &slots).map(str::to_string);
    report.tasks = self.ctx.ledger.count();
    report.ids = self.ctx.registry.issued_count();
    report.collisions = self.ctx.registry.collisions();
    graph.root.add_subgraph(main);

    graph.root.add_node(Node::new(SPACER_ID, "", NodeKind::Spacer));
    if let Some(exit) = last_event {
      graph.root.add_edge(Edge::invisible(exit, SPACER_ID));
    }
    graph.root.add_subgraph(legend());

    info!("diagrama compilado: {}/{} elementos, {} incidencias", report.compiled, report.total, report.issues.len());
    Diagram { graph, report }
  }
}

/// Compila una descripción ya decodificada con un compilador nuevo.
pub fn compile(process: &ProcessDescription) -> Diagram {
  DiagramCompiler::new().compile(process)
}

/// Compila un documento JSON ya parseado. Falla si la raíz no es un objeto
/// o si `flow` no es una lista.
pub fn compile_value(value: &Value) -> Result<Diagram> {
  let process = ProcessDescription::from_value(value)?;
  Ok(compile(&process))
}

/// Compila el texto de un documento JSON.
pub fn compile_str(text: &str) -> Result<Diagram> {
  let process = ProcessDescription::from_json(text)?;
  Ok(compile(&process))
}
