//! Leyenda fija del diagrama.
//!
//! No depende de la entrada: se construye una vez y cada diagrama recibe una
//! copia. Sus ids (`icon_*`, `label_*`, `cluster_*`) no pasan por el registro
//! porque nunca coinciden con un id asignado (los ids base no llevan `_` y
//! los sufijados terminan en `_<n>`).
use bpmn_graph::{Edge, Node, NodeKind, NodeStyle, Subgraph};
use once_cell::sync::Lazy;

/// Entradas de la leyenda en orden: clave, texto y clase representada.
pub const ENTRIES: [(&str, &str, NodeKind); 7] = [("task", "Tarea", NodeKind::Task),
                                                 ("xor", "XOR", NodeKind::XorGateway),
                                                 ("and", "AND", NodeKind::AndGateway),
                                                 ("loop", "Bucle", NodeKind::LoopMarker),
                                                 ("start", "Inicio", NodeKind::StartEvent),
                                                 ("end", "Fin", NodeKind::EndEvent),
                                                 ("condition", "Condición", NodeKind::Condition)];

pub const LEGEND_CLUSTER: &str = "cluster_legend";

static LEGEND: Lazy<Subgraph> = Lazy::new(build);

/// Copia del subgrafo de la leyenda.
pub fn legend() -> Subgraph {
  LEGEND.clone()
}

/// Todos los iconos comparten tamaño, 0.6 x 0.4, sea cual sea su forma.
fn icon_style(kind: NodeKind) -> NodeStyle {
  kind.style().with_pen_width(1.5).with_size(0.6, 0.4).with_margin("0.1,0.1")
}

fn build() -> Subgraph {
  let mut legend = Subgraph::named(LEGEND_CLUSTER).with_attr("rank", "sink")
                                                  .with_attr("label", "Leyenda")
                                                  .with_attr("style", "rounded")
                                                  .with_attr("color", "gray")
                                                  .with_attr("fontsize", "15")
                                                  .with_attr("rankdir", "TB");

  for (key, text, kind) in ENTRIES {
    let icon = format!("icon_{}", key);
    let label = format!("label_{}", key);
    let cluster = legend.add_subgraph(Subgraph::named(format!("cluster_{}", key)).with_attr("style", "invis"));
    cluster.add_node(Node::new(&icon, kind.glyph(), NodeKind::LegendIcon).with_style(icon_style(kind)));
    cluster.add_node(Node::new(&label, text, NodeKind::LegendLabel));
    cluster.add_edge(Edge::invisible(&icon, &label));
  }

  for pair in ENTRIES.windows(2) {
    legend.add_edge(Edge::invisible(format!("icon_{}", pair[0].0), format!("icon_{}", pair[1].0)).non_constraining());
  }

  let row = legend.add_subgraph(Subgraph::new().with_attr("rank", "same"));
  for (key, _, _) in ENTRIES {
    row.add_member(format!("icon_{}", key));
  }
  legend
}
