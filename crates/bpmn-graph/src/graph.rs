// Archivo: graph.rs
// Propósito: estructura del grafo (nodos, aristas, subgrafos) y consultas
// recursivas sobre ella.
use crate::errors::Result;
use crate::style::{EdgeStyle, NodeKind, NodeStyle, FLOW_PEN_WIDTH};
use indexmap::IndexMap;
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Nodo del grafo: identificador único, etiqueta visible y clase visual.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Node {
    pub id: String,
    pub label: String,
    pub kind: NodeKind,
    pub style: NodeStyle,
}

impl Node {
    /// Crea un nodo con el estilo por defecto de su clase.
    pub fn new(id: impl Into<String>, label: impl Into<String>, kind: NodeKind) -> Self {
        Self { id: id.into(), label: label.into(), kind, style: kind.style() }
    }

    pub fn with_style(mut self, style: NodeStyle) -> Self {
        self.style = style;
        self
    }
}

/// Arista dirigida.
///
/// `constraint = false` indica al backend que la arista no debe influir en
/// el orden de rangos (por ejemplo, la vuelta atrás de un bucle).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub from: String,
    pub to: String,
    pub style: EdgeStyle,
    pub constraint: bool,
    pub arrowhead: bool,
    pub pen_width: Option<f32>,
}

impl Edge {
    /// Arista de flujo: sólida, con grosor de flujo.
    pub fn flow(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self { from: from.into(),
               to: to.into(),
               style: EdgeStyle::Solid,
               constraint: true,
               arrowhead: true,
               pen_width: Some(FLOW_PEN_WIDTH) }
    }

    /// Arista hacia una anotación: discontinua y sin punta de flecha.
    pub fn annotation(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self { from: from.into(),
               to: to.into(),
               style: EdgeStyle::Dashed,
               constraint: true,
               arrowhead: false,
               pen_width: None }
    }

    /// Arista invisible, sólo para el layout.
    pub fn invisible(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self { from: from.into(),
               to: to.into(),
               style: EdgeStyle::Invisible,
               constraint: true,
               arrowhead: true,
               pen_width: None }
    }

    pub fn non_constraining(mut self) -> Self {
        self.constraint = false;
        self
    }

    /// Las aristas invisibles sólo sirven al layout; no transportan flujo.
    pub fn is_layout_only(&self) -> bool {
        self.style == EdgeStyle::Invisible
    }
}

/// Subgrafo: agrupa nodos, aristas y subgrafos anidados.
///
/// Con nombre `cluster_*` el backend lo dibuja como caja; sin nombre sirve
/// para restricciones de layout como `rank=same`. `members` son menciones
/// de nodos definidos en otro subgrafo.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Subgraph {
    pub name: Option<String>,
    pub attrs: IndexMap<String, String>,
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
    pub members: Vec<String>,
    pub subgraphs: Vec<Subgraph>,
}

impl Subgraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()), ..Self::default() }
    }

    pub fn with_attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attrs.insert(key.into(), value.into());
    }

    pub fn add_node(&mut self, node: Node) {
        self.nodes.push(node);
    }

    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    pub fn add_member(&mut self, id: impl Into<String>) {
        self.members.push(id.into());
    }

    /// Añade un subgrafo hijo y devuelve una referencia para poblarlo.
    pub fn add_subgraph(&mut self, subgraph: Subgraph) -> &mut Subgraph {
        self.subgraphs.push(subgraph);
        let last = self.subgraphs.len() - 1;
        &mut self.subgraphs[last]
    }

    /// Todos los nodos, incluidos los de subgrafos anidados.
    pub fn all_nodes(&self) -> Vec<&Node> {
        let mut out: Vec<&Node> = self.nodes.iter().collect();
        for sub in &self.subgraphs {
            out.extend(sub.all_nodes());
        }
        out
    }

    /// Todas las aristas, incluidas las de subgrafos anidados.
    pub fn all_edges(&self) -> Vec<&Edge> {
        let mut out: Vec<&Edge> = self.edges.iter().collect();
        for sub in &self.subgraphs {
            out.extend(sub.all_edges());
        }
        out
    }

    pub fn find_subgraph(&self, name: &str) -> Option<&Subgraph> {
        if self.name.as_deref() == Some(name) {
            return Some(self);
        }
        self.subgraphs.iter().find_map(|s| s.find_subgraph(name))
    }
}

/// Grafo dirigido completo con atributos globales.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Graph {
    pub comment: String,
    pub attrs: IndexMap<String, String>,
    pub node_defaults: IndexMap<String, String>,
    pub edge_defaults: IndexMap<String, String>,
    pub root: Subgraph,
}

impl Graph {
    pub fn new(comment: impl Into<String>) -> Self {
        Self { comment: comment.into(),
               attrs: IndexMap::new(),
               node_defaults: IndexMap::new(),
               edge_defaults: IndexMap::new(),
               root: Subgraph::new() }
    }

    pub fn nodes(&self) -> Vec<&Node> {
        self.root.all_nodes()
    }

    pub fn edges(&self) -> Vec<&Edge> {
        self.root.all_edges()
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes().into_iter().find(|n| n.id == id)
    }

    pub fn nodes_of_kind(&self, kind: NodeKind) -> Vec<&Node> {
        self.nodes().into_iter().filter(|n| n.kind == kind).collect()
    }

    pub fn edges_from(&self, id: &str) -> Vec<&Edge> {
        self.edges().into_iter().filter(|e| e.from == id).collect()
    }

    pub fn edges_to(&self, id: &str) -> Vec<&Edge> {
        self.edges().into_iter().filter(|e| e.to == id).collect()
    }

    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.edges().iter().any(|e| e.from == from && e.to == to)
    }

    pub fn subgraph(&self, name: &str) -> Option<&Subgraph> {
        self.root.find_subgraph(name)
    }

    /// Serializa el grafo completo a JSON legible.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Huella SHA-256 (hex) del texto DOT. Dos compilaciones de la misma
    /// entrada producen la misma huella.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        hasher.update(self.to_dot().as_bytes());
        format!("{:x}", hasher.finalize())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Graph {
        let mut graph = Graph::new("prueba");
        graph.root.add_node(Node::new("A", "A", NodeKind::Task));
        let inner = graph.root.add_subgraph(Subgraph::named("cluster_x"));
        inner.add_node(Node::new("B", "B", NodeKind::Task));
        inner.add_edge(Edge::flow("A", "B"));
        graph
    }

    #[test]
    fn queries_walk_nested_subgraphs() {
        let graph = sample();
        assert_eq!(graph.nodes().len(), 2);
        assert!(graph.node("B").is_some());
        assert!(graph.has_edge("A", "B"));
        assert_eq!(graph.edges_to("B").len(), 1);
        assert!(graph.subgraph("cluster_x").is_some());
        assert!(graph.subgraph("cluster_y").is_none());
    }

    #[test]
    fn edge_constructors() {
        let e = Edge::flow("a", "b").non_constraining();
        assert!(!e.constraint);
        assert_eq!(e.pen_width, Some(FLOW_PEN_WIDTH));
        let a = Edge::annotation("a", "b");
        assert_eq!(a.style, EdgeStyle::Dashed);
        assert!(!a.arrowhead);
        assert!(Edge::invisible("a", "b").is_layout_only());
    }

    #[test]
    fn json_export_contains_nodes() -> Result<()> {
        let json = sample().to_json()?;
        let value: serde_json::Value = serde_json::from_str(&json)?;
        assert_eq!(value["root"]["nodes"][0]["kind"], "task");
        Ok(())
    }
}
