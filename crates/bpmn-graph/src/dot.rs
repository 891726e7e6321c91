// Archivo: dot.rs
// Propósito: exportar el grafo a formato DOT (Graphviz).
//
// Todos los identificadores y etiquetas se emiten entre comillas, así que
// cualquier texto (tildes, espacios, ids vacíos) es válido en la salida.
use crate::graph::{Edge, Graph, Node, Subgraph};
use indexmap::IndexMap;
use std::fmt::{self, Write};

impl Graph {
    /// Representación DOT del grafo. Se puede pasar a Graphviz con
    /// `dot -Tpng`.
    pub fn to_dot(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "// {}", self.comment)?;
        writeln!(f, "digraph {{")?;
        for (key, value) in &self.attrs {
            writeln!(f, "  {}={}", key, quote(value))?;
        }
        if !self.node_defaults.is_empty() {
            writeln!(f, "  node [{}]", attr_list(&self.node_defaults))?;
        }
        if !self.edge_defaults.is_empty() {
            writeln!(f, "  edge [{}]", attr_list(&self.edge_defaults))?;
        }
        write_body(f, &self.root, 1)?;
        writeln!(f, "}}")
    }
}

fn write_body(f: &mut fmt::Formatter<'_>, sub: &Subgraph, depth: usize) -> fmt::Result {
    let pad = "  ".repeat(depth);
    for (key, value) in &sub.attrs {
        writeln!(f, "{}{}={}", pad, key, quote(value))?;
    }
    for child in &sub.subgraphs {
        match &child.name {
            Some(name) => writeln!(f, "{}subgraph {} {{", pad, quote(name))?,
            None => writeln!(f, "{}{{", pad)?,
        }
        write_body(f, child, depth + 1)?;
        writeln!(f, "{}}}", pad)?;
    }
    for node in &sub.nodes {
        writeln!(f, "{}{} [{}]", pad, quote(&node.id), node_attrs(node))?;
    }
    for member in &sub.members {
        writeln!(f, "{}{}", pad, quote(member))?;
    }
    for edge in &sub.edges {
        let attrs = edge_attrs(edge);
        if attrs.is_empty() {
            writeln!(f, "{}{} -> {}", pad, quote(&edge.from), quote(&edge.to))?;
        } else {
            writeln!(f, "{}{} -> {} [{}]", pad, quote(&edge.from), quote(&edge.to), attrs)?;
        }
    }
    Ok(())
}

fn node_attrs(node: &Node) -> String {
    let style = &node.style;
    let mut out = format!("label={} shape={}", quote(&node.label), style.shape.as_str());
    push_attr(&mut out, "style", style.style);
    push_attr(&mut out, "fillcolor", style.fill_color);
    push_attr(&mut out, "penwidth", style.pen_width);
    push_attr(&mut out, "width", style.width);
    push_attr(&mut out, "height", style.height);
    push_attr(&mut out, "margin", style.margin);
    push_attr(&mut out, "fontsize", style.font_size);
    push_attr(&mut out, "fontcolor", style.font_color);
    out
}

fn edge_attrs(edge: &Edge) -> String {
    let mut out = String::new();
    push_attr(&mut out, "style", edge.style.as_dot());
    if !edge.constraint {
        push_attr(&mut out, "constraint", Some("false"));
    }
    if !edge.arrowhead {
        push_attr(&mut out, "arrowhead", Some("none"));
    }
    push_attr(&mut out, "penwidth", edge.pen_width);
    out
}

fn push_attr<T: fmt::Display>(out: &mut String, key: &str, value: Option<T>) {
    if let Some(value) = value {
        if !out.is_empty() {
            out.push(' ');
        }
        let _ = write!(out, "{}={}", key, quote(&value.to_string()));
    }
}

fn attr_list(attrs: &IndexMap<String, String>) -> String {
    attrs.iter().map(|(k, v)| format!("{}={}", k, quote(v))).collect::<Vec<_>>().join(" ")
}

/// Entrecomilla y escapa un texto para DOT.
fn quote(s: &str) -> String {
    let escaped = s.replace('\\', "\\\\")
                   .replace('"', "\\\"")
                   .replace('\n', "\\n")
                   .replace('\r', "\\r");
    format!("\"{}\"", escaped)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::NodeKind;

    #[test]
    fn quote_escapes_special_characters() {
        assert_eq!(quote("a\"b"), "\"a\\\"b\"");
        assert_eq!(quote("línea\nnueva"), "\"línea\\nnueva\"");
        assert_eq!(quote(""), "\"\"");
    }

    #[test]
    fn dot_contains_header_nodes_and_edge_attributes() {
        let mut graph = Graph::new("BPMN Diagram");
        graph.attrs.insert("rankdir".into(), "TB".into());
        let main = graph.root.add_subgraph(Subgraph::named("cluster_main").with_attr("style", "invis"));
        main.add_node(Node::new("A", "Tarea \"A\"", NodeKind::Task));
        main.add_node(Node::new("L", "", NodeKind::LoopMarker));
        main.add_edge(Edge::flow("A", "L").non_constraining());
        main.add_edge(Edge::annotation("L", "A"));

        let dot = graph.to_dot();
        assert!(dot.starts_with("// BPMN Diagram\ndigraph {"));
        assert!(dot.contains("rankdir=\"TB\""));
        assert!(dot.contains("subgraph \"cluster_main\" {"));
        assert!(dot.contains("\"A\" [label=\"Tarea \\\"A\\\"\" shape=box style=\"rounded,filled\""));
        assert!(dot.contains("\"A\" -> \"L\" [constraint=\"false\" penwidth=\"1.5\"]"));
        assert!(dot.contains("\"L\" -> \"A\" [style=\"dashed\" arrowhead=\"none\"]"));
        assert!(dot.trim_end().ends_with('}'));
    }

    #[test]
    fn anonymous_subgraph_lists_members() {
        let mut graph = Graph::new("fila");
        let row = graph.root.add_subgraph(Subgraph::new().with_attr("rank", "same"));
        row.add_member("icon_task");
        let dot = graph.to_dot();
        assert!(dot.contains("  {\n    rank=\"same\"\n    \"icon_task\"\n  }"));
    }
}
