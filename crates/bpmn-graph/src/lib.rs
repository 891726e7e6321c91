//! Crate `bpmn-graph`: grafo dirigido listo para dibujar
//!
//! Este crate define el grafo que produce el compilador de flujos: nodos con
//! etiqueta y clase visual (`NodeKind` + `NodeStyle`), aristas con estilo
//! (sólida, discontinua, invisible) y subgrafos anidados (clusters y filas
//! `rank=same`). También expone los exportadores a DOT (Graphviz) y JSON y
//! una huella SHA-256 del DOT para comprobar estabilidad de la salida.
//!
//! Diseño resumido:
//! - Los estilos son constantes fijas por clase de nodo; no hay temas.
//! - El grafo no hace layout: eso lo decide el backend de dibujo.
//! - `Subgraph` hace de constructor: los compiladores añaden nodos y aristas
//!   sobre un `&mut Subgraph`.
//!
//! Ejemplo rápido:
//! ```rust
//! use bpmn_graph::{Edge, Graph, Node, NodeKind};
//! let mut graph = Graph::new("demo");
//! graph.root.add_node(Node::new("A", "Tarea A", NodeKind::Task));
//! graph.root.add_node(Node::new("B", "Tarea B", NodeKind::Task));
//! graph.root.add_edge(Edge::flow("A", "B"));
//! assert!(graph.to_dot().contains("\"A\" -> \"B\""));
//! ```
pub mod dot;
pub mod errors;
pub mod graph;
pub mod style;

pub use errors::*;
pub use graph::*;
pub use style::*;
