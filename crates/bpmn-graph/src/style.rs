// Archivo: style.rs
// Propósito: clases de nodo y constantes de estilo visual (forma, relleno,
// grosor de borde, tamaños). Los valores son fijos; el diagrama no admite
// temas.
use serde::Serialize;

/// Clase semántica/visual de un nodo del grafo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    StartEvent,
    EndEvent,
    GenericEvent,
    Task,
    XorGateway,
    AndGateway,
    LoopMarker,
    Condition,
    LegendIcon,
    LegendLabel,
    Spacer,
}

impl NodeKind {
    /// Estilo fijo asociado a la clase.
    pub fn style(self) -> NodeStyle {
        match self {
            NodeKind::StartEvent => NodeStyle::START_EVENT,
            NodeKind::EndEvent => NodeStyle::END_EVENT,
            NodeKind::GenericEvent => NodeStyle::GENERIC_EVENT,
            NodeKind::Task => NodeStyle::TASK,
            NodeKind::XorGateway => NodeStyle::XOR_GATEWAY,
            NodeKind::AndGateway => NodeStyle::AND_GATEWAY,
            NodeKind::LoopMarker => NodeStyle::LOOP_MARKER,
            NodeKind::Condition => NodeStyle::CONDITION,
            NodeKind::LegendIcon => NodeStyle::TASK,
            NodeKind::LegendLabel => NodeStyle::LEGEND_LABEL,
            NodeKind::Spacer => NodeStyle::SPACER,
        }
    }

    /// Símbolo dibujado dentro del rombo de las pasarelas.
    pub fn glyph(self) -> &'static str {
        match self {
            NodeKind::XorGateway => "X",
            NodeKind::AndGateway => "+",
            _ => "",
        }
    }
}

/// Formas de Graphviz usadas por el diagrama.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
    DoubleCircle,
    Box,
    Diamond,
    Plaintext,
    None,
}

impl Shape {
    pub fn as_str(self) -> &'static str {
        match self {
            Shape::Circle => "circle",
            Shape::DoubleCircle => "doublecircle",
            Shape::Box => "box",
            Shape::Diamond => "diamond",
            Shape::Plaintext => "plaintext",
            Shape::None => "none",
        }
    }
}

/// Atributos visuales de un nodo. Los campos `None` no se emiten.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NodeStyle {
    pub shape: Shape,
    pub style: Option<&'static str>,
    pub fill_color: Option<&'static str>,
    pub pen_width: Option<f32>,
    pub width: Option<f32>,
    pub height: Option<f32>,
    pub margin: Option<&'static str>,
    pub font_size: Option<u8>,
    pub font_color: Option<&'static str>,
}

impl NodeStyle {
    const BASE: NodeStyle = NodeStyle { shape: Shape::Box,
                                        style: None,
                                        fill_color: None,
                                        pen_width: None,
                                        width: None,
                                        height: None,
                                        margin: None,
                                        font_size: None,
                                        font_color: None };

    pub const START_EVENT: NodeStyle = NodeStyle { shape: Shape::Circle,
                                                   style: Some("filled"),
                                                   fill_color: Some("#90EE90"),
                                                   pen_width: Some(2.0),
                                                   width: Some(0.5),
                                                   height: Some(0.5),
                                                   ..Self::BASE };

    pub const END_EVENT: NodeStyle = NodeStyle { shape: Shape::DoubleCircle,
                                                 style: Some("filled"),
                                                 fill_color: Some("#FFB6C1"),
                                                 pen_width: Some(2.0),
                                                 width: Some(0.6),
                                                 height: Some(0.6),
                                                 ..Self::BASE };

    pub const GENERIC_EVENT: NodeStyle = NodeStyle { fill_color: Some("#E0E0E0"), ..Self::START_EVENT };

    pub const TASK: NodeStyle = NodeStyle { shape: Shape::Box,
                                            style: Some("rounded,filled"),
                                            fill_color: Some("#E6F3FF"),
                                            pen_width: Some(2.0),
                                            height: Some(0.6),
                                            margin: Some("0.3,0.2"),
                                            ..Self::BASE };

    pub const XOR_GATEWAY: NodeStyle = NodeStyle { shape: Shape::Diamond,
                                                   style: Some("filled"),
                                                   fill_color: Some("#FFFACD"),
                                                   pen_width: Some(2.0),
                                                   width: Some(0.7),
                                                   height: Some(0.7),
                                                   ..Self::BASE };

    pub const AND_GATEWAY: NodeStyle = NodeStyle { fill_color: Some("#98FB98"), ..Self::XOR_GATEWAY };

    pub const LOOP_MARKER: NodeStyle = NodeStyle { fill_color: Some("#DDA0DD"), ..Self::XOR_GATEWAY };

    pub const CONDITION: NodeStyle = NodeStyle { shape: Shape::Box,
                                                 style: Some("filled,dashed"),
                                                 fill_color: Some("#E0E0E0"),
                                                 font_size: Some(9),
                                                 font_color: Some("#555555"),
                                                 ..Self::BASE };

    pub const LEGEND_LABEL: NodeStyle = NodeStyle { shape: Shape::Plaintext, font_size: Some(12), ..Self::BASE };

    pub const SPACER: NodeStyle = NodeStyle { shape: Shape::None,
                                              style: Some("invis"),
                                              height: Some(0.5),
                                              ..Self::BASE };

    pub fn with_font_size(mut self, size: u8) -> Self {
        self.font_size = Some(size);
        self
    }

    pub fn with_pen_width(mut self, pen_width: f32) -> Self {
        self.pen_width = Some(pen_width);
        self
    }

    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_margin(mut self, margin: &'static str) -> Self {
        self.margin = Some(margin);
        self
    }
}

/// Trazo de una arista.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EdgeStyle {
    Solid,
    Dashed,
    Invisible,
}

impl EdgeStyle {
    /// Valor del atributo `style` en DOT; `None` para el trazo por defecto.
    pub fn as_dot(self) -> Option<&'static str> {
        match self {
            EdgeStyle::Solid => None,
            EdgeStyle::Dashed => Some("dashed"),
            EdgeStyle::Invisible => Some("invis"),
        }
    }
}

/// Grosor de las aristas de flujo.
pub const FLOW_PEN_WIDTH: f32 = 1.5;
