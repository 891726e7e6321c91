//! bpmn-model: descripción de procesos
//!
//! Tipos del documento JSON que describe un proceso (`flow` con eventos,
//! tareas, pasarelas y bucles) y su decodificación tolerante: cada elemento
//! se decodifica por separado para que un elemento defectuoso no impida
//! leer el resto del flujo.
mod element;
mod errors;
mod process;

pub use element::{Branch, ElementKind, Event, EventKind, FlowElement, Gateway, GatewayKind, Loop, Task, TaskRef};
pub use errors::ModelError;
pub use process::{DecodedElement, ProcessDescription};
