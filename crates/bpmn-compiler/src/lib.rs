//! bpmn-compiler: compilador de flujos a grafo
//!
//! Traduce una `ProcessDescription` (eventos, tareas, pasarelas y bucles en
//! orden) a un `Graph` conectado listo para el backend de dibujo:
//!
//! - `IdentityRegistry` asigna ids únicos derivados de los nombres.
//! - `TaskLedger` hace que cada tarea se dibuje una sola vez aunque se
//!   referencie desde varias ramas o bucles.
//! - `elements` compila cada clase de elemento a un par entrada/salida.
//! - `sequencer` encadena los pares en el orden del flujo.
//! - `assembler` añade el separador final y la leyenda fija.
//!
//! El estado (registro y libro de tareas) vive en un `CompileContext` que se
//! crea y se descarta en cada compilación.

pub mod assembler;
pub mod context;
pub mod elements;
pub mod errors;
pub mod ledger;
pub mod legend;
pub mod registry;
pub mod report;
pub mod sequencer;

pub use assembler::{compile, compile_str, compile_value, Diagram, DiagramCompiler};
pub use context::CompileContext;
pub use elements::Endpoints;
pub use errors::CompileError;
pub use ledger::TaskLedger;
pub use registry::IdentityRegistry;
pub use report::{CompileReport, ElementIssue};
