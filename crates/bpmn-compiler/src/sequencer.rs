use crate::context::CompileContext;
use crate::elements::{compile_element, Endpoints};
use crate::report::{CompileReport, ElementIssue};
use bpmn_graph::{Edge, Subgraph};
use bpmn_model::{DecodedElement, FlowElement};
use log::{debug, warn};

/// Compila el flujo en dos pasadas.
///
/// La primera compila cada elemento y guarda su par entrada/salida, o un
/// hueco si el elemento no pudo decodificarse. Los elementos sin tipo se
/// omiten sin dejar hueco. La segunda une la salida de cada elemento con la
/// entrada del siguiente; un hueco corta la cadena en ambos lados y el
/// resto sigue conectado.
pub fn compile_flow(flow: &[DecodedElement],
                    ctx: &mut CompileContext,
                    graph: &mut Subgraph,
                    report: &mut CompileReport)
                    -> Vec<Option<Endpoints>> {
  let slots: Vec<Option<Endpoints>> =
    flow.iter()
        .enumerate()
        .filter_map(|(index, decoded)| match decoded {
          Ok(element) => {
            let ep = compile_element(element, ctx, graph);
            debug!("[{}] {} '{}' -> ({}, {})", index, element.kind(), element.name(), ep.entry, ep.exit);
            Some(Some(ep))
          }
          Err(error) => {
            warn!("elemento {} omitido: {}", index, error);
            report.issues.push(ElementIssue { index, error: error.clone() });
            if error.is_untyped() {
              None
            } else {
              Some(None)
            }
          }
        })
        .collect();

  for pair in slots.windows(2) {
    if let [Some(prev), Some(next)] = pair {
      graph.add_edge(Edge::flow(&prev.exit, &next.entry));
      report.links += 1;
    }
  }

  report.total += flow.len();
  report.compiled += slots.iter().filter(|s| s.is_some()).count();
  slots
}

/// Salida del último elemento del flujo si es un evento compilado. Un
/// elemento final sin tipo no tiene hueco en `slots` y devuelve `None`.
pub fn trailing_event<'a>(flow: &[DecodedElement], slots: &'a [Option<Endpoints>]) -> Option<&'a str> {
  match (flow.last(), slots.last()) {
    (Some(Ok(FlowElement::Event(_))), Some(Some(ep))) => Some(ep.exit.as_str()),
    _ => None,
  }
}
