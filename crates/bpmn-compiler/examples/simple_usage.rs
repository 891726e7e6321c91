// Compila un proceso pequeño y muestra el reporte y el DOT resultante.
use bpmn_compiler::compile_value;
use serde_json::json;

fn main() {
    let doc = json!({
        "flow": [
            {"type": "evento", "name": "inicio"},
            {"type": "tarea", "name": "Recibir solicitud"},
            {"type": "pasarela", "name": "Revisión", "type_pasarela": "XOR",
             "ramas": [{"condición": "Completa", "tareas": ["Aprobar"]},
                       {"condición": "Incompleta", "tareas": ["Pedir datos"]}]},
            {"type": "evento", "name": "fin", "condicion": "Solicitud resuelta"}
        ]
    });

    let diagram = compile_value(&doc).expect("compile");
    print!("{}", diagram.report);
    println!("huella: {}", diagram.graph.fingerprint());
    println!("{}", diagram.to_dot());
}
