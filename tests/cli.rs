use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const PROCESS: &str = r#"{
  "flow": [
    {"type": "evento", "name": "inicio"},
    {"type": "tarea", "name": "Registrar pedido"},
    {"type": "pasarela", "name": "Stock", "type_pasarela": "XOR",
     "ramas": [{"condición": "Hay stock", "tareas": ["Enviar"]}, {"condición": "Sin stock", "tareas": ["Reponer", "Enviar"]}]},
    {"type": "evento", "name": "fin", "condicion": "Pedido entregado"}
  ]
}"#;

fn workspace(process: &str) -> TempDir {
  let dir = tempfile::tempdir().expect("tempdir");
  fs::write(dir.path().join("process.json"), process).expect("write process");
  dir
}

fn cli(dir: &Path) -> Command {
  let mut cmd = Command::cargo_bin("bpmn-cli").expect("binary");
  cmd.current_dir(dir)
     .env_remove("BPMN_PROCESS_JSON")
     .env_remove("BPMN_OUTPUT_DIR")
     .env_remove("BPMN_OUTPUT_NAME")
     .env_remove("BPMN_FORMATS")
     .env_remove("GRAPHVIZ_DOT");
  cmd
}

#[test]
fn dot_reads_default_location() {
  let dir = workspace(PROCESS);
  cli(dir.path()).arg("dot")
                 .assert()
                 .success()
                 .stdout(predicate::str::contains("digraph {"))
                 .stdout(predicate::str::contains("\"eventoinicio\" -> \"Registrarpedido\""))
                 .stdout(predicate::str::contains("\"Enviar\" -> \"mergeStock\""));
}

#[test]
fn render_dot_format_writes_file() {
  let dir = workspace(PROCESS);
  let out = dir.path().join("salida");
  cli(dir.path()).args(["--formats", "dot", "--name", "pedido", "--output-dir"])
                 .arg(&out)
                 .arg("render")
                 .assert()
                 .success()
                 .stdout(predicate::str::contains("pedido.dot"));
  let text = fs::read_to_string(out.join("pedido.dot")).expect("dot file");
  assert!(text.starts_with("// BPMN Diagram"));
}

#[test]
fn json_output_contains_report() {
  let dir = workspace(PROCESS);
  let output = cli(dir.path()).arg("json").output().expect("run");
  assert!(output.status.success());
  let value: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json");
  assert_eq!(value["report"]["compiled"], 4);
  assert_eq!(value["report"]["issues"].as_array().map(Vec::len), Some(0));
}

#[test]
fn check_fails_on_malformed_element() {
  let dir = workspace(r#"{"flow": [{"type": "evento", "name": "inicio"}, {"type": "nota"}, {"type": "tarea", "name": "A"}]}"#);
  cli(dir.path()).arg("check")
                 .assert()
                 .failure()
                 .stdout(predicate::str::contains("elementos compilados: 2/3"))
                 .stdout(predicate::str::contains("elemento 1"));
}

#[test]
fn check_passes_clean_process() {
  let dir = workspace(PROCESS);
  cli(dir.path()).arg("check").assert().success().stdout(predicate::str::contains("huella: "));
}

#[test]
fn missing_flow_is_an_error_for_the_cli() {
  let dir = workspace(r#"{"pasos": []}"#);
  cli(dir.path()).arg("dot").assert().failure().stderr(predicate::str::contains("vacío"));
}

#[test]
fn missing_input_file_is_reported() {
  let dir = tempfile::tempdir().expect("tempdir");
  cli(dir.path()).args(["--input", "no_existe.json", "dot"])
                 .assert()
                 .failure()
                 .stderr(predicate::str::contains("no_existe.json"));
}
