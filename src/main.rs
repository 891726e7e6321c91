use anyhow::{bail, Context, Result};
use bpmn_compiler::{compile_str, Diagram};
use bpmn_render::{GraphvizBackend, RenderBackend, Settings};
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::fs;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Compila la descripción de un proceso (JSON con clave `flow`) a un
/// diagrama BPMN y lo dibuja con Graphviz.
///
/// Las rutas y formatos por defecto salen del entorno (`BPMN_PROCESS_JSON`,
/// `BPMN_OUTPUT_DIR`, `BPMN_OUTPUT_NAME`, `BPMN_FORMATS`, `GRAPHVIZ_DOT`,
/// también desde `.env`); las opciones de la línea de comandos mandan.
#[derive(Parser)]
#[command(name = "bpmn-cli")]
#[command(about = "Compilador de procesos a diagramas BPMN", long_about = None)]
#[command(version)]
struct Cli {
    /// Fichero JSON con la descripción del proceso
    #[arg(short, long, global = true)]
    input: Option<PathBuf>,

    /// Directorio donde dejar los ficheros generados
    #[arg(short, long, global = true)]
    output_dir: Option<PathBuf>,

    /// Nombre base (sin extensión) de los ficheros generados
    #[arg(short, long, global = true)]
    name: Option<String>,

    /// Formatos separados por comas: png, pdf, svg, dot
    #[arg(short, long, global = true)]
    formats: Option<String>,

    /// Log de depuración
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compila y genera los ficheros con Graphviz
    Render,
    /// Compila y escribe el DOT por la salida estándar
    Dot,
    /// Compila y escribe el grafo y el reporte en JSON
    Json,
    /// Compila y muestra el reporte; falla si hay incidencias
    Check,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()))
        .with(tracing_subscriber::fmt::layer().without_time().with_writer(std::io::stderr))
        .init();

    let settings = settings_for(&cli)?;
    let diagram = load_diagram(&settings)?;

    match cli.command {
        Commands::Render => {
            let backend = GraphvizBackend::from_settings(&settings);
            let written = backend.render(&diagram.graph, &settings.output_stem(), &settings.formats)
                                 .context("no se pudo dibujar el diagrama")?;
            for path in written {
                println!("{}", path.display());
            }
        }
        Commands::Dot => print!("{}", diagram.to_dot()),
        Commands::Json => println!("{}", diagram.to_json()?),
        Commands::Check => {
            print!("{}", diagram.report);
            println!("huella: {}", diagram.graph.fingerprint());
            if diagram.report.has_issues() {
                bail!("{} elemento(s) con incidencias", diagram.report.issues.len());
            }
        }
    }
    Ok(())
}

/// Entorno + opciones de la línea de comandos.
fn settings_for(cli: &Cli) -> Result<Settings> {
    let mut settings = Settings::from_env().context("configuración del entorno inválida")?;
    if let Some(input) = &cli.input {
        settings.process_json = input.clone();
    }
    if let Some(dir) = &cli.output_dir {
        settings.output_dir = dir.clone();
    }
    if let Some(name) = &cli.name {
        settings.output_name = name.clone();
    }
    if let Some(list) = &cli.formats {
        settings.formats = bpmn_render::parse_formats(list)?;
    }
    Ok(settings)
}

/// Lee y compila el proceso. Un flujo principal vacío se trata como error.
fn load_diagram(settings: &Settings) -> Result<Diagram> {
    let path = &settings.process_json;
    let text = fs::read_to_string(path).with_context(|| format!("no se pudo leer {}", path.display()))?;
    let diagram = compile_str(&text).with_context(|| format!("descripción inválida en {}", path.display()))?;
    for issue in &diagram.report.issues {
        warn!("{}", issue);
    }
    if diagram.report.is_empty() {
        bail!("el flujo principal de {} está vacío", path.display());
    }
    info!("{} compilado ({} elementos)", path.display(), diagram.report.compiled);
    Ok(diagram)
}
