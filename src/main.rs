//! Pipe Lattice Editor: Kommandozeilen-Host.
//!
//! Treibt den AppController ohne Fenster: Struktur generieren, Stückliste
//! ausgeben, optional Snapshot exportieren.
//!
//! Logging über `RUST_LOG` (z.B. `RUST_LOG=debug pipe-lattice tiered`).

use clap::{Parser, Subcommand};
use pipe_lattice_editor::app::CommandRecord;
use pipe_lattice_editor::export;
use pipe_lattice_editor::{AppController, AppIntent, AppState, EditorOptions, PartsSummary, Pipe};
use serde::Serialize;
use std::path::PathBuf;

/// Rohr-Gitter generieren und als Stückliste oder Bild ausgeben.
#[derive(Debug, Parser)]
#[command(name = "pipe-lattice")]
#[command(version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Snapshot als PNG schreiben; ohne Pfad mit Zeitstempel-Dateinamen
    #[arg(long, global = true, value_name = "DATEI")]
    export: Option<Option<PathBuf>>,

    /// Stückliste als JSON ausgeben
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// So viele Quader-Rahmen wie das Teile-Budget erlaubt
    Boxes {
        /// Anzahl 20-cm-Rohre (ungültige Werte zählen als 0)
        #[arg(allow_hyphen_values = true)]
        count_20: String,
        /// Anzahl 40-cm-Rohre (ungültige Werte zählen als 0)
        #[arg(allow_hyphen_values = true)]
        count_40: String,
    },
    /// Festes Stufen-Gerüst
    Tiered,
}

impl Command {
    fn into_intent(self) -> AppIntent {
        match self {
            Command::Boxes { count_20, count_40 } => {
                AppIntent::GenerateFromTextRequested { count_20, count_40 }
            }
            Command::Tiered => AppIntent::GenerateTieredRequested,
        }
    }
}

/// Stückliste für die JSON-Ausgabe.
#[derive(Serialize)]
struct BillOfMaterials<'a> {
    summary: PartsSummary,
    pipes: &'a [Pipe],
    commands: &'a [CommandRecord],
}

fn main() {
    // Logger initialisieren
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let cli = Cli::parse();
    if let Err(e) = AppRunner::run(cli) {
        log::error!("Abbruch: {:#}", e);
        std::process::exit(1);
    }
}

struct AppRunner;

impl AppRunner {
    fn run(cli: Cli) -> anyhow::Result<()> {
        log::info!("Pipe Lattice Editor v{} startet...", env!("CARGO_PKG_VERSION"));

        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = EditorOptions::config_path();
        let mut state = AppState::new();
        state.options = EditorOptions::load_from_file(&config_path);
        let mut controller = AppController::new();

        controller.handle_intent(&mut state, cli.command.into_intent())?;

        if let Some(requested) = cli.export {
            let path = export_path(requested, &state.options);
            controller.handle_intent(&mut state, AppIntent::ExportRequested { path: path.clone() })?;
            if state.last_export.as_ref() != Some(&path) {
                anyhow::bail!("Export nach {} fehlgeschlagen", path.display());
            }
        }

        let summary = state.parts_summary();
        if cli.json {
            let pipes: Vec<Pipe> = state.structure.iter().copied().collect();
            let report = BillOfMaterials {
                summary,
                pipes: &pipes,
                commands: state.command_log.entries(),
            };
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_summary(&summary);
            println!(
                "Commands:           {} ({} mit Strukturänderung)",
                state.command_log.len(),
                state.command_log.mutation_count()
            );
        }
        Ok(())
    }
}

/// Ohne Pfad: `<file_prefix>-<Zeitstempel>.png` im Arbeitsverzeichnis.
fn export_path(requested: Option<PathBuf>, options: &EditorOptions) -> PathBuf {
    requested.unwrap_or_else(|| {
        PathBuf::from(export::default_file_name(
            &options.export.file_prefix,
            chrono::Local::now(),
        ))
    })
}

fn print_summary(summary: &PartsSummary) {
    println!("=== Stückliste ===");
    println!("20-cm-Rohre:        {}", summary.pipes_20);
    println!("40-cm-Rohre:        {}", summary.pipes_40);
    println!("2-Wege-Verbinder:   {}", summary.two_way);
    println!("3-Wege-Verbinder:   {}", summary.three_way);
    println!("4-Wege-Verbinder:   {}", summary.four_way);
    println!("Freie Anker:        {}", summary.free_anchors);
}
