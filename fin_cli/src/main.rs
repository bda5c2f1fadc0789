//! # Flexfin CLI Application
//!
//! Terminal front end for the fin bending engine.
//!
//! ## Usage
//!
//! ```text
//! fin_cli                 # prompt for parameters (Enter keeps the default)
//! fin_cli blade.fin       # analyze a saved scenario
//! fin_cli params.json     # analyze a bare parameter set
//! fin_cli -v blade.fin    # also print solver and sampling debug events
//! ```
//!
//! Engine warnings (such as a solve that hit its iteration limit) are always
//! written to stderr.

use std::io::{self, BufRead, Write};
use std::path::Path;

use fin_core::calculations::{analyze, AnalysisOptions};
use fin_core::report::render_summary;
use fin_core::scenario::Scenario;
use fin_core::{compute_default_params, load_params, load_scenario, BeamParams, FinError};
use tracing::Level;

/// Parsed command line
#[derive(Debug, Default, PartialEq)]
struct CliArgs {
    path: Option<String>,
    verbose: bool,
}

impl CliArgs {
    fn parse(args: impl IntoIterator<Item = String>) -> Self {
        let mut cli = CliArgs::default();
        for arg in args {
            match arg.as_str() {
                "-v" | "--verbose" => cli.verbose = true,
                _ if cli.path.is_none() => cli.path = Some(arg),
                _ => {}
            }
        }
        cli
    }

    fn log_level(&self) -> Level {
        if self.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        }
    }
}

fn init_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

fn prompt_line(prompt: &str) -> Option<String> {
    print!("{}", prompt);
    if io::stdout().flush().is_err() {
        return None;
    }

    let mut input = String::new();
    if io::stdin().lock().read_line(&mut input).is_err() {
        return None;
    }
    Some(input.trim().to_string())
}

fn prompt_f64(prompt: &str, default: f64) -> f64 {
    prompt_line(prompt)
        .and_then(|input| input.parse().ok())
        .unwrap_or(default)
}

fn prompt_u32(prompt: &str, default: u32) -> u32 {
    prompt_line(prompt)
        .and_then(|input| input.parse().ok())
        .unwrap_or(default)
}

fn prompt_params() -> BeamParams {
    let defaults = compute_default_params();
    BeamParams {
        layers_foot: prompt_u32(
            &format!("Layers at foot [{}]: ", defaults.layers_foot),
            defaults.layers_foot,
        ),
        layers_tip: prompt_u32(
            &format!("Layers at tip [{}]: ", defaults.layers_tip),
            defaults.layers_tip,
        ),
        length_mm: prompt_f64(
            &format!("Free blade length (mm) [{}]: ", defaults.length_mm),
            defaults.length_mm,
        ),
        width_mm: prompt_f64(
            &format!("Blade width (mm) [{}]: ", defaults.width_mm),
            defaults.width_mm,
        ),
        modulus_gpa: prompt_f64(
            &format!("Young's modulus E (GPa) [{}]: ", defaults.modulus_gpa),
            defaults.modulus_gpa,
        ),
        layer_thickness_mm: prompt_f64(
            &format!("Layer thickness (mm) [{:.2}]: ", defaults.layer_thickness_mm),
            defaults.layer_thickness_mm,
        ),
        ..defaults
    }
}

fn load_from_path(path: &Path) -> Result<Scenario, FinError> {
    let is_scenario = path.extension().is_some_and(|ext| ext == "fin");
    if is_scenario {
        load_scenario(path)
    } else {
        let params = load_params(path)?;
        let id = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| "params".to_string());
        Ok(Scenario::new(id, params))
    }
}

fn print_error(e: &FinError) {
    eprintln!("Error: {}", e);
    if let Ok(json) = serde_json::to_string_pretty(e) {
        eprintln!();
        eprintln!("Error JSON:");
        eprintln!("{}", json);
    }
}

fn main() {
    let cli = CliArgs::parse(std::env::args().skip(1));
    init_logging(cli.log_level());

    println!("Flexfin CLI - Fin Blade Bending Calculator");
    println!("==========================================");
    println!();

    let scenario = match cli.path {
        Some(arg) => match load_from_path(Path::new(&arg)) {
            Ok(scenario) => scenario,
            Err(e) => {
                print_error(&e);
                std::process::exit(1);
            }
        },
        None => Scenario::new("interactive", prompt_params()),
    };

    // The engine accepts any input; warn about blades it will treat as degenerate
    if let Err(e) = scenario.params.validate() {
        eprintln!("Warning: {}", e);
        eprintln!("Degenerate geometry is analyzed as-is and may report zero values.");
        eprintln!();
    }

    let analysis = analyze(
        &scenario.params,
        &AnalysisOptions {
            solver: scenario.solver,
        },
    );

    println!();
    println!("═══════════════════════════════════════");
    println!("  FIN BENDING RESULTS ({})", scenario.meta.id);
    println!("═══════════════════════════════════════");
    println!();
    print!("{}", render_summary(&analysis));
    println!();
    println!("═══════════════════════════════════════");

    println!();
    println!("JSON Output:");
    match serde_json::to_string_pretty(&analysis) {
        Ok(json) => println!("{}", json),
        Err(e) => print_error(&FinError::serialization(e.to_string())),
    }
}
