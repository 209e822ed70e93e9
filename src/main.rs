//! Floor-plan anchor CLI
//!
//! Usage:
//!   floorplan-anchor [OPTIONS] [FILE]
//!
//! Options:
//!   -z, --zoom <ZOOM>  Viewport zoom factor, selects the marker fill
//!   -a, --anchors      Print resolved anchors instead of SVG
//!   -p, --path <D>     Resolve a single path string
//!   --strict           Reject unsupported segment commands
//!   --compact          Emit SVG without indentation
//!   -h, --help         Print help
//!
//! Log output goes to stderr and is controlled by `RUST_LOG`.

use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use floorplan_anchor::{
    render_svg, resolve_top_left_anchor_with_config, AnchorConfig, AnchorError, FloorPlan,
    SvgConfig,
};

#[derive(Parser)]
#[command(name = "floorplan-anchor")]
#[command(about = "Place table markers on a floor plan from outline path data")]
struct Cli {
    /// Floor plan file in TOML format (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// Viewport zoom factor
    #[arg(short, long, default_value_t = 1.0, value_parser = parse_zoom)]
    zoom: f64,

    /// Print `id<TAB>x<TAB>y` for every table instead of SVG
    #[arg(short, long)]
    anchors: bool,

    /// Resolve the anchor of a single path string and print `x y`
    #[arg(short, long, value_name = "D")]
    path: Option<String>,

    /// Fail on unsupported segment commands instead of using the origin
    #[arg(long)]
    strict: bool,

    /// Emit compact SVG without indentation
    #[arg(long)]
    compact: bool,
}

/// Zoom factors come from a viewport and are always finite
fn parse_zoom(s: &str) -> Result<f64, String> {
    match s.parse::<f64>() {
        Ok(zoom) if zoom.is_finite() => Ok(zoom),
        Ok(_) => Err(format!("zoom must be a finite number, got '{}'", s)),
        Err(e) => Err(e.to_string()),
    }
}

/// `RUST_LOG` directives if set and valid, otherwise warnings only
fn log_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new("warn"))
}

fn main() -> ExitCode {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let anchor_config = if cli.strict {
        AnchorConfig::strict()
    } else {
        AnchorConfig::default()
    };

    if let Some(d) = &cli.path {
        return resolve_single(d, &anchor_config);
    }

    // If no input file and stdin is a terminal (interactive), show help text
    if cli.input.is_none() && io::stdin().is_terminal() {
        print_intro();
        return ExitCode::SUCCESS;
    }

    let plan = match &cli.input {
        Some(path) => match FloorPlan::from_file(path) {
            Ok(plan) => plan,
            Err(e) => {
                eprintln!("Error loading floor plan '{}': {}", path.display(), e);
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut buffer = String::new();
            if let Err(e) = io::stdin().read_to_string(&mut buffer) {
                eprintln!("Error reading from stdin: {}", e);
                return ExitCode::FAILURE;
            }
            match FloorPlan::from_str(&buffer) {
                Ok(plan) => plan,
                Err(e) => {
                    eprintln!("Error loading floor plan: {}", e);
                    return ExitCode::FAILURE;
                }
            }
        }
    };
    info!(
        plan = plan.name.as_deref().unwrap_or("<unnamed>"),
        tables = plan.tables.len(),
        "floor plan loaded"
    );

    if cli.anchors {
        return print_anchors(&plan, &anchor_config);
    }

    let svg_config = SvgConfig::default().with_pretty_print(!cli.compact);
    match render_svg(&plan, cli.zoom, &svg_config, &anchor_config) {
        Ok(svg) => {
            println!("{}", svg);
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn resolve_single(d: &str, config: &AnchorConfig) -> ExitCode {
    match resolve_top_left_anchor_with_config(d, config) {
        Ok(point) => {
            println!("{} {}", point.x, point.y);
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_anchor_error(d, "<path>", &e);
            ExitCode::FAILURE
        }
    }
}

fn print_anchors(plan: &FloorPlan, config: &AnchorConfig) -> ExitCode {
    let mut failed = false;
    for entry in plan.anchors(config) {
        match entry.anchor {
            Ok(point) => println!("{}\t{}\t{}", entry.table.id, point.x, point.y),
            Err(e) => {
                failed = true;
                report_anchor_error(&entry.table.d, &entry.table.id, &e);
            }
        }
    }
    if failed {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

fn report_anchor_error(source: &str, name: &str, error: &AnchorError) {
    match error {
        AnchorError::Parse(errors) => {
            for e in errors {
                eprint!("{}", e.format(source, name));
            }
        }
        AnchorError::Degenerate(segment) => {
            eprintln!("Error in '{}': {}", name, segment);
        }
    }
}

fn print_intro() {
    println!(
        r#"floorplan-anchor - place table markers from outline path data

USAGE:
    floorplan-anchor [OPTIONS] [FILE]
    cat plan.toml | floorplan-anchor --zoom 10

OPTIONS:
    -z, --zoom <ZOOM>  Viewport zoom factor (markers turn red above 8)
    -a, --anchors      Print resolved anchors instead of SVG
    -p, --path <D>     Resolve a single path, e.g. --path "M10 20v5h8h-8z"
    --strict           Reject unsupported segment commands
    --compact          Emit SVG without indentation
    -h, --help         Print help

FLOOR PLAN FORMAT:
    [metadata]
    name = "Ground floor"

    [marker]
    zoom_threshold = 8.0

    [[tables]]
    id = "T1"
    d = "M10 20v5h8h-8z"
    orientation = "vertical""#
    );
}
