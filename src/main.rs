//! CLI entry point for dirmanifest

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use dirmanifest::program::{extension_from_program_name, manifest_file_name, program_name};
use dirmanifest::{ManifestError, ScanConfig, Scanner};
use dirmanifest::{print_manifest, write_manifest};

#[derive(Parser, Debug)]
#[command(name = "dirmanifest")]
#[command(about = "List files with a given extension per directory as a JSON manifest")]
#[command(version)]
struct Args {
    /// Directory to scan
    #[arg(default_value = ".")]
    path: PathBuf,

    /// Target file extension (case-insensitive suffix).
    /// Defaults to the extension carried by the program name, e.g. `inventory.pdf`
    #[arg(short = 'e', long = "ext", value_name = "EXT")]
    ext: Option<String>,

    /// Exclude directories with this name (can be used multiple times)
    #[arg(short = 'x', long = "exclude", value_name = "NAME")]
    exclude: Vec<String>,

    /// Do not exclude .git, __pycache__, .idea and venv by default
    #[arg(long = "no-default-excludes")]
    no_default_excludes: bool,

    /// Write the manifest to FILE (default: <program name>.json)
    #[arg(short = 'o', long = "output", value_name = "FILE", conflicts_with = "stdout")]
    output: Option<PathBuf>,

    /// Print the manifest to stdout instead of writing a file
    #[arg(long = "stdout")]
    stdout: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short = 'v', long = "verbose", action = clap::ArgAction::Count)]
    verbose: u8,
}

/// Install a stderr logger. `RUST_LOG` wins over `-v`.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("dirmanifest={}", level)));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run(args: Args, program: &str) -> Result<(), ManifestError> {
    let extension = match args.ext {
        Some(ext) => ext,
        None => extension_from_program_name(program)?.to_string(),
    };

    let mut config = ScanConfig::new(extension);
    if args.no_default_excludes {
        config = config.with_excluded(Vec::<String>::new());
    }
    for name in args.exclude {
        config = config.exclude(name);
    }
    tracing::debug!(
        extension = %config.extension,
        excluded = ?config.excluded,
        "scan configuration"
    );

    let result = Scanner::new(config).scan(&args.path)?;

    if args.stdout {
        print_manifest(&result)
    } else {
        let output = args
            .output
            .unwrap_or_else(|| PathBuf::from(manifest_file_name(program)));
        write_manifest(&output, &result)
    }
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbose);

    let program = std::env::args_os()
        .next()
        .map(|argv0| program_name(&argv0.to_string_lossy()))
        .unwrap_or_else(|| "dirmanifest".to_string());

    if let Err(e) = run(args, &program) {
        eprintln!("{}: {}", program, e);
        process::exit(1);
    }
}
