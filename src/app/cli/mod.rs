//! CLI Adapter.

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use crate::adapters::{DatasetSource, FilesystemBundleStore};
use crate::app::commands::{
    assemble, batch, chunks, classify, export_md, options, plan, selection_file, validate,
};
use crate::app::{AnamaliaConfig, AppContext};
use crate::domain::{AppError, AssemblyOutcome, RegistryStatus, Severity, TennerMode};

/// Environment variable holding the log filter.
const LOG_ENV: &str = "ANAMALIA_LOG";

#[derive(Parser)]
#[command(name = "anamalia")]
#[command(version)]
#[command(
    about = "Assemble deterministic stop-motion character prompts \
             from categorical choices and Tenner dimensions",
    long_about = None
)]
struct Cli {
    /// Config file (defaults to ./anamalia.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Tenner dataset JSON file (defaults to the embedded dataset)
    #[arg(long, global = true)]
    dataset: Option<PathBuf>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Single,
    Batch,
}

impl From<ModeArg> for TennerMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Single => TennerMode::Single,
            ModeArg::Batch => TennerMode::Batch,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Assemble a selection file into a prompt bundle
    #[clap(visible_alias = "a")]
    Assemble {
        /// Selection file (.json, .yaml or .yml)
        selection: PathBuf,
        /// Compose even when Tenner options are still missing
        #[arg(long)]
        preview: bool,
        /// Write the bundle JSON to this file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
    /// Report advisories and suggestions for a selection file
    #[clap(visible_alias = "v")]
    Validate {
        selection: PathBuf,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Plan permutations for Tenner dimensions (T4 or T4=7)
    Plan {
        #[arg(long, value_enum, default_value = "single")]
        mode: ModeArg,
        #[arg(required = true)]
        dimensions: Vec<String>,
    },
    /// Classify Tenner dimensions into a chunk id
    Classify {
        #[arg(required = true)]
        dimensions: Vec<String>,
    },
    /// List the ten options of a Tenner dimension
    Options { dimension: String },
    /// List the predefined chunks, or show one chunk and its caption skeleton
    Chunks { id: Option<String> },
    /// Expand a batch-mode selection and write one bundle per permutation
    #[clap(visible_alias = "b")]
    Batch {
        selection: PathBuf,
        /// Output directory (defaults to [output] dir)
        #[arg(long)]
        out_dir: Option<PathBuf>,
    },
    /// Render a bundle JSON file as markdown
    ExportMd {
        bundle: PathBuf,
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

/// Entry point for the CLI.
pub fn run() {
    let cli = Cli::parse();
    init_logging();

    let result: Result<i32, AppError> = match cli.command {
        Commands::Assemble { ref selection, preview, ref out } => context(&cli, None)
            .and_then(|ctx| run_assemble(&ctx, selection, preview, out.as_deref())),
        Commands::Validate { ref selection, json } => run_validate(selection, json).map(|_| 0),
        Commands::Plan { mode, ref dimensions } => run_plan(mode.into(), dimensions).map(|_| 0),
        Commands::Classify { ref dimensions } => run_classify(dimensions).map(|_| 0),
        Commands::Options { ref dimension } => {
            context(&cli, None).and_then(|ctx| run_options(&ctx, dimension)).map(|_| 0)
        }
        Commands::Chunks { ref id } => run_chunks(id.as_deref()).map(|_| 0),
        Commands::Batch { ref selection, ref out_dir } => context(&cli, out_dir.as_deref())
            .and_then(|ctx| run_batch(&ctx, selection))
            .map(|_| 0),
        Commands::ExportMd { ref bundle, ref out } => {
            run_export_md(bundle, out.as_deref()).map(|_| 0)
        }
    };

    match result {
        Ok(exit_code) => {
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("warn"));
    // A second init (tests, embedding) is harmless.
    let _ =
        tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).try_init();
}

type CliContext = AppContext<DatasetSource, FilesystemBundleStore>;

fn context(cli: &Cli, out_dir: Option<&Path>) -> Result<CliContext, AppError> {
    let cwd = std::env::current_dir()?;
    let config = AnamaliaConfig::load(cli.config.as_deref(), &cwd)?;
    let dataset = cli.dataset.as_deref().or(config.dataset.path.as_deref());
    let source = DatasetSource::resolve(dataset);
    let store = FilesystemBundleStore::new(out_dir.unwrap_or(&config.output.dir));
    Ok(AppContext::new(config, source, store))
}

fn run_assemble(
    ctx: &CliContext,
    selection: &Path,
    preview: bool,
    out: Option<&Path>,
) -> Result<i32, AppError> {
    let selection = selection_file::load_selection(selection)?;
    match assemble::execute(ctx, &selection, preview)? {
        AssemblyOutcome::Ready(assembly) => {
            let json = assembly.bundle.to_json()?;
            match out {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        if !parent.as_os_str().is_empty() {
                            fs::create_dir_all(parent)?;
                        }
                    }
                    fs::write(path, json)?;
                    println!("✅ Wrote bundle {} to {}", assembly.bundle.id, path.display());
                }
                None => println!("{}", json),
            }
            if let RegistryStatus::Degraded { reason } = &assembly.registry_status {
                eprintln!("⚠️  Tenner dataset unavailable, descriptors skipped: {}", reason);
            }
            for advisory in &assembly.validation.advisories {
                eprintln!("{}: {}", advisory.severity, advisory.message);
            }
            Ok(0)
        }
        AssemblyOutcome::Incomplete(plan) => {
            eprintln!("⚠️  {}", plan.metadata_line());
            eprintln!("Choose an option for every selected Tenner dimension, or pass --preview.");
            Ok(2)
        }
    }
}

fn run_validate(selection: &Path, json: bool) -> Result<(), AppError> {
    let report = validate::execute(&selection_file::load_selection(selection)?)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    match report.tripod_height {
        Some(height) if report.height_locked => {
            println!("Tripod height: {} (set by camera)", height.phrase())
        }
        Some(height) => println!("Tripod height: {}", height.phrase()),
        None => println!("Tripod height: not set"),
    }
    println!("Aspect ratio from size: {}", report.inferred_aspect);

    if report.advisories.is_empty() {
        println!("✅ No advisories");
    }
    for advisory in &report.advisories {
        let marker = match advisory.severity {
            Severity::Warning => "⚠️ ",
            Severity::Info => "ℹ️ ",
        };
        println!("{} {}: {}", marker, advisory.severity, advisory.message);
    }
    for suggestion in &report.suggestions {
        let values = suggestion.values.join(", ");
        println!("Compatible {} for {}: {}", suggestion.field, suggestion.because_of, values);
    }
    if report.has_warnings() {
        println!("⚠️  Selection has compatibility warnings; the prompt is still assembled");
    }
    Ok(())
}

fn run_plan(mode: TennerMode, dimensions: &[String]) -> Result<(), AppError> {
    let plan = plan::execute(mode, dimensions)?;
    println!("{}", plan.metadata_line());
    Ok(())
}

fn run_classify(dimensions: &[String]) -> Result<(), AppError> {
    match classify::execute(dimensions)? {
        Some(found) => println!("{}", found.id()),
        None => println!("none"),
    }
    Ok(())
}

fn run_options(ctx: &CliContext, dimension: &str) -> Result<(), AppError> {
    let dimension = options::execute(ctx, dimension)?;
    println!("{} ({})", dimension.id, dimension.category);
    for option in &dimension.options {
        let descriptor =
            if option.descriptor.is_empty() { "(empty)" } else { option.descriptor.as_str() };
        println!("  {}  {}", option.id, descriptor);
    }
    Ok(())
}

fn run_chunks(id: Option<&str>) -> Result<(), AppError> {
    for chunk in chunks::execute(id)? {
        let dimensions: Vec<String> = chunk.dimensions.iter().map(ToString::to_string).collect();
        println!(
            "{:<8} {:<14} {:<50} {}",
            chunk.id,
            dimensions.join(", "),
            chunk.categories.join(", "),
            chunk.batch_permutations
        );
        if id.is_some() {
            println!("{}", chunk.skeleton);
        }
    }
    Ok(())
}

fn run_batch(ctx: &CliContext, selection: &Path) -> Result<(), AppError> {
    let selection = selection_file::load_selection(selection)?;
    let outcome = batch::execute(ctx, &selection)?;
    println!("✅ Wrote {} bundle(s) to {}", outcome.written.len(), ctx.store().root().display());
    Ok(())
}

fn run_export_md(bundle: &Path, out: Option<&Path>) -> Result<(), AppError> {
    let markdown = export_md::execute(bundle)?;
    match out {
        Some(path) => {
            fs::write(path, markdown)?;
            println!("✅ Wrote {}", path.display());
        }
        None => print!("{}", markdown),
    }
    Ok(())
}
