use std::path::PathBuf;

use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use neonmint_scaffold::config::AppConfig;
use neonmint_scaffold::models::{Manifest, Report};
use neonmint_scaffold::presets::Preset;
use neonmint_scaffold::scaffold::{render, Scaffolder};

#[derive(Parser)]
#[command(name = "neonmint")]
#[command(about = "Scaffold the NeonMint Astro portfolio and blog")]
struct Cli {
    /// Log each scaffold step to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Create the project tree, skipping anything that already exists
    Init(InitArgs),
    /// List the built-in presets
    Presets,
    /// Print a preset's manifest as JSON
    Export {
        /// Preset to export
        #[arg(short, long, value_enum)]
        preset: Option<Preset>,
    },
}

#[derive(Args, Default)]
struct InitArgs {
    /// Project root directory
    #[arg(short, long)]
    root: Option<PathBuf>,

    /// Built-in preset to scaffold
    #[arg(short, long, value_enum, conflicts_with = "manifest")]
    preset: Option<Preset>,

    /// JSON manifest file to scaffold instead of a preset
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Report what would be created without writing anything
    #[arg(long)]
    dry_run: bool,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,
}

/// Initialize tracing on stderr so stdout carries only the report
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "neonmint_scaffold=debug,neonmint=debug"
    } else {
        "neonmint_scaffold=warn,neonmint=warn"
    };
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| default.into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = AppConfig::load();

    match cli.command {
        Some(Commands::Init(args)) => init(args, &config)?,
        Some(Commands::Presets) => {
            for preset in Preset::all() {
                println!("{:<10} {}", preset.name(), preset.description());
            }
        }
        Some(Commands::Export { preset }) => {
            let preset = preset.unwrap_or(config.preset);
            println!("{}", preset.manifest()?.to_json_pretty()?);
        }
        None => init(InitArgs::default(), &config)?,
    }

    Ok(())
}

fn init(args: InitArgs, config: &AppConfig) -> anyhow::Result<()> {
    let (manifest, label) = match args.manifest {
        Some(ref path) => {
            let manifest = Manifest::load(path)
                .with_context(|| format!("Could not use manifest {}", path.display()))?;
            (manifest, path.display().to_string())
        }
        None => {
            let preset = args.preset.unwrap_or(config.preset);
            (preset.manifest()?, preset.name().to_string())
        }
    };

    let root = args.root.unwrap_or_else(|| config.root.clone());
    let scaffolder = Scaffolder::new(root);

    let result = if args.dry_run {
        scaffolder.plan(&manifest)
    } else {
        scaffolder.run(&manifest)
    };

    match result {
        Ok(report) => print_report(&report, &label, args.dry_run, args.json),
        Err(failure) => {
            if let Some(ref report) = failure.report {
                if args.json {
                    println!("{}", serde_json::to_string_pretty(report)?);
                } else {
                    print!("{}", render::render_report(report, args.dry_run));
                }
            }
            Err(failure.into())
        }
    }
}

fn print_report(report: &Report, label: &str, dry_run: bool, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        print!("{}", render::render_report(report, dry_run));
        println!();
        println!("{}", render::render_summary(report, label, dry_run));
    }
    Ok(())
}
