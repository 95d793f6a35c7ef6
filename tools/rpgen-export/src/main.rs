//! rpgen-export - rounded polygon mesh export tool
//!
//! Generates a rounded polygon mesh and writes it as glTF (`.gltf` + `.bin`)
//! or GLB, or reports the buffer sizes for a facet count.

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use rpgen_export::{ExportConfig, ExportSummary, export_glb, export_gltf, load_config};

#[derive(Parser)]
#[command(name = "rpgen-export")]
#[command(about = "Rounded polygon mesh export tool")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Write <name>.gltf and <name>.bin
    Gltf(ExportArgs),

    /// Write a self-contained <name>.glb
    Glb(ExportArgs),

    /// Print element counts and buffer sizes for a facet count
    Info {
        /// Number of facets
        #[arg(short, long, default_value_t = rpgen_export::config::DEFAULT_EXPORT_FACET_COUNT)]
        facets: u32,
    },
}

#[derive(Args)]
struct ExportArgs {
    /// Path to an export config (TOML)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output directory
    #[arg(short, long, default_value = ".")]
    output: PathBuf,

    /// Number of facets (overrides config)
    #[arg(short, long)]
    facets: Option<u32>,

    /// Facet radius (overrides config)
    #[arg(long)]
    radius: Option<f32>,

    /// Extrusion depth (overrides config)
    #[arg(long)]
    depth: Option<f32>,

    /// Output file stem (overrides config)
    #[arg(short, long)]
    name: Option<String>,
}

impl ExportArgs {
    /// Config file (or defaults) with command-line overrides applied
    fn resolve(&self) -> Result<ExportConfig> {
        let mut config = match &self.config {
            Some(path) => {
                tracing::info!("Loading config {:?}", path);
                load_config(path)?
            }
            None => ExportConfig::default(),
        };

        if let Some(facets) = self.facets {
            config.mesh.facet_count = facets;
        }
        if let Some(radius) = self.radius {
            config.mesh.facet_radius = radius;
        }
        if let Some(depth) = self.depth {
            config.mesh.extrusion_depth = depth;
        }
        if let Some(name) = &self.name {
            config.name = name.clone();
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Gltf(args) => {
            let config = args.resolve()?;
            tracing::info!("Exporting glTF -> {:?}", args.output);
            export_gltf(&config, &args.output)?.log();
            tracing::info!("Done!");
        }

        Commands::Glb(args) => {
            let config = args.resolve()?;
            tracing::info!("Exporting GLB -> {:?}", args.output);
            export_glb(&config, &args.output)?.log();
            tracing::info!("Done!");
        }

        Commands::Info { facets } => {
            rpgen::GenerationRequest::new(facets).validate()?;
            ExportSummary::for_facet_count(facets).log();
        }
    }

    Ok(())
}
