//! Command-line argument parsing for the map tooling.

use std::path::PathBuf;

use clap::Parser;
use tarnfell_landscape::SizePreset;

use crate::Config;

/// Tarnfell map generation arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "tarnfell-mapgen", about = "Tarnfell landscape generator")]
pub struct CliArgs {
    /// Generation seed.
    #[arg(long)]
    pub seed: Option<i32>,

    /// Size preset: small, large, or main-map.
    #[arg(long)]
    pub preset: Option<String>,

    /// Generate a completely flat map.
    #[arg(long)]
    pub flat: bool,

    /// Output directory for generated maps.
    #[arg(long)]
    pub output: Option<String>,

    /// Skip the PNG preview.
    #[arg(long)]
    pub no_preview: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    ///
    /// An unknown preset name is reported and ignored rather than aborting,
    /// so a typo falls back to the configured preset.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.landscape.seed = seed;
        }
        if let Some(ref name) = args.preset {
            match SizePreset::from_name(name) {
                Some(preset) => self.landscape.size_preset = preset,
                None => tracing::warn!("Unknown size preset {name:?}, keeping configured value"),
            }
        }
        if args.flat {
            self.landscape.flat_terrain = true;
        }
        if let Some(ref dir) = args.output {
            self.output.directory = dir.clone();
        }
        if args.no_preview {
            self.output.png_preview = false;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
