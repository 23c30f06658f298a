//! Command-line interface for planning patches and workflow chores

use crate::io::configuration::DEFAULT_CONFIG_PATH;
use crate::io::copick::CopickConfig;
use crate::io::error::Result;
use crate::io::settings::Settings;
use crate::tiling::plan::{Coordinate, TilingPlan};
use crate::training::checkpoint::{SelectionTarget, load_manifest, select_checkpoint};
use crate::training::seeding::SeededRngs;
use clap::{Parser, Subcommand};
use rand::seq::SliceRandom;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "tomotile")]
#[command(
    author,
    version,
    about = "Plan minimal-overlap 3D patches and manage cryo-ET workflow files"
)]
/// Command-line arguments for the tiling tool
pub struct Cli {
    /// YAML configuration file (defaults to config.yaml when present)
    #[arg(short, long, value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,

    /// Override a configuration value, e.g. `--set patch_size=[64,64,64]`
    #[arg(short = 's', long = "set", value_name = "KEY=VALUE", global = true)]
    pub overrides: Vec<String>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Action to perform
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Show patch start offsets for the configured volume and patch size
    Plan {
        /// List every patch coordinate
        #[arg(short, long)]
        list: bool,

        /// List coordinates in seeded random order (implies --list)
        #[arg(long)]
        shuffle: bool,
    },

    /// Choose the best checkpoint from a JSON manifest
    Select {
        /// JSON array of {path, val_dice_mean, val_loss} records
        #[arg(short, long, value_name = "PATH")]
        manifest: PathBuf,

        /// Ranking metric (defaults to the configured target)
        #[arg(short, long, value_enum)]
        target: Option<SelectionTarget>,
    },

    /// Write the copick project configuration
    WriteCopick {
        /// Output path (defaults to the configured path)
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,
    },
}

impl Cli {
    /// Resolve settings from the config file and overrides
    ///
    /// An explicit `--config` must exist. Without one, `config.yaml` is used
    /// when present and the built-in defaults otherwise.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration cannot be loaded or merged
    pub fn settings(&self) -> Result<Settings> {
        match &self.config {
            Some(path) => Settings::load(path, &self.overrides),
            None => {
                let default_path = Path::new(DEFAULT_CONFIG_PATH);
                if default_path.is_file() {
                    Settings::load(default_path, &self.overrides)
                } else {
                    Settings::from_overrides(&self.overrides)
                }
            }
        }
    }
}

/// Executes a parsed command line against resolved settings
pub struct CommandRunner {
    cli: Cli,
}

impl CommandRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the command, writing its report to stdout
    ///
    /// # Errors
    ///
    /// Returns an error if settings cannot be resolved or the command fails
    pub fn run(&self) -> Result<()> {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        self.run_with_output(&mut out)
    }

    /// Run the command, writing its report to `out`
    ///
    /// # Errors
    ///
    /// Returns an error if settings cannot be resolved, the command fails, or
    /// writing the report fails
    pub fn run_with_output<W: Write>(&self, out: &mut W) -> Result<()> {
        let settings = self.cli.settings()?;

        match &self.cli.command {
            Command::Plan { list, shuffle } => Self::plan(&settings, *list, *shuffle, out),
            Command::Select { manifest, target } => {
                let records = load_manifest(manifest)?;
                let target = target.unwrap_or(settings.checkpoint_target);
                let best = select_checkpoint(&records, target)?;
                writeln!(out, "{}", best.path.display())?;
                Ok(())
            }
            Command::WriteCopick { path } => {
                let path = path.as_ref().unwrap_or(&settings.copick_config_path);
                CopickConfig::default().write_to(path)?;
                writeln!(out, "{}", path.display())?;
                Ok(())
            }
        }
    }

    fn plan<W: Write>(settings: &Settings, list: bool, shuffle: bool, out: &mut W) -> Result<()> {
        let plan = TilingPlan::new(settings.volume_shape, settings.patch_size)?;
        let overlap = plan.overlap()?;

        writeln!(out, "volume shape: {}", format_triple(plan.shape()))?;
        writeln!(out, "patch size: {}", format_triple(plan.patch_size()))?;
        for (axis, name) in ["x", "y", "z"].into_iter().enumerate() {
            writeln!(
                out,
                "{name} starts: {:?} (overlap {:.2})",
                plan.axis_starts(axis),
                overlap.get(axis).copied().unwrap_or_default()
            )?;
        }
        writeln!(out, "patches per volume: {}", plan.patches_per_volume())?;

        if list || shuffle {
            let mut coordinates: Vec<Coordinate> = plan.coordinates().collect();
            if shuffle {
                let mut rngs = SeededRngs::from_seed(settings.seed);
                coordinates.shuffle(&mut rngs.general);
            }
            for [x, y, z] in coordinates {
                writeln!(out, "{x} {y} {z}")?;
            }
        }

        Ok(())
    }
}

fn format_triple([a, b, c]: [usize; 3]) -> String {
    format!("{a}x{b}x{c}")
}
