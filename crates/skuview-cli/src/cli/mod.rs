//! CLI for skuview: paste SKUs, see which product photos exist.

mod commands;
mod input;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use skuview_core::config::{self, SkuviewConfig};
use skuview_core::render::OutputFormat;
use skuview_core::sku::SkuMode;
use std::path::PathBuf;

use commands::{run_config, run_normalize, run_view};
pub use input::InputArgs;

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(name = "skuview")]
#[command(about = "skuview: find product photos for a list of SKUs", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: CliCommand,
}

/// How each pasted token is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// K-<root>-<suffix>; K-<root> and bare roots get the default suffix.
    Full,
    /// Bare root identifier, used as-is.
    Root,
}

impl From<ModeArg> for SkuMode {
    fn from(m: ModeArg) -> Self {
        match m {
            ModeArg::Full => SkuMode::FullSku,
            ModeArg::Root => SkuMode::RootSku,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
    /// Gallery page with each image and a copyable URL field.
    Html,
}

impl From<FormatArg> for OutputFormat {
    fn from(f: FormatArg) -> Self {
        match f {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Html => OutputFormat::Html,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Normalize SKUs and probe the image host for their photos.
    View {
        #[command(flatten)]
        input: InputArgs,

        /// Output format.
        #[arg(long, value_enum, default_value = "text")]
        format: FormatArg,

        /// Write the report to this file instead of stdout.
        #[arg(long, short = 'o', value_name = "PATH")]
        output: Option<PathBuf>,
    },

    /// Show how SKUs would be normalized, without any network access.
    Normalize {
        #[command(flatten)]
        input: InputArgs,
    },

    /// Print the config file location and the effective settings.
    Config,
}

impl CliCommand {
    pub fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = config::load_or_default().context("load config")?;
        tracing::debug!("loaded config: {:?}", cfg);
        cli.command.run(&cfg)
    }

    /// `config` must keep working with an invalid file so it can be inspected;
    /// only the commands that use the settings validate them.
    pub fn run(self, cfg: &SkuviewConfig) -> Result<()> {
        match self {
            CliCommand::View {
                input,
                format,
                output,
            } => {
                let settings = cfg.settings().context("invalid config")?;
                run_view(&settings, &input, format.into(), output.as_deref())
            }
            CliCommand::Normalize { input } => {
                let settings = cfg.settings().context("invalid config")?;
                run_normalize(&settings, &input)
            }
            CliCommand::Config => run_config(cfg),
        }
    }
}

#[cfg(test)]
mod tests;
