//! Where the pasted SKU text comes from: arguments, a file, or stdin.

use anyhow::{Context, Result};
use clap::Args;
use skuview_core::config::Settings;
use skuview_core::input::BatchRequest;
use skuview_core::sku::SkuMode;
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;

use super::ModeArg;

#[derive(Debug, Args)]
pub struct InputArgs {
    /// SKUs, separated by commas, spaces, or newlines. Read from stdin when omitted.
    pub skus: Vec<String>,

    /// Read SKUs from a file.
    #[arg(long, short = 'f', value_name = "PATH", conflicts_with = "skus")]
    pub file: Option<PathBuf>,

    /// How to interpret each SKU (default from config, else `full`).
    #[arg(long, short = 'm', value_enum)]
    pub mode: Option<ModeArg>,
}

impl InputArgs {
    pub fn mode(&self, settings: &Settings) -> SkuMode {
        self.mode.map(SkuMode::from).unwrap_or(settings.default_mode)
    }

    fn read_raw(&self) -> Result<String> {
        if !self.skus.is_empty() {
            return Ok(self.skus.join("\n"));
        }
        if let Some(path) = &self.file {
            return fs::read_to_string(path)
                .with_context(|| format!("read SKU list: {}", path.display()));
        }
        let stdin = io::stdin();
        if stdin.is_terminal() {
            eprintln!("Paste SKUs (one per line or separated by commas), then press Ctrl-D:");
        }
        let mut raw = String::new();
        stdin
            .lock()
            .read_to_string(&mut raw)
            .context("read SKU list from stdin")?;
        Ok(raw)
    }

    /// Snapshot of mode and raw text for one pipeline run.
    pub fn to_request(&self, settings: &Settings) -> Result<BatchRequest> {
        Ok(BatchRequest::new(self.mode(settings), self.read_raw()?))
    }
}
