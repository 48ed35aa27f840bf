//! `skuview view [SKUS]...` – normalize, probe, and report.

use anyhow::{Context, Result};
use skuview_core::candidate::CacheBuster;
use skuview_core::config::Settings;
use skuview_core::pipeline;
use skuview_core::probe::HeadProber;
use skuview_core::render::{self, OutputFormat};
use std::fs;
use std::path::Path;

use crate::cli::InputArgs;

pub fn run_view(
    settings: &Settings,
    input: &InputArgs,
    format: OutputFormat,
    output: Option<&Path>,
) -> Result<()> {
    let request = input.to_request(settings)?;
    let prober = HeadProber::new(settings.probe_timeout, settings.connect_timeout);
    let report = pipeline::run_batch(&request, settings, CacheBuster::now(), &prober)?;
    let rendered = render::render(&report, format)?;

    match output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("write report: {}", path.display()))?;
            println!(
                "Wrote {} report for {} SKU(s) to {}",
                format,
                report.token_count(),
                path.display()
            );
        }
        None => print!("{rendered}"),
    }
    Ok(())
}
