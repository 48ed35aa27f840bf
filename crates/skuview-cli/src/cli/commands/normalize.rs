//! `skuview normalize [SKUS]...` – show canonical SKUs, no network.

use anyhow::Result;
use skuview_core::config::Settings;
use skuview_core::pipeline;
use skuview_core::render;

use crate::cli::InputArgs;

pub fn run_normalize(settings: &Settings, input: &InputArgs) -> Result<()> {
    let request = input.to_request(settings)?;
    let tokens = pipeline::normalize_batch(&request, settings)?;
    print!("{}", render::render_normalized(&tokens));
    Ok(())
}
