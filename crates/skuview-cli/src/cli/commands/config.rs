//! `skuview config` – show where settings come from.

use anyhow::{Context, Result};
use skuview_core::config::{self, SkuviewConfig};

pub fn run_config(cfg: &SkuviewConfig) -> Result<()> {
    match config::config_path()? {
        Some(path) => println!("# config file: {}", path.display()),
        None => println!("# no config file found; using built-in defaults"),
    }
    print!("{}", cfg.to_toml().context("serialize config")?);
    Ok(())
}
