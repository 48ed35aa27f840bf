//! Tests for normalize and config subcommands.

use super::parse;
use crate::cli::{CliCommand, ModeArg};
use skuview_core::config::SkuviewConfig;

#[test]
fn cli_parse_normalize() {
    match parse(&["skuview", "normalize", "--mode", "root", "a", "b"]) {
        CliCommand::Normalize { input } => {
            assert_eq!(input.mode, Some(ModeArg::Root));
            assert_eq!(input.skus, vec!["a", "b"]);
        }
        _ => panic!("expected Normalize"),
    }
}

#[test]
fn cli_parse_config() {
    match parse(&["skuview", "config"]) {
        CliCommand::Config => {}
        _ => panic!("expected Config"),
    }
}

#[test]
fn config_command_runs_with_invalid_settings() {
    let cfg = SkuviewConfig {
        image_base_url: "not a url".to_string(),
        ..SkuviewConfig::default()
    };
    assert!(cfg.settings().is_err());
    parse(&["skuview", "config"]).run(&cfg).unwrap();
}

#[test]
fn normalize_command_rejects_invalid_settings() {
    let cfg = SkuviewConfig {
        probe_timeout_secs: 0,
        ..SkuviewConfig::default()
    };
    let err = parse(&["skuview", "normalize", "K-1"]).run(&cfg).unwrap_err();
    assert!(err.to_string().contains("invalid config"));
}
