//! Rendering of batch reports: plain text, JSON, or an HTML gallery page.

mod html;
mod text;

use anyhow::{Context, Result};
use serde::Serialize;
use std::fmt;

use crate::pipeline::BatchReport;

pub use html::render_html;
pub use text::{render_normalized, render_text};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
    Html,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
            OutputFormat::Html => "html",
        })
    }
}

pub fn render_json(report: &BatchReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("serialize report")
}

pub fn render(report: &BatchReport, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(report)),
        OutputFormat::Json => render_json(report),
        OutputFormat::Html => Ok(render_html(report)),
    }
}
