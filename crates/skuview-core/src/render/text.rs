//! Terminal rendering.

use std::fmt::Write;

use crate::pipeline::{BatchReport, NormalizedToken, SkuReport};

pub fn render_text(report: &BatchReport) -> String {
    let mut out = String::new();
    for entry in &report.entries {
        match entry {
            SkuReport::Invalid { token, error } => {
                let _ = writeln!(out, "!! {token}");
                let _ = writeln!(out, "   error: {error}");
            }
            SkuReport::Checked {
                token,
                sku,
                advisory,
                discovery,
            } => {
                if token.as_str() == sku.as_str() {
                    let _ = writeln!(out, "== {sku}");
                } else {
                    let _ = writeln!(out, "== {sku} (from {token})");
                }
                if let Some(advisory) = advisory {
                    let _ = writeln!(out, "   warning: {advisory}");
                }
                if discovery.any_found {
                    for image in &discovery.found_images {
                        let _ = writeln!(out, "   [{:02}] {}", image.index, image.url);
                    }
                } else {
                    let _ = writeln!(out, "   no images found for {sku}");
                }
            }
        }
        out.push('\n');
    }
    let _ = writeln!(
        out,
        "{} SKU(s): {} with images, {} without images, {} invalid",
        report.token_count(),
        report.with_images_count(),
        report.without_images_count(),
        report.invalid_count()
    );
    out
}

/// One line per token: `token -> SKU`, or the format error.
pub fn render_normalized(tokens: &[NormalizedToken]) -> String {
    let mut out = String::new();
    for t in tokens {
        match t {
            NormalizedToken::Valid {
                token,
                sku,
                advisory,
            } => {
                let _ = writeln!(out, "{token} -> {sku}");
                if let Some(advisory) = advisory {
                    let _ = writeln!(out, "   warning: {advisory}");
                }
            }
            NormalizedToken::Invalid { token, error } => {
                let _ = writeln!(out, "{token} !! {error}");
            }
        }
    }
    out
}
