//! Self-contained HTML gallery: per SKU a heading, then each photo with a
//! read-only field holding its URL for copying.

use std::fmt::Write;

use crate::pipeline::{BatchReport, SkuReport};

const STYLE: &str = "body{font-family:sans-serif;max-width:860px;margin:2em auto;padding:0 1em}\
figure{margin:1em 0}img{max-width:100%;display:block}\
input.url{width:100%;font-family:monospace}\
.error{color:#b00020}.warning{color:#8a6d00}";

pub fn render_html(report: &BatchReport) -> String {
    let mut out = String::new();
    out.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n");
    out.push_str("<title>Product images by SKU</title>\n");
    let _ = writeln!(out, "<style>{STYLE}</style>");
    out.push_str("</head>\n<body>\n<h1>Product images by SKU</h1>\n");

    for entry in &report.entries {
        out.push_str("<section>\n");
        match entry {
            SkuReport::Invalid { token, error } => {
                let _ = writeln!(out, "<h2>{}</h2>", escape(token));
                let _ = writeln!(out, "<p class=\"error\">{}</p>", escape(error));
            }
            SkuReport::Checked {
                sku,
                advisory,
                discovery,
                ..
            } => {
                let sku = escape(sku.as_str());
                let _ = writeln!(out, "<h2>{sku}</h2>");
                if let Some(advisory) = advisory {
                    let _ = writeln!(
                        out,
                        "<p class=\"warning\">{}</p>",
                        escape(&advisory.to_string())
                    );
                }
                if !discovery.any_found {
                    let _ = writeln!(out, "<p class=\"error\">No images found for {sku}.</p>");
                }
                for image in &discovery.found_images {
                    let url = escape(&image.url);
                    let _ = writeln!(
                        out,
                        "<figure>\n<img src=\"{url}\" alt=\"{sku} image {:02}\">\n\
<figcaption><input class=\"url\" type=\"text\" readonly value=\"{url}\" onclick=\"this.select()\"></figcaption>\n</figure>",
                        image.index
                    );
                }
            }
        }
        out.push_str("</section>\n");
    }

    out.push_str("</body>\n</html>\n");
    out
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}
