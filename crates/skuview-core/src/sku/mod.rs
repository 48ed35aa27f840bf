//! SKU normalization.
//!
//! Turns a user-entered token plus the selected [`SkuMode`] into the
//! [`CanonicalSku`] used as both the image directory and the filename prefix
//! on the image host.

mod full;
mod root;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Suffix appended to full SKUs entered without one (`K-7810` -> `K-7810-6392`).
pub const DEFAULT_SUFFIX: &str = "6392";

/// How a raw token should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SkuMode {
    /// `K-<root>-<suffix>`; partial forms are completed.
    #[default]
    #[serde(rename = "full")]
    FullSku,
    /// Bare root identifier, used verbatim.
    #[serde(rename = "root")]
    RootSku,
}

impl SkuMode {
    pub fn as_str(self) -> &'static str {
        match self {
            SkuMode::FullSku => "full",
            SkuMode::RootSku => "root",
        }
    }
}

impl fmt::Display for SkuMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Normalized identifier. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct CanonicalSku(String);

impl CanonicalSku {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalSku {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CanonicalSku {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Non-fatal remark about a token that was still accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Advisory {
    /// Root SKU contains characters outside `[A-Za-z0-9]`.
    NonAlphanumeric { token: String },
}

impl fmt::Display for Advisory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Advisory::NonAlphanumeric { token } => write!(
                f,
                "SKU '{token}' contains characters other than letters and digits; using it as-is"
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NormalizeError {
    #[error(
        "invalid SKU format '{token}': expected K-<root>, K-<root>-<suffix>, or a bare <root>"
    )]
    InvalidFormat { token: String },
}

/// Successful normalization, with an optional advisory for the caller to surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Normalized {
    pub sku: CanonicalSku,
    pub advisory: Option<Advisory>,
}

/// Normalizes `raw_token` under `mode`, completing partial full SKUs with
/// `default_suffix`.
///
/// The token is trimmed and uppercased first. Pure function of its inputs.
pub fn normalize(
    raw_token: &str,
    mode: SkuMode,
    default_suffix: &str,
) -> Result<Normalized, NormalizeError> {
    let token = raw_token.trim().to_uppercase();
    match mode {
        SkuMode::FullSku => full::normalize_full(&token, default_suffix).map(|sku| Normalized {
            sku,
            advisory: None,
        }),
        SkuMode::RootSku => Ok(root::normalize_root(token)),
    }
}

/// [`normalize`] with [`DEFAULT_SUFFIX`].
pub fn normalize_default(raw_token: &str, mode: SkuMode) -> Result<Normalized, NormalizeError> {
    normalize(raw_token, mode, DEFAULT_SUFFIX)
}
