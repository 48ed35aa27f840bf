//! Batch pipeline: pasted text in, render model out.
//!
//! A [`BatchRequest`] is consumed once; each token is normalized and, when
//! valid, run through discovery. Per-token problems are recorded in the report
//! and never stop the batch. Only an empty input halts it, before any probe.

use serde::Serialize;

use crate::candidate::CacheBuster;
use crate::config::Settings;
use crate::discover::{DiscoveryResult, Discoverer};
use crate::input::BatchRequest;
use crate::probe::Probe;
use crate::sku::{normalize, Advisory, CanonicalSku, SkuMode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BatchError {
    #[error("no SKUs provided; enter at least one SKU")]
    EmptyInput,
}

/// Outcome of normalizing one token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum NormalizedToken {
    Valid {
        token: String,
        sku: CanonicalSku,
        #[serde(skip_serializing_if = "Option::is_none")]
        advisory: Option<Advisory>,
    },
    Invalid {
        token: String,
        error: String,
    },
}

/// One entry of a batch report, in input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SkuReport {
    /// Token could not be normalized; no probe was issued.
    Invalid { token: String, error: String },
    /// Token normalized and its candidates were probed.
    Checked {
        token: String,
        sku: CanonicalSku,
        #[serde(skip_serializing_if = "Option::is_none")]
        advisory: Option<Advisory>,
        #[serde(flatten)]
        discovery: DiscoveryResult,
    },
}

/// Render model for one `view` request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchReport {
    pub mode: SkuMode,
    pub cache_buster: CacheBuster,
    pub entries: Vec<SkuReport>,
}

impl BatchReport {
    pub fn token_count(&self) -> usize {
        self.entries.len()
    }

    pub fn invalid_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, SkuReport::Invalid { .. }))
            .count()
    }

    pub fn with_images_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| matches!(e, SkuReport::Checked { discovery, .. } if discovery.any_found))
            .count()
    }

    pub fn without_images_count(&self) -> usize {
        self.token_count() - self.invalid_count() - self.with_images_count()
    }
}

fn normalize_token(token: &str, mode: SkuMode, suffix: &str) -> NormalizedToken {
    match normalize(token, mode, suffix) {
        Ok(n) => NormalizedToken::Valid {
            token: token.to_string(),
            sku: n.sku,
            advisory: n.advisory,
        },
        Err(e) => NormalizedToken::Invalid {
            token: token.to_string(),
            error: e.to_string(),
        },
    }
}

/// Normalizes every token of `request` without touching the network.
pub fn normalize_batch(
    request: &BatchRequest,
    settings: &Settings,
) -> Result<Vec<NormalizedToken>, BatchError> {
    let tokens = request.tokens();
    if tokens.is_empty() {
        return Err(BatchError::EmptyInput);
    }
    Ok(tokens
        .into_iter()
        .map(|t| normalize_token(t, request.mode, &settings.default_suffix))
        .collect())
}

/// Runs the whole normalize-then-discover pipeline for one request.
///
/// Probes are issued sequentially through `prober`; `cache_buster` is shared by
/// every candidate URL of the batch.
pub fn run_batch<P: Probe>(
    request: &BatchRequest,
    settings: &Settings,
    cache_buster: CacheBuster,
    prober: P,
) -> Result<BatchReport, BatchError> {
    let normalized = normalize_batch(request, settings)?;
    let discoverer = Discoverer::new(settings.image_base.clone(), cache_buster, prober);

    let entries = normalized
        .into_iter()
        .map(|n| match n {
            NormalizedToken::Invalid { token, error } => {
                tracing::info!(%token, "skipping invalid SKU");
                SkuReport::Invalid { token, error }
            }
            NormalizedToken::Valid {
                token,
                sku,
                advisory,
            } => {
                let discovery = discoverer.discover(&sku);
                tracing::info!(
                    sku = %sku,
                    found = discovery.found_images.len(),
                    "discovery pass finished"
                );
                SkuReport::Checked {
                    token,
                    sku,
                    advisory,
                    discovery,
                }
            }
        })
        .collect();

    Ok(BatchReport {
        mode: request.mode,
        cache_buster,
        entries,
    })
}
