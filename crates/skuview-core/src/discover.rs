//! Image discovery: probe every candidate slot of a SKU, keep the ones that exist.

use serde::Serialize;

use crate::candidate::{candidates, CacheBuster, ImageBase};
use crate::probe::Probe;
use crate::sku::CanonicalSku;

/// A candidate that answered `200`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FoundImage {
    pub index: u8,
    pub url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DiscoveryResult {
    pub found_images: Vec<FoundImage>,
    pub any_found: bool,
}

/// Walks the candidate slots for one SKU at a time.
///
/// Probes run sequentially in index order. Failed or timed-out probes are
/// treated as absent and never retried.
pub struct Discoverer<P> {
    base: ImageBase,
    cache_buster: CacheBuster,
    prober: P,
}

impl<P: Probe> Discoverer<P> {
    pub fn new(base: ImageBase, cache_buster: CacheBuster, prober: P) -> Self {
        Self {
            base,
            cache_buster,
            prober,
        }
    }

    pub fn discover(&self, sku: &CanonicalSku) -> DiscoveryResult {
        let found_images: Vec<FoundImage> = candidates(&self.base, sku, self.cache_buster)
            .filter(|c| self.prober.probe(c.url.as_str()).is_found())
            .map(|c| FoundImage {
                index: c.index,
                url: c.url.into(),
            })
            .collect();
        DiscoveryResult {
            any_found: !found_images.is_empty(),
            found_images,
        }
    }
}
