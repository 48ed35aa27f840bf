//! Candidate image URLs.
//!
//! Every canonical SKU has up to [`MAX_CANDIDATES`] photos on the image host,
//! laid out as `<base>/<SKU>/<SKU>_<NN>.jpg`. A `v=` query parameter defeats
//! intermediate caches.

use serde::Serialize;
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};
use url::Url;

use crate::sku::CanonicalSku;

/// Number of photo slots probed per SKU (indices 1 through 6).
pub const MAX_CANDIDATES: u8 = 6;

/// Default image host directory.
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://topshop-tiny.com.br/wp-content/uploads/tiny";

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BaseUrlError {
    #[error("invalid image base URL '{url}': {reason}")]
    Parse { url: String, reason: String },
    #[error("image base URL '{url}' must be an http(s) URL with a path")]
    NotHierarchical { url: String },
}

/// Validated base URL that candidate paths can be appended to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageBase(Url);

impl ImageBase {
    pub fn parse(raw: &str) -> Result<Self, BaseUrlError> {
        let url = Url::parse(raw.trim()).map_err(|e| BaseUrlError::Parse {
            url: raw.to_string(),
            reason: e.to_string(),
        })?;
        if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
            return Err(BaseUrlError::NotHierarchical {
                url: raw.to_string(),
            });
        }
        Ok(Self(url))
    }

    pub fn as_url(&self) -> &Url {
        &self.0
    }
}

impl Default for ImageBase {
    fn default() -> Self {
        Self(Url::parse(DEFAULT_IMAGE_BASE_URL).expect("DEFAULT_IMAGE_BASE_URL is a valid https URL"))
    }
}

/// Value of the `v=` query parameter. One per batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct CacheBuster(u64);

impl CacheBuster {
    pub fn new(value: u64) -> Self {
        Self(value)
    }

    /// Current unix time in seconds.
    pub fn now() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self(secs)
    }
}

impl fmt::Display for CacheBuster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One guessed photo location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateImage {
    pub index: u8,
    pub url: Url,
}

/// `<SKU>_<NN>.jpg`, index zero-padded to two digits.
pub fn candidate_filename(sku: &CanonicalSku, index: u8) -> String {
    format!("{}_{:02}.jpg", sku, index)
}

/// Builds the candidate URL for `index`. Path segments are percent-encoded.
pub fn candidate_url(
    base: &ImageBase,
    sku: &CanonicalSku,
    index: u8,
    cache_buster: CacheBuster,
) -> CandidateImage {
    let filename = candidate_filename(sku, index);
    let mut url = base.as_url().clone();
    if let Ok(mut segments) = url.path_segments_mut() {
        segments.pop_if_empty().push(sku.as_str()).push(&filename);
    }
    url.set_fragment(None);
    url.set_query(Some(&format!("v={cache_buster}")));
    CandidateImage { index, url }
}

/// All candidates for `sku`, in index order 1..=[`MAX_CANDIDATES`].
pub fn candidates<'a>(
    base: &'a ImageBase,
    sku: &'a CanonicalSku,
    cache_buster: CacheBuster,
) -> impl Iterator<Item = CandidateImage> + 'a {
    (1..=MAX_CANDIDATES).map(move |i| candidate_url(base, sku, i, cache_buster))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sku::{normalize_default, SkuMode};

    fn sku(token: &str, mode: SkuMode) -> CanonicalSku {
        normalize_default(token, mode).unwrap().sku
    }

    #[test]
    fn filename_is_zero_padded() {
        let s = sku("K-5459-6392", SkuMode::FullSku);
        assert_eq!(candidate_filename(&s, 1), "K-5459-6392_01.jpg");
        assert_eq!(candidate_filename(&s, 6), "K-5459-6392_06.jpg");
    }

    #[test]
    fn url_joins_base_sku_and_filename() {
        let s = sku("K-5459", SkuMode::FullSku);
        let c = candidate_url(&ImageBase::default(), &s, 6, CacheBuster::new(42));
        assert_eq!(
            c.url.as_str(),
            "https://topshop-tiny.com.br/wp-content/uploads/tiny/K-5459-6392/K-5459-6392_06.jpg?v=42"
        );
        assert_eq!(c.index, 6);
    }

    #[test]
    fn trailing_slash_on_base_is_tolerated() {
        let base = ImageBase::parse("http://127.0.0.1:8080/img/").unwrap();
        let s = sku("4251", SkuMode::RootSku);
        let c = candidate_url(&base, &s, 2, CacheBuster::new(1));
        assert_eq!(c.url.as_str(), "http://127.0.0.1:8080/img/4251/4251_02.jpg?v=1");
    }

    #[test]
    fn odd_root_characters_are_escaped() {
        let base = ImageBase::parse("http://host/").unwrap();
        let s = sku("A/B C", SkuMode::RootSku);
        let c = candidate_url(&base, &s, 1, CacheBuster::new(0));
        assert_eq!(c.url.path(), "/A%2FB%20C/A%2FB%20C_01.jpg");
    }

    #[test]
    fn six_candidates_in_order() {
        let base = ImageBase::default();
        let s = sku("K-1", SkuMode::FullSku);
        let indices: Vec<u8> = candidates(&base, &s, CacheBuster::new(7))
            .map(|c| c.index)
            .collect();
        assert_eq!(indices, vec![1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn default_base_is_the_image_host() {
        let base = ImageBase::default();
        assert_eq!(base.as_url().as_str(), DEFAULT_IMAGE_BASE_URL);
        assert_eq!(base, ImageBase::parse(DEFAULT_IMAGE_BASE_URL).unwrap());
    }

    #[test]
    fn rejects_unusable_base_urls() {
        assert!(matches!(
            ImageBase::parse("not a url"),
            Err(BaseUrlError::Parse { .. })
        ));
        assert!(matches!(
            ImageBase::parse("mailto:someone@example.com"),
            Err(BaseUrlError::NotHierarchical { .. })
        ));
        assert!(matches!(
            ImageBase::parse("ftp://example.com/x"),
            Err(BaseUrlError::NotHierarchical { .. })
        ));
    }
}
