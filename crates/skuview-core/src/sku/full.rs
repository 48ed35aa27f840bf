//! `K-<root>-<suffix>` handling.

use super::{CanonicalSku, NormalizeError};

const PREFIX: &str = "K-";

/// Longest accepted shape is `K-<root>-<suffix>`, i.e. two hyphens.
const MAX_HYPHENS: usize = 2;

/// Expects `token` already trimmed and uppercased.
pub(super) fn normalize_full(token: &str, suffix: &str) -> Result<CanonicalSku, NormalizeError> {
    let invalid = || NormalizeError::InvalidFormat {
        token: token.to_string(),
    };

    if token.matches('-').count() > MAX_HYPHENS || token.split('-').any(str::is_empty) {
        return Err(invalid());
    }

    let Some(rest) = token.strip_prefix(PREFIX) else {
        return Ok(CanonicalSku(format!("{PREFIX}{token}-{suffix}")));
    };

    match rest.split('-').count() {
        1 => Ok(CanonicalSku(format!("{PREFIX}{rest}-{suffix}"))),
        2 => Ok(CanonicalSku(token.to_string())),
        _ => Err(invalid()),
    }
}
