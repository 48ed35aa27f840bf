//! Bare root identifiers: used verbatim, advisory on unexpected characters.

use super::{Advisory, CanonicalSku, Normalized};

pub(super) fn normalize_root(token: String) -> Normalized {
    let advisory = if token.chars().all(|c| c.is_ascii_alphanumeric()) {
        None
    } else {
        Some(Advisory::NonAlphanumeric {
            token: token.clone(),
        })
    };
    Normalized {
        sku: CanonicalSku(token),
        advisory,
    }
}
