//! Raw input handling: the pasted text block and the mode chosen alongside it.

use crate::sku::SkuMode;

/// One user-triggered request. Built once and consumed by the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchRequest {
    pub mode: SkuMode,
    pub raw_input: String,
}

impl BatchRequest {
    pub fn new(mode: SkuMode, raw_input: impl Into<String>) -> Self {
        Self {
            mode,
            raw_input: raw_input.into(),
        }
    }

    pub fn tokens(&self) -> Vec<&str> {
        split_tokens(&self.raw_input)
    }
}

/// Splits pasted text on commas and whitespace (newlines included).
///
/// Order is preserved and duplicates are kept; empty pieces are dropped.
pub fn split_tokens(raw: &str) -> Vec<&str> {
    raw.split(|c: char| c == ',' || c.is_whitespace())
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_commas_and_whitespace() {
        assert_eq!(split_tokens("K-7810, 4251"), vec!["K-7810", "4251"]);
        assert_eq!(split_tokens("4251\n7890"), vec!["4251", "7890"]);
        assert_eq!(
            split_tokens("a\tb  c,,d\r\ne"),
            vec!["a", "b", "c", "d", "e"]
        );
    }

    #[test]
    fn keeps_order_and_duplicates() {
        assert_eq!(split_tokens("b,a,b"), vec!["b", "a", "b"]);
    }

    #[test]
    fn blank_input_has_no_tokens() {
        assert!(split_tokens("").is_empty());
        assert!(split_tokens(" ,\n\t, ").is_empty());
    }

    #[test]
    fn request_tokens_use_raw_input() {
        let req = BatchRequest::new(SkuMode::RootSku, "x\ny");
        assert_eq!(req.tokens(), vec!["x", "y"]);
    }
}
