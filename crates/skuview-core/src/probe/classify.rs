//! Map HTTP status codes and curl errors to probe outcomes.

use super::ProbeOutcome;

/// Only an exact `200` means the image is there.
pub fn classify_status(code: u32) -> ProbeOutcome {
    match code {
        200 => ProbeOutcome::Found,
        other => ProbeOutcome::Missing(other),
    }
}

/// Classify a curl error; timeouts are kept apart from other failures.
pub fn classify_curl_error(e: &curl::Error) -> ProbeOutcome {
    if e.is_operation_timedout() {
        return ProbeOutcome::TimedOut;
    }
    ProbeOutcome::Failed(e.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_200_is_found() {
        assert_eq!(classify_status(200), ProbeOutcome::Found);
        assert!(classify_status(200).is_found());
    }

    #[test]
    fn other_statuses_are_missing() {
        for code in [201, 204, 301, 304, 403, 404, 500, 503] {
            assert_eq!(classify_status(code), ProbeOutcome::Missing(code));
        }
    }

    #[test]
    fn timeout_error_is_timed_out() {
        // CURLE_OPERATION_TIMEDOUT
        let e = curl::Error::new(28);
        assert_eq!(classify_curl_error(&e), ProbeOutcome::TimedOut);
    }

    #[test]
    fn connection_error_is_failed() {
        // CURLE_COULDNT_CONNECT
        let e = curl::Error::new(7);
        assert!(matches!(classify_curl_error(&e), ProbeOutcome::Failed(_)));
    }
}
