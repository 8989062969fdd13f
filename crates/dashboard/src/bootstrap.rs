//! One-shot flash/query-param bootstrap.
//!
//! After an upload or widget mutation the server redirects back to the
//! dashboard with transient markers in the query string (`status`,
//! `error`, `job`). This module consumes them exactly once and produces
//! the scrubbed location, so a later reload of the same URL does not
//! re-show the message.

use url::Url;

use crate::toast::ToastLevel;

/// Message shown for a fresh `job` marker (counts still unknown).
pub const IMPORT_STARTED: &str = "Import started\u{2026}";

/// What the bootstrap extracted from the initial location.
#[derive(Debug, Clone, PartialEq)]
pub struct BootstrapOutcome {
    /// Toast to seed, if a `status` or `error` marker was present.
    /// An error marker takes priority over a plain status marker.
    pub toast: Option<(ToastLevel, String)>,
    /// Job id from a `job` marker; seeds the tracker and forces the
    /// "import started" indicator state.
    pub job_id: Option<String>,
    /// The location with exactly the three markers removed and every
    /// other query parameter, the path, and the fragment preserved.
    pub scrubbed: String,
}

/// Consume the flash markers from a location.
///
/// Returns `Err` if the location is not a parseable absolute URL.
pub fn consume_location(location: &str) -> Result<BootstrapOutcome, url::ParseError> {
    let mut url = Url::parse(location)?;

    let mut status = None;
    let mut error = None;
    let mut job_id = None;
    let mut retained: Vec<(String, String)> = Vec::new();

    for (key, value) in url.query_pairs() {
        match key.as_ref() {
            "status" => status = Some(value.into_owned()),
            "error" => error = Some(value.into_owned()),
            "job" => job_id = Some(value.into_owned()),
            _ => retained.push((key.into_owned(), value.into_owned())),
        }
    }

    if retained.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(&retained);
    }

    let toast = match (error, status) {
        (Some(error), _) => Some((ToastLevel::Error, error)),
        (None, Some(status)) => Some((ToastLevel::Info, status)),
        (None, None) => None,
    };

    Ok(BootstrapOutcome {
        toast,
        job_id,
        scrubbed: url.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrubs_markers_and_keeps_other_params() {
        let outcome =
            consume_location("http://localhost:8000/?status=ok&job=J1&foo=bar").unwrap();
        assert_eq!(outcome.scrubbed, "http://localhost:8000/?foo=bar");
        assert_eq!(outcome.job_id.as_deref(), Some("J1"));
        assert_eq!(outcome.toast, Some((ToastLevel::Info, "ok".into())));
    }

    #[test]
    fn removes_query_entirely_when_only_markers_present() {
        let outcome = consume_location("http://localhost:8000/?status=Widget+added.").unwrap();
        assert_eq!(outcome.scrubbed, "http://localhost:8000/");
        assert_eq!(
            outcome.toast,
            Some((ToastLevel::Info, "Widget added.".into()))
        );
    }

    #[test]
    fn error_marker_beats_status_marker() {
        let outcome =
            consume_location("http://localhost:8000/?status=ok&error=Upload+failed").unwrap();
        assert_eq!(
            outcome.toast,
            Some((ToastLevel::Error, "Upload failed".into()))
        );
    }

    #[test]
    fn preserves_path_and_fragment() {
        let outcome =
            consume_location("http://localhost:8000/dash/board?job=J2&tab=reviews#charts")
                .unwrap();
        assert_eq!(
            outcome.scrubbed,
            "http://localhost:8000/dash/board?tab=reviews#charts"
        );
        assert_eq!(outcome.job_id.as_deref(), Some("J2"));
    }

    #[test]
    fn no_markers_is_a_no_op() {
        let outcome = consume_location("http://localhost:8000/?foo=bar").unwrap();
        assert_eq!(outcome.scrubbed, "http://localhost:8000/?foo=bar");
        assert_eq!(outcome.toast, None);
        assert_eq!(outcome.job_id, None);
    }

    #[test]
    fn decodes_url_encoded_marker_values() {
        let outcome =
            consume_location("http://localhost:8000/?status=Import+started%E2%80%A6&job=abc-123")
                .unwrap();
        assert_eq!(
            outcome.toast,
            Some((ToastLevel::Info, "Import started\u{2026}".into()))
        );
        assert_eq!(outcome.job_id.as_deref(), Some("abc-123"));
    }

    #[test]
    fn invalid_location_is_an_error() {
        assert!(consume_location("not a url").is_err());
    }
}
