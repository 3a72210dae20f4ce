//! Shared decoding of the remote API's response envelope.
//!
//! Every fetch path funnels through here so that the optional envelope fields
//! are default-filled in exactly one place and every caller gets the same
//! four-way outcome instead of ad hoc status handling.

use contracts::shared::envelope::ApiEnvelope;
use serde::de::DeserializeOwned;

/// Outcome of one remote read, as a plain value the view switches on.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadOutcome<T> {
    Ok(T),
    /// Missing or rejected token. The caller clears the session; the login
    /// view takes over via the auth gate.
    Unauthenticated,
    /// Valid session, insufficient permission. Rendered as its own state,
    /// never as an empty list. The session stays intact.
    Denied {
        message: String,
        reason: Option<String>,
    },
    /// Anything else: network error, 5xx, success=false, bad payload.
    Failed(String),
}

impl<T> LoadOutcome<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> LoadOutcome<U> {
        match self {
            LoadOutcome::Ok(v) => LoadOutcome::Ok(f(v)),
            LoadOutcome::Unauthenticated => LoadOutcome::Unauthenticated,
            LoadOutcome::Denied { message, reason } => LoadOutcome::Denied { message, reason },
            LoadOutcome::Failed(m) => LoadOutcome::Failed(m),
        }
    }
}

/// One page of list results plus its pagination metadata. Replaced wholesale
/// on every successful fetch.
#[derive(Debug, Clone, PartialEq)]
pub struct PageResult<T> {
    pub items: Vec<T>,
    pub total_count: u64,
    pub current_page: u32,
    pub total_pages: u32,
}

/// Map a non-2xx status onto the outcome taxonomy.
fn classify_error<T>(status: u16, body: &str) -> LoadOutcome<T> {
    let envelope: Option<ApiEnvelope<serde_json::Value>> = serde_json::from_str(body).ok();
    match status {
        401 => LoadOutcome::Unauthenticated,
        403 => {
            let (message, reason) = envelope
                .map(|e| (e.error_message(), e.reason))
                .unwrap_or_else(|| ("Access denied".to_string(), None));
            LoadOutcome::Denied { message, reason }
        }
        _ => {
            let message = envelope
                .map(|e| e.error_message())
                .unwrap_or_else(|| format!("HTTP {}", status));
            LoadOutcome::Failed(message)
        }
    }
}

/// Decode a list endpoint's response body into a [`PageResult`].
///
/// Defaults for the optional envelope fields: `total` falls back to `count`,
/// then to the item count; `page` to the requested page; `pages` to
/// `ceil(total / page_size)`.
pub fn decode_list_response<T: DeserializeOwned>(
    status: u16,
    body: &str,
    requested_page: u32,
    page_size: u32,
) -> LoadOutcome<PageResult<T>> {
    if !(200..300).contains(&status) {
        return classify_error(status, body);
    }

    let envelope: ApiEnvelope<Vec<T>> = match serde_json::from_str(body) {
        Ok(e) => e,
        Err(e) => return LoadOutcome::Failed(format!("Invalid response: {}", e)),
    };
    if !envelope.success {
        return LoadOutcome::Failed(envelope.error_message());
    }

    let items = envelope.data.unwrap_or_default();
    let total_count = envelope
        .total
        .or(envelope.count)
        .unwrap_or(items.len() as u64);
    let total_pages = envelope.pages.unwrap_or_else(|| {
        if page_size == 0 {
            0
        } else {
            total_count.div_ceil(page_size as u64) as u32
        }
    });
    let current_page = envelope
        .page
        .unwrap_or(requested_page)
        .clamp(1, total_pages.max(1));

    LoadOutcome::Ok(PageResult {
        items,
        total_count,
        current_page,
        total_pages,
    })
}

/// Decode a single-object endpoint (summary cards, detail reads, writes).
pub fn decode_object_response<T: DeserializeOwned>(status: u16, body: &str) -> LoadOutcome<T> {
    if !(200..300).contains(&status) {
        return classify_error(status, body);
    }

    let envelope: ApiEnvelope<T> = match serde_json::from_str(body) {
        Ok(e) => e,
        Err(e) => return LoadOutcome::Failed(format!("Invalid response: {}", e)),
    };
    if !envelope.success {
        return LoadOutcome::Failed(envelope.error_message());
    }
    match envelope.data {
        Some(data) => LoadOutcome::Ok(data),
        None => LoadOutcome::Failed("Empty response".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    struct Row {
        name: String,
    }

    #[test]
    fn total_pages_computed_when_absent() {
        let body = r#"{"success":true,"data":[{"name":"a"},{"name":"b"},{"name":"c"}],"total":3}"#;
        match decode_list_response::<Row>(200, body, 1, 50) {
            LoadOutcome::Ok(page) => {
                assert_eq!(page.items.len(), 3);
                assert_eq!(page.total_count, 3);
                assert_eq!(page.current_page, 1);
                assert_eq!(page.total_pages, 1);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }

        // ceil(3 / 2) = 2 pages
        match decode_list_response::<Row>(200, body, 2, 2) {
            LoadOutcome::Ok(page) => assert_eq!(page.total_pages, 2),
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn missing_total_defaults_to_item_count() {
        let body = r#"{"success":true,"data":[{"name":"a"},{"name":"b"}]}"#;
        match decode_list_response::<Row>(200, body, 1, 50) {
            LoadOutcome::Ok(page) => {
                assert_eq!(page.total_count, 2);
                assert_eq!(page.total_pages, 1);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }

    #[test]
    fn forbidden_is_a_distinct_outcome_with_both_strings() {
        let body = r#"{"success":false,"message":"Access denied","reason":"not supervisor"}"#;
        assert_eq!(
            decode_list_response::<Row>(403, body, 1, 50),
            LoadOutcome::Denied {
                message: "Access denied".to_string(),
                reason: Some("not supervisor".to_string()),
            }
        );
    }

    #[test]
    fn unauthorized_maps_to_unauthenticated() {
        assert_eq!(
            decode_list_response::<Row>(401, "", 1, 50),
            LoadOutcome::Unauthenticated
        );
    }

    #[test]
    fn server_errors_and_bad_payloads_fail_with_a_message() {
        let body = r#"{"success":false,"message":"boom"}"#;
        assert_eq!(
            decode_list_response::<Row>(500, body, 1, 50),
            LoadOutcome::Failed("boom".to_string())
        );
        assert_eq!(
            decode_list_response::<Row>(502, "<html>", 1, 50),
            LoadOutcome::Failed("HTTP 502".to_string())
        );
        assert!(matches!(
            decode_list_response::<Row>(200, "not json", 1, 50),
            LoadOutcome::Failed(_)
        ));
        assert_eq!(
            decode_list_response::<Row>(200, body, 1, 50),
            LoadOutcome::Failed("boom".to_string())
        );
    }

    #[test]
    fn reported_page_is_clamped_to_the_page_count() {
        let body = r#"{"success":true,"data":[],"total":0,"page":7}"#;
        match decode_list_response::<Row>(200, body, 7, 50) {
            LoadOutcome::Ok(page) => {
                assert_eq!(page.total_pages, 0);
                assert_eq!(page.current_page, 1);
            }
            other => panic!("unexpected outcome: {:?}", other),
        }
    }
}
