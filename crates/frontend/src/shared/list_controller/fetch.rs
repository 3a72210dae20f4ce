//! HTTP glue for list and object reads plus JSON writes.
//!
//! Every request carries `Authorization: Bearer <jwt>` when a session token is
//! supplied; status handling is delegated to the shared response decoder.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::response::{
    decode_list_response, decode_object_response, LoadOutcome, PageResult,
};
use super::{ListConfig, PagingStyle};
use crate::shared::api_utils::api_url;
use crate::shared::query_state::QueryState;

/// Assemble the relative request URL for one list read: every non-empty
/// query-state field 1:1, then the paging pair in the endpoint's convention.
pub fn build_list_url(config: &ListConfig, qs: &QueryState) -> String {
    let mut url = format!("{}?", config.endpoint);
    for (k, v) in &qs.filters {
        url.push_str(&format!("{}={}&", k, urlencoding::encode(v)));
    }
    if !qs.search.is_empty() {
        url.push_str(&format!("search={}&", urlencoding::encode(&qs.search)));
    }
    if let Some(sort) = &qs.sort {
        url.push_str(&format!(
            "sort={}&dir={}&",
            urlencoding::encode(&sort.field),
            sort.direction.as_str()
        ));
    }
    match config.paging {
        PagingStyle::PageLimit => {
            url.push_str(&format!("page={}&limit={}", qs.page, config.page_size));
        }
        PagingStyle::SkipLimit => {
            url.push_str(&format!(
                "skip={}&limit={}",
                (qs.page - 1) * config.page_size,
                config.page_size
            ));
        }
    }
    url
}

pub async fn fetch_list<T: DeserializeOwned>(
    config: &ListConfig,
    qs: &QueryState,
    jwt: Option<&str>,
) -> LoadOutcome<PageResult<T>> {
    let url = api_url(&build_list_url(config, qs));
    let mut req = Request::get(&url).header("Accept", "application/json");
    if let Some(jwt) = jwt {
        req = req.header("Authorization", &format!("Bearer {}", jwt));
    }
    let response = match req.send().await {
        Ok(r) => r,
        Err(e) => return LoadOutcome::Failed(format!("Request failed: {}", e)),
    };
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    decode_list_response(status, &body, qs.page, config.page_size)
}

pub async fn fetch_object<T: DeserializeOwned>(path: &str, jwt: Option<&str>) -> LoadOutcome<T> {
    let mut req = Request::get(&api_url(path)).header("Accept", "application/json");
    if let Some(jwt) = jwt {
        req = req.header("Authorization", &format!("Bearer {}", jwt));
    }
    let response = match req.send().await {
        Ok(r) => r,
        Err(e) => return LoadOutcome::Failed(format!("Request failed: {}", e)),
    };
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    decode_object_response(status, &body)
}

/// POST a JSON body; the payload of the success envelope is returned.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    jwt: Option<&str>,
) -> LoadOutcome<T> {
    send_json(Request::post(&api_url(path)), body, jwt).await
}

/// PUT a JSON body; the payload of the success envelope is returned.
pub async fn put_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
    jwt: Option<&str>,
) -> LoadOutcome<T> {
    send_json(Request::put(&api_url(path)), body, jwt).await
}

async fn send_json<B: Serialize, T: DeserializeOwned>(
    builder: gloo_net::http::RequestBuilder,
    body: &B,
    jwt: Option<&str>,
) -> LoadOutcome<T> {
    let mut builder = builder.header("Accept", "application/json");
    if let Some(jwt) = jwt {
        builder = builder.header("Authorization", &format!("Bearer {}", jwt));
    }
    let request = match builder.json(body) {
        Ok(r) => r,
        Err(e) => return LoadOutcome::Failed(format!("Failed to serialize request: {}", e)),
    };
    let response = match request.send().await {
        Ok(r) => r,
        Err(e) => return LoadOutcome::Failed(format!("Request failed: {}", e)),
    };
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    decode_object_response(status, &text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_controller::sort::{SortDescriptor, SortDirection};
    use std::collections::BTreeMap;

    const CONFIG_PAGE: ListConfig = ListConfig {
        endpoint: "/api/pharmacies",
        page_size: 50,
        paging: PagingStyle::PageLimit,
        filter_fields: &["area"],
        sort_fields: &["name"],
    };

    const CONFIG_SKIP: ListConfig = ListConfig {
        endpoint: "/api/sales/detailed",
        page_size: 100,
        paging: PagingStyle::SkipLimit,
        filter_fields: &["month"],
        sort_fields: &["amount"],
    };

    #[test]
    fn page_limit_convention() {
        let qs = QueryState::default().with_page(3);
        assert_eq!(
            build_list_url(&CONFIG_PAGE, &qs),
            "/api/pharmacies?page=3&limit=50"
        );
    }

    #[test]
    fn skip_limit_convention() {
        let qs = QueryState::default().with_page(3);
        assert_eq!(
            build_list_url(&CONFIG_SKIP, &qs),
            "/api/sales/detailed?skip=200&limit=100"
        );
    }

    #[test]
    fn non_empty_fields_are_copied_one_to_one() {
        let mut filters = BTreeMap::new();
        filters.insert("area".to_string(), "North Cairo".to_string());
        let qs = QueryState::default()
            .with_filters(filters)
            .with_search("panadol")
            .with_sort(Some(SortDescriptor::new("name", SortDirection::Ascending)));
        assert_eq!(
            build_list_url(&CONFIG_PAGE, &qs),
            "/api/pharmacies?area=North%20Cairo&search=panadol&sort=name&dir=asc&page=1&limit=50"
        );
    }
}
