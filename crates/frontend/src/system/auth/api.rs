use contracts::system::auth::{LoginRequest, SessionUser};
use gloo_net::http::Request;

use crate::shared::api_utils::api_url;
use crate::shared::list_controller::response::{decode_object_response, LoadOutcome};

/// Authenticate against the remote API. The success payload is the session
/// the caller hands to [`SessionContext::establish`].
///
/// [`SessionContext::establish`]: super::context::SessionContext::establish
pub async fn login(username: String, password: String) -> Result<SessionUser, String> {
    let request = LoginRequest { username, password };

    let response = Request::post(&api_url("/api/auth/login"))
        .json(&request)
        .map_err(|e| format!("Failed to serialize request: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Request failed: {}", e))?;

    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    match decode_object_response::<SessionUser>(status, &body) {
        LoadOutcome::Ok(user) => Ok(user),
        LoadOutcome::Unauthenticated => Err("Invalid username or password".to_string()),
        LoadOutcome::Denied { message, .. } => Err(message),
        LoadOutcome::Failed(message) => Err(message),
    }
}
