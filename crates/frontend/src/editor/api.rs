//! HTTP client for the APK server operations.
//!
//! Operation endpoints answer with an [`ApiStatus`] envelope even on 4xx
//! and 5xx statuses, so the body is parsed regardless of the status
//! code; only a transport error or an unparseable body counts as a
//! network failure.

use crate::shared::api_utils::api_url;
use contracts::{ApiStatus, ProjectSummary};
use gloo_net::http::Request;

/// `POST /sign_apk/{project_id}` with an empty JSON body.
pub async fn sign_apk(project_id: &str) -> Result<ApiStatus, String> {
    let response = Request::post(&api_url(&format!("/sign_apk/{}", project_id)))
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| format!("request failed: {e}"))?;

    response
        .json::<ApiStatus>()
        .await
        .map_err(|e| format!("malformed response: {e}"))
}

/// `POST /test_ai` - checks that the server's code-generation backend
/// answers at all.
pub async fn test_ai() -> Result<ApiStatus, String> {
    let response = Request::post(&api_url("/test_ai"))
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(|e| format!("request failed: {e}"))?;

    response
        .json::<ApiStatus>()
        .await
        .map_err(|e| format!("malformed response: {e}"))
}

/// `GET /projects` - decompiled projects available for editing.
pub async fn list_projects() -> Result<Vec<ProjectSummary>, String> {
    let response = Request::get(&api_url("/projects"))
        .send()
        .await
        .map_err(|e| format!("request failed: {e}"))?;

    if !response.ok() {
        return Err(format!("HTTP error: {}", response.status()));
    }

    response
        .json::<Vec<ProjectSummary>>()
        .await
        .map_err(|e| format!("malformed response: {e}"))
}
