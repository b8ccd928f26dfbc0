//! Blocking JSON-over-HTTP helper shared by the backends.

use crate::enhance::BackendError;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// POSTs `body` as JSON and decodes the JSON answer.
///
/// Non-2xx statuses surface as [`BackendError::Transport`].
pub(crate) fn post_json<B, R>(
    url: &str,
    headers: &[(&str, String)],
    body: &B,
) -> Result<R, BackendError>
where
    B: Serialize,
    R: DeserializeOwned,
{
    let mut request = ureq::post(url).header("Content-Type", "application/json");
    for (name, value) in headers {
        request = request.header(*name, value.as_str());
    }

    let mut response = request
        .send_json(body)
        .map_err(|e| BackendError::Transport(format!("{}: {}", url, e)))?;

    response
        .body_mut()
        .read_json::<R>()
        .map_err(|e| BackendError::MalformedResponse(e.to_string()))
}
