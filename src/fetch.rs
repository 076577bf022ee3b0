//! Browser fetch wrappers over `web_sys`
//!
//! Two tiers: the `fetch_*` functions propagate failures for catalog-level
//! resources the page cannot render without, and the `*_optional` variants
//! absorb per-branch and per-build failures so one missing resource never
//! sinks a whole page.

use evox_data::prelude::*;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::Response;

async fn fetch_response(url: &str) -> Result<Response> {
    let window = web_sys::window().ok_or_else(|| Error::network("no window object"))?;
    let value = JsFuture::from(window.fetch_with_str(url))
        .await
        .map_err(|err| Error::network(format!("{err:?}")))?;
    let resp: Response = value
        .dyn_into()
        .map_err(|_| Error::network("fetch did not yield a Response"))?;
    if !resp.ok() {
        return Err(Error::http(resp.status(), url));
    }
    Ok(resp)
}

/// Fetches a URL and returns the response body as text.
pub async fn fetch_text(url: &str) -> Result<String> {
    let resp = fetch_response(url).await?;
    let promise = resp
        .text()
        .map_err(|err| Error::network(format!("{err:?}")))?;
    let value = JsFuture::from(promise)
        .await
        .map_err(|err| Error::network(format!("{err:?}")))?;
    value
        .as_string()
        .ok_or_else(|| Error::network("response body was not text"))
}

/// Fetches a URL and deserializes the JSON body.
pub async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let text = fetch_text(url).await?;
    log::debug!("fetched {url} ({} bytes)", text.len());
    Ok(serde_json::from_str(&text)?)
}

/// Like [`fetch_json`] but absorbs failures to `None`. 404s are expected
/// (not every branch ships builds for every device) and stay quiet; other
/// failures are logged.
pub async fn fetch_json_optional<T: DeserializeOwned>(url: &str) -> Option<T> {
    match fetch_json(url).await {
        Ok(value) => Some(value),
        Err(err) => {
            if !err.is_not_found() {
                log::warn!("fetch of {url} failed: {err}");
            }
            None
        }
    }
}

/// Like [`fetch_text`] but absorbs failures to `None`.
pub async fn fetch_text_optional(url: &str) -> Option<String> {
    match fetch_text(url).await {
        Ok(text) => Some(text),
        Err(err) => {
            if !err.is_not_found() {
                log::warn!("fetch of {url} failed: {err}");
            }
            None
        }
    }
}
