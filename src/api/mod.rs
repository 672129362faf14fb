//! API Gateway
//!
//! Fetch wrappers for the wardrobe backend, organized by domain. Every call
//! goes to `/api/<endpoint>`; bodies are JSON except the multipart upload.

mod items;
mod outfits;
mod history;

use serde::de::DeserializeOwned;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Headers, RequestInit, Response};

// Re-export all public items
pub use items::*;
pub use outfits::*;
pub use history::*;

fn js_error(value: JsValue) -> String {
    value
        .dyn_ref::<js_sys::Error>()
        .map(|e| String::from(e.message()))
        .unwrap_or_else(|| format!("{value:?}"))
}

/// Issue a request against `/api/<path>` and parse the JSON response body.
///
/// Non-success statuses are errors; the caller decides how to surface them.
async fn request(path: &str, init: &RequestInit) -> Result<JsValue, String> {
    let window = web_sys::window().ok_or_else(|| "no window".to_string())?;
    let url = format!("/api/{path}");
    let resp_value = JsFuture::from(window.fetch_with_str_and_init(&url, init))
        .await
        .map_err(js_error)?;
    let resp: Response = resp_value
        .dyn_into()
        .map_err(|_| "fetch did not return a response".to_string())?;
    if !resp.ok() {
        return Err(format!("{path} failed with status {}", resp.status()));
    }
    let body = JsFuture::from(resp.json().map_err(js_error)?)
        .await
        .map_err(js_error)?;
    Ok(body)
}

/// GET an endpoint and decode the JSON response
async fn get<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    let init = RequestInit::new();
    init.set_method("GET");
    let body = request(path, &init).await?;
    serde_wasm_bindgen::from_value(body).map_err(|e| e.to_string())
}

fn json_init<B: Serialize>(body: &B) -> Result<RequestInit, String> {
    let init = RequestInit::new();
    init.set_method("POST");
    let headers = Headers::new().map_err(js_error)?;
    headers
        .set("Content-Type", "application/json")
        .map_err(js_error)?;
    init.set_headers(headers.as_ref());
    let json = serde_json::to_string(body).map_err(|e| e.to_string())?;
    init.set_body(&JsValue::from_str(&json));
    Ok(init)
}

/// POST a JSON body, discarding the acknowledgement payload
async fn post<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let init = json_init(body)?;
    request(path, &init).await?;
    Ok(())
}

/// POST a JSON body and decode the JSON response
async fn post_for<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    let init = json_init(body)?;
    let resp = request(path, &init).await?;
    serde_wasm_bindgen::from_value(resp).map_err(|e| e.to_string())
}

/// POST multipart form data, discarding the acknowledgement payload
///
/// The content type is left unset so the browser supplies the boundary.
async fn post_form(path: &str, form: &FormData) -> Result<(), String> {
    let init = RequestInit::new();
    init.set_method("POST");
    init.set_body(form.as_ref());
    request(path, &init).await?;
    Ok(())
}
