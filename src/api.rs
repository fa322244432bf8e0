use copilot_core::SessionView;
use serde::de::DeserializeOwned;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, Response};

use crate::types::{ErrorResponse, SendMessageRequest, SessionCreated};

pub async fn create_session() -> Result<SessionCreated, JsValue> {
    let resp = send_request("POST", "/api/sessions", None).await?;
    read_json(resp).await
}

pub async fn fetch_session(session_id: &str) -> Result<SessionView, JsValue> {
    let url = format!("/api/sessions/{}", session_id);
    let resp = send_request("GET", &url, None).await?;
    read_json(resp).await
}

pub async fn send_message(session_id: &str, message: &str) -> Result<SessionView, JsValue> {
    let url = format!("/api/sessions/{}/messages", session_id);
    let body = serde_json::to_string(&SendMessageRequest { message })
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let resp = send_request("POST", &url, Some(body)).await?;
    read_json(resp).await
}

/// End a session while the page is going away. The request is sent with
/// `keepalive` so it outlives the document; the response is never read.
pub fn end_session(session_id: &str) -> Result<(), JsValue> {
    let opts = RequestInit::new();
    opts.set_method("DELETE");
    opts.set_keepalive(true);

    let url = format!("/api/sessions/{}", session_id);
    let request = Request::new_with_str_and_init(&url, &opts)?;
    let window = web_sys::window().ok_or("window not available")?;
    let _ = window.fetch_with_request(&request);
    Ok(())
}

/// Human readable text for an error coming out of this module
pub fn error_message(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}

async fn send_request(method: &str, url: &str, body: Option<String>) -> Result<Response, JsValue> {
    let opts = RequestInit::new();
    opts.set_method(method);
    let has_body = body.is_some();
    if let Some(body) = body {
        opts.set_body(&JsValue::from_str(&body));
    }

    let request = Request::new_with_str_and_init(url, &opts)?;
    if has_body {
        request.headers().set("Content-Type", "application/json")?;
    }

    let window = web_sys::window().ok_or("window not available")?;
    let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
    let resp: Response = resp_value.dyn_into()?;

    if !resp.ok() {
        // The backend answers errors with {"error": "..."}
        let status = resp.status();
        let message = match resp.json() {
            Ok(promise) => JsFuture::from(promise)
                .await
                .ok()
                .and_then(|json| serde_wasm_bindgen::from_value::<ErrorResponse>(json).ok())
                .map(|body| body.error),
            Err(_) => None,
        };
        return Err(JsValue::from_str(
            &message.unwrap_or_else(|| format!("Request failed with HTTP {}", status)),
        ));
    }

    Ok(resp)
}

async fn read_json<T: DeserializeOwned>(resp: Response) -> Result<T, JsValue> {
    let text = JsFuture::from(resp.text()?).await?;
    let raw = text.as_string().unwrap_or_default();
    serde_json::from_str(&raw).map_err(|e| JsValue::from_str(&format!("Unexpected response: {}", e)))
}
