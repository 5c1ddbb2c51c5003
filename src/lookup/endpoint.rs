//! Filename lookups from the browser through the lookup endpoint

use super::{ExtractFilenameResponse, FilenameSource};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

pub const DEFAULT_ENDPOINT: &str = "/api/extract-filename";

/// POSTs `{ fileId }` to the lookup endpoint
#[derive(Debug, Clone)]
pub struct EndpointFilenameSource {
    url: String,
}

impl EndpointFilenameSource {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    async fn fetch(&self, file_id: &str) -> Result<Option<String>, JsValue> {
        let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;

        let body = serde_json::json!({ "fileId": file_id });
        let opts = RequestInit::new();
        opts.set_method("POST");
        opts.set_mode(RequestMode::Cors);
        opts.set_body(&JsValue::from_str(&body.to_string()));

        let request = Request::new_with_str_and_init(&self.url, &opts)?;
        request.headers().set("Content-Type", "application/json")?;

        let response: Response = JsFuture::from(window.fetch_with_request(&request)).await?.dyn_into()?;
        if !response.ok() {
            log::warn!("filename lookup for {} returned {}", file_id, response.status());
            return Ok(None);
        }

        let json = JsFuture::from(response.json()?).await?;
        let parsed: ExtractFilenameResponse = serde_wasm_bindgen::from_value(json)?;
        Ok(Some(parsed.filename))
    }
}

impl Default for EndpointFilenameSource {
    fn default() -> Self {
        Self::new(DEFAULT_ENDPOINT)
    }
}

impl FilenameSource for EndpointFilenameSource {
    async fn filename(&self, file_id: &str) -> Option<String> {
        match self.fetch(file_id).await {
            Ok(name) => name,
            Err(e) => {
                log::warn!("filename lookup for {} failed: {:?}", file_id, e);
                None
            }
        }
    }
}
