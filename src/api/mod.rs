//! Server Request Wrappers
//!
//! Frontend bindings to the screening server's endpoints, organized by domain.

mod upload;
mod shortlist;
mod delete;

use serde::de::DeserializeOwned;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{FormData, Headers, Request, RequestInit, Response};

use crate::error::SubmitError;

// Re-export all public items
pub use upload::*;
pub use shortlist::*;
pub use delete::*;

// ========================
// Request Primitive
// ========================

/// Body of a POST request
pub(crate) enum RequestBody {
    /// No body; JSON content type header only
    Empty,
    /// Multipart form data (browser sets the boundary)
    Multipart(FormData),
    /// `application/x-www-form-urlencoded` text
    UrlEncoded(String),
}

/// Raw reply: status plus undecoded body text
#[derive(Debug, Clone)]
pub(crate) struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    /// Decode the JSON body; unreadable bodies are transport failures
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, SubmitError> {
        Ok(serde_json::from_str(&self.body)?)
    }
}

pub(crate) async fn post(url: &str, body: RequestBody) -> Result<HttpReply, SubmitError> {
    let init = RequestInit::new();
    init.set_method("POST");

    let headers = Headers::new()?;
    match &body {
        RequestBody::Empty => headers.set("Content-Type", "application/json")?,
        RequestBody::Multipart(form) => init.set_body(form.as_ref()),
        RequestBody::UrlEncoded(text) => {
            headers.set("Content-Type", "application/x-www-form-urlencoded")?;
            init.set_body(&JsValue::from_str(text));
        }
    }
    init.set_headers(headers.as_ref());

    let request = Request::new_with_str_and_init(url, &init)?;
    let window = web_sys::window().ok_or_else(|| SubmitError::Transport("No window available".to_string()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request)).await?.dyn_into()?;
    let text = JsFuture::from(response.text()?).await?;

    let reply = HttpReply {
        status: response.status(),
        body: text.as_string().unwrap_or_default(),
    };
    log::debug!("[Api] POST {} -> {}", url, reply.status);
    Ok(reply)
}
