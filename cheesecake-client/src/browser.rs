//! Thin wrappers over the browser APIs the exports need.

use async_trait::async_trait;
use cheesecake::export::ExportArtifact;
use cheesecake::export::pdf::LogoSource;
use chrono::{Local, NaiveDate};
use js_sys::{Array, Uint8Array};
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

pub const LOGO_URL: &str = "/logo.png";

/// Local calendar date, used in export file names.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn window() -> Result<web_sys::Window, JsValue> {
    web_sys::window().ok_or_else(|| JsValue::from_str("No window"))
}

/// Saves the artifact through a temporary object URL and a synthetic anchor click.
pub fn download(artifact: &ExportArtifact) -> Result<(), JsValue> {
    let document = window()?
        .document()
        .ok_or_else(|| JsValue::from_str("No document"))?;

    let parts = Array::new();
    parts.push(&Uint8Array::from(artifact.bytes.as_slice()));
    let options = BlobPropertyBag::new();
    options.set_type(artifact.mime);
    let blob = Blob::new_with_u8_array_sequence_and_options(&parts, &options)?;
    let url = Url::create_object_url_with_blob(&blob)?;

    let anchor: HtmlAnchorElement = document.create_element("a")?.dyn_into()?;
    anchor.set_href(&url);
    anchor.set_download(&artifact.filename);
    if let Some(body) = document.body() {
        body.append_child(&anchor)?;
        anchor.click();
        anchor.remove();
    } else {
        anchor.click();
    }

    Url::revoke_object_url(&url)
}

/// Replaces the current page, used for `mailto:` links.
pub fn navigate(url: &str) -> Result<(), JsValue> {
    window()?.location().set_href(url)
}

pub fn open_in_new_tab(url: &str) -> Result<(), JsValue> {
    window()?.open_with_url_and_target(url, "_blank")?;
    Ok(())
}

/// Letterhead logo served next to the site.
pub struct HttpLogo {
    url: String,
}

impl Default for HttpLogo {
    fn default() -> Self {
        Self {
            url: LOGO_URL.to_string(),
        }
    }
}

#[async_trait(?Send)]
impl LogoSource for HttpLogo {
    async fn fetch_logo(&self) -> anyhow::Result<Vec<u8>> {
        let response = gloo_net::http::Request::get(&self.url)
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("fetching {}: {}", self.url, e))?;
        if !response.ok() {
            anyhow::bail!("fetching {}: HTTP {}", self.url, response.status());
        }
        response
            .binary()
            .await
            .map_err(|e| anyhow::anyhow!("reading {}: {}", self.url, e))
    }
}

/// Human-readable description of a JS error for toasts and logs.
pub fn describe(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
