use cheesecake::comments::DEFAULT_COMMENTS_LIMIT;
use cheesecake::content::available_cars;
use cheesecake::{
    Booking, Comment, CompanyCar, GalleryItem, NewBooking, NewComment, Trip, WebsiteImage,
};
use dioxus_logger::tracing::{debug, error};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

type Result<T> = std::result::Result<T, JsValue>;

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

/// Talks to the site server: `/data/*.json` for content, `/api/*` for comments
/// and bookings.
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        let base_url = web_sys::window()
            .and_then(|w| w.location().hostname().ok())
            .map(|hostname| {
                if hostname == "localhost" || hostname == "127.0.0.1" {
                    "http://localhost:8787".to_string()
                } else {
                    String::new()
                }
            })
            .unwrap_or_default();

        Self { base_url }
    }

    async fn request<T: DeserializeOwned>(
        &self,
        method: &str,
        path: &str,
        body: Option<String>,
    ) -> Result<T> {
        let url = format!("{}{}", self.base_url, path);
        debug!("{} {}", method, url);

        let opts = RequestInit::new();
        opts.set_method(method);
        opts.set_mode(RequestMode::Cors);

        if let Some(body_str) = body {
            opts.set_body(&JsValue::from_str(&body_str));
        }

        let request = Request::new_with_str_and_init(&url, &opts)?;
        request.headers().set("Content-Type", "application/json")?;

        let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
        let resp_value = JsFuture::from(window.fetch_with_request(&request)).await?;
        let resp: Response = resp_value.dyn_into()?;

        let json = JsFuture::from(
            resp.json()
                .map_err(|_| JsValue::from_str("Failed to parse response"))?,
        )
        .await;

        if !resp.ok() {
            // Error bodies carry a `{ "message": ... }` when the server produced them
            let message = json
                .ok()
                .and_then(|value| serde_wasm_bindgen::from_value::<ErrorBody>(value).ok())
                .map(|body| body.message)
                .unwrap_or_else(|| format!("HTTP error: {}", resp.status()));
            error!("{} {} failed: {}", method, path, message);
            return Err(JsValue::from_str(&message));
        }

        serde_wasm_bindgen::from_value(json?)
            .map_err(|e| JsValue::from_str(&format!("Deserialization error: {:?}", e)))
    }

    pub async fn get_trips(&self) -> Result<Vec<Trip>> {
        self.request("GET", "/data/trips.json", None).await
    }

    /// Cars open for booking, alphabetical.
    pub async fn get_company_cars(&self) -> Result<Vec<CompanyCar>> {
        let cars = self.request("GET", "/data/company_cars.json", None).await?;
        Ok(available_cars(cars))
    }

    pub async fn get_gallery(&self) -> Result<Vec<GalleryItem>> {
        self.request("GET", "/data/gallery.json", None).await
    }

    pub async fn get_website_images(&self) -> Result<Vec<WebsiteImage>> {
        let images: Vec<WebsiteImage> = self.request("GET", "/data/website_images.json", None).await?;
        Ok(images
            .into_iter()
            .filter(|image| image.is_active != Some(false))
            .collect())
    }

    pub async fn get_comments(&self) -> Result<Vec<Comment>> {
        let path = format!("/api/comments?limit={}", DEFAULT_COMMENTS_LIMIT);
        self.request("GET", &path, None).await
    }

    /// Validates locally first so the visitor keeps their input on rejection.
    pub async fn submit_comment(&self, input: NewComment) -> Result<Comment> {
        let input = input
            .validated()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let body = serde_json::to_string(&input)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))?;
        self.request("POST", "/api/comments", Some(body)).await
    }

    pub async fn submit_booking(&self, input: NewBooking) -> Result<Booking> {
        let input = input
            .validated()
            .map_err(|e| JsValue::from_str(&e.to_string()))?;
        let body = serde_json::to_string(&input)
            .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))?;
        self.request("POST", "/api/bookings", Some(body)).await
    }
}
