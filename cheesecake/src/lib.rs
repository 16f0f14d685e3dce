// Builder flow and shared records (wasm-compatible, always compiled)
pub mod cart;
pub mod catalog;
pub mod comments;
pub mod content;
pub mod error;
pub mod export;

pub use cart::{EntryForm, HotelType, PackageCart, PackageEntry};
pub use catalog::{Destination, DestinationSummary};
pub use comments::{Comment, GalleryItem, NewComment, NewGalleryItem};
pub use content::{
    Booking, CarBookingRequest, CompanyCar, DetailedInfo, NewBooking, Trip, WebsiteImage,
};
pub use error::{ExportError, StoreError, ValidationError};

// Database records (with native_db attributes, only when db feature is enabled)
#[cfg(feature = "db")]
pub mod models;

// Conditionally compile server modules based on features
#[cfg(feature = "api-server")]
pub mod backends;
#[cfg(feature = "api-server")]
pub mod config;
#[cfg(feature = "api-server")]
pub mod db;
#[cfg(feature = "api-server")]
pub mod handlers;
#[cfg(feature = "api-server")]
pub mod id_generator;
#[cfg(feature = "api-server")]
pub mod server;

// Application state for API server
#[cfg(feature = "api-server")]
#[derive(Clone)]
pub struct AppState {
    pub backend: std::sync::Arc<dyn backends::Backend>,
    pub config: std::sync::Arc<config::Config>,
}

/// Public contact details used by every export.
pub mod contact {
    pub const COMPANY_NAME: &str = "Cheesecake Safaris";
    pub const EMAIL: &str = "cheesecakesafari@gmail.com";
    /// International format without the leading `+`, as wa.me expects.
    pub const WHATSAPP_NUMBER: &str = "254710622549";
    pub const PHONE_DISPLAY: &str = "+254 710 622549";
}
