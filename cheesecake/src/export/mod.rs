//! Turning the package cart (and fleet booking requests) into artifacts that
//! leave the site: links for mail and WhatsApp, and downloadable files.
//!
//! Every export is fire-and-forget. Nothing here confirms that a message was
//! sent or a file was saved, and nothing mutates the cart.

pub mod json;
pub mod links;
#[cfg(feature = "pdf")]
pub mod pdf;

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

use crate::cart::PackageCart;

pub use json::{booking_export, json_filename, package_export};
pub use links::{
    booking_gmail_url, booking_message, booking_whatsapp_url, gmail_compose_url, mailto_url,
    whatsapp_url,
};

pub const PACKAGE_SUBJECT: &str = "PREPARE THIS PACKAGE DETAILS";
pub const JSON_MIME: &str = "application/json";
pub const PDF_MIME: &str = "application/pdf";

/// A file ready to be handed to the browser as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: String,
    pub mime: &'static str,
    pub bytes: Vec<u8>,
}

/// Characters `encodeURIComponent` leaves alone, besides alphanumerics.
const COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

pub fn encode_component(value: &str) -> String {
    utf8_percent_encode(value, COMPONENT).to_string()
}

/// Plain-text enumeration of the cart shared by the mail and WhatsApp exports.
pub fn package_body(cart: &PackageCart) -> String {
    let mut body = String::new();
    for (i, entry) in cart.entries().iter().enumerate() {
        body.push_str(&format!(
            "{}. {} - {} days - {}\n",
            i + 1,
            entry.location_name,
            entry.days,
            entry.hotel_type
        ));
        if let Some(name) = &entry.client_name {
            body.push_str(&format!("   Client: {}\n", name));
        }
        if !entry.notes.trim().is_empty() {
            body.push_str(&format!("   Notes: {}\n", entry.notes));
        }
        body.push('\n');
    }
    body
}
