use cheesecake::export::pdf::{PdfOutcome, export_pdf};
use cheesecake::export::{ExportArtifact, gmail_compose_url, mailto_url, package_export, whatsapp_url};
use cheesecake::PackageCart;
use dioxus::prelude::*;
use dioxus_logger::tracing::{info, warn};
use wasm_bindgen::JsValue;

use crate::browser::{self, HttpLogo};
use crate::hooks::{NotificationContext, use_cart, use_notifications};

/// Floating "my package" button, present only while the cart has entries.
#[component]
pub fn PackageButton() -> Element {
    let cart = use_cart();
    let mut open = use_signal(|| false);

    if !cart.shows_export_affordance() {
        return rsx! {};
    }

    let count = cart.len();

    rsx! {
        button {
            class: "fixed bottom-6 right-6 z-40 flex items-center gap-2 px-5 py-3 rounded-full bg-amber-500 hover:bg-amber-600 text-white font-semibold shadow-xl",
            onclick: move |_| open.set(true),
            "My Package"
            span { class: "inline-flex items-center justify-center w-6 h-6 rounded-full bg-white text-amber-600 text-sm font-bold",
                "{count}"
            }
        }

        if open() {
            PackageDialog { on_close: move |_| open.set(false) }
        }
    }
}

fn report(result: Result<(), JsValue>, mut notif: NotificationContext, done: &str) {
    match result {
        Ok(()) => notif.success(done),
        Err(e) => notif.error(format!("Export failed: {}", browser::describe(&e))),
    }
}

fn download_json(cart: &PackageCart, notif: NotificationContext) {
    let result = package_export(cart, browser::today())
        .map_err(|e| JsValue::from_str(&e.to_string()))
        .and_then(|artifact| browser::download(&artifact));
    report(result, notif, "Package downloaded");
}

/// Toast for a saved PDF export. The JSON fallback reads like any other
/// download; only the log records that the PDF could not be built.
fn pdf_saved_message(outcome: &PdfOutcome) -> &'static str {
    match outcome {
        PdfOutcome::Pdf(_) => "PDF downloaded",
        PdfOutcome::FallbackJson(_) => "Package downloaded",
    }
}

fn deliver_pdf(outcome: PdfOutcome, notif: NotificationContext) {
    if matches!(outcome, PdfOutcome::FallbackJson(_)) {
        warn!("PDF unavailable, delivered the package as JSON");
    }
    let done = pdf_saved_message(&outcome);
    let artifact: ExportArtifact = outcome.into_artifact();
    report(browser::download(&artifact), notif, done);
}

#[component]
fn PackageDialog(on_close: EventHandler<()>) -> Element {
    let mut cart = use_cart();
    let notif = use_notifications();
    let mut generating = use_signal(|| false);

    let snapshot = cart.snapshot();
    if snapshot.is_empty() {
        return rsx! {};
    }

    let email = move |_: MouseEvent| {
        let url = mailto_url(&cart.snapshot());
        report(browser::navigate(&url), notif, "Opening your mail app");
    };

    let gmail = move |_: MouseEvent| {
        let url = gmail_compose_url(&cart.snapshot());
        report(browser::open_in_new_tab(&url), notif, "Opening Gmail");
    };

    let whatsapp = move |_: MouseEvent| {
        let url = whatsapp_url(&cart.snapshot());
        report(browser::open_in_new_tab(&url), notif, "Opening WhatsApp");
    };

    let json = move |_: MouseEvent| download_json(&cart.snapshot(), notif);

    let pdf = move |_: MouseEvent| {
        if generating() {
            return;
        }
        generating.set(true);
        let snapshot = cart.snapshot();
        spawn(async move {
            info!("Generating package PDF for {} entries", snapshot.len());
            match export_pdf(&snapshot, &HttpLogo::default(), browser::today()).await {
                Ok(outcome) => deliver_pdf(outcome, notif),
                Err(e) => {
                    warn!("Package export failed: {}", e);
                    let mut notif = notif;
                    notif.error(format!("Export failed: {}", e));
                }
            }
            generating.set(false);
        });
    };

    rsx! {
        div { class: "fixed inset-0 bg-black/50 backdrop-blur-sm flex items-center justify-center z-50 p-4",
            onclick: move |_| on_close.call(()),
            div { class: "bg-white rounded-2xl w-full max-w-2xl shadow-2xl max-h-[90vh] overflow-y-auto",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "p-8",
                    h3 { class: "text-2xl font-bold mb-6", "Your Package" }

                    ol { class: "space-y-3 mb-6",
                        for (number, entry) in snapshot.entries().iter().enumerate().map(|(i, e)| (i + 1, e)) {
                            li { key: "{number}", class: "p-4 rounded-lg bg-amber-50 border border-amber-200",
                                div { class: "font-semibold",
                                    "{number}. {entry.location_name} - {entry.days} days"
                                }
                                div { class: "text-sm text-gray-600", "{entry.hotel_type}" }
                                if let Some(client) = &entry.client_name {
                                    div { class: "text-sm text-gray-600", "Client: {client}" }
                                }
                                if !entry.notes.is_empty() {
                                    div { class: "text-sm text-gray-500 italic", "Notes: {entry.notes}" }
                                }
                            }
                        }
                    }

                    div { class: "grid grid-cols-2 sm:grid-cols-3 gap-3",
                        button { class: "px-4 py-2 rounded-lg bg-sky-500 hover:bg-sky-600 text-white", onclick: email, "Email" }
                        button { class: "px-4 py-2 rounded-lg bg-red-500 hover:bg-red-600 text-white", onclick: gmail, "Gmail" }
                        button { class: "px-4 py-2 rounded-lg bg-emerald-500 hover:bg-emerald-600 text-white", onclick: whatsapp, "WhatsApp" }
                        button { class: "px-4 py-2 rounded-lg bg-gray-700 hover:bg-gray-800 text-white", onclick: json, "Download JSON" }
                        button {
                            class: "px-4 py-2 rounded-lg bg-amber-500 hover:bg-amber-600 text-white disabled:opacity-50",
                            disabled: generating(),
                            onclick: pdf,
                            if generating() { "Generating..." } else { "Download PDF" }
                        }
                        button {
                            class: "px-4 py-2 rounded-lg border border-gray-300",
                            onclick: move |_| {
                                cart.clear();
                                on_close.call(());
                            },
                            "Clear"
                        }
                    }
                }
            }
        }
    }
}
