use chrono::NaiveDate;
use cheesecake::export::{booking_export, booking_gmail_url, booking_whatsapp_url};
use cheesecake::{CarBookingRequest, CompanyCar};
use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::browser;
use crate::hooks::{NotificationContext, use_notifications};

#[component]
pub fn FleetSection() -> Element {
    let mut cars = use_signal(Vec::<CompanyCar>::new);
    let mut booking = use_signal(|| None::<CompanyCar>);

    use_effect(move || {
        spawn(async move {
            match ApiClient::new().get_company_cars().await {
                Ok(list) => cars.set(list),
                Err(e) => dioxus_logger::tracing::warn!("Could not load fleet: {}", browser::describe(&e)),
            }
        });
    });

    if cars.read().is_empty() {
        return rsx! {};
    }

    rsx! {
        section { id: "fleet", class: "py-12 bg-amber-50/50",
            div { class: "container mx-auto px-4",
                h2 { class: "text-3xl lg:text-4xl font-bold text-center mb-8", "Our Fleet" }
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                    for car in cars.read().iter().cloned() {
                        CarCard {
                            key: "{car.id}",
                            car,
                            on_book: move |car| booking.set(Some(car)),
                        }
                    }
                }
            }
        }

        if let Some(car) = booking() {
            BookingDialog { car, on_close: move |_| booking.set(None) }
        }
    }
}

#[component]
fn CarCard(car: CompanyCar, on_book: EventHandler<CompanyCar>) -> Element {
    let image = car.images.as_ref().and_then(|images| images.first().cloned());
    let features = car.features.clone().unwrap_or_default();
    let selected = car.clone();

    rsx! {
        div { class: "rounded-2xl overflow-hidden bg-white shadow-md card-hover",
            if let Some(src) = image {
                img { src: "{src}", alt: "{car.name}", class: "w-full h-48 object-cover" }
            }
            div { class: "p-5",
                div { class: "flex justify-between items-center mb-2",
                    h3 { class: "text-xl font-bold", "{car.name}" }
                    span { class: "text-xs font-mono bg-gray-100 px-2 py-1 rounded", "{car.number_plate}" }
                }
                if let Some(passengers) = car.number_of_passengers {
                    p { class: "text-sm text-gray-500 mb-2", "Seats {passengers}" }
                }
                if let Some(description) = &car.description {
                    p { class: "text-sm text-gray-600 mb-3", "{description}" }
                }
                ul { class: "flex flex-wrap gap-2 mb-4",
                    for feature in features.iter() {
                        li { class: "text-xs bg-emerald-50 text-emerald-700 px-2 py-1 rounded", "{feature}" }
                    }
                }
                button {
                    class: "w-full px-4 py-2 rounded-lg bg-amber-500 hover:bg-amber-600 text-white font-semibold",
                    onclick: move |_| on_book.call(selected.clone()),
                    "Book this car"
                }
            }
        }
    }
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

/// Saves the booking file, then opens the messaging link.
fn send_booking(car: &CompanyCar, request: &CarBookingRequest, url: String, mut notif: NotificationContext) {
    match booking_export(car, request, browser::today()) {
        Ok(artifact) => {
            if let Err(e) = browser::download(&artifact) {
                dioxus_logger::tracing::warn!("Booking file download failed: {}", browser::describe(&e));
                notif.warning("The booking file could not be saved");
            }
        }
        Err(e) => dioxus_logger::tracing::warn!("Booking file could not be built: {}", e),
    }

    match browser::open_in_new_tab(&url) {
        Ok(()) => notif.success("Booking request prepared"),
        Err(e) => notif.error(format!("Could not open link: {}", browser::describe(&e))),
    }
}

#[component]
fn BookingDialog(car: CompanyCar, on_close: EventHandler<()>) -> Element {
    let mut request = use_signal(CarBookingRequest::default);
    let notif = use_notifications();

    let validated = move || -> Option<CarBookingRequest> {
        let current = request();
        if current.client_name.trim().is_empty() {
            let mut notif = notif;
            notif.error("Please enter your name");
            return None;
        }
        Some(current)
    };

    let whatsapp_car = car.clone();
    let whatsapp = move |_: MouseEvent| {
        if let Some(req) = validated() {
            let url = booking_whatsapp_url(&whatsapp_car, &req);
            send_booking(&whatsapp_car, &req, url, notif);
            on_close.call(());
        }
    };

    let gmail_car = car.clone();
    let gmail = move |_: MouseEvent| {
        if let Some(req) = validated() {
            let url = booking_gmail_url(&gmail_car, &req);
            send_booking(&gmail_car, &req, url, notif);
            on_close.call(());
        }
    };

    rsx! {
        div { class: "fixed inset-0 bg-black/50 backdrop-blur-sm flex items-center justify-center z-50 p-4",
            onclick: move |_| on_close.call(()),
            div { class: "bg-white rounded-2xl w-full max-w-lg shadow-2xl",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "p-8",
                    h3 { class: "text-2xl font-bold mb-1", "Book {car.name}" }
                    p { class: "text-sm text-gray-500 mb-6", "Plate {car.number_plate}" }

                    div { class: "mb-4",
                        label { class: "block font-medium mb-2", "Your name" }
                        input {
                            class: "w-full p-3 border border-gray-300 rounded-lg",
                            value: request.read().client_name.clone(),
                            oninput: move |evt| request.write().client_name = evt.value(),
                        }
                    }
                    div { class: "grid grid-cols-2 gap-4 mb-4",
                        div {
                            label { class: "block font-medium mb-2", "From" }
                            input {
                                r#type: "date",
                                class: "w-full p-3 border border-gray-300 rounded-lg",
                                oninput: move |evt| request.write().from_date = parse_date(&evt.value()),
                            }
                        }
                        div {
                            label { class: "block font-medium mb-2", "To" }
                            input {
                                r#type: "date",
                                class: "w-full p-3 border border-gray-300 rounded-lg",
                                oninput: move |evt| request.write().to_date = parse_date(&evt.value()),
                            }
                        }
                    }
                    div { class: "grid grid-cols-2 gap-4 mb-6",
                        div {
                            label { class: "block font-medium mb-2", "Passengers" }
                            input {
                                r#type: "number",
                                min: "1",
                                class: "w-full p-3 border border-gray-300 rounded-lg",
                                value: request.read().passengers.to_string(),
                                oninput: move |evt| {
                                    if let Ok(n) = evt.value().parse::<u32>() {
                                        request.write().passengers = n.max(1);
                                    }
                                },
                            }
                        }
                        div {
                            label { class: "block font-medium mb-2", "Cars needed" }
                            input {
                                r#type: "number",
                                min: "1",
                                class: "w-full p-3 border border-gray-300 rounded-lg",
                                value: request.read().cars.to_string(),
                                oninput: move |evt| {
                                    if let Ok(n) = evt.value().parse::<u32>() {
                                        request.write().cars = n.max(1);
                                    }
                                },
                            }
                        }
                    }

                    div { class: "flex gap-3",
                        button { class: "flex-1 px-4 py-2 rounded-lg bg-emerald-500 hover:bg-emerald-600 text-white", onclick: whatsapp, "WhatsApp" }
                        button { class: "flex-1 px-4 py-2 rounded-lg bg-red-500 hover:bg-red-600 text-white", onclick: gmail, "Gmail" }
                    }
                }
            }
        }
    }
}
