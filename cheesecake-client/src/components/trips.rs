use chrono::NaiveDate;
use cheesecake::content::MAX_TRAVELLERS;
use cheesecake::{NewBooking, Trip};
use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::browser;
use crate::hooks::use_notifications;

const HIGHLIGHTS: usize = 3;

#[component]
pub fn TripsSection() -> Element {
    let mut trips = use_signal(Vec::<Trip>::new);
    let mut booking = use_signal(|| None::<Trip>);

    use_effect(move || {
        spawn(async move {
            match ApiClient::new().get_trips().await {
                Ok(mut list) => {
                    // Featured trips first, otherwise file order
                    list.sort_by_key(|t| !t.is_featured.unwrap_or(false));
                    trips.set(list);
                }
                Err(e) => dioxus_logger::tracing::warn!("Could not load trips: {}", browser::describe(&e)),
            }
        });
    });

    if trips.read().is_empty() {
        return rsx! {};
    }

    rsx! {
        section { id: "trips", class: "py-12",
            div { class: "container mx-auto px-4",
                h2 { class: "text-3xl lg:text-4xl font-bold text-center mb-8", "Safari Packages" }
                div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-6",
                    for trip in trips.read().iter().cloned() {
                        TripCard {
                            key: "{trip.id}",
                            trip,
                            on_book: move |trip| booking.set(Some(trip)),
                        }
                    }
                }
            }
        }

        if let Some(trip) = booking() {
            BookTripDialog { trip, on_close: move |_| booking.set(None) }
        }
    }
}

#[component]
fn TripCard(trip: Trip, on_book: EventHandler<Trip>) -> Element {
    let highlights: Vec<String> = trip
        .detailed_info
        .as_ref()
        .map(|info| info.highlights(HIGHLIGHTS).into_iter().map(str::to_string).collect())
        .unwrap_or_default();
    let discount = trip.discount_percent();
    let blurb = trip
        .short_description
        .clone()
        .or_else(|| trip.description.clone())
        .unwrap_or_default();
    let selected = trip.clone();

    rsx! {
        div { class: "rounded-2xl overflow-hidden bg-white shadow-md card-hover",
            if let Some(image) = &trip.image_url {
                div { class: "relative h-48",
                    img { src: "{image}", alt: "{trip.title}", class: "w-full h-full object-cover" }
                    if let Some(badge) = &trip.badge {
                        span { class: "absolute top-3 left-3 bg-amber-500 text-white px-3 py-1 rounded-full text-xs font-bold",
                            "{badge}"
                        }
                    }
                }
            }
            div { class: "p-5",
                h3 { class: "text-xl font-bold mb-2", "{trip.title}" }
                p { class: "text-gray-600 text-sm mb-3", "{blurb}" }
                div { class: "flex flex-wrap gap-3 text-xs text-gray-500 mb-3",
                    if let Some(duration) = &trip.duration {
                        span { "{duration}" }
                    }
                    if let Some(group) = &trip.group_size {
                        span { "{group}" }
                    }
                    if let Some(rating) = trip.rating {
                        span { "★ {rating}" }
                    }
                }
                if !highlights.is_empty() {
                    ul { class: "list-disc list-inside text-sm text-gray-700 mb-3",
                        for highlight in highlights.iter() {
                            li { "{highlight}" }
                        }
                    }
                }
                div { class: "flex items-baseline gap-2",
                    if let Some(price) = trip.price {
                        span { class: "text-2xl font-bold text-emerald-600", "${price}" }
                    }
                    if let Some(original) = trip.original_price {
                        span { class: "text-sm text-gray-400 line-through", "${original}" }
                    }
                    if let Some(percent) = discount {
                        span { class: "text-xs font-semibold text-red-500", "-{percent}%" }
                    }
                }
                button {
                    class: "mt-4 w-full px-4 py-2 rounded-lg bg-amber-500 hover:bg-amber-600 text-white font-semibold",
                    onclick: move |_| on_book.call(selected.clone()),
                    "Book this safari"
                }
            }
        }
    }
}

/// Booking request for one trip, stored by the server with status pending.
#[component]
fn BookTripDialog(trip: Trip, on_close: EventHandler<()>) -> Element {
    let mut form = use_signal(|| NewBooking {
        trip_id: Some(trip.id.clone()),
        ..NewBooking::default()
    });
    let mut submitting = use_signal(|| false);
    let notif = use_notifications();
    let earliest = browser::today().format("%Y-%m-%d").to_string();

    let handle_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        if submitting() {
            return;
        }

        let input = form();
        if let Err(e) = input.clone().validated() {
            let mut notif = notif;
            notif.error(e.to_string());
            return;
        }

        submitting.set(true);
        let mut notif = notif;
        spawn(async move {
            match ApiClient::new().submit_booking(input).await {
                Ok(_) => {
                    notif.success("Booking request submitted. We'll contact you within 24 hours to confirm.");
                    on_close.call(());
                }
                Err(e) => notif.error(browser::describe(&e)),
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "fixed inset-0 bg-black/50 backdrop-blur-sm flex items-center justify-center z-50 p-4",
            onclick: move |_| on_close.call(()),
            div { class: "bg-white rounded-2xl w-full max-w-lg shadow-2xl max-h-[90vh] overflow-y-auto",
                onclick: move |evt| evt.stop_propagation(),
                form { class: "p-8", onsubmit: handle_submit,
                    h3 { class: "text-2xl font-bold mb-6", "Book {trip.title}" }

                    div { class: "mb-4",
                        label { class: "block font-medium mb-2", "Full name *" }
                        input {
                            class: "w-full p-3 border border-gray-300 rounded-lg",
                            required: true,
                            value: form.read().client_name.clone(),
                            oninput: move |evt| form.write().client_name = evt.value(),
                        }
                    }
                    div { class: "mb-4",
                        label { class: "block font-medium mb-2", "Email *" }
                        input {
                            r#type: "email",
                            class: "w-full p-3 border border-gray-300 rounded-lg",
                            required: true,
                            value: form.read().email.clone(),
                            oninput: move |evt| form.write().email = evt.value(),
                        }
                    }
                    div { class: "mb-4",
                        label { class: "block font-medium mb-2", "Phone number" }
                        input {
                            r#type: "tel",
                            class: "w-full p-3 border border-gray-300 rounded-lg",
                            oninput: move |evt| form.write().phone = Some(evt.value()),
                        }
                    }
                    div { class: "grid grid-cols-2 gap-4 mb-4",
                        div {
                            label { class: "block font-medium mb-2", "Travellers" }
                            input {
                                r#type: "number",
                                min: "1",
                                max: "{MAX_TRAVELLERS}",
                                class: "w-full p-3 border border-gray-300 rounded-lg",
                                value: form.read().number_of_people.to_string(),
                                oninput: move |evt| {
                                    if let Ok(n) = evt.value().parse::<u32>() {
                                        form.write().number_of_people = n;
                                    }
                                },
                            }
                        }
                        div {
                            label { class: "block font-medium mb-2", "Preferred date" }
                            input {
                                r#type: "date",
                                min: "{earliest}",
                                class: "w-full p-3 border border-gray-300 rounded-lg",
                                oninput: move |evt| {
                                    form.write().booking_date = NaiveDate::parse_from_str(&evt.value(), "%Y-%m-%d").ok();
                                },
                            }
                        }
                    }
                    div { class: "mb-6",
                        label { class: "block font-medium mb-2", "Special requests" }
                        textarea {
                            class: "w-full p-3 border border-gray-300 rounded-lg",
                            rows: "3",
                            oninput: move |evt| form.write().message = Some(evt.value()),
                        }
                    }

                    div { class: "flex gap-3",
                        button {
                            r#type: "button",
                            class: "flex-1 px-4 py-2 rounded-lg border border-gray-300",
                            onclick: move |_| on_close.call(()),
                            "Cancel"
                        }
                        button {
                            r#type: "submit",
                            class: "flex-1 px-4 py-2 rounded-lg bg-emerald-500 hover:bg-emerald-600 text-white font-semibold disabled:opacity-50",
                            disabled: submitting(),
                            if submitting() { "Submitting..." } else { "Submit booking" }
                        }
                    }
                    p { class: "text-xs text-gray-500 mt-4", "* Required fields" }
                }
            }
        }
    }
}
