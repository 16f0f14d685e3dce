use cheesecake::catalog::{self, Destination, PER_PAGE};
use cheesecake::{EntryForm, HotelType};
use dioxus::prelude::*;

use crate::hooks::{use_cart, use_notifications};

/// Destination carousel. Clicking a card opens its package form.
#[component]
pub fn LocationsSection() -> Element {
    let mut start = use_signal(|| 0usize);
    let mut selected = use_signal(|| None::<Destination>);

    let visible = catalog::page(start(), PER_PAGE);
    let page_number = start() / PER_PAGE + 1;
    let page_count = catalog::page_count(PER_PAGE);

    rsx! {
        section { id: "destinations", class: "py-12",
            div { class: "container mx-auto px-4",
                div { class: "text-center mb-8",
                    h2 { class: "text-3xl lg:text-4xl font-bold mb-4", "Popular Places to visit" }
                    p { class: "text-xl text-gray-600 max-w-2xl mx-auto",
                        "Choose your dream destination and build your own safari package"
                    }
                }

                div { class: "flex justify-center items-center gap-4 mb-8",
                    button {
                        class: "w-10 h-10 rounded-full border border-amber-300 bg-white/80",
                        onclick: move |_| start.set(catalog::prev_page_start(start(), PER_PAGE)),
                        "‹"
                    }
                    span { class: "text-sm text-gray-500", "{page_number} of {page_count}" }
                    button {
                        class: "w-10 h-10 rounded-full border border-amber-300 bg-white/80",
                        onclick: move |_| start.set(catalog::next_page_start(start(), PER_PAGE)),
                        "›"
                    }
                }

                div { class: "grid grid-cols-2 sm:grid-cols-4 lg:grid-cols-8 gap-4 mb-6",
                    for destination in visible.iter().copied() {
                        DestinationCard {
                            key: "{destination.id}",
                            destination,
                            on_select: move |d| selected.set(Some(d)),
                        }
                    }
                }
            }
        }

        if let Some(destination) = selected() {
            DestinationDialog {
                destination,
                on_close: move |_| selected.set(None),
            }
        }
    }
}

#[component]
fn DestinationCard(destination: Destination, on_select: EventHandler<Destination>) -> Element {
    rsx! {
        div {
            role: "button",
            tabindex: "0",
            class: "group cursor-pointer rounded-xl overflow-hidden bg-amber-50/60 border border-amber-200/60 card-hover",
            onclick: move |_| on_select.call(destination),
            onkeydown: move |evt: KeyboardEvent| {
                if evt.key() == Key::Enter {
                    on_select.call(destination);
                }
            },
            div { class: "relative h-28 md:h-36 overflow-hidden",
                img {
                    src: destination.image_url,
                    alt: destination.name,
                    class: "w-full h-full object-cover group-hover:scale-105 transition-transform duration-300",
                }
                div { class: "absolute top-2 left-2 bg-amber-500/90 text-white px-2 py-1 rounded-full text-xs font-bold",
                    "{destination.name}"
                }
            }
            h3 { class: "p-2 text-center font-bold text-xs md:text-sm tracking-wide", "{destination.label}" }
        }
    }
}

/// Summary copy plus the form that adds the destination to the package.
#[component]
fn DestinationDialog(destination: Destination, on_close: EventHandler<()>) -> Element {
    let mut form = use_signal(EntryForm::default);
    let mut cart = use_cart();
    let mut notif = use_notifications();

    let summary = catalog::summary(destination.id);
    let title = destination.title();
    let season = destination.best_season();

    let handle_submit = move |evt: Event<FormData>| {
        evt.prevent_default();
        let entry = form().into_entry(&destination);
        cart.add(entry);
        notif.success(format!("{} added to your package", destination.name));
        on_close.call(());
    };

    rsx! {
        div { class: "fixed inset-0 bg-black/50 backdrop-blur-sm flex items-center justify-center z-50 p-4",
            onclick: move |_| on_close.call(()),
            div { class: "bg-white rounded-2xl w-full max-w-5xl shadow-2xl max-h-[90vh] overflow-y-auto",
                onclick: move |evt| evt.stop_propagation(),
                div { class: "p-8",
                    h3 { class: "text-2xl font-bold mb-1", "{destination.name} — Package Summary" }
                    p { class: "text-sm text-gray-500 mb-6", "Add notes and preferred options for this destination." }

                    div { class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
                        div {
                            img { src: destination.image_url, alt: destination.name, class: "w-full h-56 object-cover rounded-xl mb-4" }
                            h4 { class: "text-lg font-bold text-amber-700 mb-2", "{title}" }
                            p { class: "text-sm mb-2",
                                span { class: "font-semibold", "Best season: " }
                                "{season}"
                            }
                            if let Some(summary) = summary {
                                p { class: "text-sm text-gray-700 mb-2", "{summary.what}" }
                                p { class: "text-sm mb-2",
                                    span { class: "font-semibold", "Climate: " }
                                    "{summary.climate}"
                                }
                                ul { class: "list-disc list-inside text-sm text-gray-700 mb-2",
                                    for activity in summary.activities.iter() {
                                        li { "{activity}" }
                                    }
                                }
                                p { class: "text-sm text-gray-600", "{summary.summary}" }
                            }
                        }

                        form { onsubmit: handle_submit,
                            div { class: "mb-4",
                                label { class: "block font-medium mb-2", "Your name" }
                                input {
                                    class: "w-full p-3 border border-gray-300 rounded-lg",
                                    placeholder: "Optional",
                                    value: form.read().name.clone(),
                                    oninput: move |evt| form.write().name = evt.value(),
                                }
                            }
                            div { class: "mb-4",
                                label { class: "block font-medium mb-2", "Number of days" }
                                input {
                                    r#type: "number",
                                    min: "1",
                                    class: "w-full p-3 border border-gray-300 rounded-lg",
                                    value: form.read().days.clone(),
                                    oninput: move |evt| form.write().days = evt.value(),
                                }
                            }
                            div { class: "mb-4",
                                label { class: "block font-medium mb-2", "Accommodation" }
                                select {
                                    class: "w-full p-3 border border-gray-300 rounded-lg",
                                    value: form.read().hotel_type.clone(),
                                    onchange: move |evt| form.write().hotel_type = evt.value(),
                                    for hotel in HotelType::ALL {
                                        option { value: hotel.as_str(), {hotel.as_str()} }
                                    }
                                }
                            }
                            div { class: "mb-6",
                                label { class: "block font-medium mb-2", "Notes" }
                                textarea {
                                    class: "w-full p-3 border border-gray-300 rounded-lg",
                                    rows: "4",
                                    placeholder: "Anything we should know?",
                                    value: form.read().notes.clone(),
                                    oninput: move |evt| form.write().notes = evt.value(),
                                }
                            }
                            div { class: "flex gap-3 justify-end",
                                button {
                                    r#type: "button",
                                    class: "px-5 py-2 rounded-lg border border-gray-300",
                                    onclick: move |_| on_close.call(()),
                                    "Cancel"
                                }
                                button {
                                    r#type: "submit",
                                    class: "px-5 py-2 rounded-lg bg-emerald-500 hover:bg-emerald-600 text-white font-semibold",
                                    "Add to package"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
