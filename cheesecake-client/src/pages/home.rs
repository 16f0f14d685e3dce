use cheesecake::{GalleryItem, WebsiteImage, contact};
use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::browser;
use crate::components::{CommentsSection, FleetSection, LocationsSection, TripsSection};

const HERO_CATEGORY: &str = "hero";
const FALLBACK_HERO: &str = "/lovable-uploads/hero-safari.jpg";

#[component]
pub fn Home() -> Element {
    let mut hero = use_signal(|| FALLBACK_HERO.to_string());
    let mut gallery = use_signal(Vec::<GalleryItem>::new);

    use_effect(move || {
        spawn(async move {
            let client = ApiClient::new();

            if let Ok(images) = client.get_website_images().await {
                if let Some(image) = images
                    .into_iter()
                    .find(|i: &WebsiteImage| i.category.as_deref() == Some(HERO_CATEGORY))
                {
                    hero.set(image.image_url);
                }
            }

            match client.get_gallery().await {
                Ok(items) => gallery.set(items),
                Err(e) => dioxus_logger::tracing::warn!("Could not load gallery: {}", browser::describe(&e)),
            }
        });
    });

    let company = contact::COMPANY_NAME;

    rsx! {
        main { class: "relative",
            section {
                class: "relative h-[70vh] bg-cover bg-center flex items-center",
                style: "background-image: url('{hero}');",
                div { class: "absolute inset-0 bg-black/40" }
                div { class: "container mx-auto px-6 relative z-10 text-white max-w-4xl",
                    h1 { class: "text-4xl md:text-6xl font-bold mb-4 leading-tight", "{company}" }
                    p { class: "text-lg md:text-xl mb-8 text-gray-100",
                        "Tailor-made safaris across Kenya and Tanzania. Pick your destinations, "
                        "tell us how long you want to stay and we will prepare the package."
                    }
                    a {
                        href: "#destinations",
                        class: "px-8 py-3 rounded-full bg-emerald-500 hover:bg-emerald-600 font-semibold shadow-lg",
                        "Build your package"
                    }
                }
            }

            LocationsSection {}
            TripsSection {}
            FleetSection {}

            if !gallery.read().is_empty() {
                section { id: "gallery", class: "py-12",
                    div { class: "container mx-auto px-4",
                        h2 { class: "text-3xl lg:text-4xl font-bold text-center mb-8", "Guest Gallery" }
                        div { class: "grid grid-cols-2 md:grid-cols-4 gap-4",
                            for item in gallery.read().iter().cloned() {
                                GalleryTile { key: "{item.id}", item }
                            }
                        }
                    }
                }
            }

            CommentsSection {}
        }
    }
}

#[component]
fn GalleryTile(item: GalleryItem) -> Element {
    let cover = item.images.first().cloned().unwrap_or_default();

    rsx! {
        figure { class: "rounded-xl overflow-hidden bg-white shadow",
            img { src: "{cover}", alt: "{item.description}", class: "w-full h-40 object-cover" }
            figcaption { class: "p-3 text-sm",
                div { class: "font-semibold", "{item.location}" }
                div { class: "text-gray-500", "{item.client_name}" }
            }
        }
    }
}
