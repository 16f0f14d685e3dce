mod api;
mod browser;
mod components;
mod hooks;
mod pages;

use cheesecake::PackageCart;
use dioxus::prelude::*;
use dioxus_logger::tracing::{Level, info};

use components::{Navigation, NotificationContainer, PackageButton};
use pages::Home;

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(Layout)]
        #[route("/")]
        Home {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        Navigation {}
        NotificationContainer {}
        PackageButton {}
        Outlet::<Route> {}
    }
}

#[component]
pub fn App() -> Element {
    // The package cart lives for the whole session and is owned here
    use_context_provider(|| Signal::new(PackageCart::new()));
    use_context_provider(|| Signal::new(hooks::NotificationState::default()));

    rsx! {
        document::Link { rel: "stylesheet", href: "https://cdn.tailwindcss.com" }
        document::Link {
            rel: "stylesheet",
            href: "https://fonts.googleapis.com/css2?family=Inter:wght@300;400;500;600;700&display=swap"
        }
        style { {include_str!("styles.css")} }

        div { class: "bg-gradient-to-br from-amber-50 to-yellow-50 min-h-screen text-gray-900",
            Router::<Route> {}
        }
    }
}

pub fn launch() {
    if let Err(e) = dioxus_logger::init(Level::INFO) {
        gloo_console::error!(format!("failed to init logger: {e}"));
    }
    info!("Starting Cheesecake Safaris client");
    dioxus::launch(App);
}
