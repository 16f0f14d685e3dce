use cheesecake::contact;
use dioxus::prelude::*;

const SECTIONS: &[(&str, &str)] = &[
    ("#destinations", "Destinations"),
    ("#trips", "Trips"),
    ("#fleet", "Fleet"),
    ("#reviews", "Reviews"),
];

#[component]
pub fn Navigation() -> Element {
    let mut mobile_open = use_signal(|| false);
    let company = contact::COMPANY_NAME;
    let phone = contact::PHONE_DISPLAY;

    rsx! {
        nav { class: "backdrop-blur-md bg-white/80 border-b border-amber-200 sticky top-0 z-40",
            div { class: "container mx-auto px-6 py-4",
                div { class: "flex justify-between items-center",
                    a { href: "#", class: "flex items-center space-x-3",
                        img { src: "/logo.png", alt: company, class: "w-10 h-10 rounded-full" }
                        span { class: "text-2xl font-bold text-amber-700", "{company}" }
                    }

                    div { class: "hidden md:flex items-center space-x-8",
                        for (href, label) in SECTIONS.iter() {
                            a { href: "{href}", class: "text-gray-700 hover:text-amber-600 font-medium transition-colors",
                                "{label}"
                            }
                        }
                        a {
                            href: "tel:{phone}",
                            class: "px-4 py-2 bg-emerald-500 hover:bg-emerald-600 text-white rounded-full font-medium",
                            "{phone}"
                        }
                    }

                    button {
                        class: "md:hidden p-2 text-gray-700",
                        onclick: move |_| mobile_open.toggle(),
                        "☰"
                    }
                }

                if mobile_open() {
                    div { class: "md:hidden mt-4 flex flex-col space-y-3",
                        for (href, label) in SECTIONS.iter() {
                            a {
                                href: "{href}",
                                class: "text-gray-700 hover:text-amber-600",
                                onclick: move |_| mobile_open.set(false),
                                "{label}"
                            }
                        }
                    }
                }
            }
        }
    }
}
