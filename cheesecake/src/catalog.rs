//! Compiled-in destination catalog.
//!
//! Destinations never change at runtime; everything here is a `'static` slice
//! so both the server and the wasm client can hand out references freely.

use serde::Serialize;

/// Number of destination cards shown per carousel page.
pub const PER_PAGE: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Destination {
    pub id: &'static str,
    pub name: &'static str,
    pub label: &'static str,
    pub image_url: &'static str,
}

/// Descriptive copy shown next to the package form for a destination.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DestinationSummary {
    pub title: &'static str,
    pub what: &'static str,
    pub season: &'static str,
    pub climate: &'static str,
    pub activities: &'static [&'static str],
    pub summary: &'static str,
}

const DESTINATIONS: &[Destination] = &[
    Destination {
        id: "mara",
        name: "Mara",
        label: "MARA PACKAGES",
        image_url: "/lovable-uploads/fe41aca9-8b2e-4411-a26b-12b03a306ed3.png",
    },
    Destination {
        id: "amboseli",
        name: "Amboseli",
        label: "AMBOSELI PACKAGES",
        image_url: "/lovable-uploads/027d28b9-e81e-4be9-8866-82e8a63418af.png",
    },
    Destination {
        id: "nairobi",
        name: "Nairobi",
        label: "NAIROBI PACKAGES",
        image_url: "/lovable-uploads/8f9ce083-ca06-4232-a0a8-c87e32bd8b00.png",
    },
    Destination {
        id: "mombasa",
        name: "Mombasa",
        label: "MOMBASA PACKAGES",
        image_url: "/lovable-uploads/42dc64d7-f1e3-4ae8-989f-96d8efe4c370.png",
    },
    Destination {
        id: "nakuru",
        name: "Nakuru",
        label: "NAKURU PACKAGES",
        image_url: "/lovable-uploads/20dad3c2-4a13-4536-8292-236db07aed93.png",
    },
    Destination {
        id: "northern-circuit",
        name: "Northern Circuit",
        label: "NORTHERN CIRCUIT PACKAGES",
        image_url: "/lovable-uploads/9f7fd907-e4ed-4f03-ae9c-a2ed6e890bac.png",
    },
    Destination {
        id: "southern-circuit",
        name: "Southern Circuit",
        label: "SOUTHERN CIRCUIT PACKAGES",
        image_url: "/lovable-uploads/ce893bd7-72de-4871-916e-99d3fc89d79a.png",
    },
    Destination {
        id: "kenyan-circuit",
        name: "Kenyan Circuit",
        label: "KENYAN CIRCUIT PACKAGES",
        image_url: "/lovable-uploads/7dd67f39-6c7b-4c56-96c5-561989884c89.png",
    },
    Destination {
        id: "kenya-tanzania-circuit",
        name: "Kenya/Tanzania Circuit",
        label: "KENYA/TANZANIA PACKAGES",
        image_url: "/lovable-uploads/46b3610c-6d97-48d5-aa82-248ee472032d.png",
    },
    Destination {
        id: "tsavo",
        name: "Tsavo",
        label: "TSAVO PACKAGES",
        image_url: "/lovable-uploads/080e0fae-217e-429d-b8aa-3b0a2cd6b7a2.png",
    },
];

const SUMMARIES: &[(&str, DestinationSummary)] = &[
    (
        "mara",
        DestinationSummary {
            title: "THE GREAT WILDEBEEST MIGRATION",
            what: "Millions of wildebeest, zebras, and gazelles thunder across open plains and crocodile-filled rivers in one of nature's greatest spectacles.",
            season: "July – October",
            climate: "Equatorial → Year-round summer (warm days, cool mornings)",
            activities: &[
                "Big Five game drives",
                "Hot air balloon safaris",
                "Maasai cultural visits",
            ],
            summary: "Masai Mara is Kenya's flagship safari destination, defined by endless savannahs and extraordinary wildlife density. It offers some of the best predator sightings in Africa and dramatic landscapes that change with the seasons.",
        },
    ),
    (
        "amboseli",
        DestinationSummary {
            title: "GIANT ELEPHANTS AGAINST MT. KILIMANJARO",
            what: "Close-range elephant encounters with Africa's highest mountain as a backdrop.",
            season: "June – October & January – February",
            climate: "Equatorial → Year-round summer",
            activities: &[
                "Wildlife photography",
                "Bird watching in swamps",
                "Cultural village visits",
            ],
            summary: "Amboseli is iconic for its vast open plains and powerful elephant herds. Its wetlands attract wildlife even during dry seasons, making sightings reliable year-round.",
        },
    ),
    (
        "nakuru",
        DestinationSummary {
            title: "FLAMINGO & RHINO SANCTUARY",
            what: "Mass flamingo gatherings paired with strong rhino conservation success.",
            season: "January – March & July – October",
            climate: "Equatorial → Year-round summer",
            activities: &["Rhino tracking", "Scenic viewpoints", "Bird photography"],
            summary: "Lake Nakuru is compact yet incredibly rewarding. It combines vibrant birdlife with reliable sightings of black and white rhinos.",
        },
    ),
    (
        "nairobi",
        DestinationSummary {
            title: "WILDLIFE WITH A CITY SKYLINE",
            what: "Wild rhinos and giraffes roaming with Nairobi's skyline behind them.",
            season: "Year-round",
            climate: "Equatorial → Year-round summer",
            activities: &[
                "City game drives",
                "Giraffe Centre & museums",
                "Dining & nightlife",
            ],
            summary: "Nairobi is the only capital city with a national park within its borders.",
        },
    ),
];

/// Season shown when a destination has no summary copy.
pub const DEFAULT_SEASON: &str = "Year-round";

pub fn list() -> &'static [Destination] {
    DESTINATIONS
}

pub fn by_id(id: &str) -> Option<&'static Destination> {
    DESTINATIONS.iter().find(|d| d.id == id)
}

pub fn summary(id: &str) -> Option<&'static DestinationSummary> {
    SUMMARIES
        .iter()
        .find(|(key, _)| *key == id)
        .map(|(_, summary)| summary)
}

impl Destination {
    /// Dialog heading: the summary title when one exists, otherwise the label.
    pub fn title(&self) -> &'static str {
        summary(self.id).map(|s| s.title).unwrap_or(self.label)
    }

    pub fn best_season(&self) -> &'static str {
        summary(self.id).map(|s| s.season).unwrap_or(DEFAULT_SEASON)
    }
}

/// Destinations visible on the carousel page starting at `start`.
pub fn page(start: usize, per_page: usize) -> &'static [Destination] {
    let start = start.min(DESTINATIONS.len());
    let end = (start + per_page).min(DESTINATIONS.len());
    &DESTINATIONS[start..end]
}

pub fn page_count(per_page: usize) -> usize {
    if per_page == 0 {
        return 0;
    }
    DESTINATIONS.len().div_ceil(per_page)
}

/// Start of the next page, wrapping back to the first page at the end.
pub fn next_page_start(start: usize, per_page: usize) -> usize {
    if start + per_page >= DESTINATIONS.len() {
        0
    } else {
        start + per_page
    }
}

/// Start of the previous page, wrapping to the last full page at the front.
pub fn prev_page_start(start: usize, per_page: usize) -> usize {
    if start < per_page {
        DESTINATIONS.len().saturating_sub(per_page)
    } else {
        start - per_page
    }
}
