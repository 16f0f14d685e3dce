use std::path::PathBuf;

use cheesecake::content::available_cars;
use cheesecake::{Booking, Comment, CompanyCar, DetailedInfo, GalleryItem, Trip, WebsiteImage};

fn data_file(name: &str) -> String {
    let path: PathBuf = [env!("CARGO_MANIFEST_DIR"), "..", "public", "data", name]
        .iter()
        .collect();
    std::fs::read_to_string(&path).unwrap_or_else(|e| panic!("{}: {}", path.display(), e))
}

#[test]
fn test_trips_parse_with_every_detail_shape() {
    let trips: Vec<Trip> = serde_json::from_str(&data_file("trips.json")).unwrap();
    assert!(!trips.is_empty());

    let shapes: Vec<&str> = trips
        .iter()
        .filter_map(|t| t.detailed_info.as_ref())
        .map(|info| match info {
            DetailedInfo::List(_) => "list",
            DetailedInfo::KeyedText(_) => "keyed",
            DetailedInfo::PlainText(_) => "text",
        })
        .collect();
    assert_eq!(shapes, vec!["list", "keyed", "text"]);
}

#[test]
fn test_unavailable_cars_hidden() {
    let cars: Vec<CompanyCar> = serde_json::from_str(&data_file("company_cars.json")).unwrap();
    let total = cars.len();
    let shown = available_cars(cars);

    assert_eq!(shown.len(), total - 1);
    assert!(shown.windows(2).all(|w| w[0].name <= w[1].name));
}

#[test]
fn test_remaining_files_parse() {
    let gallery: Vec<GalleryItem> = serde_json::from_str(&data_file("gallery.json")).unwrap();
    let images: Vec<WebsiteImage> = serde_json::from_str(&data_file("website_images.json")).unwrap();
    let bookings: Vec<Booking> = serde_json::from_str(&data_file("bookings.json")).unwrap();
    let comments: Vec<Comment> = serde_json::from_str(&data_file("comments.json")).unwrap();

    assert!(gallery.iter().all(|g| g.images.len() <= cheesecake::comments::MAX_GALLERY_IMAGES));
    assert!(images.iter().any(|i| i.category.as_deref() == Some("hero")));
    assert!(bookings.is_empty());
    assert!(comments.iter().all(|c| c.rating.is_none_or(|r| (1..=5).contains(&r))));
}
