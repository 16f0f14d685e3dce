use serde::{Deserialize, Serialize};

use crate::catalog::Destination;

pub const DEFAULT_DAYS: &str = "3";

/// Accommodation tiers offered by the per-destination form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HotelType {
    #[default]
    FiveStar,
    LuxuryTent,
    BudgetTent,
}

impl HotelType {
    pub const ALL: [HotelType; 3] = [
        HotelType::FiveStar,
        HotelType::LuxuryTent,
        HotelType::BudgetTent,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            HotelType::FiveStar => "5 star Accommodation",
            HotelType::LuxuryTent => "Luxury Tent/Hotel",
            HotelType::BudgetTent => "Budget Tent/Hotel",
        }
    }

    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|h| h.as_str() == label)
    }
}

/// One destination the visitor added to their package, with their preferences.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageEntry {
    pub destination_id: String,
    pub location_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub client_name: Option<String>,
    pub days: String,
    pub hotel_type: String,
    #[serde(default)]
    pub notes: String,
}

/// State of the per-destination form before it is submitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryForm {
    pub name: String,
    pub days: String,
    pub hotel_type: String,
    pub notes: String,
}

impl Default for EntryForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            days: DEFAULT_DAYS.to_string(),
            hotel_type: HotelType::default().as_str().to_string(),
            notes: String::new(),
        }
    }
}

impl EntryForm {
    pub fn into_entry(self, destination: &Destination) -> PackageEntry {
        let name = self.name.trim();
        PackageEntry {
            destination_id: destination.id.to_string(),
            location_name: destination.name.to_string(),
            client_name: (!name.is_empty()).then(|| name.to_string()),
            days: self.days,
            hotel_type: self.hotel_type,
            notes: self.notes,
        }
    }
}

/// The visitor's in-memory package, in the order destinations were added.
///
/// Entries are never deduplicated and there is no per-entry removal: the only
/// way to drop an entry is [`PackageCart::clear`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PackageCart {
    entries: Vec<PackageEntry>,
}

impl PackageCart {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, entry: PackageEntry) {
        tracing::debug!(
            "Adding {} ({} days) to package",
            entry.destination_id,
            entry.days
        );
        self.entries.push(entry);
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn entries(&self) -> &[PackageEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the floating export button should be rendered.
    pub fn shows_export_affordance(&self) -> bool {
        !self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn entry(id: &str, days: &str) -> PackageEntry {
        let destination = catalog::by_id(id).unwrap();
        EntryForm {
            days: days.to_string(),
            ..EntryForm::default()
        }
        .into_entry(destination)
    }

    #[test]
    fn test_add_preserves_order_and_duplicates() {
        let mut cart = PackageCart::new();
        cart.add(entry("mara", "5"));
        cart.add(entry("tsavo", "2"));
        cart.add(entry("mara", "5"));

        assert_eq!(cart.len(), 3);
        let ids: Vec<&str> = cart
            .entries()
            .iter()
            .map(|e| e.destination_id.as_str())
            .collect();
        assert_eq!(ids, vec!["mara", "tsavo", "mara"]);
    }

    #[test]
    fn test_clear_empties_cart() {
        let mut cart = PackageCart::new();
        for _ in 0..25 {
            cart.add(entry("nakuru", "1"));
        }
        cart.clear();
        assert_eq!(cart.len(), 0);
        assert!(cart.is_empty());

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_export_affordance_boundary() {
        let mut cart = PackageCart::new();
        assert!(!cart.shows_export_affordance());
        cart.add(entry("amboseli", "4"));
        assert!(cart.shows_export_affordance());
        cart.clear();
        assert!(!cart.shows_export_affordance());
    }

    #[test]
    fn test_form_defaults_and_blank_name() {
        let form = EntryForm::default();
        assert_eq!(form.days, "3");
        assert_eq!(form.hotel_type, "5 star Accommodation");

        let entry = EntryForm {
            name: "   ".to_string(),
            ..form
        }
        .into_entry(catalog::by_id("mara").unwrap());
        assert_eq!(entry.client_name, None);
        assert_eq!(entry.location_name, "Mara");
    }

    #[test]
    fn test_hotel_type_labels() {
        for hotel in HotelType::ALL {
            assert_eq!(HotelType::from_label(hotel.as_str()), Some(hotel));
        }
        assert_eq!(HotelType::from_label("Treehouse"), None);
    }
}
