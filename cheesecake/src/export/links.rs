use chrono::NaiveDate;

use super::{PACKAGE_SUBJECT, encode_component, package_body};
use crate::cart::PackageCart;
use crate::contact;
use crate::content::{CarBookingRequest, CompanyCar};

const GMAIL_COMPOSE: &str = "https://mail.google.com/mail/?view=cm&fs=1";
const NOT_SPECIFIED: &str = "Not specified";
const NOT_AVAILABLE: &str = "N/A";

/// `mailto:` link for the package request. Opening it does nothing visible
/// when no mail client is configured.
pub fn mailto_url(cart: &PackageCart) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        contact::EMAIL,
        encode_component(PACKAGE_SUBJECT),
        encode_component(&package_body(cart))
    )
}

/// Gmail web compose URL with the same subject and body as [`mailto_url`].
pub fn gmail_compose_url(cart: &PackageCart) -> String {
    gmail_url(PACKAGE_SUBJECT, &package_body(cart))
}

pub fn whatsapp_url(cart: &PackageCart) -> String {
    let text = format!(
        "Hello {}, please prepare this package:\n\n{}",
        contact::COMPANY_NAME,
        package_body(cart)
    );
    wa_me(&text)
}

pub fn booking_message(car: &CompanyCar, request: &CarBookingRequest) -> String {
    format!(
        "Booking request from {}:\n\n\
         Vehicle: {}\n\
         Plate Number: {}\n\
         Client Name: {}\n\
         From: {}\n\
         To: {}\n\
         Passengers: {}\n\
         Cars needed: {}\n\n\
         Please confirm availability and pricing. Thank you!",
        contact::COMPANY_NAME,
        or_na(&car.name),
        or_na(&car.number_plate),
        request.client_name,
        format_date(request.from_date),
        format_date(request.to_date),
        request.passengers,
        request.cars
    )
}

pub fn booking_whatsapp_url(car: &CompanyCar, request: &CarBookingRequest) -> String {
    wa_me(&booking_message(car, request))
}

pub fn booking_gmail_url(car: &CompanyCar, request: &CarBookingRequest) -> String {
    let subject = format!("I WANT TO BOOK A CAR \"{}\"", car.number_plate);
    gmail_url(&subject, &booking_message(car, request))
}

fn gmail_url(subject: &str, body: &str) -> String {
    format!(
        "{}&to={}&su={}&body={}&tf=1",
        GMAIL_COMPOSE,
        encode_component(contact::EMAIL),
        encode_component(subject),
        encode_component(body)
    )
}

fn wa_me(text: &str) -> String {
    format!(
        "https://wa.me/{}?text={}",
        contact::WHATSAPP_NUMBER,
        encode_component(text)
    )
}

fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%B %-d, %Y").to_string())
        .unwrap_or_else(|| NOT_SPECIFIED.to_string())
}

fn or_na(value: &str) -> &str {
    if value.trim().is_empty() {
        NOT_AVAILABLE
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cart::PackageEntry;

    fn cart() -> PackageCart {
        let mut cart = PackageCart::new();
        cart.add(PackageEntry {
            destination_id: "mara".into(),
            location_name: "Mara".into(),
            client_name: None,
            days: "5".into(),
            hotel_type: "Luxury Tent/Hotel".into(),
            notes: String::new(),
        });
        cart
    }

    fn car() -> CompanyCar {
        CompanyCar {
            id: "c1".into(),
            name: "Toyota Land Cruiser".into(),
            number_plate: "KDA 123X".into(),
            color: None,
            description: None,
            features: None,
            images: None,
            is_available: Some(true),
            number_of_passengers: Some(7),
        }
    }

    #[test]
    fn test_mailto_url() {
        assert_eq!(
            mailto_url(&cart()),
            "mailto:cheesecakesafari@gmail.com\
             ?subject=PREPARE%20THIS%20PACKAGE%20DETAILS\
             &body=1.%20Mara%20-%205%20days%20-%20Luxury%20Tent%2FHotel%0A%0A"
        );
    }

    #[test]
    fn test_gmail_compose_url() {
        let url = gmail_compose_url(&cart());
        assert!(url.starts_with("https://mail.google.com/mail/?view=cm&fs=1&to=cheesecakesafari%40gmail.com"));
        assert!(url.contains("&su=PREPARE%20THIS%20PACKAGE%20DETAILS"));
        assert!(url.contains("&body=1.%20Mara%20-%205%20days"));
        assert!(url.ends_with("&tf=1"));
    }

    #[test]
    fn test_whatsapp_url() {
        let url = whatsapp_url(&cart());
        assert!(url.starts_with("https://wa.me/254710622549?text=Hello%20Cheesecake%20Safaris"));
        assert!(url.contains("1.%20Mara"));
    }

    #[test]
    fn test_booking_message() {
        let request = CarBookingRequest {
            client_name: "Baraka".into(),
            from_date: NaiveDate::from_ymd_opt(2026, 7, 1),
            to_date: None,
            passengers: 4,
            cars: 1,
        };
        let message = booking_message(&car(), &request);

        assert!(message.starts_with("Booking request from Cheesecake Safaris:\n\n"));
        assert!(message.contains("Vehicle: Toyota Land Cruiser\n"));
        assert!(message.contains("Plate Number: KDA 123X\n"));
        assert!(message.contains("From: July 1, 2026\n"));
        assert!(message.contains("To: Not specified\n"));
        assert!(message.contains("Cars needed: 1\n"));
    }

    #[test]
    fn test_booking_gmail_subject() {
        let url = booking_gmail_url(&car(), &CarBookingRequest::default());
        assert!(url.contains("&su=I%20WANT%20TO%20BOOK%20A%20CAR%20%22KDA%20123X%22"));
    }
}
