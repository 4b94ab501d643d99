//! Hardcoded listing dataset.
//!
//! This is the entire data source of the application; there is no
//! network or database behind it.

use super::listing::{Category, Listing, ListingId, Price};
use chrono::{Duration, Local};

fn listing(
    id: u32,
    title: &str,
    euros: u64,
    location: &str,
    description: &str,
    seller: &str,
    days_ago: i64,
    images: &[&str],
    vip: bool,
    category: Category,
) -> Listing {
    Listing {
        id: ListingId(id),
        title: title.to_string(),
        price: Price::from_euros(euros),
        location: location.to_string(),
        description: description.to_string(),
        seller: seller.to_string(),
        posted_at: Local::now() - Duration::days(days_ago),
        images: images.iter().map(|path| path.to_string()).collect(),
        vip,
        category,
    }
}

pub fn mock_listings() -> Vec<Listing> {
    vec![
        listing(
            1001,
            "Trekking bike, 28\", recently serviced",
            240,
            "Freiburg",
            "Well maintained trekking bike, new chain and brake pads. \
             Pickup only.",
            "martha_k",
            2,
            &[
                "listings/bike_front.jpg",
                "listings/bike_side.jpg",
                "listings/bike_detail.jpg",
            ],
            true,
            Category::Sports,
        ),
        listing(
            1002,
            "Mid-century teak sideboard",
            480,
            "Basel",
            "Original 60s sideboard, minor scratches on the top plate, \
             otherwise excellent condition.",
            "vintage_moebel",
            5,
            &[
                "listings/sideboard_closed.jpg",
                "listings/sideboard_open.jpg",
            ],
            true,
            Category::Furniture,
        ),
        listing(
            1003,
            "ThinkPad T480, 16 GB RAM, new battery",
            320,
            "Freiburg",
            "Reliable developer machine, battery replaced last month, \
             Linux preinstalled. Charger included.",
            "second_bytes",
            1,
            &[
                "listings/thinkpad_open.jpg",
                "listings/thinkpad_closed.jpg",
                "listings/thinkpad_ports.jpg",
                "listings/thinkpad_keyboard.jpg",
            ],
            true,
            Category::Electronics,
        ),
        listing(
            1004,
            "Bookshelf, solid pine",
            35,
            "Offenburg",
            "Five shelves, 180x80 cm. Must be disassembled by the buyer.",
            "martha_k",
            3,
            &["listings/shelf.jpg"],
            false,
            Category::Furniture,
        ),
        listing(
            1005,
            "Bosch cordless drill with two batteries",
            95,
            "Basel",
            "Barely used, comes in the original case with charger and \
             bit set.",
            "werkstatt24",
            7,
            &["listings/drill_case.jpg", "listings/drill.jpg"],
            false,
            Category::Electronics,
        ),
        listing(
            1006,
            "Road bike frame, 56 cm, aluminium",
            120,
            "Colmar",
            "Frame only, no fork. Small paint chips, no dents or cracks.",
            "peloton_pete",
            10,
            &["listings/frame_full.jpg", "listings/frame_dropout.jpg"],
            false,
            Category::Sports,
        ),
        listing(
            1007,
            "Complete Tintin collection, hardcover",
            150,
            "Freiburg",
            "All 24 volumes, French edition, very good condition.",
            "page_turner",
            4,
            &["listings/tintin_stack.jpg", "listings/tintin_spines.jpg"],
            false,
            Category::Books,
        ),
        listing(
            1008,
            "Vespa PX 125, first registration 1999",
            2900,
            "Lörrach",
            "Runs great, recent inspection, some patina as expected for \
             the age. Two helmets included.",
            "rollerei",
            12,
            &[
                "listings/vespa_left.jpg",
                "listings/vespa_right.jpg",
                "listings/vespa_speedo.jpg",
            ],
            false,
            Category::Vehicles,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn ids_are_unique() {
        let listings = mock_listings();
        let ids: HashSet<_> = listings.iter().map(|listing| listing.id).collect();
        assert_eq!(ids.len(), listings.len());
    }

    // The source dataset this was modeled on contained an identifier
    // with a trailing space; canonical fields here must stay trimmed.
    #[test]
    fn text_fields_are_trimmed() {
        for listing in mock_listings() {
            assert_eq!(listing.title, listing.title.trim());
            assert_eq!(listing.seller, listing.seller.trim());
            assert_eq!(listing.location, listing.location.trim());
            for image in &listing.images {
                assert_eq!(image, image.trim());
            }
        }
    }

    #[test]
    fn every_listing_has_at_least_one_image() {
        assert!(mock_listings().iter().all(|listing| !listing.images.is_empty()));
    }
}
