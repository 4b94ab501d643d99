//! Listing record and its display-oriented value types.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Canonical listing identifier.
///
/// Ids are trimmed and unique across the catalog; the dataset sanity
/// test in [`super::mock`] enforces both.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListingId(pub u32);

impl fmt::Display for ListingId {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "#{:06}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Category {
    Electronics,
    Furniture,
    Vehicles,
    Sports,
    Books,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            Category::Electronics => "Electronics",
            Category::Furniture => "Furniture",
            Category::Vehicles => "Vehicles",
            Category::Sports => "Sports",
            Category::Books => "Books",
        };
        write!(f, "{name}")
    }
}

/// Listing price in cents, formatted for display as euros.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    pub cents: u64,
}

impl Price {
    pub fn from_euros(euros: u64) -> Self {
        Self {
            cents: euros * 100,
        }
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{},{:02} €", self.cents / 100, self.cents % 100)
    }
}

/// A single marketplace ad record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Listing {
    pub id: ListingId,
    pub title: String,
    pub price: Price,
    pub location: String,
    pub description: String,
    pub seller: String,
    pub posted_at: DateTime<Local>,
    /// Ordered image set, fixed for the lifetime of the screen. Paths
    /// are relative to the configured assets directory.
    pub images: Vec<String>,
    pub vip: bool,
    pub category: Category,
}

impl Listing {
    /// Human-readable age of the listing for the card footer.
    pub fn posted_ago(&self) -> String {
        let elapsed = Local::now().signed_duration_since(self.posted_at);
        if elapsed.num_days() >= 1 {
            format!("{} days ago", elapsed.num_days())
        } else if elapsed.num_hours() >= 1 {
            format!("{} hours ago", elapsed.num_hours())
        } else {
            "just now".to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn price_formats_euros_and_cents() {
        assert_eq!(Price { cents: 123_450 }.to_string(), "1234,50 €");
        assert_eq!(Price::from_euros(80).to_string(), "80,00 €");
    }

    #[test]
    fn posted_ago_prefers_the_largest_unit() {
        let mut listing = super::super::mock::mock_listings().remove(0);
        listing.posted_at = Local::now() - Duration::days(3);
        assert_eq!(listing.posted_ago(), "3 days ago");
        listing.posted_at = Local::now() - Duration::hours(5);
        assert_eq!(listing.posted_ago(), "5 hours ago");
        listing.posted_at = Local::now();
        assert_eq!(listing.posted_ago(), "just now");
    }
}
