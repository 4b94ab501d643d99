//! # Listing Catalog
//!
//! The static data layer of the application: classified-ad listings and
//! the selectors the screens pull from. Everything is backed by the
//! hardcoded dataset in [`mock`]; data flows one way from here into the
//! presentational components.

pub mod listing;
pub mod mock;

pub use listing::{Category, Listing, ListingId, Price};

/// In-memory listing catalog with the selectors the screens use.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    listings: Vec<Listing>,
}

impl Catalog {
    /// Builds the catalog from the hardcoded dataset.
    pub fn mock() -> Self {
        Self {
            listings: mock::mock_listings(),
        }
    }

    pub fn all(&self) -> &[Listing] {
        &self.listings
    }

    pub fn get(&self, id: ListingId) -> Option<&Listing> {
        self.listings.iter().find(|listing| listing.id == id)
    }

    /// Featured listings for the VIP carousel, in dataset order.
    pub fn vip(&self) -> impl Iterator<Item = &Listing> {
        self.listings.iter().filter(|listing| listing.vip)
    }

    /// Regular feed below the VIP carousel.
    pub fn feed(&self) -> impl Iterator<Item = &Listing> {
        self.listings.iter().filter(|listing| !listing.vip)
    }

    /// Rail source for the detail screen: other listings in the same
    /// category, the listing itself excluded.
    pub fn similar_to(&self, id: ListingId) -> Vec<&Listing> {
        let Some(reference) = self.get(id) else {
            return Vec::new();
        };
        self.listings
            .iter()
            .filter(|listing| listing.id != id && listing.category == reference.category)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.listings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listings.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn similar_listings_share_category_and_exclude_self() {
        let catalog = Catalog::mock();
        let reference = catalog.all()[0].clone();
        let similar = catalog.similar_to(reference.id);
        assert!(similar.iter().all(|listing| {
            listing.id != reference.id && listing.category == reference.category
        }));
    }

    #[test]
    fn similar_to_unknown_id_is_empty() {
        let catalog = Catalog::mock();
        assert!(catalog.similar_to(ListingId(9999)).is_empty());
    }

    #[test]
    fn vip_and_feed_partition_the_catalog() {
        let catalog = Catalog::mock();
        assert_eq!(catalog.vip().count() + catalog.feed().count(), catalog.len());
        assert!(catalog.vip().count() >= 1);
    }
}
