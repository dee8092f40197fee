use crate::models::{Business, BusinessCreate, BusinessUpdate};

/// In-memory collection of businesses and the id allocator.
///
/// Not synchronised: callers that share a store across tasks wrap it in a lock
/// (see `AppState`). Lookups are linear scans in insertion order.
#[derive(Debug)]
pub struct BusinessStore {
    businesses: Vec<Business>,
    next_id: u64,
}

impl Default for BusinessStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BusinessStore {
    pub fn new() -> Self {
        Self {
            businesses: Vec::new(),
            next_id: 1,
        }
    }

    /// All businesses in insertion order.
    pub fn list(&self) -> &[Business] {
        &self.businesses
    }

    pub fn is_empty(&self) -> bool {
        self.businesses.is_empty()
    }

    pub fn get(&self, id: u64) -> Option<&Business> {
        self.businesses.iter().find(|b| b.id == id)
    }

    fn get_mut(&mut self, id: u64) -> Option<&mut Business> {
        self.businesses.iter_mut().find(|b| b.id == id)
    }

    /// Appends a new business with the next id and a zero score.
    ///
    /// Scoring is the caller's job.
    pub fn create(&mut self, data: BusinessCreate) -> &mut Business {
        let id = self.next_id;
        self.next_id += 1;

        self.businesses.push(Business {
            id,
            name: data.name,
            neighborhood: data.neighborhood,
            category: data.category,
            website: data.website,
            google_maps_url: data.google_maps_url,
            has_instagram: data.has_instagram,
            has_facebook: data.has_facebook,
            reviews_count: data.reviews_count,
            avg_rating: data.avg_rating,
            lead_score: 0.0,
        });

        let last = self.businesses.len() - 1;
        &mut self.businesses[last]
    }

    /// Merges the supplied fields into an existing business.
    ///
    /// Returns `None` if no business has this id.
    pub fn update(&mut self, id: u64, data: BusinessUpdate) -> Option<&mut Business> {
        let business = self.get_mut(id)?;
        data.apply_to(business);
        Some(business)
    }

    /// Removes a business permanently. Returns false if it did not exist.
    pub fn delete(&mut self, id: u64) -> bool {
        match self.businesses.iter().position(|b| b.id == id) {
            Some(index) => {
                self.businesses.remove(index);
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_start_at_one_and_increase() {
        let mut store = BusinessStore::new();
        let first = store.create(BusinessCreate::named("A")).id;
        let second = store.create(BusinessCreate::named("B")).id;
        assert_eq!(first, 1);
        assert_eq!(second, 2);
    }

    #[test]
    fn test_ids_not_reused_after_delete() {
        let mut store = BusinessStore::new();
        let id = store.create(BusinessCreate::named("A")).id;
        assert!(store.delete(id));
        let next = store.create(BusinessCreate::named("B")).id;
        assert_eq!(next, 2);
    }

    #[test]
    fn test_create_starts_unscored() {
        let mut store = BusinessStore::new();
        let mut payload = BusinessCreate::named("A");
        payload.has_instagram = true;
        assert_eq!(store.create(payload).lead_score, 0.0);
    }

    #[test]
    fn test_list_preserves_insertion_order() {
        let mut store = BusinessStore::new();
        for name in ["C", "A", "B"] {
            store.create(BusinessCreate::named(name));
        }
        let names: Vec<&str> = store.list().iter().map(|b| b.name.as_str()).collect();
        assert_eq!(names, vec!["C", "A", "B"]);
    }

    #[test]
    fn test_get_missing_is_none() {
        let store = BusinessStore::new();
        assert!(store.get(1).is_none());
    }

    #[test]
    fn test_update_missing_is_none() {
        let mut store = BusinessStore::new();
        assert!(store.update(3, BusinessUpdate::default()).is_none());
    }

    #[test]
    fn test_partial_update() {
        let mut store = BusinessStore::new();
        let mut payload = BusinessCreate::named("Old");
        payload.category = Some("Cafe".to_string());
        let id = store.create(payload).id;

        let update = BusinessUpdate {
            name: Some("New".to_string()),
            ..Default::default()
        };
        let updated = store.update(id, update).unwrap();
        assert_eq!(updated.name, "New");
        assert_eq!(updated.category.as_deref(), Some("Cafe"));
    }

    #[test]
    fn test_delete_twice() {
        let mut store = BusinessStore::new();
        let id = store.create(BusinessCreate::named("A")).id;
        assert!(store.delete(id));
        assert!(!store.delete(id));
        assert!(store.is_empty());
    }
}
