use serde::{Deserialize, Deserializer, Serialize};

// ============ Stored Entity ============

/// A local business tracked by the store, together with its derived lead score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Business {
    /// Store-assigned identifier. Starts at 1, never reused.
    pub id: u64,
    pub name: String,
    pub neighborhood: Option<String>,
    pub category: Option<String>,
    /// Absolute http(s) URL, as supplied by the client.
    pub website: Option<String>,
    pub google_maps_url: Option<String>,
    #[serde(default)]
    pub has_instagram: bool,
    #[serde(default)]
    pub has_facebook: bool,
    #[serde(default)]
    pub reviews_count: i64,
    #[serde(default)]
    pub avg_rating: f64,
    /// Output of the scoring function at the last create/update.
    #[serde(default)]
    pub lead_score: f64,
}

// ============ Request Payloads ============

/// Body of `POST /businesses`.
///
/// Every field except `name` falls back to its default when omitted.
/// `id` and `lead_score` are not part of the payload and are ignored if sent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusinessCreate {
    pub name: String,
    #[serde(default)]
    pub neighborhood: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub website: Option<String>,
    #[serde(default)]
    pub google_maps_url: Option<String>,
    #[serde(default)]
    pub has_instagram: bool,
    #[serde(default)]
    pub has_facebook: bool,
    #[serde(default)]
    pub reviews_count: i64,
    #[serde(default)]
    pub avg_rating: f64,
}

impl BusinessCreate {
    /// Minimal payload carrying only a name.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            neighborhood: None,
            category: None,
            website: None,
            google_maps_url: None,
            has_instagram: false,
            has_facebook: false,
            reviews_count: 0,
            avg_rating: 0.0,
        }
    }
}

/// Body of `PUT /businesses/{id}`.
///
/// Outer `None` means the field was not supplied and stays untouched.
/// For the nullable fields `Some(None)` means an explicit `null`, which clears
/// the stored value.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct BusinessUpdate {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "explicit_field")]
    pub neighborhood: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit_field")]
    pub category: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit_field")]
    pub website: Option<Option<String>>,
    #[serde(default, deserialize_with = "explicit_field")]
    pub google_maps_url: Option<Option<String>>,
    #[serde(default)]
    pub has_instagram: Option<bool>,
    #[serde(default)]
    pub has_facebook: Option<bool>,
    #[serde(default)]
    pub reviews_count: Option<i64>,
    #[serde(default)]
    pub avg_rating: Option<f64>,
}

/// Marks a present field as `Some`, so that `null` becomes `Some(None)`
/// while a missing field keeps the `#[serde(default)]` of `None`.
fn explicit_field<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl BusinessUpdate {
    /// Overwrites every field of `business` that this update supplies.
    ///
    /// `id` and `lead_score` are never touched here.
    pub fn apply_to(self, business: &mut Business) {
        if let Some(name) = self.name {
            business.name = name;
        }
        if let Some(neighborhood) = self.neighborhood {
            business.neighborhood = neighborhood;
        }
        if let Some(category) = self.category {
            business.category = category;
        }
        if let Some(website) = self.website {
            business.website = website;
        }
        if let Some(google_maps_url) = self.google_maps_url {
            business.google_maps_url = google_maps_url;
        }
        if let Some(has_instagram) = self.has_instagram {
            business.has_instagram = has_instagram;
        }
        if let Some(has_facebook) = self.has_facebook {
            business.has_facebook = has_facebook;
        }
        if let Some(reviews_count) = self.reviews_count {
            business.reviews_count = reviews_count;
        }
        if let Some(avg_rating) = self.avg_rating {
            business.avg_rating = avg_rating;
        }
    }
}

/// Query parameters accepted by `GET /businesses`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BusinessQueryParams {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub neighborhood: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min_lead_score: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_business() -> Business {
        Business {
            id: 7,
            name: "ATL Coffee Co.".to_string(),
            neighborhood: Some("Midtown".to_string()),
            category: Some("Cafe".to_string()),
            website: Some("http://atlcoffee.example".to_string()),
            google_maps_url: None,
            has_instagram: true,
            has_facebook: false,
            reviews_count: 12,
            avg_rating: 4.2,
            lead_score: 0.0,
        }
    }

    #[test]
    fn test_create_defaults() {
        let payload: BusinessCreate = serde_json::from_str(r#"{"name": "Solo"}"#).unwrap();
        assert_eq!(payload, BusinessCreate::named("Solo"));
    }

    #[test]
    fn test_create_requires_name() {
        let result = serde_json::from_str::<BusinessCreate>(r#"{"category": "Cafe"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_update_distinguishes_null_from_missing() {
        let update: BusinessUpdate =
            serde_json::from_str(r#"{"neighborhood": null, "has_facebook": true}"#).unwrap();
        assert_eq!(update.neighborhood, Some(None));
        assert_eq!(update.category, None);
        assert_eq!(update.has_facebook, Some(true));
    }

    #[test]
    fn test_apply_update_preserves_unspecified_fields() {
        let mut business = sample_business();
        let update: BusinessUpdate = serde_json::from_str(r#"{"name": "Renamed"}"#).unwrap();
        update.apply_to(&mut business);

        assert_eq!(business.name, "Renamed");
        assert_eq!(business.neighborhood.as_deref(), Some("Midtown"));
        assert_eq!(business.category.as_deref(), Some("Cafe"));
        assert_eq!(business.reviews_count, 12);
        assert_eq!(business.id, 7);
    }

    #[test]
    fn test_apply_update_clears_nullable_field() {
        let mut business = sample_business();
        let update: BusinessUpdate = serde_json::from_str(r#"{"website": null}"#).unwrap();
        update.apply_to(&mut business);
        assert_eq!(business.website, None);
    }

    #[test]
    fn test_empty_update() {
        let update: BusinessUpdate = serde_json::from_str("{}").unwrap();
        assert_eq!(update, BusinessUpdate::default());
    }
}
