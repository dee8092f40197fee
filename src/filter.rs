use crate::models::{Business, BusinessQueryParams};

/// Case-insensitive equality between an optional record field and a filter value.
///
/// A record without the field never matches.
fn matches_text(field: Option<&str>, wanted: &str) -> bool {
    field.is_some_and(|value| value.to_lowercase() == wanted.to_lowercase())
}

/// Returns true if `business` satisfies every criterion in `params`.
///
/// Empty-string text filters impose no constraint.
pub fn matches(business: &Business, params: &BusinessQueryParams) -> bool {
    if let Some(neighborhood) = params.neighborhood.as_deref().filter(|s| !s.is_empty()) {
        if !matches_text(business.neighborhood.as_deref(), neighborhood) {
            return false;
        }
    }
    if let Some(category) = params.category.as_deref().filter(|s| !s.is_empty()) {
        if !matches_text(business.category.as_deref(), category) {
            return false;
        }
    }
    if let Some(min_score) = params.min_lead_score {
        // NaN bounds admit nothing
        if min_score.is_nan() || business.lead_score < min_score {
            return false;
        }
    }
    true
}

/// Narrows `businesses` to those matching `params`, preserving order.
pub fn filter_businesses<'a, I>(businesses: I, params: &BusinessQueryParams) -> Vec<Business>
where
    I: IntoIterator<Item = &'a Business>,
{
    businesses
        .into_iter()
        .filter(|b| matches(b, params))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn business(id: u64, neighborhood: Option<&str>, category: Option<&str>, score: f64) -> Business {
        Business {
            id,
            name: format!("Biz {}", id),
            neighborhood: neighborhood.map(str::to_string),
            category: category.map(str::to_string),
            website: None,
            google_maps_url: None,
            has_instagram: false,
            has_facebook: false,
            reviews_count: 0,
            avg_rating: 0.0,
            lead_score: score,
        }
    }

    fn fixtures() -> Vec<Business> {
        vec![
            business(1, Some("North"), Some("Cafe"), 40.0),
            business(2, Some("South"), Some("cafe"), 60.0),
            business(3, None, None, 80.0),
            business(4, Some("NORTH"), Some("Bakery"), 50.0),
        ]
    }

    fn ids(list: &[Business]) -> Vec<u64> {
        list.iter().map(|b| b.id).collect()
    }

    #[test]
    fn test_no_filters_returns_everything() {
        let all = fixtures();
        let result = filter_businesses(&all, &BusinessQueryParams::default());
        assert_eq!(ids(&result), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_neighborhood_case_insensitive() {
        let params = BusinessQueryParams {
            neighborhood: Some("north".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_businesses(&fixtures(), &params)), vec![1, 4]);
    }

    #[test]
    fn test_missing_field_never_matches() {
        let params = BusinessQueryParams {
            category: Some("cafe".to_string()),
            ..Default::default()
        };
        assert_eq!(ids(&filter_businesses(&fixtures(), &params)), vec![1, 2]);
    }

    #[test]
    fn test_min_score_inclusive() {
        let params = BusinessQueryParams {
            min_lead_score: Some(50.0),
            ..Default::default()
        };
        assert_eq!(ids(&filter_businesses(&fixtures(), &params)), vec![2, 3, 4]);
    }

    #[test]
    fn test_nan_min_score_matches_nothing() {
        let params = BusinessQueryParams {
            min_lead_score: Some(f64::NAN),
            ..Default::default()
        };
        assert!(filter_businesses(&fixtures(), &params).is_empty());
    }

    #[test]
    fn test_filters_combine_with_and() {
        let params = BusinessQueryParams {
            neighborhood: Some("North".to_string()),
            category: Some("CAFE".to_string()),
            min_lead_score: Some(10.0),
        };
        assert_eq!(ids(&filter_businesses(&fixtures(), &params)), vec![1]);
    }

    #[test]
    fn test_empty_text_filter_is_ignored() {
        let params = BusinessQueryParams {
            neighborhood: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(filter_businesses(&fixtures(), &params).len(), 4);
    }
}
