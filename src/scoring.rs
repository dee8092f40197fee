//! Lead scoring.
//!
//! A fixed linear formula over the marketing-readiness signals of a business.
//! Only the upper bound is clamped: a negative rating can pull the score below
//! the base value.

use crate::models::Business;

pub const BASE_SCORE: f64 = 10.0;
pub const WEBSITE_POINTS: f64 = 15.0;
pub const INSTAGRAM_POINTS: f64 = 5.0;
pub const FACEBOOK_POINTS: f64 = 5.0;
pub const POINTS_PER_REVIEW: f64 = 0.2;
pub const MAX_REVIEW_POINTS: f64 = 20.0;
pub const POINTS_PER_RATING_STAR: f64 = 3.0;
pub const MAX_SCORE: f64 = 100.0;

/// Computes the lead score of a business from its current fields.
///
/// Pure and deterministic; `lead_score` itself is not an input.
pub fn calculate_lead_score(business: &Business) -> f64 {
    let mut score = BASE_SCORE;

    if business.website.is_some() {
        score += WEBSITE_POINTS;
    }
    if business.has_instagram {
        score += INSTAGRAM_POINTS;
    }
    if business.has_facebook {
        score += FACEBOOK_POINTS;
    }

    score += (business.reviews_count as f64 * POINTS_PER_REVIEW).min(MAX_REVIEW_POINTS);
    score += business.avg_rating * POINTS_PER_RATING_STAR;

    score.min(MAX_SCORE)
}

/// Recomputes and stores the score of `business`, returning the new value.
pub fn rescore(business: &mut Business) -> f64 {
    business.lead_score = calculate_lead_score(business);
    business.lead_score
}
