use std::time::Instant;

use crate::{
    catalog::Catalog,
    config::RecommendationPolicy,
    models::{Prediction, RatingVector},
    services::{recommender, scorer},
};

pub const PREDICTION_MESSAGE: &str =
    "Based on your interests, here are some career paths to consider";

/// Runs the scoring and recommendation pipeline for one set of answers
///
/// Deterministic: identical answers against an unchanged catalog always
/// produce an identical prediction.
pub fn predict(
    ratings: &RatingVector,
    catalog: &Catalog,
    policy: &RecommendationPolicy,
) -> Prediction {
    let start = Instant::now();

    let card = scorer::score(ratings);
    let top_features = recommender::top_features(&card.feature_scores, policy.top_feature_count);
    let recommended_courses = recommender::select_courses(&top_features, catalog, policy);

    tracing::debug!(
        answers = ratings.len(),
        recommendations = recommended_courses.len(),
        elapsed_us = start.elapsed().as_micros() as u64,
        "Prediction computed"
    );

    Prediction {
        top_features,
        recommended_courses,
        feature_scores: card.feature_scores,
        category_scores: card.category_scores,
        message: PREDICTION_MESSAGE.to_string(),
    }
}
