use crate::models::{features, Category, CategoryScore, FeatureScores, RatingVector, ScoreCard};

/// Maps quiz answers onto the feature taxonomy
///
/// Walks the taxonomy rather than the answers, so every feature gets an entry
/// even for short submissions (missing answers score 0) and extra answers are
/// ignored. Categories are ranked by mean rating, highest first; equal means
/// keep quiz order.
pub fn score(ratings: &RatingVector) -> ScoreCard {
    let feature_scores = FeatureScores::new(
        features()
            .iter()
            .map(|f| (f.name, ratings.rating(f.id)))
            .collect(),
    );

    let mut category_scores: Vec<CategoryScore> = Category::ALL
        .iter()
        .map(|&category| category_score(category, ratings))
        .collect();

    // sort_by is stable
    category_scores.sort_by(|a, b| b.average.total_cmp(&a.average));

    ScoreCard {
        feature_scores,
        category_scores,
    }
}

fn category_score(category: Category, ratings: &RatingVector) -> CategoryScore {
    let (total, count) = features()
        .iter()
        .filter(|f| f.category == category)
        .fold((0u32, 0usize), |(total, count), f| {
            (total + u32::from(ratings.rating(f.id)), count + 1)
        });

    let average = if count == 0 {
        0.0
    } else {
        f64::from(total) / count as f64
    };

    CategoryScore {
        category,
        average,
        total,
        count,
    }
}
