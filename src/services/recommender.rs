use crate::{
    catalog::Catalog,
    config::RecommendationPolicy,
    models::{FeatureScores, Recommendation},
};

/// Highest rated features, best first
///
/// Equal scores keep taxonomy order, not alphabetical order.
pub fn top_features(feature_scores: &FeatureScores, limit: usize) -> Vec<(&'static str, u8)> {
    let mut ranked: Vec<(&'static str, u8)> = feature_scores.iter().copied().collect();
    // sort_by is stable
    ranked.sort_by(|a, b| b.1.cmp(&a.1));
    ranked.truncate(limit);
    ranked
}

/// Recommends courses for the top features of a score card
pub fn recommend(
    feature_scores: &FeatureScores,
    catalog: &Catalog,
    policy: &RecommendationPolicy,
) -> Vec<Recommendation> {
    let top = top_features(feature_scores, policy.top_feature_count);
    select_courses(&top, catalog, policy)
}

/// Matches each high-interest feature against the catalog by keyword
///
/// A feature contributes a recommendation only when it clears the threshold
/// and at least one course mentions it. Matches keep catalog order and are
/// capped per feature. When no feature contributes anything, a single
/// general recommendation with the head of the catalog is returned, so the
/// result is never empty.
pub fn select_courses(
    top: &[(&'static str, u8)],
    catalog: &Catalog,
    policy: &RecommendationPolicy,
) -> Vec<Recommendation> {
    let mut recommendations = Vec::new();

    for &(feature, score) in top {
        if score < policy.high_interest_threshold {
            continue;
        }

        let courses: Vec<_> = catalog
            .matching(feature)
            .take(policy.courses_per_feature)
            .cloned()
            .collect();

        if courses.is_empty() {
            tracing::debug!(feature, score, "High-interest feature matched no courses");
            continue;
        }

        tracing::debug!(feature, score, matched = courses.len(), "Matched courses for feature");

        recommendations.push(Recommendation {
            feature: feature.to_string(),
            score,
            courses,
        });
    }

    if recommendations.is_empty() {
        tracing::debug!(
            fallback_courses = policy.fallback_course_count,
            "No feature-specific matches, using general recommendation"
        );

        recommendations.push(Recommendation {
            feature: RecommendationPolicy::FALLBACK_FEATURE.to_string(),
            score: RecommendationPolicy::FALLBACK_SCORE,
            courses: catalog
                .courses()
                .iter()
                .take(policy.fallback_course_count)
                .cloned()
                .collect(),
        });
    }

    recommendations
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::CourseRecord;

    fn catalog() -> Catalog {
        Catalog::from_records(vec![
            CourseRecord::new("B.Sc Computer Science", "Algorithms and coding.", &["Coding", "Math"]),
            CourseRecord::new("BCA", "Computer applications.", &["Coding"]),
            CourseRecord::new("B.Tech IT", "Information technology.", &["Coding", "Networks"]),
            CourseRecord::new("Diploma in Coding Bootcamp", "Short course.", &[]),
            CourseRecord::new("Bachelor of Fine Arts", "Studio art.", &["Drawing"]),
            CourseRecord::new("BJMC", "Journalism and mass communication.", &["Writing"]),
        ])
        .unwrap()
    }

    fn scores(entries: &[(&'static str, u8)]) -> FeatureScores {
        FeatureScores::new(entries.to_vec())
    }

    #[test]
    fn test_top_features_are_stable_on_ties() {
        let fs = scores(&[("A", 3), ("B", 5), ("C", 3), ("D", 5), ("E", 1), ("F", 3)]);
        let top = top_features(&fs, 4);
        assert_eq!(top, vec![("B", 5), ("D", 5), ("A", 3), ("C", 3)]);
    }

    #[test]
    fn test_caps_courses_per_feature_in_catalog_order() {
        let fs = scores(&[("Coding", 5)]);
        let recs = recommend(&fs, &catalog(), &RecommendationPolicy::default());

        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].feature, "Coding");
        assert_eq!(recs[0].score, 5);
        let names: Vec<&str> = recs[0].courses.iter().map(|c| c.name()).collect();
        assert_eq!(names, vec!["B.Sc Computer Science", "BCA", "B.Tech IT"]);
    }

    #[test]
    fn test_features_below_threshold_are_dropped() {
        let fs = scores(&[("Coding", 3), ("Drawing", 4)]);
        let recs = recommend(&fs, &catalog(), &RecommendationPolicy::default());

        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].feature, "Drawing");
    }

    #[test]
    fn test_high_features_without_matches_are_dropped() {
        let fs = scores(&[("Dancing", 5), ("Journalism", 4)]);
        let recs = recommend(&fs, &catalog(), &RecommendationPolicy::default());

        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].feature, "Journalism");
        assert_eq!(recs[0].courses[0].name(), "BJMC");
    }

    #[test]
    fn test_only_top_features_are_considered() {
        let fs = scores(&[
            ("Dancing", 5),
            ("Singing", 5),
            ("Makeup", 5),
            ("Doctor", 5),
            ("History", 5),
            ("Coding", 5),
        ]);
        let recs = recommend(&fs, &catalog(), &RecommendationPolicy::default());

        // Coding is sixth, so nothing matches and the fallback is used.
        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].feature, "General Interest");
    }

    #[test]
    fn test_fallback_lists_head_of_catalog() {
        let fs = scores(&[("Coding", 3), ("Drawing", 3)]);
        let recs = recommend(&fs, &catalog(), &RecommendationPolicy::default());

        assert_eq!(recs.len(), 1);
        assert_eq!(recs[0].feature, "General Interest");
        assert_eq!(recs[0].score, 3);
        assert_eq!(recs[0].courses.len(), 5);
        assert_eq!(recs[0].courses[0].name(), "B.Sc Computer Science");
        assert_eq!(recs[0].courses[4].name(), "Bachelor of Fine Arts");
    }

    #[test]
    fn test_fallback_with_small_catalog() {
        let small = Catalog::from_records(vec![CourseRecord::new("BA", "Arts.", &[])]).unwrap();
        let recs = recommend(&scores(&[("Coding", 5)]), &small, &RecommendationPolicy::default());

        assert_eq!(recs[0].feature, "General Interest");
        assert_eq!(recs[0].courses.len(), 1);
    }

    #[test]
    fn test_policy_overrides_apply() {
        let policy = RecommendationPolicy {
            high_interest_threshold: 3,
            courses_per_feature: 1,
            ..RecommendationPolicy::default()
        };
        let recs = recommend(&scores(&[("Coding", 3)]), &catalog(), &policy);

        assert_eq!(recs[0].feature, "Coding");
        assert_eq!(recs[0].courses.len(), 1);
    }

    #[test]
    fn test_courses_are_shared_with_catalog() {
        let catalog = catalog();
        let recs = recommend(&scores(&[("Drawing", 5)]), &catalog, &RecommendationPolicy::default());
        assert!(std::sync::Arc::ptr_eq(&recs[0].courses[0], &catalog.courses()[4]));
    }
}
