use serde::{ser::SerializeMap, Deserialize, Serialize, Serializer};
use serde_json::Value;
use std::sync::Arc;

pub mod course;
pub mod ratings;
pub mod taxonomy;

pub use course::CourseRecord;
pub use ratings::{RatingVector, ValidationIssue, MAX_RATING, MIN_RATING};
pub use taxonomy::{features, verify_taxonomy, Category, FeatureDefinition, FEATURE_COUNT};

// ============================================================================
// Scoring Types
// ============================================================================

/// Per-feature ratings in taxonomy order
///
/// Serializes as a JSON object whose keys follow the quiz order, so the same
/// answers always produce the same bytes.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FeatureScores(Vec<(&'static str, u8)>);

impl FeatureScores {
    pub fn new(entries: Vec<(&'static str, u8)>) -> Self {
        Self(entries)
    }

    /// Score recorded for `feature`, if it is part of the taxonomy
    pub fn get(&self, feature: &str) -> Option<u8> {
        self.0
            .iter()
            .find(|(name, _)| *name == feature)
            .map(|(_, score)| *score)
    }

    pub fn iter(&self) -> impl Iterator<Item = &(&'static str, u8)> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for FeatureScores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, score) in &self.0 {
            map.serialize_entry(name, score)?;
        }
        map.end()
    }
}

/// Mean rating over the features of one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryScore {
    pub category: Category,
    pub average: f64,
    pub total: u32,
    pub count: usize,
}

/// Output of the scorer for one set of answers
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreCard {
    pub feature_scores: FeatureScores,
    /// Sorted by descending average; ties keep quiz order
    pub category_scores: Vec<CategoryScore>,
}

// ============================================================================
// Recommendation Types
// ============================================================================

/// Courses suggested for one high-interest feature
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Recommendation {
    pub feature: String,
    pub score: u8,
    pub courses: Vec<Arc<CourseRecord>>,
}

/// Full result of the prediction pipeline
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    /// Highest rated features as `[name, score]` pairs
    pub top_features: Vec<(&'static str, u8)>,
    pub recommended_courses: Vec<Recommendation>,
    pub feature_scores: FeatureScores,
    pub category_scores: Vec<CategoryScore>,
    pub message: String,
}

// ============================================================================
// API Types
// ============================================================================

/// Body of a prediction request
///
/// `answers` is kept as raw JSON so shape errors can be reported per element.
#[derive(Debug, Deserialize)]
pub struct PredictRequest {
    #[serde(default)]
    pub answers: Value,
}

#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub success: bool,
    pub prediction: Prediction,
    pub message: String,
}
