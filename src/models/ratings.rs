use serde::Serialize;
use serde_json::Value;

/// Lowest point on the Likert scale
pub const MIN_RATING: u8 = 1;
/// Highest point on the Likert scale
pub const MAX_RATING: u8 = 5;

/// A single problem found while validating a request body
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationIssue {
    pub field: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
}

impl ValidationIssue {
    pub fn new(field: impl Into<String>, message: impl Into<String>, value: Option<Value>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
            value,
        }
    }
}

/// Quiz answers in question order, each on the 1-5 scale
///
/// The vector may be shorter or longer than the quiz; positions past the
/// end read as 0 (no interest).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RatingVector(Vec<u8>);

impl RatingVector {
    /// Validates the raw `answers` value of a request body
    ///
    /// Every offending element is reported, not just the first.
    pub fn from_json(answers: &Value) -> Result<Self, Vec<ValidationIssue>> {
        let items = match answers {
            Value::Array(items) => items,
            other => {
                return Err(vec![ValidationIssue::new(
                    "answers",
                    "Answers must be an array",
                    Some(other.clone()),
                )]);
            }
        };

        let mut ratings = Vec::with_capacity(items.len());
        let mut issues = Vec::new();

        for (index, item) in items.iter().enumerate() {
            match whole_rating(item) {
                Some(n) => ratings.push(n),
                None => issues.push(ValidationIssue::new(
                    format!("answers[{}]", index),
                    "Each answer must be between 1-5",
                    Some(item.clone()),
                )),
            }
        }

        if issues.is_empty() {
            Ok(Self(ratings))
        } else {
            Err(issues)
        }
    }

    /// Rating at `position`, or 0 when the answer is missing or off-scale
    pub fn rating(&self, position: usize) -> u8 {
        match self.0.get(position) {
            Some(&r) if (MIN_RATING..=MAX_RATING).contains(&r) => r,
            _ => 0,
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<Vec<u8>> for RatingVector {
    fn from(ratings: Vec<u8>) -> Self {
        Self(ratings)
    }
}

/// A JSON number with no fractional part on the rating scale
///
/// `3` and `3.0` are the same answer; `2.5`, strings, and booleans are not.
fn whole_rating(item: &Value) -> Option<u8> {
    let n = item.as_f64()?;
    if n.fract() != 0.0 || n < MIN_RATING as f64 || n > MAX_RATING as f64 {
        return None;
    }
    Some(n as u8)
}
