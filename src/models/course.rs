use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// A course entry from the static catalog
///
/// Only the fields used for keyword matching are extracted. The authored
/// object is kept whole and written back out as-is, so display fields such as
/// `eligibility` or `salary_range` may use whatever JSON shape the catalog
/// author chose.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct CourseRecord {
    name: String,
    overview: String,
    skills: Vec<String>,
    fields: Map<String, Value>,
}

impl CourseRecord {
    /// Minimal record, used for fixtures and programmatic catalogs
    pub fn new(name: impl Into<String>, overview: impl Into<String>, skills: &[&str]) -> Self {
        let name = name.into();
        let overview = overview.into();
        let skills: Vec<String> = skills.iter().map(|s| s.to_string()).collect();

        let mut fields = Map::new();
        fields.insert("course".to_string(), Value::from(name.clone()));
        fields.insert("overview".to_string(), Value::from(overview.clone()));
        fields.insert("skills_required".to_string(), Value::from(skills.clone()));

        Self {
            name,
            overview,
            skills,
            fields,
        }
    }

    /// The `course` field
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The `overview` field, empty when absent or not a string
    pub fn overview(&self) -> &str {
        &self.overview
    }

    /// String entries of `skills_required`
    pub fn skills(&self) -> &[String] {
        &self.skills
    }

    /// Any authored field, uninterpreted
    pub fn field(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }
}

impl TryFrom<Map<String, Value>> for CourseRecord {
    type Error = String;

    fn try_from(fields: Map<String, Value>) -> Result<Self, Self::Error> {
        let name = match fields.get("course") {
            Some(Value::String(name)) => name.clone(),
            Some(other) => return Err(format!("field `course` must be a string, got {}", other)),
            None => return Err("missing field `course`".to_string()),
        };

        let overview = fields
            .get("overview")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let skills = fields
            .get("skills_required")
            .and_then(Value::as_array)
            .map(|items| {
                items
                    .iter()
                    .filter_map(Value::as_str)
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            name,
            overview,
            skills,
            fields,
        })
    }
}

impl Serialize for CourseRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_full_record() {
        let raw = json!({
            "course": "Bachelor of Fine Arts (BFA)",
            "overview": "Studio practice in painting and sculpture.",
            "eligibility": { "stream": "Any", "exams": "MAH-AAC-CET" },
            "skills_required": ["Drawing", "Creativity"],
            "salary_range": "₹3-8 LPA",
            "colleges_in_kolhapur": ["Kala Niketan Mahavidyalaya"],
            "duration": "4 years"
        });

        let record: CourseRecord = serde_json::from_value(raw).unwrap();
        assert_eq!(record.name(), "Bachelor of Fine Arts (BFA)");
        assert_eq!(record.skills(), ["Drawing", "Creativity"]);
        assert_eq!(record.field("eligibility").unwrap()["stream"], "Any");
        assert_eq!(record.field("duration"), Some(&json!("4 years")));
    }

    #[test]
    fn test_display_fields_accept_any_shape() {
        let raw = json!({
            "course": "B.Tech Mechanical",
            "overview": "Machines.",
            "eligibility": { "stream": "Science", "exams": ["JEE Main", "MHT-CET"] },
            "salary_range": { "min": 4, "max": 12 },
            "skills_required": ["Engineering"]
        });

        let record: CourseRecord = serde_json::from_value(raw).unwrap();
        assert_eq!(
            record.field("eligibility").unwrap()["exams"],
            json!(["JEE Main", "MHT-CET"])
        );
    }

    #[test]
    fn test_null_or_missing_overview_reads_as_empty() {
        let record: CourseRecord =
            serde_json::from_value(json!({ "course": "BCA", "overview": null })).unwrap();
        assert_eq!(record.overview(), "");

        let record: CourseRecord = serde_json::from_value(json!({ "course": "BCA" })).unwrap();
        assert_eq!(record.overview(), "");
        assert!(record.skills().is_empty());
    }

    #[test]
    fn test_non_string_skills_are_skipped_for_matching() {
        let record: CourseRecord = serde_json::from_value(json!({
            "course": "BA",
            "skills_required": ["Writing", 3, null]
        }))
        .unwrap();
        assert_eq!(record.skills(), ["Writing"]);
    }

    #[test]
    fn test_authored_record_round_trips_exactly() {
        let cases = [
            json!({ "course": "BCA", "colleges_in_kolhapur": [] }),
            json!({
                "course": "B.Sc Agriculture",
                "overview": null,
                "eligibility": { "stream": "Science", "min_percentage": 50 },
                "skills_required": ["Gardening", 1],
                "duration": "4 years"
            }),
        ];

        for raw in cases {
            let record: CourseRecord = serde_json::from_value(raw.clone()).unwrap();
            assert_eq!(serde_json::to_value(&record).unwrap(), raw);
        }
    }

    #[test]
    fn test_course_name_is_required_string() {
        let missing = serde_json::from_value::<CourseRecord>(json!({ "overview": "x" }));
        assert!(missing.unwrap_err().to_string().contains("course"));

        let wrong_type = serde_json::from_value::<CourseRecord>(json!({ "course": 7 }));
        assert!(wrong_type.is_err());
    }

    #[test]
    fn test_new_serializes_core_fields() {
        let record = CourseRecord::new("BFA", "Fine arts.", &["Drawing"]);
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({ "course": "BFA", "overview": "Fine arts.", "skills_required": ["Drawing"] })
        );
    }
}
