use std::sync::Arc;

use crate::models::CourseRecord;

pub mod file;

pub use file::FileCatalogSource;

/// Errors raised while loading or validating the course catalog
#[derive(thiserror::Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read course catalog from {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed course catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Course catalog is empty")]
    Empty,

    #[error("Invalid course at index {index}: {reason}")]
    InvalidRecord { index: usize, reason: String },
}

/// Where the course catalog comes from
///
/// Implementations only fetch raw records; validation happens in [`Catalog::load`].
#[cfg_attr(test, mockall::automock)]
#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    /// Fetch every course record in catalog order
    async fn fetch(&self) -> Result<Vec<CourseRecord>, CatalogError>;

    /// Human-readable origin for logging
    fn describe(&self) -> String;
}

/// Lowercased text of one course, prepared once for keyword matching
#[derive(Debug, Clone)]
struct SearchKeys {
    name: String,
    overview: String,
    skills: Vec<String>,
}

impl SearchKeys {
    fn from_record(record: &CourseRecord) -> Self {
        Self {
            name: record.name().to_lowercase(),
            overview: record.overview().to_lowercase(),
            skills: record
                .skills()
                .iter()
                .map(|s| s.to_lowercase())
                .collect(),
        }
    }

    fn contains(&self, needle: &str) -> bool {
        self.name.contains(needle)
            || self.overview.contains(needle)
            || self.skills.iter().any(|s| s.contains(needle))
    }
}

/// Validated, read-only course catalog shared by all requests
#[derive(Debug)]
pub struct Catalog {
    courses: Vec<Arc<CourseRecord>>,
    keys: Vec<SearchKeys>,
}

impl Catalog {
    /// Fetches records from `source` and validates them
    pub async fn load(source: &dyn CatalogSource) -> Result<Self, CatalogError> {
        tracing::info!(source = %source.describe(), "Loading course catalog");

        let records = source.fetch().await?;
        let catalog = Self::from_records(records)?;

        tracing::info!(
            source = %source.describe(),
            course_count = catalog.len(),
            "Course catalog loaded"
        );

        Ok(catalog)
    }

    /// Builds a catalog from records already in memory
    pub fn from_records(records: Vec<CourseRecord>) -> Result<Self, CatalogError> {
        if records.is_empty() {
            return Err(CatalogError::Empty);
        }

        for (index, record) in records.iter().enumerate() {
            if record.name().trim().is_empty() {
                return Err(CatalogError::InvalidRecord {
                    index,
                    reason: "course name is blank".to_string(),
                });
            }
        }

        let keys = records.iter().map(SearchKeys::from_record).collect();
        let courses = records.into_iter().map(Arc::new).collect();

        Ok(Self { courses, keys })
    }

    pub fn courses(&self) -> &[Arc<CourseRecord>] {
        &self.courses
    }

    pub fn len(&self) -> usize {
        self.courses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Courses whose name, overview, or any skill contains `keyword`,
    /// ignoring case, in catalog order
    pub fn matching<'a>(&'a self, keyword: &str) -> impl Iterator<Item = &'a Arc<CourseRecord>> + 'a {
        let needle = keyword.to_lowercase();
        self.courses
            .iter()
            .zip(self.keys.iter())
            .filter(move |(_, keys)| keys.contains(&needle))
            .map(|(course, _)| course)
    }
}
