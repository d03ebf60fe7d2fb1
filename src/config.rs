use serde::Deserialize;

/// Application configuration loaded from environment variables
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    /// Server host address
    #[serde(default = "default_host")]
    pub host: String,

    /// Server port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Path to the JSON course catalog
    #[serde(default = "default_catalog_path")]
    pub catalog_path: String,

    /// Minimum rating for a feature to count as a high interest
    #[serde(default = "default_high_interest_threshold")]
    pub high_interest_threshold: u8,

    /// Number of highest-rated features considered for recommendations
    #[serde(default = "default_top_feature_count")]
    pub top_feature_count: usize,

    /// Maximum courses recommended per feature
    #[serde(default = "default_courses_per_feature")]
    pub courses_per_feature: usize,

    /// Number of catalog entries offered when nothing matched
    #[serde(default = "default_fallback_course_count")]
    pub fallback_course_count: usize,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5000
}

fn default_catalog_path() -> String {
    "data/course_catalog.json".to_string()
}

fn default_high_interest_threshold() -> u8 {
    4
}

fn default_top_feature_count() -> usize {
    5
}

fn default_courses_per_feature() -> usize {
    3
}

fn default_fallback_course_count() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            catalog_path: default_catalog_path(),
            high_interest_threshold: default_high_interest_threshold(),
            top_feature_count: default_top_feature_count(),
            courses_per_feature: default_courses_per_feature(),
            fallback_course_count: default_fallback_course_count(),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = envy::from_env::<Config>()
            .map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;
        config.recommendation_policy().validate()?;
        Ok(config)
    }

    /// Socket address string the server binds to
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn recommendation_policy(&self) -> RecommendationPolicy {
        RecommendationPolicy {
            high_interest_threshold: self.high_interest_threshold,
            top_feature_count: self.top_feature_count,
            courses_per_feature: self.courses_per_feature,
            fallback_course_count: self.fallback_course_count,
        }
    }
}

/// Tunable constants of the keyword recommender
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendationPolicy {
    pub high_interest_threshold: u8,
    pub top_feature_count: usize,
    pub courses_per_feature: usize,
    pub fallback_course_count: usize,
}

impl Default for RecommendationPolicy {
    fn default() -> Self {
        Config::default().recommendation_policy()
    }
}

impl RecommendationPolicy {
    /// Label of the synthetic recommendation emitted when nothing matched
    pub const FALLBACK_FEATURE: &'static str = "General Interest";

    /// Score reported on the synthetic fallback recommendation
    pub const FALLBACK_SCORE: u8 = 3;

    /// Rejects settings that would make the recommender meaningless
    pub fn validate(&self) -> anyhow::Result<()> {
        if !(1..=5).contains(&self.high_interest_threshold) {
            anyhow::bail!(
                "HIGH_INTEREST_THRESHOLD must be between 1 and 5, got {}",
                self.high_interest_threshold
            );
        }
        if self.top_feature_count == 0 {
            anyhow::bail!("TOP_FEATURE_COUNT must be at least 1");
        }
        if self.courses_per_feature == 0 {
            anyhow::bail!("COURSES_PER_FEATURE must be at least 1");
        }
        if self.fallback_course_count == 0 {
            anyhow::bail!("FALLBACK_COURSE_COUNT must be at least 1");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_matches_documented_constants() {
        let policy = RecommendationPolicy::default();
        assert_eq!(policy.high_interest_threshold, 4);
        assert_eq!(policy.top_feature_count, 5);
        assert_eq!(policy.courses_per_feature, 3);
        assert_eq!(policy.fallback_course_count, 5);
        assert!(policy.validate().is_ok());
    }

    #[test]
    fn test_policy_rejects_out_of_scale_threshold() {
        let policy = RecommendationPolicy {
            high_interest_threshold: 6,
            ..RecommendationPolicy::default()
        };
        assert!(policy.validate().is_err());

        let policy = RecommendationPolicy {
            high_interest_threshold: 0,
            ..RecommendationPolicy::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_policy_rejects_zero_caps() {
        let policy = RecommendationPolicy {
            courses_per_feature: 0,
            ..RecommendationPolicy::default()
        };
        assert!(policy.validate().is_err());
    }

    #[test]
    fn test_bind_address() {
        let config = Config {
            host: "127.0.0.1".to_string(),
            port: 8080,
            ..Config::default()
        };
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
    }
}
