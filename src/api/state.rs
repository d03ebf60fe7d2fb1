use std::sync::Arc;

use crate::{
    catalog::{Catalog, CatalogError, CatalogSource},
    config::RecommendationPolicy,
    error::{AppError, AppResult},
};

/// Outcome of the one-time catalog load
#[derive(Clone, Debug)]
pub enum CatalogState {
    Ready(Arc<Catalog>),
    /// Load failed; holds the reason for health reporting
    Unavailable(Arc<str>),
}

/// Shared application state
///
/// Everything here is read-only after startup, so handlers never lock.
#[derive(Clone, Debug)]
pub struct AppState {
    pub catalog: CatalogState,
    pub policy: RecommendationPolicy,
}

impl AppState {
    /// Builds state from the result of a catalog load
    ///
    /// A failed load still yields a usable state: catalog routes answer with
    /// a server error while the rest of the API keeps working.
    pub fn new(catalog: Result<Catalog, CatalogError>, policy: RecommendationPolicy) -> Self {
        let catalog = match catalog {
            Ok(catalog) => CatalogState::Ready(Arc::new(catalog)),
            Err(e) => {
                tracing::error!(error = %e, "Course catalog unavailable, prediction disabled");
                CatalogState::Unavailable(Arc::from(e.to_string()))
            }
        };

        Self { catalog, policy }
    }

    /// Loads the catalog from `source` once and builds state around it
    pub async fn load(source: &dyn CatalogSource, policy: RecommendationPolicy) -> Self {
        Self::new(Catalog::load(source).await, policy)
    }

    pub fn with_catalog(catalog: Catalog) -> Self {
        Self::new(Ok(catalog), RecommendationPolicy::default())
    }

    /// The validated catalog, or the error handlers should return
    pub fn catalog(&self) -> AppResult<Arc<Catalog>> {
        match &self.catalog {
            CatalogState::Ready(catalog) => Ok(Arc::clone(catalog)),
            CatalogState::Unavailable(reason) => {
                Err(AppError::CatalogUnavailable(reason.to_string()))
            }
        }
    }
}
