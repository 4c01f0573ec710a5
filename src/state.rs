//! Application state management
//!
//! This module contains the shared application state that is passed
//! to all request handlers via Axum's State extractor.

use std::sync::Arc;

use crate::{
    config::Config,
    services::{CatalogService, SubmissionService},
};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

/// Inner state (wrapped in Arc for cheap cloning)
struct AppStateInner {
    /// Problem catalog service (owns the cache and tree registry)
    pub catalog: Arc<CatalogService>,

    /// Submission recording service
    pub submissions: Arc<SubmissionService>,

    /// Application configuration
    pub config: Config,
}

impl AppState {
    /// Create a new application state
    pub fn new(
        catalog: Arc<CatalogService>,
        submissions: Arc<SubmissionService>,
        config: Config,
    ) -> Self {
        Self {
            inner: Arc::new(AppStateInner {
                catalog,
                submissions,
                config,
            }),
        }
    }

    /// Get a reference to the catalog service
    pub fn catalog(&self) -> &CatalogService {
        &self.inner.catalog
    }

    /// Get a reference to the submission service
    pub fn submissions(&self) -> &SubmissionService {
        &self.inner.submissions
    }

    /// Get a reference to the configuration
    pub fn config(&self) -> &Config {
        &self.inner.config
    }
}
