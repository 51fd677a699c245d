//! Shared error types for the services crate.

use std::path::PathBuf;

use thiserror::Error;

use wt2_core::model::CourseError;

/// Errors emitted while loading course content.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("failed to read course file {path}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("course content is not valid JSON")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] CourseError),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}
