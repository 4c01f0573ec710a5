//! Business logic services

pub mod catalog_service;
pub mod submission_service;

pub use catalog_service::CatalogService;
pub use submission_service::SubmissionService;
